use std::time::Duration;

use portfolio_client::state::contact::{INVALID_EMAIL_NOTICE, MISSING_FIELDS_NOTICE};

use super::*;

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

#[test]
fn valid_submission_is_trimmed() {
    let cleaned = validate_submission(&submission("  Ada ", " ada@example.com ", " Hello there \n")).unwrap();
    assert_eq!(cleaned, submission("Ada", "ada@example.com", "Hello there"));
}

#[test]
fn blank_fields_are_rejected() {
    assert_eq!(
        validate_submission(&submission("Ada", "ada@example.com", "   ")),
        Err(ContactError::Invalid(MISSING_FIELDS_NOTICE))
    );
    assert_eq!(
        validate_submission(&submission("", "ada@example.com", "hi")),
        Err(ContactError::Invalid(MISSING_FIELDS_NOTICE))
    );
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(
        validate_submission(&submission("Ada", "ada.example.com", "hi")),
        Err(ContactError::Invalid(INVALID_EMAIL_NOTICE))
    );
}

#[test]
fn name_at_cap_is_accepted() {
    let name = "a".repeat(MAX_NAME_CHARS);
    assert!(validate_submission(&submission(&name, "ada@example.com", "hi")).is_ok());
}

#[test]
fn name_over_cap_is_rejected() {
    let name = "a".repeat(MAX_NAME_CHARS + 1);
    assert_eq!(
        validate_submission(&submission(&name, "ada@example.com", "hi")),
        Err(ContactError::TooLong { field: "name", max: MAX_NAME_CHARS })
    );
}

#[test]
fn message_cap_counts_characters_not_bytes() {
    // Multi-byte characters must not trip the cap early.
    let message = "é".repeat(MAX_MESSAGE_CHARS);
    assert!(validate_submission(&submission("Ada", "ada@example.com", &message)).is_ok());

    let message = "é".repeat(MAX_MESSAGE_CHARS + 1);
    assert_eq!(
        validate_submission(&submission("Ada", "ada@example.com", &message)),
        Err(ContactError::TooLong { field: "message", max: MAX_MESSAGE_CHARS })
    );
}

#[test]
fn email_over_cap_is_rejected() {
    let email = format!("{}@example.com", "a".repeat(MAX_EMAIL_CHARS));
    assert_eq!(
        validate_submission(&submission("Ada", &email, "hi")),
        Err(ContactError::TooLong { field: "email", max: MAX_EMAIL_CHARS })
    );
}

#[test]
fn too_long_error_message_names_field() {
    let err = ContactError::TooLong { field: "message", max: MAX_MESSAGE_CHARS };
    assert_eq!(err.to_string(), "message must be at most 5000 characters");
}

#[test]
fn relay_builds_with_timeouts() {
    let relay = HttpFormRelay::new(
        "https://formspree.io/f/test".to_owned(),
        HttpTimeouts { request: Duration::from_secs(1), connect: Duration::from_secs(1) },
    );
    assert!(relay.is_ok());
}

#[test]
fn relay_status_error_message() {
    assert_eq!(RelayError::Status(422).to_string(), "relay responded with status 422");
}

// =============================================================================
// RELAY OVER HTTP
// =============================================================================

mod relay_http {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;

    use super::*;
    use crate::state::test_helpers::serve_router;

    type Seen = Arc<Mutex<Vec<(HeaderMap, String)>>>;

    /// Fake relay answering every POST with `status` and a non-JSON body.
    async fn fake_relay(status: StatusCode) -> (String, Seen) {
        let seen: Seen = Arc::default();
        let router = Router::new().route(
            "/f/test",
            post({
                let seen = seen.clone();
                move |headers: HeaderMap, body: String| {
                    let seen = seen.clone();
                    async move {
                        seen.lock().unwrap().push((headers, body));
                        (status, "<html>thanks</html>")
                    }
                }
            }),
        );
        (format!("{}/f/test", serve_router(router).await), seen)
    }

    fn relay(url: String) -> HttpFormRelay {
        HttpFormRelay::new(url, HttpTimeouts { request: Duration::from_secs(5), connect: Duration::from_secs(5) })
            .unwrap()
    }

    fn message() -> ContactSubmission {
        submission("Ada", "ada@example.com", "Hello there")
    }

    #[tokio::test]
    async fn deliver_posts_json_once_with_accept_header() {
        let (url, seen) = fake_relay(StatusCode::OK).await;
        relay(url).deliver(&message()).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (headers, body) = &seen[0];
        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        let sent: ContactSubmission = serde_json::from_str(body).unwrap();
        assert_eq!(sent, message());
    }

    #[tokio::test]
    async fn deliver_judges_success_by_status_only() {
        // The relay answers with HTML; only the 2xx status matters.
        let (url, _seen) = fake_relay(StatusCode::ACCEPTED).await;
        assert!(relay(url).deliver(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn deliver_maps_server_error_to_status() {
        let (url, _seen) = fake_relay(StatusCode::INTERNAL_SERVER_ERROR).await;
        assert!(matches!(relay(url).deliver(&message()).await, Err(RelayError::Status(500))));
    }

    #[tokio::test]
    async fn deliver_maps_rejection_to_status() {
        let (url, _seen) = fake_relay(StatusCode::UNPROCESSABLE_ENTITY).await;
        assert!(matches!(relay(url).deliver(&message()).await, Err(RelayError::Status(422))));
    }

    #[tokio::test]
    async fn deliver_unreachable_relay_is_request_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = relay(format!("http://{addr}/f/test")).deliver(&message()).await;
        assert!(matches!(result, Err(RelayError::Request(_))));
    }
}
