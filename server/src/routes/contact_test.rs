use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{FakeRelay, TEST_LIMITS, test_app_state, test_app_state_with_relay};

fn peer(last: u8) -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, last)), 40_000))
}

fn body(name: &str, email: &str, message: &str) -> Result<Json<ContactSubmission>, JsonRejection> {
    Ok(Json(ContactSubmission { name: name.into(), email: email.into(), message: message.into() }))
}

#[tokio::test]
async fn valid_submission_is_relayed() {
    let relay = Arc::new(FakeRelay::default());
    let state = test_app_state_with_relay(relay.clone());

    let status = submit_contact(State(state), peer(1), body(" Ada ", "ada@example.com", "Hi"))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::NO_CONTENT);
    let delivered = relay.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Ada");
}

#[tokio::test]
async fn invalid_submission_is_bad_request_and_not_relayed() {
    let relay = Arc::new(FakeRelay::default());
    let state = test_app_state_with_relay(relay.clone());

    let err = submit_contact(State(state), peer(1), body("Ada", "not-an-email", "Hi"))
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(relay.delivered().is_empty());
}

#[tokio::test]
async fn missing_relay_is_service_unavailable() {
    let err = submit_contact(State(test_app_state()), peer(1), body("Ada", "ada@example.com", "Hi"))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn relay_failure_is_bad_gateway() {
    let relay = Arc::new(FakeRelay { fail_with: Some(500), ..FakeRelay::default() });
    let state = test_app_state_with_relay(relay);

    let err = submit_contact(State(state), peer(1), body("Ada", "ada@example.com", "Hi"))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited_per_client() {
    let relay = Arc::new(FakeRelay::default());
    let state = test_app_state_with_relay(relay.clone());

    for _ in 0..TEST_LIMITS.per_client {
        let status = submit_contact(State(state.clone()), peer(7), body("Ada", "ada@example.com", "Hi"))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    let err = submit_contact(State(state.clone()), peer(7), body("Ada", "ada@example.com", "Hi"))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(relay.delivered().len(), TEST_LIMITS.per_client);

    // Another address is unaffected.
    let status = submit_contact(State(state), peer(8), body("Bo", "bo@example.com", "Hey"))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn invalid_submissions_do_not_consume_quota() {
    let relay = Arc::new(FakeRelay::default());
    let state = test_app_state_with_relay(relay.clone());

    for _ in 0..5 {
        let _ = submit_contact(State(state.clone()), peer(3), body("", "", "")).await;
    }
    let status = submit_contact(State(state), peer(3), body("Ada", "ada@example.com", "Hi"))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
}
