use super::*;

#[test]
fn endpoints_are_same_origin_paths() {
    assert_eq!(PROJECTS_ENDPOINT, "/api/projects");
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}

#[test]
fn request_failed_message_includes_status() {
    assert_eq!(request_failed_message("projects request", 502, None), "projects request failed (502)");
}

#[test]
fn request_failed_message_includes_detail() {
    assert_eq!(
        request_failed_message("contact submission", 429, Some(" too many submissions ")),
        "contact submission failed (429): too many submissions"
    );
}

#[test]
fn request_failed_message_ignores_blank_detail() {
    assert_eq!(request_failed_message("projects request", 500, Some("  ")), "projects request failed (500)");
}

#[test]
fn error_detail_reads_json_error() {
    assert_eq!(error_detail(r#"{"error":"relay unavailable"}"#), Some("relay unavailable".to_owned()));
}

#[test]
fn error_detail_ignores_non_json() {
    assert_eq!(error_detail("<html>bad gateway</html>"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_projects_is_unavailable_off_browser() {
    let result = block_on_ready(fetch_projects());
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Minimal single-poll executor; the off-browser stubs never suspend.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future unexpectedly pending"),
    }
}
