use super::*;

#[test]
fn endpoints_are_same_origin_api_paths() {
    assert_eq!(CHAT_ENDPOINT, "/api/chat");
    assert_eq!(PDF_ENDPOINT, "/api/pdf");
}

#[test]
fn success_statuses_are_not_errors() {
    assert_eq!(response_status_error(200), None);
    assert_eq!(response_status_error(204), None);
}

#[test]
fn non_success_statuses_map_to_status_error() {
    assert_eq!(response_status_error(404), Some(ApiError::Status(404)));
    assert_eq!(response_status_error(502), Some(ApiError::Status(502)));
    assert_eq!(response_status_error(304), Some(ApiError::Status(304)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn chat_without_browser_is_unavailable() {
    let req = ChatRequest { message: "hi".to_owned(), language: "en".to_owned(), use_grounding: false };
    let result = block_on_ready(chat_with_assistant(&req));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that is expected to complete without yielding.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
