//! REST API helpers for the scheme assistant endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ApiError`] so callers can convert it to a
//! fallback message without matching on transport-specific error types.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, ChatRequest, ChatResponse};

#[cfg(any(test, feature = "hydrate"))]
const CHAT_ENDPOINT: &str = "/api/chat";

#[cfg(any(test, feature = "hydrate"))]
const PDF_ENDPOINT: &str = "/api/pdf";

/// Multipart field names shared with the host's `/api/pdf` handler.
pub const PDF_FILE_FIELD: &str = "file";
pub const PDF_LANGUAGE_FIELD: &str = "language";

#[cfg(any(test, feature = "hydrate"))]
fn response_status_error(status: u16) -> Option<ApiError> {
    (!(200..300).contains(&status)).then_some(ApiError::Status(status))
}

/// Ask a question via `POST /api/chat`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails, the server answers with a
/// non-2xx status, or the body cannot be validated.
pub async fn chat_with_assistant(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_chat_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Upload a scheme document via multipart `POST /api/pdf`.
///
/// # Errors
///
/// Returns [`ApiError`] if the form cannot be built, the request fails, the
/// server answers with a non-2xx status, or the body cannot be validated.
#[cfg(feature = "hydrate")]
pub async fn process_pdf(file: &web_sys::File, language: &str) -> Result<ChatResponse, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(PDF_FILE_FIELD, file, &file.name())
        .map_err(js_err)?;
    form.append_with_str(PDF_LANGUAGE_FIELD, language)
        .map_err(js_err)?;

    let resp = gloo_net::http::Request::post(PDF_ENDPOINT)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_chat_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_chat_response(resp: gloo_net::http::Response) -> Result<ChatResponse, ApiError> {
    if let Some(err) = response_status_error(resp.status()) {
        return Err(err);
    }
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    super::types::parse_chat_response(&body)
}
