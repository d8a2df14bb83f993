//! Wire schema for the scheme assistant API.
//!
//! DESIGN
//! ======
//! Responses arrive as loosely-typed JSON where every scheme field is
//! optional. They are parsed once here into validated records so render code
//! never has to second-guess field types: blank strings become `None`, junk
//! list entries are dropped, and out-of-range values are discarded instead of
//! being displayed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source kind used when the backend omits `type` on a citation.
pub const DEFAULT_SOURCE_KIND: &str = "web";

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: String,
    #[serde(default)]
    pub use_grounding: bool,
}

impl ChatRequest {
    /// True when the message has no visible characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }
}

/// A citation attached to an assistant response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// How to apply for a scheme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationProcess {
    /// Application channels, e.g. "Online", "CSC centre".
    pub modes: Vec<String>,
    /// Ordered application steps.
    pub steps: Vec<String>,
    pub deadline: Option<String>,
    /// Official portal URL; only `http(s)` URLs survive validation.
    pub official_portal: Option<String>,
}

impl ApplicationProcess {
    fn is_empty(&self) -> bool {
        self.modes.is_empty() && self.steps.is_empty() && self.deadline.is_none() && self.official_portal.is_none()
    }
}

/// Structured scheme record returned alongside the text answer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemeDetails {
    pub scheme_name: Option<String>,
    pub issuer: Option<String>,
    /// Jurisdiction (state or "Central").
    pub state: Option<String>,
    pub categories: Vec<String>,
    /// Backend confidence in `0.0..=1.0`.
    pub confidence: Option<f64>,
    pub last_checked: Option<String>,
    pub eligibility_summary: Option<String>,
    pub benefits_summary: Option<String>,
    pub required_documents: Vec<String>,
    pub how_to_apply: Option<ApplicationProcess>,
    pub latest_updates: Option<String>,
    pub disclaimer: Option<String>,
    pub sources: Vec<Source>,
}

impl SchemeDetails {
    /// True when no descriptive field carried usable data. Citations alone do
    /// not make a scheme record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheme_name.is_none()
            && self.issuer.is_none()
            && self.state.is_none()
            && self.categories.is_empty()
            && self.confidence.is_none()
            && self.last_checked.is_none()
            && self.eligibility_summary.is_none()
            && self.benefits_summary.is_none()
            && self.required_documents.is_empty()
            && self.how_to_apply.is_none()
            && self.latest_updates.is_none()
            && self.disclaimer.is_none()
    }
}

/// Validated response from `/api/chat` or `/api/pdf`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatResponse {
    /// Assistant answer text (`text_response` on the wire).
    pub text: String,
    pub sources: Vec<Source>,
    pub scheme: Option<SchemeDetails>,
}

/// Failure of a network call to the scheme API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The body was not JSON or lacked `text_response`.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Network calls are only issued from the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Parse a raw response body into a validated [`ChatResponse`].
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] if the body is not a JSON object or has no
/// string `text_response`.
pub fn parse_chat_response(body: &str) -> Result<ChatResponse, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    ChatResponse::from_value(&value)
}

impl ChatResponse {
    /// Build a validated response from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Malformed`] if `value` is not an object or has no
    /// string `text_response`.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        if !value.is_object() {
            return Err(ApiError::Malformed("expected a JSON object".to_owned()));
        }
        let text = value
            .get("text_response")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Malformed("missing text_response".to_owned()))?
            .to_owned();
        let sources = source_list(value.get("sources"));
        let scheme = scheme_details(value);
        Ok(Self { text, sources, scheme: (!scheme.is_empty()).then_some(scheme) })
    }
}

fn scheme_details(value: &Value) -> SchemeDetails {
    let how_to_apply = value
        .get("how_to_apply")
        .filter(|v| v.is_object())
        .map(|v| ApplicationProcess {
            modes: text_list(v.get("mode")),
            steps: text_list(v.get("steps")),
            deadline: text_field(v, "deadline"),
            official_portal: text_field(v, "official_portal").filter(|url| is_web_url(url)),
        })
        .filter(|p| !p.is_empty());

    SchemeDetails {
        scheme_name: text_field(value, "scheme_name"),
        issuer: text_field(value, "issuer"),
        state: text_field(value, "state"),
        categories: text_list(value.get("category")),
        confidence: value
            .get("confidence")
            .and_then(Value::as_f64)
            .filter(|c| c.is_finite() && (0.0..=1.0).contains(c)),
        last_checked: text_field(value, "last_checked"),
        eligibility_summary: text_field(value, "eligibility_summary"),
        benefits_summary: text_field(value, "benefits_summary"),
        required_documents: text_list(value.get("required_documents")),
        how_to_apply,
        latest_updates: text_field(value, "latest_updates"),
        disclaimer: text_field(value, "disclaimer"),
        sources: source_list(value.get("sources")),
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Accepts either an array of strings or a single string.
fn text_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_owned()],
        _ => Vec::new(),
    }
}

fn source_list(value: Option<&Value>) -> Vec<Source> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let title = text_field(item, "title")?;
            let url = text_field(item, "url")?;
            let kind = text_field(item, "type").unwrap_or_else(|| DEFAULT_SOURCE_KIND.to_owned());
            Some(Source { title, url, kind })
        })
        .collect()
}

/// True for absolute `http://` or `https://` URLs.
#[must_use]
pub fn is_web_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    ["https://", "http://"]
        .iter()
        .any(|scheme| lower.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
