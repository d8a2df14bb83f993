//! Conversation state: message list, loading flag, and error flag.
//!
//! DESIGN
//! ======
//! Network actions are split into a synchronous `begin_*` step that appends
//! the user message and hands back a [`RequestTicket`], and a `finish` step
//! that merges the response. The async glue in `net::chat_client` sits
//! between the two, so every state transition here is testable without a
//! browser.
//!
//! At most one request is in flight. `clear` bumps the session generation,
//! and a response carrying an older generation is dropped rather than
//! appended to the fresh conversation.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::fmt;

use crate::net::types::{ApiError, ChatResponse, SchemeDetails, Source};

/// Fallback assistant reply when a text question fails.
pub const CHAT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Fallback assistant reply when a PDF upload fails.
pub const PDF_ERROR_REPLY: &str = "Sorry, I encountered an error processing your PDF.";

/// The only MIME type accepted for uploads.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Session-unique message identifier, allocated from a monotonic counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single conversation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: String,
    pub role: Role,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    pub sources: Vec<Source>,
    pub scheme: Option<SchemeDetails>,
}

/// Which action issued a request; selects the fallback reply on failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Chat,
    Pdf,
}

impl RequestKind {
    fn fallback_reply(self) -> &'static str {
        match self {
            Self::Chat => CHAT_ERROR_REPLY,
            Self::Pdf => PDF_ERROR_REPLY,
        }
    }
}

/// Handle for the outstanding request, returned by `begin_*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub kind: RequestKind,
    generation: u64,
}

/// A file the user picked that passed client-side validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfSelection {
    pub name: String,
}

impl PdfSelection {
    /// Validate a picked file by its reported MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`UploadRejected::NotPdf`] for any type other than
    /// `application/pdf`.
    pub fn new(name: &str, mime_type: &str) -> Result<Self, UploadRejected> {
        if mime_type.trim().eq_ignore_ascii_case(PDF_MIME_TYPE) {
            Ok(Self { name: name.to_owned() })
        } else {
            Err(UploadRejected::NotPdf { mime_type: mime_type.to_owned() })
        }
    }
}

/// Client-side validation failure for a picked file.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejected {
    #[error("Please upload a PDF file")]
    NotPdf { mime_type: String },
}

/// Chat conversation state, provided to components as `RwSignal<ChatState>`.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Append-only conversation, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Text of the most recent failure, shown as a banner.
    pub error: Option<String>,
    in_flight: Option<RequestTicket>,
    next_id: u64,
    generation: u64,
}

impl ChatState {
    /// True while a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a text question.
    ///
    /// Returns `None` without touching state when `text` is blank or another
    /// request is still outstanding.
    pub fn begin_send(&mut self, text: &str, now_ms: f64) -> Option<RequestTicket> {
        if text.trim().is_empty() {
            return None;
        }
        self.begin(RequestKind::Chat, text.to_owned(), now_ms)
    }

    /// Start a PDF upload for an already-validated file.
    ///
    /// Returns `None` without touching state while another request is
    /// outstanding.
    pub fn begin_upload(&mut self, file: &PdfSelection, now_ms: f64) -> Option<RequestTicket> {
        self.begin(RequestKind::Pdf, format!("Uploaded PDF: {}", file.name), now_ms)
    }

    fn begin(&mut self, kind: RequestKind, content: String, now_ms: f64) -> Option<RequestTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        self.push(Role::User, content, now_ms, Vec::new(), None);
        self.error = None;
        let ticket = RequestTicket { kind, generation: self.generation };
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Merge the outcome of the request identified by `ticket`.
    ///
    /// Always clears the loading flag for the matching request. Responses to
    /// requests issued before the last [`ChatState::clear`] are dropped.
    /// Returns `true` if a message was appended.
    pub fn finish(&mut self, ticket: RequestTicket, result: Result<ChatResponse, ApiError>, now_ms: f64) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        if ticket.generation != self.generation {
            return false;
        }

        match result {
            Ok(resp) => {
                self.push(Role::Assistant, resp.text, now_ms, resp.sources, resp.scheme);
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.push(Role::Assistant, ticket.kind.fallback_reply().to_owned(), now_ms, Vec::new(), None);
            }
        }
        true
    }

    /// Empty the conversation and clear the error banner.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.error = None;
        self.generation += 1;
    }

    /// Hide the error banner without touching the conversation.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn push(
        &mut self,
        role: Role,
        content: String,
        timestamp: f64,
        sources: Vec<Source>,
        scheme: Option<SchemeDetails>,
    ) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: MessageId(self.next_id), content, role, timestamp, sources, scheme });
    }
}
