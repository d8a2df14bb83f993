use std::collections::HashSet;

use super::*;
use crate::net::types::parse_chat_response;

fn answer(text: &str) -> ChatResponse {
    ChatResponse { text: text.to_owned(), sources: Vec::new(), scheme: None }
}

fn pdf(name: &str) -> PdfSelection {
    PdfSelection::new(name, PDF_MIME_TYPE).unwrap()
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.error.is_none());
    assert!(!state.is_loading());
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_user_message_and_sets_loading() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("How do I apply?", 10.0).unwrap();

    assert_eq!(ticket.kind, RequestKind::Chat);
    assert!(state.is_loading());
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "How do I apply?");
    assert!((state.messages[0].timestamp - 10.0).abs() < f64::EPSILON);
}

#[test]
fn begin_send_blank_input_is_noop() {
    let mut state = ChatState::default();
    state.error = Some("old".to_owned());
    for text in ["", "   ", "\n\t "] {
        assert!(state.begin_send(text, 0.0).is_none());
    }
    assert!(state.messages.is_empty());
    assert!(!state.is_loading());
    assert_eq!(state.error.as_deref(), Some("old"));
}

#[test]
fn begin_send_clears_previous_error() {
    let mut state = ChatState::default();
    state.error = Some("boom".to_owned());
    state.begin_send("hi", 0.0).unwrap();
    assert!(state.error.is_none());
}

#[test]
fn begin_send_rejected_while_request_outstanding() {
    let mut state = ChatState::default();
    state.begin_send("first", 0.0).unwrap();
    assert!(state.begin_send("second", 1.0).is_none());
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// finish
// =============================================================

#[test]
fn successful_send_appends_exactly_one_assistant_message() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("hello", 0.0).unwrap();
    assert!(state.finish(ticket, Ok(answer("hi there")), 1.0));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "hi there");
    assert!(!state.is_loading());
    assert!(state.error.is_none());
}

#[test]
fn pm_kisan_example_carries_sources() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("How do I apply for PM-KISAN?", 0.0).unwrap();
    let resp = parse_chat_response(
        r#"{"text_response":"Register on the portal.","sources":[{"title":"PM-KISAN","url":"https://pmkisan.gov.in","type":"official"}]}"#,
    )
    .unwrap();
    state.finish(ticket, Ok(resp), 1.0);

    assert_eq!(state.messages.len(), 2);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.sources.len(), 1);
    assert_eq!(last.sources[0].title, "PM-KISAN");
    assert_eq!(last.sources[0].url, "https://pmkisan.gov.in");
}

#[test]
fn failed_send_appends_one_fallback_and_sets_error() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("hello", 0.0).unwrap();
    state.finish(ticket, Err(ApiError::Status(500)), 1.0);

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, CHAT_ERROR_REPLY);
    assert!(state.messages[1].sources.is_empty());
    assert_eq!(state.error.as_deref(), Some("server responded with status 500"));
    assert!(!state.is_loading());
}

#[test]
fn failed_upload_uses_pdf_fallback() {
    let mut state = ChatState::default();
    let ticket = state.begin_upload(&pdf("scheme.pdf"), 0.0).unwrap();
    state.finish(ticket, Err(ApiError::Transport("offline".to_owned())), 1.0);

    assert_eq!(state.messages[1].content, PDF_ERROR_REPLY);
    assert_eq!(state.error.as_deref(), Some("request failed: offline"));
}

#[test]
fn finish_with_unknown_ticket_is_ignored() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("a", 0.0).unwrap();
    state.finish(ticket, Ok(answer("b")), 1.0);
    assert!(!state.finish(ticket, Ok(answer("dup")), 2.0));
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn scheme_record_attached_to_assistant_message() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("farmer schemes", 0.0).unwrap();
    let resp = parse_chat_response(r#"{"text_response":"x","scheme_name":"PM-KISAN"}"#).unwrap();
    state.finish(ticket, Ok(resp), 1.0);
    let scheme = state.messages[1].scheme.as_ref().unwrap();
    assert_eq!(scheme.scheme_name.as_deref(), Some("PM-KISAN"));
}

// =============================================================
// Upload validation
// =============================================================

#[test]
fn pdf_selection_accepts_pdf_mime() {
    assert!(PdfSelection::new("a.pdf", "application/pdf").is_ok());
    assert!(PdfSelection::new("a.pdf", "Application/PDF").is_ok());
}

#[test]
fn pdf_selection_rejects_other_types() {
    let err = PdfSelection::new("notes.txt", "text/plain").unwrap_err();
    assert_eq!(err, UploadRejected::NotPdf { mime_type: "text/plain".to_owned() });
    assert_eq!(err.to_string(), "Please upload a PDF file");
    assert!(PdfSelection::new("mystery", "").is_err());
}

#[test]
fn begin_upload_appends_uploaded_message() {
    let mut state = ChatState::default();
    let ticket = state.begin_upload(&pdf("circular.pdf"), 0.0).unwrap();
    assert_eq!(ticket.kind, RequestKind::Pdf);
    assert!(state.is_loading());
    assert_eq!(state.messages[0].content, "Uploaded PDF: circular.pdf");
    assert_eq!(state.messages[0].role, Role::User);
}

#[test]
fn begin_upload_rejected_while_request_outstanding() {
    let mut state = ChatState::default();
    state.begin_send("question", 0.0).unwrap();
    assert!(state.begin_upload(&pdf("a.pdf"), 1.0).is_none());
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_resets_messages_and_error() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("q", 0.0).unwrap();
    state.finish(ticket, Err(ApiError::Status(503)), 1.0);
    assert!(state.error.is_some());

    state.clear();
    assert!(state.messages.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn clear_on_empty_state_is_harmless() {
    let mut state = ChatState::default();
    state.clear();
    assert!(state.messages.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn response_after_clear_is_dropped_but_loading_ends() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("q", 0.0).unwrap();
    state.clear();
    assert!(state.is_loading());

    assert!(!state.finish(ticket, Ok(answer("late")), 1.0));
    assert!(state.messages.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn dismiss_error_keeps_conversation() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("q", 0.0).unwrap();
    state.finish(ticket, Err(ApiError::Unavailable), 1.0);
    state.dismiss_error();
    assert!(state.error.is_none());
    assert_eq!(state.messages.len(), 2);
}

// =============================================================
// Message identifiers
// =============================================================

#[test]
fn message_ids_unique_across_rapid_exchanges() {
    let mut state = ChatState::default();
    for i in 0..50 {
        let ticket = state.begin_send(&format!("q{i}"), 0.0).unwrap();
        state.finish(ticket, Ok(answer("a")), 0.0);
    }
    let ids: HashSet<MessageId> = state.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn message_ids_keep_increasing_after_clear() {
    let mut state = ChatState::default();
    let ticket = state.begin_send("a", 0.0).unwrap();
    state.finish(ticket, Ok(answer("b")), 0.0);
    let last_before = state.messages.last().unwrap().id;

    state.clear();
    state.begin_send("c", 0.0).unwrap();
    assert!(state.messages[0].id > last_before);
}

#[test]
fn message_id_display_is_prefixed() {
    let mut state = ChatState::default();
    state.begin_send("a", 0.0).unwrap();
    assert_eq!(state.messages[0].id.to_string(), "msg-1");
}

#[test]
fn role_strings_match_wire_names() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Assistant.as_str(), "assistant");
}
