//! Chat actions: drive [`ChatState`] through one network round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these instead of touching the API directly. Each action
//! runs the synchronous `begin_*` transition, issues the request on the
//! local executor, and merges the outcome with `finish`. Failures are logged
//! and converted into conversation state; nothing propagates to the caller.

use leptos::prelude::*;

#[cfg(not(feature = "hydrate"))]
use crate::net::types::ApiError;
use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;
use crate::state::ui::Language;
use crate::util::clock::now_ms;

/// Send a text question.
///
/// Returns `false` when nothing was sent: blank input, or a request is
/// already outstanding.
pub fn send_message(chat: RwSignal<ChatState>, text: String, language: Language, use_grounding: bool) -> bool {
    let Some(ticket) = chat
        .try_update(|c| c.begin_send(&text, now_ms()))
        .flatten()
    else {
        return false;
    };

    let request = ChatRequest { message: text, language: language.code().to_owned(), use_grounding };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = super::api::chat_with_assistant(&request).await;
        if let Err(e) = &result {
            log::warn!("chat request failed: {e}");
        }
        chat.update(|c| {
            c.finish(ticket, result, now_ms());
        });
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        chat.update(|c| {
            c.finish(ticket, Err(ApiError::Unavailable), now_ms());
        });
    }

    true
}

/// Validate and upload a picked file.
///
/// Returns `Ok(false)` when a request is already outstanding.
///
/// # Errors
///
/// Returns [`UploadRejected`](crate::state::chat::UploadRejected) without
/// touching state when the file is not a PDF.
#[cfg(feature = "hydrate")]
pub fn upload_pdf(
    chat: RwSignal<ChatState>,
    file: web_sys::File,
    language: Language,
) -> Result<bool, crate::state::chat::UploadRejected> {
    let selection = crate::state::chat::PdfSelection::new(&file.name(), &file.type_())?;
    let Some(ticket) = chat
        .try_update(|c| c.begin_upload(&selection, now_ms()))
        .flatten()
    else {
        return Ok(false);
    };

    log::info!("uploading {} for processing", selection.name);
    leptos::task::spawn_local(async move {
        let result = super::api::process_pdf(&file, language.code()).await;
        if let Err(e) = &result {
            log::warn!("pdf processing failed: {e}");
        }
        chat.update(|c| {
            c.finish(ticket, result, now_ms());
        });
    });

    Ok(true)
}
