//! Footer with the question input, send button, and PDF picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hidden file input carries a fixed id so the empty-state shortcut in
//! `message_list` can open the same picker through a `<label for>`.

#[cfg(test)]
#[path = "message_input_test.rs"]
mod message_input_test;

use leptos::prelude::*;

use crate::net::chat_client::send_message;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;

/// DOM id of the hidden PDF file input.
pub const PDF_INPUT_ID: &str = "pdf-upload";

/// Whether the form may submit `text` right now.
pub fn can_submit(text: &str, loading: bool) -> bool {
    !loading && !text.trim().is_empty()
}

#[component]
pub fn MessageInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let loading = move || chat.with(ChatState::is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get();
        if !can_submit(&text, loading()) {
            return;
        }
        let prefs = ui.get_untracked();
        if send_message(chat, text, prefs.language, prefs.use_grounding) {
            input.set(String::new());
        }
    };

    let on_attach = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = file_ref.get() {
                el.click();
            }
        }
    };

    let on_file_change = move |_: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = file_ref.get() else {
                return;
            };
            let file = el.files().and_then(|files| files.get(0));
            // Reset so picking the same file again still fires `change`.
            el.set_value("");
            let Some(file) = file else {
                return;
            };
            let language = ui.get_untracked().language;
            if let Err(rejected) = crate::net::chat_client::upload_pdf(chat, file, language) {
                crate::util::browser::alert(&rejected.to_string());
            }
        }
    };

    view! {
        <footer class="message-input">
            <form class="message-input__form" on:submit=on_submit>
                <input
                    id=PDF_INPUT_ID
                    class="message-input__file"
                    type="file"
                    accept=".pdf,application/pdf"
                    node_ref=file_ref
                    disabled=loading
                    on:change=on_file_change
                />
                <button
                    class="btn message-input__attach"
                    type="button"
                    title="Upload PDF"
                    disabled=loading
                    on:click=on_attach
                >
                    "PDF"
                </button>
                <input
                    class="message-input__text"
                    type="text"
                    placeholder="Ask about government schemes..."
                    disabled=loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary message-input__send"
                    type="submit"
                    title="Send message"
                    disabled=move || !can_submit(&input.get(), loading())
                >
                    "Send"
                </button>
            </form>
        </footer>
    }
}
