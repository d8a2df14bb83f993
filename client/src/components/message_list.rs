//! Scrollable conversation view with empty state and typing indicator.

use leptos::prelude::*;

use crate::components::chat_message::ChatMessageBubble;
use crate::components::message_input::PDF_INPUT_ID;
use crate::state::chat::ChatState;

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_loading()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="message-list" node_ref=list_ref>
            {move || {
                let messages = chat.with(|c| c.messages.clone());
                if messages.is_empty() {
                    return view! { <EmptyState/> }.into_any();
                }
                messages
                    .into_iter()
                    .map(|message| view! { <ChatMessageBubble message=message/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
            {move || chat.with(ChatState::is_loading).then(|| view! { <TypingIndicator/> })}
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="message-list__empty">
            <h2 class="message-list__empty-title">"Ask about government schemes"</h2>
            <p>"Example: \"Which farmer schemes am I eligible for with income under 2 lakhs?\""</p>
            <p>"Or: \"How do I apply for PM-KISAN as a small farmer?\""</p>
            <label class="btn message-list__upload" for=PDF_INPUT_ID>
                "Upload Scheme PDF"
            </label>
            <p class="message-list__hint">"Upload government circulars or scheme documents"</p>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-message chat-message--assistant" aria-live="polite">
            <div class="chat-message__bubble typing-indicator" aria-label="Assistant is typing">
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
            </div>
        </div>
    }
}
