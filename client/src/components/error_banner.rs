//! Dismissible banner for the most recent request failure.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    move || {
        chat.with(|c| c.error.clone()).map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner__text">{message}</span>
                    <button
                        class="btn error-banner__dismiss"
                        type="button"
                        on:click=move |_| chat.update(ChatState::dismiss_error)
                    >
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
