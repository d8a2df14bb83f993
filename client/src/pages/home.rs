//! The single chat screen: header, error banner, conversation, and input footer.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
use crate::components::message_input::MessageInput;
use crate::components::message_list::MessageList;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <Header/>
            <ErrorBanner/>
            <MessageList/>
            <MessageInput/>
        </div>
    }
}
