//! A single conversation bubble with optional scheme panel and source chips.

use leptos::prelude::*;

use crate::components::scheme_details::SchemeDetailsPanel;
use crate::net::types::{Source, is_web_url};
use crate::state::chat::{ChatMessage, Role};
use crate::util::markdown::render_markdown_html;

fn avatar_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "AI",
    }
}

/// Message bubble. User text renders verbatim; assistant text renders as Markdown.
#[component]
pub fn ChatMessageBubble(message: ChatMessage) -> impl IntoView {
    let ChatMessage { role, content, sources, scheme, .. } = message;
    let is_user = role == Role::User;
    let is_assistant = !is_user;

    view! {
        <div
            class="chat-message"
            class:chat-message--user=is_user
            class:chat-message--assistant=is_assistant
            data-role=role.as_str()
        >
            <div class="chat-message__avatar" aria-hidden="true">{avatar_label(role)}</div>
            <div class="chat-message__bubble">
                {if is_assistant {
                    let rendered = render_markdown_html(&content);
                    view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
                } else {
                    view! { <p class="chat-message__text">{content}</p> }.into_any()
                }}
                {scheme.map(|details| view! { <SchemeDetailsPanel details=details/> })}
                {(!sources.is_empty()).then(|| view! { <SourceList sources=sources/> })}
            </div>
        </div>
    }
}

/// Citation chips under an assistant answer.
#[component]
fn SourceList(sources: Vec<Source>) -> impl IntoView {
    view! {
        <div class="chat-message__sources">
            <p class="chat-message__sources-label">"Sources:"</p>
            <div class="chat-message__source-chips">
                {sources
                    .into_iter()
                    .map(|source| {
                        let Source { title, url, kind } = source;
                        if is_web_url(&url) {
                            view! {
                                <a
                                    class="chat-message__source"
                                    href=url
                                    title=kind
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {title}
                                </a>
                            }
                                .into_any()
                        } else {
                            view! {
                                <span class="chat-message__source" title=kind>
                                    {title}
                                </span>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
