//! Top bar with the app title, grounding toggle, language selector, and clear.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::ui::{Language, UiState};

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let on_language = move |ev: leptos::ev::Event| {
        if let Some(lang) = Language::from_code(&event_target_value(&ev)) {
            ui.update(|u| u.language = lang);
        }
    };
    let on_grounding = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        ui.update(|u| u.use_grounding = checked);
    };
    let on_clear = move |_| chat.update(ChatState::clear);

    view! {
        <header class="app-header">
            <h1 class="app-header__title">"AI Scheme Assistant"</h1>

            <div class="app-header__controls">
                <label class="app-header__toggle" for="grounding-toggle">
                    <input
                        id="grounding-toggle"
                        type="checkbox"
                        prop:checked=move || ui.with(|u| u.use_grounding)
                        on:change=on_grounding
                    />
                    "Latest Updates"
                </label>

                <select
                    class="app-header__language"
                    aria-label="Answer language"
                    prop:value=move || ui.with(|u| u.language.code())
                    on:change=on_language
                >
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <option value=lang.code() selected=move || ui.with(|u| u.language == lang)>
                                    {lang.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>

                <button
                    class="btn app-header__clear"
                    type="button"
                    on:click=on_clear
                    disabled=move || chat.with(|c| c.messages.is_empty())
                >
                    "Clear"
                </button>
            </div>
        </header>
    }
}
