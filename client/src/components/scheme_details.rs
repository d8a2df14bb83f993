//! Structured scheme panel rendered under an assistant answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives an already-validated [`SchemeDetails`] record, so sections simply
//! render when their field is present and are omitted otherwise.

#[cfg(test)]
#[path = "scheme_details_test.rs"]
mod scheme_details_test;

use leptos::prelude::*;

use crate::net::types::{ApplicationProcess, SchemeDetails};

const MISSING: &str = "—";

/// Format a `0.0..=1.0` confidence as a whole percentage.
pub fn confidence_label(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

/// Comma-join a list, or a dash when it is empty.
pub fn join_list(items: &[String]) -> String {
    if items.is_empty() {
        return MISSING.to_owned();
    }
    items.join(", ")
}

/// Show an optional field, or a dash when it is absent.
pub fn display_or_dash(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_owned()
}

fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p class="scheme-details__row">
            <span class="scheme-details__label">{format!("{label}:")}</span>
            " "
            {value}
        </p>
    }
}

fn text_section(title: &'static str, text: String) -> impl IntoView {
    view! {
        <section class="scheme-details__section">
            <h4 class="scheme-details__heading">{title}</h4>
            <p class="scheme-details__text">{text}</p>
        </section>
    }
}

/// Panel listing issuer, eligibility, benefits, documents, and application steps.
#[component]
pub fn SchemeDetailsPanel(details: SchemeDetails) -> impl IntoView {
    let SchemeDetails {
        scheme_name,
        issuer,
        state,
        categories,
        confidence,
        last_checked,
        eligibility_summary,
        benefits_summary,
        required_documents,
        how_to_apply,
        latest_updates,
        disclaimer,
        sources: _,
    } = details;

    let confidence = confidence.map_or_else(|| MISSING.to_owned(), confidence_label);

    view! {
        <div class="scheme-details">
            <h3 class="scheme-details__title">
                {format!("Scheme Details: {}", display_or_dash(scheme_name.as_deref()))}
            </h3>

            <div class="scheme-details__grid">
                <div>
                    {detail_row("Issuer", display_or_dash(issuer.as_deref()))}
                    {detail_row("State", display_or_dash(state.as_deref()))}
                    {detail_row("Categories", join_list(&categories))}
                </div>
                <div>
                    {detail_row("Confidence", confidence)}
                    {detail_row("Last Updated", display_or_dash(last_checked.as_deref()))}
                </div>
            </div>

            {eligibility_summary.map(|text| text_section("Eligibility", text))}
            {benefits_summary.map(|text| text_section("Benefits", text))}

            {(!required_documents.is_empty())
                .then(|| {
                    view! {
                        <section class="scheme-details__section">
                            <h4 class="scheme-details__heading">"Required Documents"</h4>
                            <ul class="scheme-details__list">
                                {required_documents
                                    .into_iter()
                                    .map(|doc| view! { <li>{doc}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </section>
                    }
                })}

            {how_to_apply.map(application_section)}
            {latest_updates.map(|text| text_section("Latest Updates", text))}
            {disclaimer.map(|text| view! { <p class="scheme-details__disclaimer">{text}</p> })}
        </div>
    }
}

fn application_section(apply: ApplicationProcess) -> impl IntoView {
    let ApplicationProcess { modes, steps, deadline, official_portal } = apply;

    view! {
        <section class="scheme-details__section">
            <h4 class="scheme-details__heading">"How to Apply"</h4>
            {(!modes.is_empty()).then(|| detail_row("Modes", join_list(&modes)))}
            {(!steps.is_empty())
                .then(|| {
                    view! {
                        <p class="scheme-details__row scheme-details__label">"Steps:"</p>
                        <ol class="scheme-details__steps">
                            {steps.into_iter().map(|step| view! { <li>{step}</li> }).collect::<Vec<_>>()}
                        </ol>
                    }
                })}
            {deadline.map(|d| detail_row("Deadline", d))}
            {official_portal
                .map(|url| {
                    let href = url.clone();
                    view! {
                        <p class="scheme-details__row">
                            <span class="scheme-details__label">"Portal:"</span>
                            " "
                            <a
                                class="scheme-details__link"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {url}
                            </a>
                        </p>
                    }
                })}
        </section>
    }
}
