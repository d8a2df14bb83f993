//! Markdown rendering for assistant answers.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::net::types::is_web_url;

/// Placeholder href for links and images whose target is not `http(s)`.
const BLOCKED_URL: &str = "#";

/// Render Markdown to HTML with raw HTML events removed and non-web link
/// targets neutralised.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Backend text is untrusted.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(tag) => Some(Event::Start(sanitize_tag(tag))),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn sanitize_tag(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link { link_type, dest_url, title, id } if !is_web_url(&dest_url) => {
            Tag::Link { link_type, dest_url: CowStr::Borrowed(BLOCKED_URL), title, id }
        }
        Tag::Image { link_type, dest_url, title, id } if !is_web_url(&dest_url) => {
            Tag::Image { link_type, dest_url: CowStr::Borrowed(BLOCKED_URL), title, id }
        }
        other => other,
    }
}
