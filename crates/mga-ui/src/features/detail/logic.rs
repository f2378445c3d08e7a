//! Markdown rendering for the detail page body.

use pulldown_cmark::{Options, Parser, html};

/// Render raw markdown to HTML.
///
/// Returns `None` for blank input so the caller leaves the container untouched.
#[must_use]
pub fn render_markdown(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(raw, options);
    let mut out = String::with_capacity(raw.len() * 3 / 2);
    html::push_html(&mut out, parser);
    Some(out)
}

/// Console message for a vote button click.
#[must_use]
pub const fn vote_message(upvote: bool) -> &'static str {
    if upvote { "Upvoted" } else { "Downvoted" }
}
