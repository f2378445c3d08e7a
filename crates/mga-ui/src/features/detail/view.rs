//! Detail page binding: renders the markdown body in place and wires the vote buttons.

use crate::core::controls::dom;
use crate::features::detail::logic::{render_markdown, vote_message};
use gloo::console;
use gloo::events::EventListener;
use web_sys::Document;

/// Whether the document is a game detail page.
pub(crate) fn is_detail_page(document: &Document) -> bool {
    document.get_element_by_id(dom::MARKDOWN_CONTENT).is_some()
}

pub(crate) fn mount_detail(document: &Document) {
    if let Some(container) = document.get_element_by_id(dom::MARKDOWN_CONTENT) {
        let raw = container.text_content().unwrap_or_default();
        if let Some(html) = render_markdown(&raw) {
            container.set_inner_html(&html);
        }
    }
    bind_vote(document, dom::UPVOTE_BUTTON, true);
    bind_vote(document, dom::DOWNVOTE_BUTTON, false);
}

fn bind_vote(document: &Document, id: &str, upvote: bool) {
    let Some(button) = document.get_element_by_id(id) else {
        console::warn!("vote button missing", id);
        return;
    };
    // Lives as long as the page.
    EventListener::new(&button, "click", move |_event| {
        console::log!(vote_message(upvote));
    })
    .forget();
}
