//! Smooth scrolling for in-page anchor links.

use std::sync::LazyLock;

use pagedom::{EventKind, ListenerTarget, Page, ScrollBehavior, ScrollBlock, Selector};

static IN_PAGE_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href^=\"#\"]").expect("static selector"));

/// Scroll to the element an anchor's `#fragment` names.
///
/// A bare `#` or a fragment with no matching element does nothing.
pub fn scroll_to_fragment(page: &mut Page, anchor_id: &str) -> bool {
    let Some(fragment) = page
        .element(anchor_id)
        .and_then(|a| a.get_attr("href"))
        .and_then(|href| href.strip_prefix('#'))
        .map(str::to_string)
    else {
        return false;
    };
    if fragment.is_empty() {
        return false;
    }
    page.scroll_into_view(&fragment, ScrollBehavior::Smooth, ScrollBlock::Start)
}

/// Intercept clicks on `a[href^="#"]` links: cancel navigation and smooth
/// scroll instead.
pub fn install(page: &mut Page) -> usize {
    let anchors = page.query_all(&IN_PAGE_LINKS);
    for anchor_id in &anchors {
        let id = anchor_id.clone();
        let target = ListenerTarget::element(anchor_id.clone());
        page.on_event(target, EventKind::Click, move |page, event| {
            event.prevent_default();
            if !scroll_to_fragment(page, &id) {
                log::debug!("anchor {id} has no scroll target");
            }
        });
    }
    anchors.len()
}
