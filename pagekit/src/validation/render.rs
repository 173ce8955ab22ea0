use pagedom::{Element, Page};

use super::state::{ERROR_CLASS, ERROR_MESSAGE_CLASS, ERROR_MESSAGE_SELECTOR};

pub const ERROR_MESSAGE_STYLE: &str = "
    color: var(--error-color);
    font-size: 0.875rem;
    margin-top: 0.25rem;
    animation: fadeIn 0.3s ease;
";

fn message_id(group_id: &str) -> String {
    format!("{group_id}-error")
}

/// Drop the `error` class and every `.error-message` inside the group.
pub fn clear_field_error(page: &mut Page, group_id: &str) {
    let Some(group) = page.element_mut(group_id) else {
        return;
    };
    group.remove_class(ERROR_CLASS);
    let stale: Vec<String> = pagedom::element::query_selector_all(group, &ERROR_MESSAGE_SELECTOR)
        .into_iter()
        .filter(|id| id != group_id)
        .collect();
    for id in stale {
        page.remove(&id);
    }
}

/// Mark the group as failed and append its message node.
///
/// Any previous message is removed first, so a group never shows more than
/// one.
pub fn show_field_error(page: &mut Page, group_id: &str, message: &str) {
    if !page.contains(group_id) {
        return;
    }
    clear_field_error(page, group_id);
    if let Some(group) = page.element_mut(group_id) {
        group.add_class(ERROR_CLASS);
    }
    let node = Element::div()
        .id(message_id(group_id))
        .class(ERROR_MESSAGE_CLASS)
        .text(message)
        .css(ERROR_MESSAGE_STYLE);
    page.append_child(group_id, node);
}
