//! Click ripple for buttons.

use std::sync::LazyLock;

use pagedom::{Element, EventKind, ListenerTarget, Page, Selector};

pub const RIPPLE_CLASS: &str = "ripple";

static RIPPLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ripple").expect("static selector"));

/// Append a ripple circle to the button at the click point.
///
/// The circle's diameter is the larger of the button's sides, centered on
/// the pointer. Any earlier ripple in the button is removed first. Returns
/// the ripple's ID, or None if the button is gone.
pub fn create_ripple(
    page: &mut Page,
    button_id: &str,
    client_x: f32,
    client_y: f32,
) -> Option<String> {
    let rect = page.element(button_id)?.rect.unwrap_or_default();
    let diameter = rect.width.max(rect.height);
    let radius = diameter / 2.0;

    if let Some(previous) = page.query_within(button_id, &RIPPLE) {
        page.remove(&previous);
    }

    let mut circle = Element::span().class(RIPPLE_CLASS);
    circle.style.set("width", format!("{diameter}px"));
    circle.style.set("height", format!("{diameter}px"));
    circle.style.set("left", format!("{}px", client_x - rect.x - radius));
    circle.style.set("top", format!("{}px", client_y - rect.y - radius));
    let id = circle.id.clone();

    page.append_child(button_id, circle);
    Some(id)
}

/// Give every element matching `selector` a ripple on click.
pub fn install(page: &mut Page, selector: &Selector) -> usize {
    let buttons = page.query_all(selector);
    for button_id in &buttons {
        let id = button_id.clone();
        let target = ListenerTarget::element(button_id.clone());
        page.on_event(target, EventKind::Click, move |page, event| {
            // Bubbled clicks from descendants still ripple the button.
            let (x, y) = event.pointer().unwrap_or_default();
            create_ripple(page, &id, x, y);
        });
    }
    buttons.len()
}
