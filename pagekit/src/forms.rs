//! Per-form wiring: focus classes, blur validation and submit handling.

use std::sync::LazyLock;

use pagedom::{EventKind, ListenerTarget, Page, Selector};

use crate::validation::{FOCUSED_CLASS, FieldValidator, GROUP_CLASS};

pub const LOADING_CLASS: &str = "loading";

static FORMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("form").expect("static selector"));
static INPUTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input").expect("static selector"));
static SUBMIT_BUTTON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("button[type=\"submit\"]").expect("static selector"));
static GROUP: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&format!(".{GROUP_CLASS}")).expect("static selector"));

fn set_group_focus(page: &mut Page, input_id: &str, focused: bool) {
    let Some(group_id) = page.closest(input_id, &GROUP) else {
        return;
    };
    if let Some(group) = page.element_mut(&group_id) {
        if focused {
            group.add_class(FOCUSED_CLASS);
        } else {
            group.remove_class(FOCUSED_CLASS);
        }
    }
}

/// Attach focus/blur listeners to every input of every form on the page.
///
/// Blur first drops `focused`, then validates the field. Inputs added later
/// are not picked up. Returns the number of inputs wired.
pub fn install_field_listeners(page: &mut Page, validator: FieldValidator) -> usize {
    let mut wired = 0;
    for form_id in page.query_all(&FORMS) {
        for input_id in page.query_all_within(&form_id, &INPUTS) {
            let target = ListenerTarget::element(input_id.clone());

            let id = input_id.clone();
            page.on_event(target.clone(), EventKind::Focus, move |page, _| {
                set_group_focus(page, &id, true);
            });

            let id = input_id.clone();
            page.on_event(target.clone(), EventKind::Blur, move |page, _| {
                set_group_focus(page, &id, false);
            });

            let id = input_id;
            page.on_event(target, EventKind::Blur, move |page, _| {
                validator.validate_on_blur(page, &id);
            });

            wired += 1;
        }
    }
    wired
}

/// Validate forms on submit and put their submit button into the loading
/// state.
///
/// With `block_invalid` set, an invalid form has its submission cancelled
/// and the first invalid field focused; its button stays as it was.
/// Otherwise the button shows `loading` regardless of the outcome. Disabled
/// buttons are never touched, and nothing here removes `loading`.
pub fn install_submit_handling(
    page: &mut Page,
    validator: FieldValidator,
    block_invalid: bool,
) -> usize {
    let forms = page.query_all(&FORMS);
    for form_id in &forms {
        let id = form_id.clone();
        let target = ListenerTarget::element(form_id.clone());
        page.on_event(target, EventKind::Submit, move |page, event| {
            let result = validator.validate_all(page, &id);
            if result.is_invalid() && block_invalid {
                event.prevent_default();
                result.focus_first(page);
                log::debug!("submit of {id} blocked: {} invalid field(s)", result.errors().len());
                return;
            }
            mark_loading(page, &id);
        });
    }
    forms.len()
}

/// Add `loading` to the form's first submit button unless it is disabled.
pub fn mark_loading(page: &mut Page, form_id: &str) -> bool {
    let Some(button_id) = page.query_within(form_id, &SUBMIT_BUTTON) else {
        return false;
    };
    match page.element_mut(&button_id) {
        Some(button) if !button.disabled => {
            button.add_class(LOADING_CLASS);
            true
        }
        _ => false,
    }
}
