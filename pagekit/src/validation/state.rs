use std::sync::LazyLock;

use pagedom::{Element, Selector};

pub const GROUP_CLASS: &str = "form-group";
pub const FOCUSED_CLASS: &str = "focused";
pub const ERROR_CLASS: &str = "error";
pub const SUCCESS_CLASS: &str = "success";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

pub(crate) static GROUP_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".form-group").expect("static selector"));
pub(crate) static ERROR_MESSAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".error-message").expect("static selector"));

/// Validity half of a field group's visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Neutral,
    Error,
    Success,
}

/// The visible state of a `.form-group`: focus is tracked independently of
/// validity, so a group can be focused and in error at the same time.
///
/// Transitions only ever move validity away from `Neutral`. A group that
/// passed once keeps its `success` class even after a later failure; the
/// `error` class wins when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldGroupState {
    pub focused: bool,
    pub validity: Validity,
}

impl FieldGroupState {
    /// Read the state from a group's classes.
    pub fn of(group: &Element) -> Self {
        let validity = if group.has_class(ERROR_CLASS) {
            Validity::Error
        } else if group.has_class(SUCCESS_CLASS) {
            Validity::Success
        } else {
            Validity::Neutral
        };
        Self {
            focused: group.has_class(FOCUSED_CLASS),
            validity,
        }
    }

    pub fn is_neutral(&self) -> bool {
        !self.focused && self.validity == Validity::Neutral
    }
}
