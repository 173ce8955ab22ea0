//! Form field validation.
//!
//! Fields are `input` elements. Each sits inside a `.form-group` container
//! that carries its visual state (`focused`, `error`, `success` classes)
//! and at most one `.error-message` node.
//!
//! # Example
//!
//! ```ignore
//! let validator = FieldValidator::new(6);
//! let result = validator.validate_all(&mut page, "register");
//! if result.is_invalid() {
//!     result.focus_first(&mut page);
//! }
//! ```

mod render;
mod result;
mod rules;
mod state;
mod validator;

pub use render::{ERROR_MESSAGE_STYLE, clear_field_error, show_field_error};
pub use result::{FieldError, ValidationResult};
pub use rules::{
    EMAIL_MESSAGE, Field, FieldKind, REQUIRED_MESSAGE, Rule, RuleSet, Trigger, is_valid_email,
};
pub use state::{
    ERROR_CLASS, ERROR_MESSAGE_CLASS, FOCUSED_CLASS, FieldGroupState, GROUP_CLASS, SUCCESS_CLASS,
    Validity,
};
pub use validator::FieldValidator;
