//! Progressive-enhancement behaviors for server-rendered pages: form
//! validation, submit loading states, toasts, ripples, scroll reveal,
//! shortcuts and small formatting helpers.
//!
//! Everything operates on a [`pagedom::Page`]. Call [`install`] once the
//! document is ready, or [`install_on_content_loaded`] before.

pub mod anchors;
pub mod boundary;
pub mod config;
pub mod error;
pub mod forms;
pub mod interactions;
pub mod keybinds;
pub mod perf;
pub mod reveal;
pub mod ripple;
pub mod runtime;
pub mod styles;
pub mod swipe;
pub mod toast;
pub mod utils;
pub mod validation;

pub use config::{ConfigError, InteractionConfig};
pub use error::PagekitError;
pub use interactions::{Interactions, PendingInteractions, install, install_on_content_loaded};
pub use runtime::{PageInput, Runtime};
pub use toast::{Toast, ToastLevel, show_toast};

pub mod prelude {
    pub use crate::config::InteractionConfig;
    pub use crate::interactions::{Interactions, install, install_on_content_loaded};
    pub use crate::runtime::{PageInput, Runtime};
    pub use crate::toast::{Toast, ToastLevel, show_toast};
    pub use crate::utils::{DateFormat, Debounce, Throttle, format_date, format_file_size};
    pub use crate::validation::{FieldValidator, ValidationResult};
    pub use pagedom::{Element, Key, Modifiers, Page, Rect};
}
