//! Helpers exposed to page code: rate limiting, formatting and toasts.

mod debounce;
mod format;
mod throttle;

pub use debounce::{Debounce, PageDebounce};
pub(crate) use format::is_valid_pattern;
pub use format::{
    DateFormat, FormatError, format_date, format_date_str, format_file_size, parse_date,
};
pub use throttle::Throttle;

pub use crate::toast::{Toast, ToastLevel, show_toast};
