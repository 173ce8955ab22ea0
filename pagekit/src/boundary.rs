//! Turns uncaught errors into a user-facing toast.

use std::time::Duration;

use pagedom::{EventKind, ListenerTarget, Page};

use crate::toast::{Toast, show_toast};

pub const ERROR_TOAST_MESSAGE: &str = "⚠ Something went wrong. Please refresh the page.";

pub fn error_toast(duration: Duration) -> Toast {
    Toast::error(ERROR_TOAST_MESSAGE).with_duration(duration).without_exit()
}

/// Log every window `error` and show the error toast for `duration`.
pub fn install(page: &mut Page, duration: Duration) {
    page.on_event(ListenerTarget::Window, EventKind::Error, move |page, event| {
        log::error!("page error: {}", event.error_message().unwrap_or("unknown error"));
        show_toast(page, error_toast(duration));
    });
}
