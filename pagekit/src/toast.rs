use std::fmt;
use std::time::Duration;

use pagedom::{BODY_ID, Element, Page};
use uuid::Uuid;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// How long the slide-out animation runs before the toast is removed.
pub const DEFAULT_TOAST_EXIT: Duration = Duration::from_millis(300);

pub const TOAST_ENTER_ANIMATION: &str = "slideInRight 0.3s ease";
pub const TOAST_EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

const TOAST_STYLE: &str = "
    position: fixed;
    top: 20px;
    right: 20px;
    z-index: 1000;
    max-width: 300px;
    animation: slideInRight 0.3s ease;
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A toast notification.
///
/// Toasts are fixed-position `.status` boxes appended to the body. After
/// `duration` they slide out and are removed once the exit animation ends.
///
/// # Example
///
/// ```ignore
/// show_toast(&mut page, Toast::success("Converted report.docx"));
/// show_toast(&mut page, "Uploading...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    /// How long to show the toast.
    pub duration: Duration,
    /// Slide-out time before removal. `None` removes the toast at once.
    pub exit: Option<Duration>,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            duration: DEFAULT_TOAST_DURATION,
            exit: Some(DEFAULT_TOAST_EXIT),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_exit(mut self, exit: Duration) -> Self {
        self.exit = Some(exit);
        self
    }

    /// Remove the toast without the slide-out animation.
    pub fn without_exit(mut self) -> Self {
        self.exit = None;
        self
    }

    /// Build the toast's element.
    pub fn element(&self) -> Element {
        Element::div()
            .class("status")
            .class(format!("status-{}", self.level))
            .css(TOAST_STYLE)
            .text(self.message.clone())
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Show a toast on the page and schedule its removal.
/// Returns the toast element's ID.
pub fn show_toast(page: &mut Page, toast: impl Into<Toast>) -> String {
    let toast = toast.into();
    let id = format!("toast-{}", Uuid::new_v4());
    page.append_child(BODY_ID, toast.element().id(id.clone()));
    log::debug!("toast {id} ({}): {}", toast.level, toast.message);

    let toast_id = id.clone();
    let exit = toast.exit;
    page.set_timeout(toast.duration, move |page| match exit {
        Some(exit) => {
            if let Some(el) = page.element_mut(&toast_id) {
                el.style.set("animation", TOAST_EXIT_ANIMATION);
            }
            page.set_timeout(exit, move |page| {
                page.remove(&toast_id);
            });
        }
        None => {
            page.remove(&toast_id);
        }
    });

    id
}
