use std::sync::LazyLock;

use pagedom::{Element, HEAD_ID, Page, Selector};

pub const STYLE_SHEET_ID: &str = "pagekit-styles";

static STYLE_SHEET: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&format!("style#{STYLE_SHEET_ID}")).expect("static selector"));

/// Animations and state styling the interactions rely on.
pub const ADDITIONAL_STYLES: &str = r#"
    @keyframes slideInRight {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }

    @keyframes slideOutRight {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }

    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        transform: scale(0);
        animation: ripple-animation 0.6s linear;
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    .form-group.focused .form-input {
        border-color: rgba(79, 172, 254, 0.5);
        box-shadow: 0 0 0 3px rgba(79, 172, 254, 0.1);
    }

    .form-group.success .form-input {
        border-color: rgba(16, 185, 129, 0.5);
    }

    .form-group.error .form-input {
        border-color: rgba(239, 68, 68, 0.5);
        box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
    }

    .btn.loading {
        position: relative;
        color: transparent;
    }

    .btn.loading::after {
        content: '';
        position: absolute;
        width: 16px;
        height: 16px;
        top: 50%;
        left: 50%;
        margin-left: -8px;
        margin-top: -8px;
        border: 2px solid transparent;
        border-top-color: currentColor;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }

    @keyframes spin {
        0% { transform: rotate(0deg); }
        100% { transform: rotate(360deg); }
    }
"#;

/// Add the stylesheet to `<head>` unless it is already there.
/// Returns true if it was added.
pub fn inject_styles(page: &mut Page) -> bool {
    if page.query(&STYLE_SHEET).is_some() {
        return false;
    }
    page.append_child(HEAD_ID, Element::style_sheet(ADDITIONAL_STYLES).id(STYLE_SHEET_ID))
}
