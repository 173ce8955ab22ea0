use chrono::{DateTime, TimeZone};
use pagedom::{BODY_ID, Element, NavigationTiming, Page, Rect};
use pagekit::utils::DateFormat;
use pagekit::{InteractionConfig, PagekitError};

use crate::documents::{self, Document};

const DOCUMENTS_TOP: f32 = 900.0;

fn group(id: &str, label: &str, input: Element) -> Element {
    Element::div()
        .id(format!("{id}-group"))
        .class("form-group")
        .children([
            Element::new("label").attr("for", id).text(label),
            input.id(id).class("form-input"),
        ])
}

fn upload_form() -> Element {
    Element::form()
        .id("upload-form")
        .class("glass-card")
        .rect(Rect::new(0.0, 120.0, 800.0, 260.0))
        .children([
            group("title", "Title", Element::input("text").required()),
            group("notify", "Notify (email)", Element::input("email")),
            group("file", "Document", Element::input("file").required()),
            Element::button()
                .id("upload-btn")
                .class("btn")
                .attr("type", "submit")
                .text("Convert to PDF")
                .rect(Rect::new(20.0, 320.0, 200.0, 44.0)),
        ])
}

fn login_form() -> Element {
    Element::form()
        .id("login-form")
        .class("glass-card")
        .rect(Rect::new(440.0, 200.0, 400.0, 320.0))
        .children([
            group("username", "Username", Element::input("text").required()),
            group("password", "Password", Element::input("password").required()),
            Element::button()
                .id("login-btn")
                .class("btn")
                .attr("type", "submit")
                .text("Log in")
                .rect(Rect::new(460.0, 440.0, 360.0, 44.0)),
        ])
}

/// The sign-in page: a username and password form.
pub fn login(clock: std::time::Instant) -> Page {
    let mut page = Page::with_clock(clock);
    page.resize(1280.0, 800.0);
    page.append_child(BODY_ID, login_form());
    page
}

fn navbar() -> Element {
    Element::new("nav").id("navbar").children([
        Element::anchor("#documents").id("nav-documents").text("My documents"),
        Element::anchor("/logout").id("nav-logout").class("btn").text("Log out"),
        Element::div()
            .id("user-menu")
            .class("dropdown")
            .class("dropdown-open"),
    ])
}

/// The upload dashboard: navbar, upload form and the document list.
pub fn dashboard<Tz>(
    docs: &[Document],
    config: &InteractionConfig,
    now: &DateTime<Tz>,
    clock: std::time::Instant,
) -> Result<Page, PagekitError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let format = DateFormat::new(&config.time_format, &config.date_format)?;
    let cards = docs
        .iter()
        .enumerate()
        .map(|(i, doc)| documents::card(doc, i, DOCUMENTS_TOP, &format, now))
        .collect::<Result<Vec<_>, _>>()?;

    let mut page = Page::with_clock(clock);
    page.resize(1280.0, 800.0);
    page.set_performance(Some(NavigationTiming {
        load_event_start: 850.0,
        load_event_end: 4100.0,
    }));
    for child in [
        navbar(),
        upload_form(),
        Element::div().id("documents").children(cards),
    ] {
        page.append_child(BODY_ID, child);
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use pagekit::validation::{FieldGroupState, Validity};

    use super::*;

    fn validity(page: &Page, group: &str) -> Validity {
        FieldGroupState::of(page.element(group).unwrap()).validity
    }

    #[test]
    fn test_login_blocks_short_password() {
        let mut page = login(std::time::Instant::now());
        pagekit::install(&mut page, InteractionConfig::default()).unwrap();

        page.set_value("username", "ada");
        page.set_value("password", "abc");
        assert!(page.submit("login-form").default_prevented());
        assert_eq!(validity(&page, "username-group"), Validity::Neutral);
        assert_eq!(validity(&page, "password-group"), Validity::Error);

        page.set_value("password", "lovelace");
        assert!(!page.submit("login-form").default_prevented());
        assert_eq!(validity(&page, "password-group"), Validity::Neutral);
    }
}
