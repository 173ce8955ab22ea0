use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pagedom::{Element, EventKind, Key, ListenerTarget, Modifiers, NavigationTiming, Page, Rect};

fn page() -> Page {
    Page::with_body([Element::form().id("form").child(
        Element::div()
            .id("group")
            .child(Element::input("text").id("name"))
            .child(Element::button().id("btn").class("btn")),
    )])
}

type Log = Rc<RefCell<Vec<String>>>;

fn record(page: &mut Page, log: &Log, target: ListenerTarget, kind: EventKind, label: &str) {
    let log = Rc::clone(log);
    let label = label.to_string();
    page.on_event(target, kind, move |_, _| log.borrow_mut().push(label.clone()));
}

// ============================================================================
// Dispatch order
// ============================================================================

#[test]
fn test_click_bubbles_target_to_window() {
    let mut page = page();
    let log = Log::default();
    record(&mut page, &log, ListenerTarget::Window, EventKind::Click, "window");
    record(&mut page, &log, ListenerTarget::Document, EventKind::Click, "document");
    record(&mut page, &log, ListenerTarget::element("form"), EventKind::Click, "form");
    record(&mut page, &log, ListenerTarget::element("btn"), EventKind::Click, "btn-1");
    record(&mut page, &log, ListenerTarget::element("btn"), EventKind::Click, "btn-2");

    page.click("btn");

    assert_eq!(
        *log.borrow(),
        vec!["btn-1", "btn-2", "form", "document", "window"]
    );
}

#[test]
fn test_focus_does_not_bubble() {
    let mut page = page();
    let log = Log::default();
    record(&mut page, &log, ListenerTarget::element("group"), EventKind::Focus, "group");
    record(&mut page, &log, ListenerTarget::element("name"), EventKind::Focus, "name");

    assert!(page.focus("name"));

    assert_eq!(*log.borrow(), vec!["name"]);
}

#[test]
fn test_stop_propagation_finishes_current_node() {
    let mut page = page();
    let log = Log::default();
    page.on_event(ListenerTarget::element("btn"), EventKind::Click, |_, e| {
        e.stop_propagation()
    });
    record(&mut page, &log, ListenerTarget::element("btn"), EventKind::Click, "btn");
    record(&mut page, &log, ListenerTarget::element("form"), EventKind::Click, "form");

    let event = page.click("btn");

    assert!(event.propagation_stopped());
    assert_eq!(*log.borrow(), vec!["btn"]);
}

#[test]
fn test_dispatch_to_missing_target_is_noop() {
    let mut page = page();
    let log = Log::default();
    record(&mut page, &log, ListenerTarget::Document, EventKind::Click, "document");

    page.click("nope");

    assert!(log.borrow().is_empty());
}

#[test]
fn test_off_event_removes_listener() {
    let mut page = page();
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    let id = page.on_event(ListenerTarget::element("btn"), EventKind::Click, move |_, _| {
        *counter.borrow_mut() += 1
    });

    page.click("btn");
    assert!(page.off_event(id));
    page.click("btn");

    assert_eq!(*hits.borrow(), 1);
    assert!(!page.off_event(id));
}

#[test]
fn test_click_uses_element_center() {
    let mut page = Page::with_body([Element::button()
        .id("b")
        .rect(Rect::new(10.0, 20.0, 100.0, 40.0))]);
    let event = page.click("b");
    assert_eq!(event.pointer(), Some((60.0, 40.0)));
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_blurs_previous_first() {
    let mut page = Page::with_body([
        Element::input("text").id("a"),
        Element::input("text").id("b"),
    ]);
    let log = Log::default();
    record(&mut page, &log, ListenerTarget::element("a"), EventKind::Blur, "blur-a");
    record(&mut page, &log, ListenerTarget::element("b"), EventKind::Focus, "focus-b");

    page.focus("a");
    page.focus("b");

    assert_eq!(*log.borrow(), vec!["blur-a", "focus-b"]);
    assert_eq!(page.focused(), Some("b"));
}

#[test]
fn test_disabled_and_missing_cannot_focus() {
    let mut page = Page::with_body([Element::input("text").id("off").disabled(true)]);
    assert!(!page.focus("off"));
    assert!(!page.focus("missing"));
    assert_eq!(page.focused(), None);
    assert!(!page.blur());
}

#[test]
fn test_key_down_targets_focused_element() {
    let mut page = page();
    let seen = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&seen);
    page.on_event(ListenerTarget::Document, EventKind::KeyDown, move |_, e| {
        *slot.borrow_mut() = e.target.clone();
    });

    page.key_down(Key::Escape, Modifiers::NONE);
    assert_eq!(*seen.borrow(), None);

    page.focus("btn");
    page.key_down(Key::Enter, Modifiers::NONE);
    assert_eq!(*seen.borrow(), Some("btn".to_string()));
}

#[test]
fn test_removing_focused_element_clears_focus() {
    let mut page = page();
    page.focus("name");
    page.remove("group");
    assert_eq!(page.focused(), None);
}

// ============================================================================
// Panics become window errors
// ============================================================================

#[test]
fn test_listener_panic_is_reported_as_error_event() {
    let mut page = page();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&errors);
    page.on_event(ListenerTarget::Window, EventKind::Error, move |_, e| {
        sink.borrow_mut()
            .push(e.error_message().unwrap_or_default().to_string());
    });
    page.on_event(ListenerTarget::element("btn"), EventKind::Click, |_, _| {
        panic!("boom")
    });
    let after = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&after);
    page.on_event(ListenerTarget::element("btn"), EventKind::Click, move |_, _| {
        *flag.borrow_mut() = true
    });

    page.click("btn");

    assert!(*after.borrow());
    assert_eq!(errors.borrow().len(), 1);
    assert!(errors.borrow()[0].contains("boom"));
}

#[test]
fn test_error_listener_panic_is_not_redispatched() {
    let mut page = page();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    page.on_event(ListenerTarget::Window, EventKind::Error, move |_, _| {
        *counter.borrow_mut() += 1;
        panic!("broken error handler");
    });

    page.report_error("first");

    assert_eq!(*calls.borrow(), 1);
}

// ============================================================================
// Timers
// ============================================================================

#[test]
fn test_timers_fire_in_deadline_order() {
    let mut page = page();
    let log = Log::default();
    for (label, ms) in [("late", 30), ("early", 10), ("tie-a", 20), ("tie-b", 20)] {
        let log = Rc::clone(&log);
        page.set_timeout(Duration::from_millis(ms), move |_| {
            log.borrow_mut().push(label.to_string())
        });
    }

    assert_eq!(page.advance(Duration::from_millis(19)), 1);
    assert_eq!(page.advance(Duration::from_millis(100)), 3);
    assert_eq!(*log.borrow(), vec!["early", "tie-a", "tie-b", "late"]);
}

#[test]
fn test_nested_timer_is_relative_to_parent_deadline() {
    let mut page = page();
    let start = page.now();
    let fired_at = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&fired_at);
    page.set_timeout(Duration::from_millis(100), move |page| {
        page.set_timeout(Duration::from_millis(50), move |page| {
            *slot.borrow_mut() = Some(page.now());
        });
    });

    page.advance(Duration::from_secs(1));

    assert_eq!(*fired_at.borrow(), Some(start + Duration::from_millis(150)));
    assert_eq!(page.now(), start + Duration::from_secs(1));
}

#[test]
fn test_clear_timeout() {
    let mut page = page();
    let id = page.set_timeout(Duration::from_millis(10), |page| {
        page.remove("btn");
    });
    assert!(page.timer_pending(id));
    assert!(page.clear_timeout(id));
    page.advance(Duration::from_millis(20));
    assert!(page.contains("btn"));
    assert!(!page.clear_timeout(id));
}

// ============================================================================
// Viewport and performance
// ============================================================================

#[test]
fn test_scroll_into_view_aligns_start() {
    let mut page = Page::with_body([Element::div()
        .id("section")
        .rect(Rect::new(0.0, 900.0, 800.0, 300.0))]);
    let scrolls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&scrolls);
    page.on_event(ListenerTarget::Window, EventKind::Scroll, move |_, _| {
        *counter.borrow_mut() += 1
    });

    assert!(page.scroll_into_view(
        "section",
        pagedom::ScrollBehavior::Smooth,
        pagedom::ScrollBlock::Start
    ));

    assert_eq!(page.viewport().scroll_y, 900.0);
    assert_eq!(*scrolls.borrow(), 1);
    assert_eq!(page.scroll_requests().len(), 1);
    assert!(!page.scroll_into_view(
        "missing",
        pagedom::ScrollBehavior::Smooth,
        pagedom::ScrollBlock::Start
    ));
}

#[test]
fn test_navigation_timing_duration() {
    let mut page = page();
    assert_eq!(page.performance(), None);
    page.set_performance(Some(NavigationTiming {
        load_event_start: 100.0,
        load_event_end: 3200.0,
    }));
    assert_eq!(page.performance().unwrap().load_duration_ms(), 3100.0);
}
