//! The page: document tree plus the state a browser window keeps around it.
//!
//! A `Page` is single-threaded. Listeners and timer callbacks run one at a
//! time with exclusive access to the page.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::element::{self, Element};
use crate::event::{Event, EventKind, Key, Modifiers};
use crate::focus::FocusState;
use crate::layout::{Rect, Viewport};
use crate::listener::{ListenerId, ListenerTarget, Listeners};
use crate::selector::Selector;
use crate::timers::{TimerId, Timers};

pub const HTML_ID: &str = "html";
pub const HEAD_ID: &str = "head";
pub const BODY_ID: &str = "body";

/// Navigation timing entry, in milliseconds since navigation start.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationTiming {
    pub load_event_start: f64,
    pub load_event_end: f64,
}

impl NavigationTiming {
    pub fn load_duration_ms(&self) -> f64 {
        self.load_event_end - self.load_event_start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
}

/// A recorded `scroll_into_view` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Extract a human-readable message from a panic payload.
pub fn extract_panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[derive(Debug)]
pub struct Page {
    root: Element,
    listeners: Listeners,
    focus: FocusState,
    timers: Timers,
    viewport: Viewport,
    performance: Option<NavigationTiming>,
    scroll_requests: Vec<ScrollRequest>,
    now: Instant,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// An empty page with `html`, `head` and `body`, clocked from now.
    pub fn new() -> Self {
        Self::with_clock(Instant::now())
    }

    pub fn with_clock(start: Instant) -> Self {
        let root = Element::new("html")
            .id(HTML_ID)
            .child(Element::new("head").id(HEAD_ID))
            .child(Element::new("body").id(BODY_ID));
        Self {
            root,
            listeners: Listeners::new(),
            focus: FocusState::new(),
            timers: Timers::new(),
            viewport: Viewport::default(),
            performance: None,
            scroll_requests: Vec::new(),
            now: start,
        }
    }

    /// Build a page whose body holds the given elements.
    pub fn with_body(children: impl IntoIterator<Item = Element>) -> Self {
        let mut page = Self::new();
        for child in children {
            page.append_child(BODY_ID, child);
        }
        page
    }

    // =========================================================================
    // Tree
    // =========================================================================

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn body(&self) -> &Element {
        self.element(BODY_ID).unwrap_or(&self.root)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        element::contains(&self.root, id)
    }

    pub fn query_all(&self, selector: &Selector) -> Vec<String> {
        element::query_selector_all(&self.root, selector)
    }

    pub fn query(&self, selector: &Selector) -> Option<String> {
        element::query_selector(&self.root, selector)
    }

    /// Matching descendants of `scope` (the scope itself excluded).
    pub fn query_all_within(&self, scope: &str, selector: &Selector) -> Vec<String> {
        let Some(scope) = self.element(scope) else {
            return Vec::new();
        };
        scope
            .children
            .iter()
            .flat_map(|child| element::query_selector_all(child, selector))
            .collect()
    }

    pub fn query_within(&self, scope: &str, selector: &Selector) -> Option<String> {
        let scope = self.element(scope)?;
        scope
            .children
            .iter()
            .find_map(|child| element::query_selector(child, selector))
    }

    pub fn closest(&self, id: &str, selector: &Selector) -> Option<String> {
        element::closest(&self.root, id, selector)
    }

    pub fn parent_id(&self, id: &str) -> Option<String> {
        element::parent_id(&self.root, id)
    }

    pub fn append_child(&mut self, parent_id: &str, child: Element) -> bool {
        element::append_child(&mut self.root, parent_id, child)
    }

    /// Detach an element. Focus inside the removed subtree is dropped silently.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let removed = element::remove_element(&mut self.root, id)?;
        if let Some(focused) = self.focus.focused() {
            if element::contains(&removed, focused) {
                self.focus.blur();
            }
        }
        Some(removed)
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    // =========================================================================
    // Listeners and dispatch
    // =========================================================================

    pub fn on_event<F>(&mut self, target: ListenerTarget, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&mut Page, &mut Event) + 'static,
    {
        self.listeners.add(target, kind, Rc::new(handler))
    }

    pub fn off_event(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Dispatch an event and return it after every listener ran.
    ///
    /// A listener that panics is reported as a window `error` event; the
    /// remaining listeners still run.
    pub fn dispatch(&mut self, mut event: Event) -> Event {
        let path = self.propagation_path(&event);
        log::debug!(
            "dispatch {} target={:?} nodes={}",
            event.kind.name(),
            event.target,
            path.len()
        );

        for node in path {
            let handlers = self.listeners.handlers_for(&node, event.kind);
            event.set_current_target(node);
            for handler in handlers {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(self, &mut event)));
                if let Err(panic) = outcome {
                    self.report_panic(event.kind, &*panic);
                }
            }
            if event.propagation_stopped() {
                break;
            }
        }

        event
    }

    fn report_panic(&mut self, kind: EventKind, panic: &(dyn Any + Send)) {
        let message = extract_panic_message(panic);
        if kind == EventKind::Error {
            log::error!("error listener panicked, dropping: {message}");
            return;
        }
        log::error!("{} listener panicked: {message}", kind.name());
        self.report_error(format!("Uncaught panic in {} listener: {message}", kind.name()));
    }

    fn propagation_path(&self, event: &Event) -> Vec<ListenerTarget> {
        match &event.target {
            Some(id) => {
                let Some(path) = element::path_to(&self.root, id) else {
                    return Vec::new();
                };
                if !event.kind.bubbles() {
                    return vec![ListenerTarget::Element(id.clone())];
                }
                let mut nodes: Vec<ListenerTarget> = path
                    .into_iter()
                    .rev()
                    .map(ListenerTarget::Element)
                    .collect();
                nodes.push(ListenerTarget::Document);
                nodes.push(ListenerTarget::Window);
                nodes
            }
            None if event.kind.is_window_event() => vec![ListenerTarget::Window],
            None if event.kind.bubbles() => vec![ListenerTarget::Document, ListenerTarget::Window],
            None => vec![ListenerTarget::Document],
        }
    }

    pub fn content_loaded(&mut self) -> Event {
        self.dispatch(Event::new(EventKind::DomContentLoaded, None))
    }

    pub fn load(&mut self) -> Event {
        self.dispatch(Event::new(EventKind::Load, None))
    }

    /// Click an element at its center (or the origin when it has no box).
    pub fn click(&mut self, id: &str) -> Event {
        let (x, y) = self
            .element(id)
            .and_then(|el| el.rect)
            .map_or((0.0, 0.0), |rect| rect.center());
        self.dispatch(Event::click(id, x, y))
    }

    pub fn submit(&mut self, form_id: &str) -> Event {
        self.dispatch(Event::at(EventKind::Submit, form_id))
    }

    /// Key press targeted at the focused element, or the document.
    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> Event {
        let target = self.focus.focused().map(str::to_string);
        self.dispatch(Event::key_down(target, key, modifiers))
    }

    pub fn touch_start(&mut self, screen_y: f32) -> Event {
        self.dispatch(Event::touch(EventKind::TouchStart, screen_y))
    }

    pub fn touch_end(&mut self, screen_y: f32) -> Event {
        self.dispatch(Event::touch(EventKind::TouchEnd, screen_y))
    }

    /// Raise an otherwise-uncaught error on the window.
    pub fn report_error(&mut self, message: impl Into<String>) -> Event {
        self.dispatch(Event::error(message))
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to an element, blurring the previous one first.
    /// Missing and disabled elements cannot take focus.
    pub fn focus(&mut self, id: &str) -> bool {
        if !self.element(id).is_some_and(|el| !el.disabled) {
            return false;
        }
        if self.focus.focused() == Some(id) {
            return false;
        }
        self.blur();
        self.focus.focus(id);
        self.dispatch(Event::at(EventKind::Focus, id));
        true
    }

    pub fn blur(&mut self) -> bool {
        match self.focus.blur() {
            Some(previous) => {
                self.dispatch(Event::at(EventKind::Blur, previous));
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// The page clock. Advances only through `advance_to`/`advance`.
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn set_timeout<F>(&mut self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce(&mut Page) + 'static,
    {
        self.timers.set_timeout(self.now + delay, Box::new(callback))
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.clear_timeout(id)
    }

    pub fn timer_pending(&self, id: TimerId) -> bool {
        self.timers.is_pending(id)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Move the clock forward to `now`, firing due timers in deadline order.
    /// Each callback observes the clock at its own deadline.
    pub fn advance_to(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((deadline, callback)) = self.timers.pop_due(now) {
            if deadline > self.now {
                self.now = deadline;
            }
            log::debug!("timer fired ({} pending)", self.timers.len());
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(self)));
            if let Err(panic) = outcome {
                let message = extract_panic_message(&*panic);
                log::error!("timer callback panicked: {message}");
                self.report_error(format!("Uncaught panic in timer: {message}"));
            }
            fired += 1;
        }
        if now > self.now {
            self.now = now;
        }
        fired
    }

    pub fn advance(&mut self, by: Duration) -> usize {
        self.advance_to(self.now + by)
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.dispatch(Event::new(EventKind::Resize, None));
    }

    /// Scroll vertically. Dispatches `scroll` only when the offset changes.
    pub fn scroll_to(&mut self, y: f32) {
        let y = y.max(0.0);
        if (self.viewport.scroll_y - y).abs() < f32::EPSILON {
            return;
        }
        self.viewport.scroll_y = y;
        self.dispatch(Event::new(EventKind::Scroll, None));
    }

    /// Scroll an element into view. Returns false if it doesn't exist.
    pub fn scroll_into_view(
        &mut self,
        id: &str,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    ) -> bool {
        let Some(rect) = self.element(id).map(|el| el.rect) else {
            return false;
        };
        self.scroll_requests.push(ScrollRequest {
            target: id.to_string(),
            behavior,
            block,
        });
        if let Some(rect) = rect {
            self.scroll_to(block_offset(rect, block, self.viewport.height));
        }
        true
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    // =========================================================================
    // Performance
    // =========================================================================

    pub fn performance(&self) -> Option<NavigationTiming> {
        self.performance
    }

    pub fn set_performance(&mut self, timing: Option<NavigationTiming>) {
        self.performance = timing;
    }
}

fn block_offset(rect: Rect, block: ScrollBlock, viewport_height: f32) -> f32 {
    match block {
        ScrollBlock::Start => rect.y,
        ScrollBlock::Center => rect.y + rect.height / 2.0 - viewport_height / 2.0,
        ScrollBlock::End => rect.bottom() - viewport_height,
    }
}
