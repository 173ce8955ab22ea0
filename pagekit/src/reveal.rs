//! Scroll-triggered reveal, modelled on an intersection observer.

use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{EventKind, ListenerTarget, Page, Rect, Selector, Viewport};

pub const REVEAL_CLASS: &str = "animate-fade-in-up";

/// Watches elements until enough of each is visible, then reveals it once.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealObserver {
    observed: Vec<String>,
    threshold: f32,
    root_margin_bottom: f32,
}

impl RevealObserver {
    pub fn new(threshold: f32, root_margin_bottom: f32) -> Self {
        Self {
            observed: Vec::new(),
            threshold,
            root_margin_bottom,
        }
    }

    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.observed.contains(&id) {
            self.observed.push(id);
        }
    }

    pub fn unobserve(&mut self, id: &str) -> bool {
        let before = self.observed.len();
        self.observed.retain(|o| o != id);
        self.observed.len() != before
    }

    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    /// Fraction of `rect` inside the viewport after applying the bottom margin.
    pub fn intersection_ratio(&self, rect: &Rect, viewport: &Viewport) -> f32 {
        if rect.is_empty() {
            return 0.0;
        }
        let mut root = viewport.rect();
        root.height = (root.height + self.root_margin_bottom).max(0.0);
        match rect.intersection(&root) {
            Some(visible) => visible.area() / rect.area(),
            None => 0.0,
        }
    }

    /// Reveal every observed element that is visible enough and stop
    /// watching it. Elements that left the page are dropped; elements
    /// without a box are kept but never revealed.
    pub fn check(&mut self, page: &mut Page) -> Vec<String> {
        let viewport = page.viewport();
        let mut revealed = Vec::new();

        self.observed.retain(|id| page.contains(id));
        for id in &self.observed {
            let Some(rect) = page.element(id).and_then(|el| el.rect) else {
                continue;
            };
            let ratio = self.intersection_ratio(&rect, &viewport);
            if ratio > 0.0 && ratio >= self.threshold {
                revealed.push(id.clone());
            }
        }

        for id in &revealed {
            if let Some(el) = page.element_mut(id) {
                el.add_class(REVEAL_CLASS);
            }
            self.unobserve(id);
        }
        revealed
    }
}

/// Observe matching elements, reveal what is already visible, and re-check
/// on every scroll and resize.
pub fn install(
    page: &mut Page,
    selector: &Selector,
    observer: RevealObserver,
) -> Rc<RefCell<RevealObserver>> {
    let observer = Rc::new(RefCell::new(observer));
    {
        let mut obs = observer.borrow_mut();
        for id in page.query_all(selector) {
            obs.observe(id);
        }
        obs.check(page);
    }

    for kind in [EventKind::Scroll, EventKind::Resize] {
        let observer = Rc::clone(&observer);
        page.on_event(ListenerTarget::Window, kind, move |page, _| {
            observer.borrow_mut().check(page);
        });
    }
    observer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_respects_bottom_margin() {
        let observer = RevealObserver::new(0.1, -50.0);
        let viewport = Viewport::new(800.0, 600.0);
        // The margin moves the bottom edge up to 550px.
        let rect = Rect::new(0.0, 560.0, 100.0, 100.0);
        assert_eq!(observer.intersection_ratio(&rect, &viewport), 0.0);
        let rect = Rect::new(0.0, 500.0, 100.0, 100.0);
        assert!((observer.intersection_ratio(&rect, &viewport) - 0.5).abs() < 1e-6);
    }
}
