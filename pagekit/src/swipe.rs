//! Vertical swipe detection from touch events.

use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{EventKind, ListenerTarget, Page};

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
        }
    }
}

/// Tracks one touch at a time and classifies it on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDetector {
    threshold: f32,
    start_y: f32,
    end_y: f32,
    last: Option<SwipeDirection>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_y: 0.0,
            end_y: 0.0,
            last: None,
        }
    }

    pub fn start(&mut self, screen_y: f32) {
        self.start_y = screen_y;
    }

    /// Finish the touch. A travel strictly beyond the threshold is a swipe;
    /// moving the finger up the screen is `Up`.
    pub fn finish(&mut self, screen_y: f32) -> Option<SwipeDirection> {
        self.end_y = screen_y;
        let diff = self.start_y - self.end_y;
        if diff.abs() <= self.threshold {
            return None;
        }
        let direction = if diff > 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        };
        self.last = Some(direction);
        Some(direction)
    }

    pub fn last_swipe(&self) -> Option<SwipeDirection> {
        self.last
    }
}

pub fn install(page: &mut Page, threshold: f32) -> Rc<RefCell<SwipeDetector>> {
    let detector = Rc::new(RefCell::new(SwipeDetector::new(threshold)));

    let start = Rc::clone(&detector);
    page.on_event(ListenerTarget::Document, EventKind::TouchStart, move |_, event| {
        if let Some(y) = event.screen_y() {
            start.borrow_mut().start(y);
        }
    });

    let end = Rc::clone(&detector);
    page.on_event(ListenerTarget::Document, EventKind::TouchEnd, move |_, event| {
        let Some(y) = event.screen_y() else {
            return;
        };
        if let Some(direction) = end.borrow_mut().finish(y) {
            log::info!("Swipe {} detected", direction.as_str());
        }
    });

    detector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut detector = SwipeDetector::default();
        detector.start(300.0);
        assert_eq!(detector.finish(250.0), None);
        detector.start(300.0);
        assert_eq!(detector.finish(249.0), Some(SwipeDirection::Up));
        detector.start(100.0);
        assert_eq!(detector.finish(200.0), Some(SwipeDirection::Down));
        assert_eq!(detector.last_swipe(), Some(SwipeDirection::Down));
    }
}
