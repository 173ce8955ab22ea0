use std::rc::Rc;
use std::time::{Duration, Instant};

use pagedom::{Page, TimerId};

/// Delays a call until `wait` has passed without another trigger.
///
/// Only the latest arguments survive. The owner drives it by calling
/// [`Debounce::poll`] with the current time.
pub struct Debounce<A, F> {
    wait: Duration,
    f: F,
    pending: Option<(Instant, A)>,
}

impl<A, F: FnMut(A)> Debounce<A, F> {
    pub fn new(wait: Duration, f: F) -> Self {
        Self {
            wait,
            f,
            pending: None,
        }
    }

    /// Schedule a call with `args`, replacing any pending one.
    pub fn trigger(&mut self, args: A, now: Instant) {
        self.pending = Some((now + self.wait, args));
    }

    /// Invoke the function if the quiet period is over. Returns true if it ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some((deadline, args)) if deadline <= now => {
                (self.f)(args);
                true
            }
            pending => {
                self.pending = pending;
                false
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}

/// Debounce backed by the page's timer queue instead of polling.
pub struct PageDebounce<A> {
    wait: Duration,
    f: Rc<dyn Fn(&mut Page, A)>,
    timer: Option<TimerId>,
}

impl<A: 'static> PageDebounce<A> {
    pub fn new(wait: Duration, f: impl Fn(&mut Page, A) + 'static) -> Self {
        Self {
            wait,
            f: Rc::new(f),
            timer: None,
        }
    }

    pub fn trigger(&mut self, page: &mut Page, args: A) {
        self.cancel(page);
        let f = Rc::clone(&self.f);
        self.timer = Some(page.set_timeout(self.wait, move |page| f(page, args)));
    }

    pub fn cancel(&mut self, page: &mut Page) {
        if let Some(timer) = self.timer.take() {
            page.clear_timeout(timer);
        }
    }

    pub fn is_pending(&self, page: &Page) -> bool {
        self.timer.is_some_and(|timer| page.timer_pending(timer))
    }
}
