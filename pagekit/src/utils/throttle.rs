use std::time::{Duration, Instant};

/// Runs a call at most once per `limit`; calls inside the window are dropped.
pub struct Throttle<F> {
    limit: Duration,
    f: F,
    window_end: Option<Instant>,
}

impl<F> Throttle<F> {
    pub fn new(limit: Duration, f: F) -> Self {
        Self {
            limit,
            f,
            window_end: None,
        }
    }

    pub fn is_throttled(&self, now: Instant) -> bool {
        self.window_end.is_some_and(|end| now < end)
    }

    /// Invoke `f` unless a window is open. Returns true if it ran.
    pub fn trigger<A>(&mut self, args: A, now: Instant) -> bool
    where
        F: FnMut(A),
    {
        if self.is_throttled(now) {
            return false;
        }
        (self.f)(args);
        self.window_end = Some(now + self.limit);
        true
    }
}
