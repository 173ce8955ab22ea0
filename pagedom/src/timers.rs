use std::fmt;
use std::time::Instant;

use crate::page::Page;

pub type TimerCallback = Box<dyn FnOnce(&mut Page)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct Timer {
    id: TimerId,
    deadline: Instant,
    callback: TimerCallback,
}

/// One-shot timers ordered by deadline, ties broken by creation order.
#[derive(Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<Timer>,
}

impl fmt::Debug for Timers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timers")
            .field("pending", &self.pending.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timeout(&mut self, deadline: Instant, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            deadline,
            callback,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerCallback)> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;
        let timer = self.pending.remove(pos);
        Some((timer.deadline, timer.callback))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
