use std::fmt;
use std::rc::Rc;

use crate::event::{Event, EventKind};
use crate::page::Page;

/// An event callback. Handlers get the whole page so they can mutate the
/// tree, schedule timers and register further listeners.
pub type Handler = Rc<dyn Fn(&mut Page, &mut Event)>;

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Window,
    Document,
    Element(String),
}

impl ListenerTarget {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    target: ListenerTarget,
    kind: EventKind,
    handler: Handler,
}

/// Registered listeners, kept in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: ListenerTarget, kind: EventKind, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            target,
            kind,
            handler,
        });
        id
    }

    /// Returns true if the listener existed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        self.entries.len() != before
    }

    /// Handlers for a node and event kind, in registration order.
    ///
    /// Handlers are cloned out so the registry can change while they run.
    pub fn handlers_for(&self, target: &ListenerTarget, kind: EventKind) -> Vec<Handler> {
        self.entries
            .iter()
            .filter(|l| l.kind == kind && l.target == *target)
            .map(|l| Rc::clone(&l.handler))
            .collect()
    }

    pub fn count_for(&self, target: &ListenerTarget, kind: EventKind) -> usize {
        self.entries
            .iter()
            .filter(|l| l.kind == kind && l.target == *target)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
