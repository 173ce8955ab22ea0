use crate::listener::ListenerTarget;

/// Event types a page can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DomContentLoaded,
    Load,
    Click,
    Focus,
    Blur,
    Submit,
    KeyDown,
    TouchStart,
    TouchEnd,
    Scroll,
    Resize,
    Error,
}

impl EventKind {
    /// Whether the event propagates from its target up through ancestors,
    /// the document and the window.
    pub fn bubbles(self) -> bool {
        matches!(
            self,
            EventKind::Click
                | EventKind::Submit
                | EventKind::KeyDown
                | EventKind::TouchStart
                | EventKind::TouchEnd
                | EventKind::Error
        )
    }

    /// Untargeted events of this kind fire on the window only.
    pub fn is_window_event(self) -> bool {
        matches!(
            self,
            EventKind::Load | EventKind::Error | EventKind::Scroll | EventKind::Resize
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            EventKind::DomContentLoaded => "DOMContentLoaded",
            EventKind::Load => "load",
            EventKind::Click => "click",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
            EventKind::Submit => "submit",
            EventKind::KeyDown => "keydown",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchEnd => "touchend",
            EventKind::Scroll => "scroll",
            EventKind::Resize => "resize",
            EventKind::Error => "error",
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Payload carried by an event.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventData {
    #[default]
    None,
    Pointer { client_x: f32, client_y: f32 },
    Key { key: Key, modifiers: Modifiers },
    Touch { screen_y: f32 },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    /// Element the event was dispatched at. `None` for window/document events.
    pub target: Option<String>,
    pub data: EventData,
    current_target: Option<ListenerTarget>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: Option<String>) -> Self {
        Self {
            kind,
            target,
            data: EventData::None,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn at(kind: EventKind, target: impl Into<String>) -> Self {
        Self::new(kind, Some(target.into()))
    }

    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = data;
        self
    }

    pub fn click(target: impl Into<String>, client_x: f32, client_y: f32) -> Self {
        Self::at(EventKind::Click, target).with_data(EventData::Pointer { client_x, client_y })
    }

    pub fn key_down(target: Option<String>, key: Key, modifiers: Modifiers) -> Self {
        Self::new(EventKind::KeyDown, target).with_data(EventData::Key { key, modifiers })
    }

    pub fn touch(kind: EventKind, screen_y: f32) -> Self {
        Self::new(kind, None).with_data(EventData::Touch { screen_y })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(EventKind::Error, None).with_data(EventData::Error {
            message: message.into(),
        })
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop propagation after the listeners of the current node have run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// The node whose listeners are currently running.
    pub fn current_target(&self) -> Option<&ListenerTarget> {
        self.current_target.as_ref()
    }

    pub(crate) fn set_current_target(&mut self, target: ListenerTarget) {
        self.current_target = Some(target);
    }

    pub fn key(&self) -> Option<(Key, Modifiers)> {
        match self.data {
            EventData::Key { key, modifiers } => Some((key, modifiers)),
            _ => None,
        }
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { client_x, client_y } => Some((client_x, client_y)),
            _ => None,
        }
    }

    pub fn screen_y(&self) -> Option<f32> {
        match self.data {
            EventData::Touch { screen_y } => Some(screen_y),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.data {
            EventData::Error { message } => Some(message),
            _ => None,
        }
    }
}
