pub mod element;
pub mod event;
pub mod focus;
pub mod layout;
pub mod listener;
pub mod page;
pub mod selector;
pub mod timers;

pub use element::{Element, InlineStyle};
pub use event::{Event, EventData, EventKind, Key, Modifiers};
pub use focus::FocusState;
pub use layout::{Rect, Viewport};
pub use listener::{Handler, ListenerId, ListenerTarget, Listeners};
pub use page::{
    extract_panic_message, NavigationTiming, Page, ScrollBehavior, ScrollBlock, ScrollRequest,
    BODY_ID, HEAD_ID, HTML_ID,
};
pub use selector::{Selector, SelectorError};
pub use timers::{TimerCallback, TimerId, Timers};
