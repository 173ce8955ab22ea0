//! Document-level keyboard shortcuts.

use std::collections::HashMap;
use std::sync::LazyLock;

use pagedom::{Event, EventKind, Key, ListenerTarget, Modifiers, Page, Selector};

pub const DROPDOWN_OPEN_CLASS: &str = "dropdown-open";
pub const BUTTON_CLASS: &str = "btn";

static OPEN_DROPDOWNS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".dropdown-open").expect("static selector"));

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// What a shortcut does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    /// Remove `dropdown-open` from every element on the page.
    CloseDropdowns,
    /// Click the event target if it is a `.btn`.
    ActivateButton,
}

impl ShortcutAction {
    /// Run the action for `event`. Returns true if it changed anything.
    pub fn run(self, page: &mut Page, event: &Event) -> bool {
        match self {
            ShortcutAction::CloseDropdowns => close_dropdowns(page) > 0,
            ShortcutAction::ActivateButton => {
                let Some(target) = event.target.as_deref() else {
                    return false;
                };
                let is_button = page.element(target).is_some_and(|el| el.has_class(BUTTON_CLASS));
                if is_button {
                    page.click(target);
                }
                is_button
            }
        }
    }
}

/// Key -> action table.
#[derive(Debug, Clone, Default)]
pub struct Shortcuts {
    binds: HashMap<KeyCombo, ShortcutAction>,
}

impl Shortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape closes dropdowns; Enter activates a focused button.
    pub fn standard() -> Self {
        let mut shortcuts = Self::new();
        shortcuts.bind(KeyCombo::key(Key::Escape), ShortcutAction::CloseDropdowns);
        shortcuts.bind(KeyCombo::key(Key::Enter), ShortcutAction::ActivateButton);
        shortcuts
    }

    pub fn bind(&mut self, combo: KeyCombo, action: ShortcutAction) {
        self.binds.insert(combo, action);
    }

    pub fn get(&self, combo: &KeyCombo) -> Option<ShortcutAction> {
        self.binds.get(combo).copied()
    }

    /// Action for a key press: the exact combo first, then the bare key, so
    /// an unmodified bind also fires with modifiers held.
    pub fn lookup(&self, key: Key, modifiers: Modifiers) -> Option<ShortcutAction> {
        self.get(&KeyCombo::new(key, modifiers))
            .or_else(|| self.get(&KeyCombo::key(key)))
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }

    /// Merge another table into this one. Later binds win.
    pub fn merge(&mut self, other: Shortcuts) {
        self.binds.extend(other.binds);
    }
}

/// Remove `dropdown-open` everywhere. Returns how many elements changed.
pub fn close_dropdowns(page: &mut Page) -> usize {
    let open = page.query_all(&OPEN_DROPDOWNS);
    for id in &open {
        if let Some(el) = page.element_mut(id) {
            el.remove_class(DROPDOWN_OPEN_CLASS);
        }
    }
    open.len()
}

/// Listen for key presses on the document and run matching shortcuts.
pub fn install(page: &mut Page, shortcuts: Shortcuts) {
    page.on_event(ListenerTarget::Document, EventKind::KeyDown, move |page, event| {
        let Some((key, modifiers)) = event.key() else {
            return;
        };
        if let Some(action) = shortcuts.lookup(key, modifiers) {
            log::debug!("shortcut {key:?} -> {action:?}");
            action.run(page, event);
        }
    });
}
