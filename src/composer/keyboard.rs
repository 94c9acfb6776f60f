//! Keyboard submit shortcut.

use serde::Deserialize;

/// Modifier key that turns Enter into "send".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    Ctrl,
    Meta,
    Alt,
    Shift,
}

/// A key press as delivered by a `keydown` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// The `KeyboardEvent.key` value, e.g. `"Enter"` or `"a"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Plain Enter.
    pub fn enter() -> Self {
        Self::new("Enter")
    }

    /// The same key with `modifier` held.
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Ctrl => self.ctrl = true,
            Modifier::Meta => self.meta = true,
            Modifier::Alt => self.alt = true,
            Modifier::Shift => self.shift = true,
        }
        self
    }

    pub fn holds(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Ctrl => self.ctrl,
            Modifier::Meta => self.meta,
            Modifier::Alt => self.alt,
            Modifier::Shift => self.shift,
        }
    }
}

/// Enter plus a modifier. Other modifiers held at the same time are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitShortcut {
    modifier: Modifier,
}

impl SubmitShortcut {
    pub fn new(modifier: Modifier) -> Self {
        Self { modifier }
    }

    pub fn modifier(self) -> Modifier {
        self.modifier
    }

    pub fn matches(self, key: &KeyPress) -> bool {
        key.key == "Enter" && key.holds(self.modifier)
    }
}
