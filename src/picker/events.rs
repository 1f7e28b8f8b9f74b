use crate::api::MethodId;
use crossterm::event::{KeyCode, KeyEvent};

/// Key code of the Escape key
pub const KEY_CODE_ESCAPE: u32 = 27;
pub const KEY_CODE_ENTER: u32 = 13;
pub const KEY_CODE_SPACE: u32 = 32;

/// Where an event landed relative to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The button showing the current selection
    Trigger,
    /// An option row inside the popup
    Option(MethodId),
    /// Inside the popup but not on an option
    Popup,
    /// Anywhere else
    Outside,
}

impl HitTarget {
    pub fn is_inside(self) -> bool {
        !matches!(self, HitTarget::Outside)
    }
}

/// Whether an event should continue to outer handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub target: HitTarget,
}

impl PointerEvent {
    pub fn new(target: HitTarget) -> Self {
        Self { target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Printable value of the key, or its name ("Escape", "Enter", ...)
    pub key: String,
    /// Key code; the uppercased code point for character keys
    pub key_code: u32,
    pub target: HitTarget,
}

impl KeyPress {
    pub fn char(c: char) -> Self {
        Self {
            key: c.to_string(),
            key_code: u32::from(c.to_ascii_uppercase()),
            target: HitTarget::Outside,
        }
    }

    pub fn escape() -> Self {
        Self {
            key: "Escape".to_string(),
            key_code: KEY_CODE_ESCAPE,
            target: HitTarget::Outside,
        }
    }

    pub fn enter() -> Self {
        Self {
            key: "Enter".to_string(),
            key_code: KEY_CODE_ENTER,
            target: HitTarget::Outside,
        }
    }

    pub fn with_target(mut self, target: HitTarget) -> Self {
        self.target = target;
        self
    }

    pub fn is_escape(&self) -> bool {
        self.key_code == KEY_CODE_ESCAPE
    }

    /// Enter or Space, the keys that activate a focused trigger
    pub fn is_activation(&self) -> bool {
        matches!(self.key_code, KEY_CODE_ENTER | KEY_CODE_SPACE)
    }

    /// The typed character for single-character keys
    pub fn typed_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        let (key, key_code) = match event.code {
            KeyCode::Esc => ("Escape".to_string(), KEY_CODE_ESCAPE),
            KeyCode::Enter => ("Enter".to_string(), KEY_CODE_ENTER),
            KeyCode::Tab => ("Tab".to_string(), 9),
            KeyCode::Backspace => ("Backspace".to_string(), 8),
            KeyCode::Char(c) => (c.to_string(), u32::from(c.to_ascii_uppercase())),
            other => (format!("{:?}", other), 0),
        };
        Self {
            key,
            key_code,
            target: HitTarget::Outside,
        }
    }
}
