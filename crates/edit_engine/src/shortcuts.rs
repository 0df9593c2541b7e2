//! Keyboard shortcut mapping
//!
//! Translates key events from the canvas into engine actions. Key names
//! follow DOM `KeyboardEvent.key` values.

use serde::{Deserialize, Serialize};

/// A key press with its modifier state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Direction of an arrow-key nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NudgeDirection {
    /// Unit offset `(dx, dy)` in canvas coordinates (y grows downwards)
    pub fn offset(&self) -> (f64, f64) {
        match self {
            NudgeDirection::Left => (-1.0, 0.0),
            NudgeDirection::Right => (1.0, 0.0),
            NudgeDirection::Up => (0.0, -1.0),
            NudgeDirection::Down => (0.0, 1.0),
        }
    }
}

/// Action bound to a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    DeleteSelection,
    Undo,
    Redo,
    /// Move the selection; `large` is the Shift-modified step
    Nudge { direction: NudgeDirection, large: bool },
}

/// Map a key event to its action, if it has one
pub fn map_key(event: &KeyEvent) -> Option<ShortcutAction> {
    match event.key.as_str() {
        "Delete" => Some(ShortcutAction::DeleteSelection),
        "z" | "Z" if event.command() && event.shift => Some(ShortcutAction::Redo),
        "z" | "Z" if event.command() => Some(ShortcutAction::Undo),
        "y" | "Y" if event.command() => Some(ShortcutAction::Redo),
        "ArrowLeft" => Some(nudge(NudgeDirection::Left, event)),
        "ArrowRight" => Some(nudge(NudgeDirection::Right, event)),
        "ArrowUp" => Some(nudge(NudgeDirection::Up, event)),
        "ArrowDown" => Some(nudge(NudgeDirection::Down, event)),
        _ => None,
    }
}

fn nudge(direction: NudgeDirection, event: &KeyEvent) -> ShortcutAction {
    ShortcutAction::Nudge {
        direction,
        large: event.shift,
    }
}
