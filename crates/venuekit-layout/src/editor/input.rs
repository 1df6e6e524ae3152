//! Input events consumed by the editor.

use serde::{Deserialize, Serialize};

use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Space held down; turns a left-button drag into a pan.
    pub space: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Default::default()
        }
    }

    pub fn space() -> Self {
        Self {
            space: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    Backspace,
    Delete,
    Space,
    Char(char),
}

impl Key {
    /// Case-insensitive character match.
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

/// Pointer positions are screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    },
    PointerMove {
        position: Point,
        modifiers: Modifiers,
    },
    PointerUp {
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    },
    DoubleClick {
        position: Point,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    KeyUp {
        key: Key,
        modifiers: Modifiers,
    },
    /// Negative `delta_y` scrolls up and zooms in.
    Wheel {
        position: Point,
        delta_y: f64,
    },
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            position: Point::new(x, y),
            button: PointerButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        InputEvent::PointerMove {
            position: Point::new(x, y),
            modifiers: Modifiers::default(),
        }
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        InputEvent::PointerUp {
            position: Point::new(x, y),
            button: PointerButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn middle_down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            position: Point::new(x, y),
            button: PointerButton::Middle,
            modifiers: Modifiers::default(),
        }
    }

    pub fn double_click(x: f64, y: f64) -> Self {
        InputEvent::DoubleClick {
            position: Point::new(x, y),
        }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::KeyDown {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn key_with(key: Key, modifiers: Modifiers) -> Self {
        InputEvent::KeyDown { key, modifiers }
    }

    pub fn wheel(x: f64, y: f64, delta_y: f64) -> Self {
        InputEvent::Wheel {
            position: Point::new(x, y),
            delta_y,
        }
    }
}
