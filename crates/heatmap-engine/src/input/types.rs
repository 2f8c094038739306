use std::fmt;

/// Keyboard keys the heatmap hosts bind.
///
/// Everything else maps to `Key::Unknown(code)` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    Enter,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse wheel delta. `Line` is notched scrolling, `Pixel` is high precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Vertical travel in logical pixels, with lines converted at `line_height`.
    pub fn vertical_px(&self, line_height: f32) -> f32 {
        match *self {
            MouseWheelDelta::Line { y, .. } => y * line_height,
            MouseWheelDelta::Pixel { y, .. } => y,
        }
    }
}

/// Pointer position in logical window pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True when the event is a key-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),

    /// Pointer left the window surface.
    PointerLeft,

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    Focused(bool),
}

impl InputEvent {
    /// The key of a fresh (non-repeat) press, if this is one.
    pub fn key_pressed(&self) -> Option<Key> {
        match self {
            InputEvent::Key { key, state: KeyState::Pressed, repeat: false, .. } => Some(*key),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_lines_scale_by_line_height() {
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: -2.0 }.vertical_px(40.0), -80.0);
        assert_eq!(MouseWheelDelta::Pixel { x: 3.0, y: 12.5 }.vertical_px(40.0), 12.5);
    }

    #[test]
    fn key_pressed_skips_repeats_and_releases() {
        let press = |state, repeat| InputEvent::Key {
            key: Key::H,
            state,
            modifiers: Modifiers::default(),
            repeat,
        };
        assert_eq!(press(KeyState::Pressed, false).key_pressed(), Some(Key::H));
        assert_eq!(press(KeyState::Pressed, true).key_pressed(), None);
        assert_eq!(press(KeyState::Released, false).key_pressed(), None);
        assert_eq!(InputEvent::PointerLeft.key_pressed(), None);
    }
}
