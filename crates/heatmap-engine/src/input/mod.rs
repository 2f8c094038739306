//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates platform events through `platform`.

pub(crate) mod platform;
mod state;
mod types;

pub(crate) use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseWheelDelta, PointerMoveEvent};
