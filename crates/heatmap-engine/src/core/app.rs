use crate::input::InputEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by hosts.
///
/// The runtime only redraws on request: an app that wants `on_frame` calls
/// [`WindowCtx::request_redraw`].
pub trait App {
    /// Called once after the window and GPU context exist.
    fn on_start(&mut self, ctx: &mut WindowCtx<'_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called for every translated input event, before any frame is drawn.
    fn on_input(&mut self, ctx: &mut WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called after the surface has been resized (including scale changes).
    fn on_resized(&mut self, ctx: &mut WindowCtx<'_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called for every redraw the window receives.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
