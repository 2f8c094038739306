//! Redraw throttling.
//!
//! Two states (idle, pending) and a single owed redraw. The host's
//! display-refresh callback is the only asynchronous boundary.

mod redraw;

pub use redraw::{
    FrameDecision, RedrawScheduler, RedrawState, RequestDecision, DEFAULT_COLORIZE_INTERVAL,
};
