//! Engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and hosts such as the
//! studio, plus the per-frame context handed to them.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
