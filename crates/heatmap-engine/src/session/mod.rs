//! Tracking session: the explicit owner of everything one heatmap needs.
//!
//! Replaces any notion of a process-wide singleton; hosts create one session per
//! document (or per test).

mod config;
#[allow(clippy::module_inception)]
mod session;
mod state;

pub use config::HeatmapConfig;
pub use session::HeatmapSession;
pub use state::{HeatmapHost, SessionSignal, SessionState};
