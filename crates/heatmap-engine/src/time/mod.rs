//! Time subsystem.
//!
//! The session and redraw scheduler read monotonic time through `Clock`.

mod clock;
#[cfg(test)]
mod manual;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub(crate) use manual::ManualClock;
