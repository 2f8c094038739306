use std::time::Instant;

/// Monotonic time source.
///
/// The session and redraw scheduler read time only through this trait so tests
/// can drive throttling deterministically.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock monotonic time (`Instant::now`).
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
