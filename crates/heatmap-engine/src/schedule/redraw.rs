use std::time::{Duration, Instant};

pub const DEFAULT_COLORIZE_INTERVAL: Duration = Duration::from_millis(80);

/// Scheduler state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RedrawState {
    /// No redraw is owed.
    Idle,
    /// A deferred redraw is owed and a display-refresh callback has been requested.
    Pending,
}

/// Outcome of [`RedrawScheduler::request`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RequestDecision {
    /// Colorize now, then call [`RedrawScheduler::mark_redrawn`].
    Now,
    /// Inside the throttle window: request the next display-refresh callback.
    Defer,
    /// A deferred redraw is already owed; nothing to do.
    Coalesced,
}

/// Outcome of [`RedrawScheduler::on_frame`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameDecision {
    /// Nothing owed.
    Idle,
    /// The owed redraw is due: colorize, then call [`RedrawScheduler::mark_redrawn`].
    Redraw,
    /// Still inside the throttle window: request another display-refresh callback.
    Wait,
}

/// Throttles colorize passes to at most one per `interval`, without ever
/// dropping the last request of a burst.
///
/// A single pending request absorbs every later one until it is serviced; it is
/// superseded by a forced redraw, never cancelled.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    interval: Duration,
    last_redraw: Option<Instant>,
    state: RedrawState,
}

impl RedrawScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last_redraw: None, state: RedrawState::Idle }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    #[inline]
    pub fn state(&self) -> RedrawState {
        self.state
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state == RedrawState::Pending
    }

    #[inline]
    pub fn last_redraw(&self) -> Option<Instant> {
        self.last_redraw
    }

    /// True once `interval` has passed since the last redraw (or none happened yet).
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_redraw {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Called on every deposit while the overlay is visible.
    pub fn request(&mut self, now: Instant) -> RequestDecision {
        match self.state {
            RedrawState::Pending => RequestDecision::Coalesced,
            RedrawState::Idle if self.is_due(now) => RequestDecision::Now,
            RedrawState::Idle => {
                self.state = RedrawState::Pending;
                RequestDecision::Defer
            }
        }
    }

    /// Called from the display-refresh callback.
    ///
    /// A pending redraw returns to `Idle` only when it is due, so the interval
    /// ceiling holds even when frames arrive faster than the interval.
    pub fn on_frame(&mut self, now: Instant) -> FrameDecision {
        match self.state {
            RedrawState::Idle => FrameDecision::Idle,
            RedrawState::Pending if self.is_due(now) => {
                self.state = RedrawState::Idle;
                FrameDecision::Redraw
            }
            RedrawState::Pending => FrameDecision::Wait,
        }
    }

    /// Records a completed colorize pass.
    pub fn mark_redrawn(&mut self, now: Instant) {
        self.last_redraw = Some(now);
    }

    /// Bypasses throttling (resize, explicit full recolor).
    ///
    /// The caller colorizes synchronously; an owed redraw is absorbed by it.
    pub fn force(&mut self, now: Instant) {
        self.state = RedrawState::Idle;
        self.mark_redrawn(now);
    }

    /// Drops an owed redraw, e.g. when the overlay is hidden.
    pub fn reset(&mut self) {
        self.state = RedrawState::Idle;
    }
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_COLORIZE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Clock, ManualClock};

    /// Drives a scheduler the way the session does, counting colorize passes.
    struct Harness {
        clock: ManualClock,
        sched: RedrawScheduler,
        redraws: Vec<Duration>,
        frame_requested: bool,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                clock: ManualClock::new(),
                sched: RedrawScheduler::new(Duration::from_millis(80)),
                redraws: Vec::new(),
                frame_requested: false,
            }
        }

        fn colorize(&mut self) {
            let now = self.clock.now();
            self.sched.mark_redrawn(now);
            self.redraws.push(self.clock.elapsed());
        }

        fn request(&mut self) {
            match self.sched.request(self.clock.now()) {
                RequestDecision::Now => self.colorize(),
                RequestDecision::Defer => self.frame_requested = true,
                RequestDecision::Coalesced => {}
            }
        }

        /// Advances one display frame, firing the callback if one was requested.
        fn frame(&mut self, ms: u64) {
            self.clock.advance_ms(ms);
            if !std::mem::take(&mut self.frame_requested) {
                return;
            }
            match self.sched.on_frame(self.clock.now()) {
                FrameDecision::Redraw => self.colorize(),
                FrameDecision::Wait => self.frame_requested = true,
                FrameDecision::Idle => {}
            }
        }
    }

    #[test]
    fn first_request_redraws_immediately() {
        let mut h = Harness::new();
        h.request();
        assert_eq!(h.redraws.len(), 1);
        assert_eq!(h.sched.state(), RedrawState::Idle);
    }

    #[test]
    fn request_inside_window_defers_then_coalesces() {
        let mut s = RedrawScheduler::new(Duration::from_millis(80));
        let clock = ManualClock::new();
        s.mark_redrawn(clock.now());

        clock.advance_ms(10);
        assert_eq!(s.request(clock.now()), RequestDecision::Defer);
        assert!(s.is_pending());
        assert_eq!(s.request(clock.now()), RequestDecision::Coalesced);
        assert_eq!(s.request(clock.now()), RequestDecision::Coalesced);
    }

    #[test]
    fn request_after_window_redraws_immediately() {
        let mut s = RedrawScheduler::new(Duration::from_millis(80));
        let clock = ManualClock::new();
        s.mark_redrawn(clock.now());
        clock.advance_ms(80);
        assert_eq!(s.request(clock.now()), RequestDecision::Now);
    }

    #[test]
    fn pending_frame_waits_for_interval() {
        let mut s = RedrawScheduler::new(Duration::from_millis(80));
        let clock = ManualClock::new();
        s.mark_redrawn(clock.now());
        clock.advance_ms(10);
        s.request(clock.now());

        clock.advance_ms(16);
        assert_eq!(s.on_frame(clock.now()), FrameDecision::Wait);
        clock.advance_ms(60);
        assert_eq!(s.on_frame(clock.now()), FrameDecision::Redraw);
        assert_eq!(s.state(), RedrawState::Idle);
        assert_eq!(s.on_frame(clock.now()), FrameDecision::Idle);
    }

    #[test]
    fn burst_inside_window_colorizes_at_most_once() {
        let mut h = Harness::new();
        // 60 ms burst of moves every 4 ms, frames every 16 ms.
        for i in 0..15 {
            h.request();
            h.clock.advance_ms(4);
            if i % 4 == 3 {
                h.frame(0);
            }
        }
        assert_eq!(h.redraws.len(), 1, "{:?}", h.redraws);
    }

    #[test]
    fn last_request_of_burst_is_serviced_within_one_interval() {
        let mut h = Harness::new();
        for _ in 0..15 {
            h.request();
            h.clock.advance_ms(4);
        }
        assert_eq!(h.redraws.len(), 1);
        let burst_end = h.clock.elapsed();

        // Movement stopped; only display frames keep arriving.
        for _ in 0..10 {
            h.frame(16);
        }
        assert_eq!(h.redraws.len(), 2, "{:?}", h.redraws);
        let serviced = h.redraws[1];
        assert!(serviced <= burst_end + Duration::from_millis(80));
        assert!(h.redraws[1] - h.redraws[0] >= Duration::from_millis(80));
    }

    #[test]
    fn redraw_spacing_never_beats_interval() {
        let mut h = Harness::new();
        for _ in 0..500 {
            h.request();
            h.frame(3);
        }
        for w in h.redraws.windows(2) {
            assert!(w[1] - w[0] >= Duration::from_millis(80), "{:?}", h.redraws);
        }
        assert!(h.redraws.len() >= 1500 / 80 - 1);
    }

    #[test]
    fn force_absorbs_pending_request() {
        let mut s = RedrawScheduler::new(Duration::from_millis(80));
        let clock = ManualClock::new();
        s.mark_redrawn(clock.now());
        clock.advance_ms(5);
        s.request(clock.now());
        assert!(s.is_pending());

        s.force(clock.now());
        assert!(!s.is_pending());
        assert_eq!(s.last_redraw(), Some(clock.now()));
        assert_eq!(s.on_frame(clock.now()), FrameDecision::Idle);
    }
}
