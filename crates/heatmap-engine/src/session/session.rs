use std::time::Instant;

use crate::colorize::{colorize_into, VisibleImage};
use crate::coords::{DocSize, Vec2};
use crate::density::{Brush, DensityField, FieldError};
use crate::paint::{Gradient, GradientLut};
use crate::schedule::{FrameDecision, RedrawScheduler, RequestDecision};
use crate::time::{Clock, SystemClock};

use super::{HeatmapConfig, HeatmapHost, SessionSignal, SessionState};

/// One tracking session: density field, overlay image, lookup table, redraw
/// scheduler and lifecycle state.
///
/// Sessions share nothing; any number can coexist. Every entry point runs to
/// completion on the host's event loop, so no locking is involved.
///
/// Typical host wiring:
/// - `start` once, then `on_pointer_moved` for every move (document space)
/// - `on_resize` whenever the document may have changed size
/// - `on_frame` from each display-refresh callback requested through the host
/// - `toggle` / `show` / `hide` from the overlay control, `drain_signals` to update it
pub struct HeatmapSession<C: Clock = SystemClock> {
    config: HeatmapConfig,
    brush: Brush,
    lut: GradientLut,
    field: DensityField,
    image: Option<VisibleImage>,
    scheduler: RedrawScheduler,
    state: SessionState,
    signals: Vec<SessionSignal>,
    generation: u64,
    clock: C,
}

impl HeatmapSession<SystemClock> {
    pub fn new(config: HeatmapConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> HeatmapSession<C> {
    pub fn with_clock(config: HeatmapConfig, clock: C) -> Self {
        Self {
            brush: config.brush(),
            lut: GradientLut::new(&config.gradient),
            field: DensityField::new(DocSize::default()),
            image: None,
            scheduler: RedrawScheduler::new(config.colorize_interval),
            state: SessionState::Stopped,
            signals: Vec::new(),
            generation: 0,
            clock,
            config,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    #[inline]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    #[inline]
    pub fn lut(&self) -> &GradientLut {
        &self.lut
    }

    #[inline]
    pub fn field(&self) -> &DensityField {
        &self.field
    }

    /// The colorized overlay; `None` while hidden.
    #[inline]
    pub fn image(&self) -> Option<&VisibleImage> {
        self.image.as_ref()
    }

    /// Bumped on every change to the overlay's pixels, so renderers can skip
    /// re-uploading an unchanged image.
    #[inline]
    pub fn image_generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }

    /// Takes the lifecycle signals queued since the last call.
    pub fn drain_signals(&mut self) -> Vec<SessionSignal> {
        std::mem::take(&mut self.signals)
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Starts tracking (overlay stays hidden). Sizes the field to the document.
    pub fn start(&mut self, host: &impl HeatmapHost) -> Result<(), FieldError> {
        if self.state.is_enabled() {
            return Ok(());
        }
        self.sync_field_size(host.document_size())?;
        self.state = SessionState::Tracking;
        self.signals.push(SessionSignal::Started);
        log::debug!("heatmap tracking started ({:?})", self.field.size());
        Ok(())
    }

    /// Stops tracking and hides the overlay. Accumulated density is kept.
    pub fn stop(&mut self) {
        if !self.state.is_enabled() {
            return;
        }
        self.hide();
        self.state = SessionState::Stopped;
        self.signals.push(SessionSignal::Stopped);
        log::debug!("heatmap tracking stopped");
    }

    /// Shows the overlay and colorizes everything accumulated so far.
    ///
    /// Returns `Ok(false)` when the session is stopped; a stopped session cannot
    /// be shown.
    pub fn show(&mut self, host: &impl HeatmapHost) -> Result<bool, FieldError> {
        match self.state {
            SessionState::Stopped => {
                log::debug!("show ignored: heatmap session is not tracking");
                return Ok(false);
            }
            SessionState::Visible => return Ok(true),
            SessionState::Tracking => {}
        }

        self.sync_field_size(host.document_size())?;
        self.image = Some(VisibleImage::new(self.field.size()));
        self.state = SessionState::Visible;
        self.redraw_all();
        self.signals.push(SessionSignal::Shown);
        log::debug!("heatmap overlay shown");
        Ok(true)
    }

    /// Hides the overlay and releases its image. Returns whether it was visible.
    pub fn hide(&mut self) -> bool {
        if !self.state.is_visible() {
            return false;
        }
        self.image = None;
        self.scheduler.reset();
        self.state = SessionState::Tracking;
        self.generation = self.generation.wrapping_add(1);
        self.signals.push(SessionSignal::Hidden);
        log::debug!("heatmap overlay hidden");
        true
    }

    /// Shows when hidden, hides when shown. Returns the resulting visibility.
    pub fn toggle(&mut self, host: &impl HeatmapHost) -> Result<bool, FieldError> {
        if self.state.is_visible() {
            self.hide();
            Ok(false)
        } else {
            self.show(host)
        }
    }

    /// Zeroes the density field and, when shown, the overlay.
    pub fn clear(&mut self) {
        self.field.clear();
        if let Some(img) = self.image.as_mut() {
            img.clear();
            self.generation = self.generation.wrapping_add(1);
        }
        log::debug!("heatmap cleared");
    }

    // ── host events ───────────────────────────────────────────────────────

    /// Deposits at a document-space point and schedules a throttled redraw
    /// when the overlay is shown. Ignored while stopped.
    pub fn on_pointer_moved(&mut self, point: Vec2, host: &mut impl HeatmapHost) {
        if !self.state.is_enabled() {
            return;
        }
        self.field.deposit(point.x, point.y, &self.brush);

        if !self.state.is_visible() {
            return;
        }
        let now = self.clock.now();
        match self.scheduler.request(now) {
            RequestDecision::Now => self.colorize(now),
            RequestDecision::Defer => host.request_frame(),
            RequestDecision::Coalesced => {}
        }
    }

    /// Display-refresh callback. Returns whether a colorize pass ran.
    ///
    /// Visibility is re-checked here: a frame requested before `hide`/`stop`
    /// finds no overlay and does nothing.
    pub fn on_frame(&mut self, host: &mut impl HeatmapHost) -> bool {
        let now = self.clock.now();
        match self.scheduler.on_frame(now) {
            FrameDecision::Idle => false,
            FrameDecision::Wait => {
                host.request_frame();
                false
            }
            FrameDecision::Redraw => {
                if !self.state.is_visible() || self.image.is_none() {
                    log::trace!("deferred redraw dropped: overlay is gone");
                    return false;
                }
                self.colorize(now);
                true
            }
        }
    }

    /// Re-reads the document size, preserving accumulated density. When shown,
    /// the overlay is replaced at the new size and recolored immediately.
    pub fn on_resize(&mut self, host: &impl HeatmapHost) -> Result<(), FieldError> {
        if !self.state.is_enabled() {
            return Ok(());
        }
        let size = host.document_size();
        if size == self.field.size() {
            return Ok(());
        }
        self.sync_field_size(size)?;
        if self.state.is_visible() {
            self.image = Some(VisibleImage::new(size));
            self.redraw_all();
        }
        Ok(())
    }

    /// Forces a synchronous full recolor, bypassing throttling. Returns false
    /// when the overlay is hidden.
    pub fn redraw_all(&mut self) -> bool {
        if !self.state.is_visible() {
            return false;
        }
        let now = self.clock.now();
        self.scheduler.force(now);
        self.colorize(now);
        true
    }

    /// Replaces the gradient, rebuilding the lookup table.
    pub fn set_gradient(&mut self, gradient: Gradient) {
        self.lut = GradientLut::new(&gradient);
        self.config.gradient = gradient;
        self.redraw_all();
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn colorize(&mut self, now: Instant) {
        let Some(img) = self.image.as_mut() else { return };
        colorize_into(&self.field, &self.lut, img);
        self.scheduler.mark_redrawn(now);
        self.generation = self.generation.wrapping_add(1);
        log::trace!("heatmap colorized (generation {})", self.generation);
    }

    fn sync_field_size(&mut self, size: DocSize) -> Result<(), FieldError> {
        if size == self.field.size() {
            return Ok(());
        }
        log::debug!("density field {:?} -> {:?}", self.field.size(), size);
        self.field.try_resize(size)
    }
}

impl Default for HeatmapSession<SystemClock> {
    fn default() -> Self {
        Self::new(HeatmapConfig::default())
    }
}
