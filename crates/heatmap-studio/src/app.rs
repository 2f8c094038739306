use heatmap_engine::colorize;
use heatmap_engine::coords::{DocSize, Vec2};
use heatmap_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use heatmap_engine::input::{InputEvent, Key, PointerMoveEvent};
use heatmap_engine::paint::Color;
use heatmap_engine::render::OverlayRenderer;
use heatmap_engine::session::{HeatmapHost, HeatmapSession, SessionSignal, SessionState};

use crate::config::StudioConfig;

/// Page background behind the overlay.
const BACKGROUND: Color = Color { r: 0.93, g: 0.93, b: 0.91, a: 1.0 };

/// Adapts the studio window to the session's host interface.
struct WindowHost<'a, 'w> {
    window: &'a WindowCtx<'w>,
    config: &'a StudioConfig,
}

impl HeatmapHost for WindowHost<'_, '_> {
    fn document_size(&self) -> DocSize {
        self.config.document_size(self.window.viewport_size())
    }

    fn request_frame(&mut self) {
        self.window.request_redraw();
    }
}

/// Heatmap over a scrollable blank document.
///
/// Keys: `H` toggles the overlay, `P` starts/stops tracking, `C` clears,
/// `R` forces a recolor, `S` writes a PNG snapshot, `Esc` quits.
pub struct StudioApp {
    config: StudioConfig,
    session: HeatmapSession,
    overlay: OverlayRenderer,
    scroll: Vec2,
}

impl StudioApp {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            session: HeatmapSession::new(config.heatmap.clone()),
            overlay: OverlayRenderer::new(),
            scroll: Vec2::zero(),
            config,
        }
    }

    /// Wheel deltas are positive upwards; scroll offsets grow downwards.
    fn scroll_by(&mut self, ctx: &WindowCtx<'_>, dy: f32) {
        let wanted = self.scroll - Vec2::new(0.0, dy);
        let next = self.config.clamp_scroll(ctx.viewport_size(), wanted);
        if next != self.scroll {
            self.scroll = next;
            ctx.request_redraw();
        }
    }

    /// Consumes lifecycle signals, reflecting them in the window title.
    fn sync_status(&mut self, ctx: &WindowCtx<'_>) {
        let signals = self.session.drain_signals();
        if signals.is_empty() {
            return;
        }
        for signal in &signals {
            log::info!("heatmap {}", signal_label(*signal));
        }
        ctx.set_title(&format!("{} | {}", self.config.title, state_label(self.session.state())));
        ctx.request_redraw();
    }

    fn handle_key(&mut self, ctx: &WindowCtx<'_>, key: Key) -> anyhow::Result<AppControl> {
        let host = WindowHost { window: ctx, config: &self.config };
        match key {
            Key::Escape => return Ok(AppControl::Exit),
            Key::H => {
                if !self.session.state().is_enabled() {
                    log::info!("tracking is stopped; press P to start it");
                }
                self.session.toggle(&host)?;
            }
            Key::P => {
                if self.session.state().is_enabled() {
                    self.session.stop();
                } else {
                    self.session.start(&host)?;
                }
            }
            Key::C => {
                self.session.clear();
                ctx.request_redraw();
            }
            Key::R => {
                if self.session.redraw_all() {
                    ctx.request_redraw();
                }
            }
            Key::S => self.save_snapshot()?,
            _ => {}
        }
        Ok(AppControl::Continue)
    }

    fn save_snapshot(&self) -> anyhow::Result<()> {
        let path = &self.config.snapshot_path;
        match self.session.image() {
            Some(img) => img.save_png(path)?,
            None => colorize::colorize(self.session.field(), self.session.lut()).save_png(path)?,
        }
        log::info!("snapshot written to {path}");
        Ok(())
    }
}

impl App for StudioApp {
    fn on_start(&mut self, ctx: &mut WindowCtx<'_>) -> AppControl {
        let host = WindowHost { window: ctx, config: &self.config };
        let started = self.session.start(&host).and_then(|_| self.session.show(&host));
        if let Err(e) = started {
            log::error!("failed to start heatmap: {e}");
            return AppControl::Exit;
        }
        self.sync_status(ctx);
        AppControl::Continue
    }

    fn on_input(&mut self, ctx: &mut WindowCtx<'_>, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let point = Vec2::new(*x, *y) + self.scroll;
                let generation = self.session.image_generation();
                let mut host = WindowHost { window: ctx, config: &self.config };
                self.session.on_pointer_moved(point, &mut host);
                // A synchronous colorize still needs presenting.
                if self.session.image_generation() != generation {
                    ctx.request_redraw();
                }
            }
            InputEvent::MouseWheel { delta, .. } => {
                let dy = delta.vertical_px(self.config.scroll_line_px);
                self.scroll_by(ctx, dy);
            }
            _ => {}
        }

        if let Some(key) = event.key_pressed() {
            match self.handle_key(ctx, key) {
                Ok(AppControl::Exit) => return AppControl::Exit,
                Ok(AppControl::Continue) => {}
                Err(e) => log::error!("{key}: {e:#}"),
            }
            self.sync_status(ctx);
        }

        AppControl::Continue
    }

    fn on_resized(&mut self, ctx: &mut WindowCtx<'_>) -> AppControl {
        let host = WindowHost { window: ctx, config: &self.config };
        if let Err(e) = self.session.on_resize(&host) {
            log::error!("{e}");
            return AppControl::Exit;
        }
        self.scroll = self.config.clamp_scroll(ctx.viewport_size(), self.scroll);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        {
            let mut host = WindowHost { window: &ctx.window, config: &self.config };
            self.session.on_frame(&mut host);
        }

        let scroll = self.scroll;
        let (session, overlay) = (&self.session, &mut self.overlay);
        ctx.render(BACKGROUND, |rctx, target| {
            if let Some(img) = session.image() {
                overlay.render(rctx, target, img, session.image_generation(), scroll);
            }
        })
    }
}

fn state_label(state: SessionState) -> &'static str {
    match state {
        SessionState::Stopped => "stopped",
        SessionState::Tracking => "tracking (overlay hidden)",
        SessionState::Visible => "tracking",
    }
}

fn signal_label(signal: SessionSignal) -> &'static str {
    match signal {
        SessionSignal::Started => "tracking started",
        SessionSignal::Stopped => "tracking stopped",
        SessionSignal::Shown => "overlay shown",
        SessionSignal::Hidden => "overlay hidden",
    }
}
