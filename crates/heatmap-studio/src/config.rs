use heatmap_engine::coords::{DocSize, Vec2, Viewport};
use heatmap_engine::session::HeatmapConfig;

/// Studio window and virtual-document settings.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,

    /// Document height as a multiple of the viewport height, giving the page
    /// something to scroll.
    pub document_viewports: f32,

    /// Logical pixels scrolled per wheel notch.
    pub scroll_line_px: f32,

    /// Where `S` writes the PNG snapshot.
    pub snapshot_path: String,

    pub heatmap: HeatmapConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Heatmap Studio".to_string(),
            width: 1024.0,
            height: 720.0,
            document_viewports: 3.0,
            scroll_line_px: 40.0,
            snapshot_path: "heatmap.png".to_string(),
            heatmap: HeatmapConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Document extent for a window of `viewport` logical pixels: as wide as
    /// the window and `document_viewports` times as tall.
    pub fn document_size(&self, viewport: DocSize) -> DocSize {
        let factor = if self.document_viewports.is_finite() {
            self.document_viewports.max(1.0)
        } else {
            1.0
        };
        DocSize::from_logical(viewport.width as f32, viewport.height as f32 * factor)
    }

    /// Clamps a scroll offset to the document for the given viewport.
    pub fn clamp_scroll(&self, viewport: DocSize, scroll: Vec2) -> Vec2 {
        let vp = Viewport::new(viewport.width as f32, viewport.height as f32);
        vp.clamp_scroll(self.document_size(viewport), scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_three_viewports_tall() {
        let cfg = StudioConfig::default();
        assert_eq!(cfg.document_size(DocSize::new(800, 600)), DocSize::new(800, 1800));
        let far = Vec2::new(0.0, 1e6);
        assert_eq!(cfg.clamp_scroll(DocSize::new(800, 600), far), Vec2::new(0.0, 1200.0));
    }

    #[test]
    fn document_never_shorter_than_viewport() {
        let cfg = StudioConfig { document_viewports: 0.2, ..StudioConfig::default() };
        assert_eq!(cfg.document_size(DocSize::new(100, 50)), DocSize::new(100, 50));
        assert_eq!(cfg.clamp_scroll(DocSize::new(100, 50), Vec2::new(0.0, 30.0)), Vec2::zero());
    }

    #[test]
    fn empty_viewport_gives_empty_document() {
        let cfg = StudioConfig::default();
        assert!(cfg.document_size(DocSize::new(0, 0)).is_empty());
    }
}
