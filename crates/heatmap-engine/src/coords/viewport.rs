use super::{DocSize, Vec2};

/// Visible window region in logical pixels.
///
/// Renderers convert logical positions to NDC against it. The document
/// behind it is usually larger; see [`DocSize`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Largest scroll offset that keeps the viewport inside `doc`.
    pub fn max_scroll(self, doc: DocSize) -> Vec2 {
        Vec2::new(
            (doc.width as f32 - self.width).max(0.0),
            (doc.height as f32 - self.height).max(0.0),
        )
    }

    /// Clamps `scroll` to `[0, max_scroll(doc)]` on both axes.
    pub fn clamp_scroll(self, doc: DocSize, scroll: Vec2) -> Vec2 {
        scroll.clamp(Vec2::zero(), self.max_scroll(doc))
    }
}
