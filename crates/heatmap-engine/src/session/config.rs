use std::time::Duration;

use crate::density::{Brush, DEFAULT_POINT_ALPHA, DEFAULT_RADIUS};
use crate::paint::Gradient;
use crate::schedule::DEFAULT_COLORIZE_INTERVAL;

/// Heatmap tuning.
///
/// Brush values are sanitized when the session builds its [`Brush`]; see
/// [`Brush::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapConfig {
    /// Influence radius of each deposit, in logical pixels.
    pub radius: f32,
    /// Opacity contributed at the center of each deposit, in [0, 1].
    pub point_alpha: f32,
    /// Ramp used to build the lookup table.
    pub gradient: Gradient,
    /// Minimum spacing between throttled colorize passes.
    pub colorize_interval: Duration,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            point_alpha: DEFAULT_POINT_ALPHA,
            gradient: Gradient::heat(),
            colorize_interval: DEFAULT_COLORIZE_INTERVAL,
        }
    }
}

impl HeatmapConfig {
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_point_alpha(mut self, point_alpha: f32) -> Self {
        self.point_alpha = point_alpha;
        self
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_colorize_interval(mut self, interval: Duration) -> Self {
        self.colorize_interval = interval;
        self
    }

    pub fn brush(&self) -> Brush {
        Brush::new(self.radius, self.point_alpha)
    }
}
