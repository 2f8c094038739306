use super::MAX_DENSITY;

/// Smallest accepted deposit radius, in logical pixels.
pub const MIN_RADIUS: f32 = 0.5;

pub const DEFAULT_RADIUS: f32 = 24.0;
pub const DEFAULT_POINT_ALPHA: f32 = 0.07;

/// Influence profile of a single deposit.
///
/// Contribution at distance `d` from the center is
/// `point_alpha * 255 * (1 - d / radius)`, and zero from `radius` outward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Brush {
    radius: f32,
    point_alpha: f32,
}

impl Brush {
    /// Radius is raised to [`MIN_RADIUS`]; `point_alpha` is clamped to [0, 1].
    /// Non-finite inputs fall back to the defaults.
    pub fn new(radius: f32, point_alpha: f32) -> Self {
        let radius = if radius.is_finite() { radius.max(MIN_RADIUS) } else { DEFAULT_RADIUS };
        let point_alpha = if point_alpha.is_finite() {
            point_alpha.clamp(0.0, 1.0)
        } else {
            DEFAULT_POINT_ALPHA
        };
        Self { radius, point_alpha }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn point_alpha(&self) -> f32 {
        self.point_alpha
    }

    /// Intensity added at the center of a deposit.
    #[inline]
    pub fn peak(&self) -> f32 {
        self.point_alpha * MAX_DENSITY
    }

    /// Intensity added at `distance` from the center.
    #[inline]
    pub fn weight(&self, distance: f32) -> f32 {
        if distance >= self.radius {
            0.0
        } else {
            (self.peak() * (1.0 - distance / self.radius)).max(0.0)
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS, DEFAULT_POINT_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_is_linear() {
        let b = Brush::new(10.0, 1.0);
        assert_eq!(b.weight(0.0), 255.0);
        assert!((b.weight(5.0) - 127.5).abs() < 1e-4);
        assert_eq!(b.weight(10.0), 0.0);
        assert_eq!(b.weight(11.0), 0.0);
    }

    #[test]
    fn sanitizes_inputs() {
        let b = Brush::new(0.0, 3.0);
        assert_eq!(b.radius(), MIN_RADIUS);
        assert_eq!(b.point_alpha(), 1.0);

        let b = Brush::new(f32::NAN, f32::INFINITY);
        assert_eq!(b.radius(), DEFAULT_RADIUS);
        assert_eq!(b.point_alpha(), DEFAULT_POINT_ALPHA);
    }
}
