/// Full-document size in whole logical pixels.
///
/// This is the extent of the scrollable content, not the visible viewport.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct DocSize {
    pub width: u32,
    pub height: u32,
}

impl DocSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Converts fractional logical extents, rounding up and clamping negative or
    /// non-finite values to zero.
    pub fn from_logical(width: f32, height: f32) -> Self {
        fn dim(v: f32) -> u32 {
            if v.is_finite() && v > 0.0 {
                v.ceil().min(u32::MAX as f32) as u32
            } else {
                0
            }
        }
        Self::new(dim(width), dim(height))
    }

    /// Clamps signed extents reported by a host to the non-negative range.
    pub fn clamped(width: i64, height: i64) -> Self {
        let dim = |v: i64| v.clamp(0, u32::MAX as i64) as u32;
        Self::new(dim(width), dim(height))
    }

    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_logical_rounds_up() {
        assert_eq!(DocSize::from_logical(799.2, 600.0), DocSize::new(800, 600));
    }

    #[test]
    fn from_logical_clamps_garbage_to_zero() {
        assert_eq!(DocSize::from_logical(-5.0, f32::NAN), DocSize::new(0, 0));
    }

    #[test]
    fn clamped_rejects_negative() {
        assert_eq!(DocSize::clamped(-1, 20), DocSize::new(0, 20));
        assert!(DocSize::clamped(-1, 20).is_empty());
    }

    #[test]
    fn area_is_product() {
        assert_eq!(DocSize::new(800, 600).area(), 480_000);
    }
}
