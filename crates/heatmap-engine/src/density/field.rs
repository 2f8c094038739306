use std::fmt;

use crate::coords::DocSize;

use super::{Brush, MAX_DENSITY};

/// Offscreen scalar field of accumulated pointer activity, one sample per document pixel.
///
/// Samples are intensities in `[0, MAX_DENSITY]`, stored row-major. Deposits saturate
/// at the ceiling instead of wrapping.
#[derive(Clone, PartialEq)]
pub struct DensityField {
    size: DocSize,
    samples: Vec<f32>,
}

impl DensityField {
    /// Creates a zeroed field.
    ///
    /// Out-of-memory for very large documents aborts; use [`try_new`](Self::try_new)
    /// to surface it instead.
    pub fn new(size: DocSize) -> Self {
        Self { size, samples: vec![0.0; size.area()] }
    }

    pub fn try_new(size: DocSize) -> Result<Self, FieldError> {
        Ok(Self { size, samples: zeroed(size)? })
    }

    #[inline]
    pub fn size(&self) -> DocSize {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Raw row-major samples.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Raw intensity at `(x, y)`; zero outside the field.
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        if x >= self.size.width || y >= self.size.height {
            return 0.0;
        }
        self.samples[y as usize * self.size.width as usize + x as usize]
    }

    /// Intensity at `(x, y)` quantized to an 8-bit level.
    pub fn intensity(&self, x: u32, y: u32) -> u8 {
        level(self.sample(x, y))
    }

    /// Highest sample in the field.
    pub fn peak(&self) -> f32 {
        self.samples.iter().copied().fold(0.0, f32::max)
    }

    /// Adds `brush`'s radial falloff around the document point `(x, y)`.
    ///
    /// Samples are weighted by the distance from their pixel center. Only the
    /// disk's bounding box, clipped to the field, is visited.
    pub fn deposit(&mut self, x: f32, y: f32, brush: &Brush) {
        if self.is_empty() || !x.is_finite() || !y.is_finite() || brush.peak() <= 0.0 {
            return;
        }

        let r = brush.radius();
        let w = self.size.width as usize;

        // Float → usize casts saturate, so disks entirely off the top/left clip to 0.
        let x0 = (x - r).floor().max(0.0) as usize;
        let y0 = (y - r).floor().max(0.0) as usize;
        let x1 = ((x + r).ceil().max(0.0) as usize).min(w);
        let y1 = ((y + r).ceil().max(0.0) as usize).min(self.size.height as usize);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for py in y0..y1 {
            let dy = py as f32 + 0.5 - y;
            let row = &mut self.samples[py * w..(py + 1) * w];
            for (px, s) in row.iter_mut().enumerate().take(x1).skip(x0) {
                let dx = px as f32 + 0.5 - x;
                let add = brush.weight((dx * dx + dy * dy).sqrt());
                if add > 0.0 {
                    *s = (*s + add).min(MAX_DENSITY);
                }
            }
        }
    }

    /// Reallocates to `size`, keeping existing samples at their (0, 0)-anchored
    /// coordinates. Newly exposed area is zero; shrinking crops.
    ///
    /// Allocation failure is reported instead of aborting, and leaves the field
    /// untouched.
    pub fn try_resize(&mut self, size: DocSize) -> Result<(), FieldError> {
        if size == self.size {
            return Ok(());
        }
        let mut next = zeroed(size)?;
        self.copy_into(&mut next, size);
        self.samples = next;
        self.size = size;
        Ok(())
    }

    /// Resets every sample to zero.
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
    }

    fn copy_into(&self, dst: &mut [f32], dst_size: DocSize) {
        let keep_w = self.size.width.min(dst_size.width) as usize;
        let keep_h = self.size.height.min(dst_size.height) as usize;
        let src_w = self.size.width as usize;
        let dst_w = dst_size.width as usize;

        for y in 0..keep_h {
            dst[y * dst_w..y * dst_w + keep_w]
                .copy_from_slice(&self.samples[y * src_w..y * src_w + keep_w]);
        }
    }
}

impl fmt::Debug for DensityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DensityField")
            .field("size", &self.size)
            .field("peak", &self.peak())
            .finish()
    }
}

/// Quantizes a raw sample to the 8-bit level used for colorization.
#[inline]
pub fn level(sample: f32) -> u8 {
    sample.round().clamp(0.0, MAX_DENSITY) as u8
}

fn zeroed(size: DocSize) -> Result<Vec<f32>, FieldError> {
    let len = size.area();
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| FieldError::Allocation { width: size.width, height: size.height })?;
    v.resize(len, 0.0);
    Ok(v)
}

/// Failure to (re)allocate the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Allocation { width: u32, height: u32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Allocation { width, height } => {
                write!(f, "failed to allocate a {width}x{height} density field")
            }
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(w: u32, h: u32) -> DensityField {
        DensityField::new(DocSize::new(w, h))
    }

    // ── deposit ───────────────────────────────────────────────────────────

    #[test]
    fn deposit_peaks_at_center_and_fades_out() {
        let mut f = field(100, 100);
        f.deposit(50.0, 50.0, &Brush::new(10.0, 1.0));

        let center = f.sample(50, 50);
        let mid = f.sample(55, 50);
        let edge = f.sample(59, 50);
        assert!(center > mid && mid > edge && edge > 0.0);
        assert_eq!(f.sample(61, 50), 0.0);
        assert_eq!(f.sample(50, 61), 0.0);
    }

    #[test]
    fn deposit_is_additive() {
        let brush = Brush::default();
        let mut once = field(64, 64);
        once.deposit(32.0, 32.0, &brush);
        let mut twice = once.clone();
        twice.deposit(32.0, 32.0, &brush);

        for (a, b) in once.samples().iter().zip(twice.samples()) {
            assert!(b >= a);
        }
        assert!((twice.sample(32, 32) - 2.0 * once.sample(32, 32)).abs() < 1e-3);
    }

    #[test]
    fn deposit_saturates_at_ceiling() {
        let mut f = field(32, 32);
        let brush = Brush::new(8.0, 1.0);
        for _ in 0..50 {
            f.deposit(16.0, 16.0, &brush);
        }
        assert_eq!(f.sample(16, 16), MAX_DENSITY);
        assert_eq!(f.intensity(16, 16), 255);
        assert!(f.samples().iter().all(|&s| s <= MAX_DENSITY));
    }

    #[test]
    fn deposit_clips_to_bounds() {
        let mut f = field(20, 20);
        f.deposit(0.0, 0.0, &Brush::new(5.0, 1.0));
        assert!(f.sample(0, 0) > 0.0);

        f.deposit(-100.0, -100.0, &Brush::new(5.0, 1.0));
        f.deposit(500.0, 5.0, &Brush::new(5.0, 1.0));
        f.deposit(f32::NAN, 5.0, &Brush::new(5.0, 1.0));
        assert_eq!(f.samples().iter().filter(|&&s| s > 0.0).count(), {
            let mut g = field(20, 20);
            g.deposit(0.0, 0.0, &Brush::new(5.0, 1.0));
            g.samples().iter().filter(|&&s| s > 0.0).count()
        });
    }

    #[test]
    fn deposit_on_empty_field_is_noop() {
        let mut f = field(0, 0);
        f.deposit(1.0, 1.0, &Brush::default());
        assert!(f.samples().is_empty());
    }

    #[test]
    fn zero_alpha_deposits_nothing() {
        let mut f = field(10, 10);
        f.deposit(5.0, 5.0, &Brush::new(4.0, 0.0));
        assert_eq!(f.peak(), 0.0);
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn grow_preserves_content_and_zero_fills() {
        let mut f = field(40, 30);
        f.deposit(20.0, 15.0, &Brush::new(4.0, 1.0));
        let before = f.clone();

        f.try_resize(DocSize::new(80, 70)).unwrap();
        assert_eq!(f.size(), DocSize::new(80, 70));
        for y in 0..30 {
            for x in 0..40 {
                assert_eq!(f.sample(x, y), before.sample(x, y));
            }
        }
        for y in 0..70 {
            for x in 0..80 {
                if x >= 40 || y >= 30 {
                    assert_eq!(f.sample(x, y), 0.0);
                }
            }
        }
    }

    #[test]
    fn shrink_crops() {
        let mut f = field(40, 40);
        f.deposit(5.0, 5.0, &Brush::new(3.0, 1.0));
        let kept = f.sample(5, 5);
        f.try_resize(DocSize::new(10, 10)).unwrap();
        assert_eq!(f.samples().len(), 100);
        assert_eq!(f.sample(5, 5), kept);
    }

    #[test]
    fn resize_to_zero_then_back() {
        let mut f = field(10, 10);
        f.deposit(5.0, 5.0, &Brush::new(3.0, 1.0));
        f.try_resize(DocSize::new(0, 10)).unwrap();
        assert!(f.is_empty());
        f.try_resize(DocSize::new(10, 10)).unwrap();
        assert_eq!(f.peak(), 0.0);
    }

    #[test]
    fn resize_to_same_size_keeps_samples() {
        let mut f = field(16, 16);
        f.deposit(8.0, 8.0, &Brush::new(4.0, 0.5));
        let before = f.clone();
        f.try_resize(DocSize::new(16, 16)).unwrap();
        assert_eq!(f, before);
    }

    #[test]
    fn try_new_reports_impossible_allocation() {
        let err = DensityField::try_new(DocSize::new(u32::MAX, u32::MAX)).unwrap_err();
        assert_eq!(err, FieldError::Allocation { width: u32::MAX, height: u32::MAX });
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_zeroes_everything() {
        let mut f = field(10, 10);
        f.deposit(5.0, 5.0, &Brush::new(3.0, 1.0));
        f.clear();
        assert_eq!(f.peak(), 0.0);
        assert_eq!(f.size(), DocSize::new(10, 10));
    }

    // ── level ─────────────────────────────────────────────────────────────

    #[test]
    fn level_rounds_and_clamps() {
        assert_eq!(level(0.49), 0);
        assert_eq!(level(0.5), 1);
        assert_eq!(level(300.0), 255);
        assert_eq!(level(-3.0), 0);
    }
}
