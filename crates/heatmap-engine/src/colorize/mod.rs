//! Colorization: density field + lookup table → RGBA overlay.
//!
//! Each pass recomputes every pixel; there is no delta update. Throttling lives
//! in `schedule`.

mod surface;

pub use surface::{Rgba8, VisibleImage};

use crate::density::{level, DensityField};
use crate::paint::GradientLut;

/// Minimum alpha of any non-empty sample, so faint activity stays perceptible.
pub const ALPHA_FLOOR: u8 = 40;

/// Output pixel for density level `v`.
///
/// Zero maps to transparent black; anything else takes `lut[v]` with alpha
/// `min(255, ALPHA_FLOOR + v)`.
#[inline]
pub fn shade(v: u8, lut: &GradientLut) -> Rgba8 {
    if v == 0 {
        return Rgba8::TRANSPARENT;
    }
    let c = lut.get(v);
    Rgba8::new(c.r, c.g, c.b, ALPHA_FLOOR.saturating_add(v))
}

/// Colorizes `field` into a new image of the same size.
pub fn colorize(field: &DensityField, lut: &GradientLut) -> VisibleImage {
    let mut out = VisibleImage::new(field.size());
    colorize_into(field, lut, &mut out);
    out
}

/// Colorizes `field` into `out`, replacing it when the dimensions differ.
pub fn colorize_into(field: &DensityField, lut: &GradientLut, out: &mut VisibleImage) {
    if out.size() != field.size() {
        *out = VisibleImage::new(field.size());
    }

    for (dst, &s) in out.pixels_mut().iter_mut().zip(field.samples()) {
        *dst = shade(level(s), lut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::DocSize;
    use crate::density::Brush;
    use crate::paint::{Gradient, GradientStop, Rgb};

    fn splotched() -> DensityField {
        let mut f = DensityField::new(DocSize::new(64, 48));
        f.deposit(20.0, 20.0, &Brush::new(10.0, 0.5));
        f.deposit(24.0, 22.0, &Brush::new(10.0, 0.5));
        f
    }

    #[test]
    fn shade_applies_alpha_floor_and_cap() {
        let lut = GradientLut::default();
        assert_eq!(shade(0, &lut), Rgba8::TRANSPARENT);
        assert_eq!(shade(1, &lut).a, 41);
        assert_eq!(shade(100, &lut).a, 140);
        assert_eq!(shade(215, &lut).a, 255);
        assert_eq!(shade(255, &lut).a, 255);
    }

    #[test]
    fn shade_takes_lut_color() {
        let lut = GradientLut::default();
        let p = shade(255, &lut);
        assert_eq!((p.r, p.g, p.b), (255, 0, 0));
    }

    #[test]
    fn zero_density_is_transparent() {
        let field = splotched();
        let img = colorize(&field, &GradientLut::default());
        for (p, &s) in img.pixels().iter().zip(field.samples()) {
            if level(s) == 0 {
                assert_eq!(p.a, 0);
            } else {
                assert!(p.a >= ALPHA_FLOOR);
            }
        }
    }

    #[test]
    fn colorize_is_deterministic() {
        let field = splotched();
        let lut = GradientLut::default();
        assert_eq!(colorize(&field, &lut), colorize(&field, &lut));
    }

    #[test]
    fn colorize_into_replaces_mismatched_image() {
        let field = splotched();
        let lut = GradientLut::default();
        let mut out = VisibleImage::new(DocSize::new(1, 1));
        colorize_into(&field, &lut, &mut out);
        assert_eq!(out.size(), field.size());
        assert_eq!(out, colorize(&field, &lut));
    }

    #[test]
    fn colorize_overwrites_stale_pixels() {
        let lut = GradientLut::default();
        let mut field = splotched();
        let mut out = colorize(&field, &lut);
        field.clear();
        colorize_into(&field, &lut, &mut out);
        assert!(out.pixels().iter().all(|p| *p == Rgba8::TRANSPARENT));
    }

    #[test]
    fn uses_custom_lut() {
        let g = Gradient::new(vec![
            GradientStop::new(0.0, Rgb::new(0, 255, 0)),
            GradientStop::new(1.0, Rgb::new(0, 255, 0)),
        ])
        .unwrap();
        let lut = GradientLut::new(&g);
        let img = colorize(&splotched(), &lut);
        let p = img.pixel(20, 20).unwrap();
        assert_eq!((p.r, p.g, p.b), (0, 255, 0));
    }
}
