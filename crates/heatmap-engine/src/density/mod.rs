//! Density accumulation.
//!
//! The field spans the full document, is mutated only by deposits, and keeps its
//! content across resizes. All operations are synchronous: deposits are O(r²),
//! resize and clear are O(width × height).

mod brush;
mod field;

pub use brush::{Brush, DEFAULT_POINT_ALPHA, DEFAULT_RADIUS, MIN_RADIUS};
pub use field::{level, DensityField, FieldError};

/// Saturation ceiling of a sample (8-bit intensity range).
pub const MAX_DENSITY: f32 = 255.0;
