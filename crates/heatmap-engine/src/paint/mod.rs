//! Color model shared between the heatmap pipeline and renderers.
//!
//! Scope:
//! - straight 8-bit sRGB colors and their string notations
//! - gradient stops and the 256-entry lookup table derived from them
//! - premultiplied `Color` for surface clears

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError, Rgb};
pub use gradient::{Gradient, GradientError, GradientLut, GradientStop, LUT_SIZE};
