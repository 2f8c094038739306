//! GPU rendering.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod common;
mod ctx;
mod overlay;

pub use ctx::{RenderCtx, RenderTarget};
pub use overlay::OverlayRenderer;
