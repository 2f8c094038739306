//! Coordinate types shared across the heatmap pipeline, host and renderer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left of the document (page space, scroll offset included)
//! - +X right, +Y down
//!
//! Window-space positions become document-space by adding the host's scroll offset.

mod doc_size;
mod vec2;
mod viewport;

pub use doc_size::DocSize;
pub use vec2::Vec2;
pub use viewport::Viewport;
