//! GPU device and surface management: adapter/device creation, surface
//! configuration, frame acquisition.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
