//! Heatmap engine crate.
//!
//! The density pipeline (`paint`, `density`, `colorize`, `schedule`, `session`)
//! is platform-free. The runtime pieces (`window`, `core`, `input`, `device`,
//! `render`) host it in a `winit` window and draw the overlay through `wgpu`.

pub mod colorize;
pub mod coords;
pub mod density;
pub mod paint;
pub mod schedule;
pub mod session;
pub mod time;

pub mod core;
pub mod device;
pub mod input;
pub mod render;
pub mod window;

pub mod logging;
