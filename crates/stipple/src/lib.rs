//! Stipple: immediate-mode 2D drawing over wgpu + winit.
//!
//! Filled quads, points, lines, triangle-fan circles and 8×8 bitmap text, in
//! device pixels with the origin at the bottom-left. Draw through a
//! [`raster::Canvas`]; [`window::Surface`] owns the window, the GPU context and
//! the caller-driven frame loop.

pub mod coords;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod text;
pub mod time;
pub mod window;

pub use paint::Color;
pub use raster::{Canvas, DrawError};
pub use window::{Surface, SurfaceConfig};
