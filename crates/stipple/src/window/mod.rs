//! Window + caller-owned frame loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer, the
//! input state and the clocks. The caller drives everything: `poll_events`,
//! draw through `canvas()`, then `swap_buffers`.

mod surface;

pub use surface::{Surface, SurfaceConfig};
