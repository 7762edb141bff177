//! GPU backend.
//!
//! `PrimitiveRenderer` implements `raster::Backend` on top of wgpu. Each
//! `DrawCall` is expanded into triangles when submitted and replayed as one
//! `draw` at present time, in submission order.
//!
//! Convention:
//! - CPU geometry is in device pixels (bottom-left origin, +Y up).
//! - The vertex shader applies the `Projection` uniform.

mod ctx;
mod primitive;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use primitive::PrimitiveRenderer;
