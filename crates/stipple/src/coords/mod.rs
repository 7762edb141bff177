//! Coordinate and geometry types shared by the rasterizer, text and GPU backend.
//!
//! Canonical CPU space:
//! - Device pixels (no DPI scaling)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! `Projection` maps this space to clip space; the vertex shader applies it.

mod projection;
mod rect;
mod vec2;

pub use projection::Projection;
pub use rect::Rect;
pub use vec2::Vec2;
