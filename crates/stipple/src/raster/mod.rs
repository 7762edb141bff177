//! Primitive rasterizer.
//!
//! Each drawing operation builds a vertex list, sets the draw color, and hands
//! exactly one `DrawCall` to a `Backend`. Nothing is retained between calls
//! except the `RenderState` register, which every call overwrites before use.
//!
//! Adding a primitive:
//! - add a vertex builder in `geometry`
//! - add a `Topology` variant if the existing ones do not fit
//! - add a `draw_*` method on `Canvas`
//! - teach `render::tessellate` to expand the new topology into triangles

mod backend;
mod call;
mod canvas;
mod error;
pub mod geometry;
mod state;

pub use backend::{Backend, Recorder};
pub use call::{Attribs, DrawCall, Topology};
pub use canvas::Canvas;
pub use error::DrawError;
pub use state::RenderState;
