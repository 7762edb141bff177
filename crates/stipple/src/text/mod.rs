//! Bitmap text.
//!
//! Text is drawn glyph by glyph, left to right, by expanding every lit bit of an
//! 8×8 glyph into unit points. There is no font rasterizer, atlas, kerning or
//! line breaking; cost grows with `len × 64 × size²`, so keep on-screen text short.

mod draw;
pub mod font8x8;
mod glyph;

pub use glyph::{Glyph, GlyphFallback, PLACEHOLDER};
