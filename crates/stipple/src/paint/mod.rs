//! Color model for the draw-color register.
//!
//! Colors arrive as packed `0x00RRGGBB` integers and are decoded into
//! normalized intensities. There is no alpha channel and no color-space
//! management: values are written to the framebuffer as given.

pub mod color;

pub use color::Color;
