use thiserror::Error;

/// Rejected drawing input.
///
/// Degenerate geometry (zero sizes, zero-length lines) is not an error; it draws nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A circle needs at least three sides to enclose an area.
    #[error("circle needs at least 3 sides, got {sides}")]
    TooFewSides { sides: u32 },

    /// More sides than a single fan is allowed to allocate.
    #[error("circle may have at most {max} sides, got {sides}")]
    TooManySides { sides: u32, max: u32 },

    /// A character with no glyph in the built-in table, under `GlyphFallback::Reject`.
    #[error("no glyph for {ch:?} at char index {index}")]
    UnsupportedChar { ch: char, index: usize },
}
