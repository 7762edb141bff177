use crate::raster::DrawError;

use super::font8x8::{FIRST_CHAR, GLYPHS, LAST_CHAR};

/// Character drawn by `GlyphFallback::Placeholder`.
pub const PLACEHOLDER: char = '?';

/// What to do with a character that has no glyph.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum GlyphFallback {
    /// Draw the `?` glyph in its place.
    #[default]
    Placeholder,
    /// Drop the character; the cursor does not advance.
    Skip,
    /// Fail the whole string before drawing anything.
    Reject,
}

/// One 8×8 glyph bitmap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Glyph(&'static [u8; 8]);

impl Glyph {
    pub const WIDTH: u32 = 8;
    pub const HEIGHT: u32 = 8;

    /// Looks up the glyph for `ch`, or `None` outside the table.
    pub fn get(ch: char) -> Option<Glyph> {
        let code = u8::try_from(u32::from(ch)).ok()?;
        if !(FIRST_CHAR..=LAST_CHAR).contains(&code) {
            return None;
        }
        GLYPHS.get(usize::from(code - FIRST_CHAR)).map(Glyph)
    }

    #[inline]
    pub fn rows(self) -> &'static [u8; 8] {
        self.0
    }

    /// Whether the pixel at `row` (0 = top) and `col` (0 = left) is lit.
    #[inline]
    pub fn is_set(self, row: u32, col: u32) -> bool {
        row < Self::HEIGHT && col < Self::WIDTH && self.0[row as usize] & (0x80 >> col) != 0
    }

    /// Lit pixels as `(row, col)`, rows top to bottom, columns left to right.
    pub fn lit_pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (0..Self::HEIGHT)
            .flat_map(|row| (0..Self::WIDTH).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_set(row, col))
    }
}

/// Maps every character of `text` to a glyph under `fallback`.
///
/// With `Reject`, the first unsupported character fails the whole string.
pub(crate) fn resolve(text: &str, fallback: GlyphFallback) -> Result<Vec<Glyph>, DrawError> {
    let mut glyphs = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        match (Glyph::get(ch), fallback) {
            (Some(glyph), _) => glyphs.push(glyph),
            (None, GlyphFallback::Placeholder) => {
                glyphs.extend(Glyph::get(PLACEHOLDER));
            }
            (None, GlyphFallback::Skip) => {}
            (None, GlyphFallback::Reject) => {
                return Err(DrawError::UnsupportedChar { ch, index });
            }
        }
    }
    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn table_covers_printable_ascii() {
        assert!((' '..='~').all(|ch| Glyph::get(ch).is_some()));
    }

    #[test]
    fn out_of_table_chars_have_no_glyph() {
        for ch in ['\0', '\n', '\u{1F}', '\u{7F}', '\u{FF}', 'é', '€', '🦀'] {
            assert!(Glyph::get(ch).is_none(), "{ch:?}");
        }
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(Glyph::get(' ').unwrap().lit_pixels().count(), 0);
    }

    #[test]
    fn msb_is_leftmost() {
        // '|' is 0x18 on the first 7 rows: columns 3 and 4 lit.
        let bar = Glyph::get('|').unwrap();
        let top: Vec<u32> = (0..8).filter(|&c| bar.is_set(0, c)).collect();
        assert_eq!(top, vec![3, 4]);
        assert!(!bar.is_set(7, 3));
    }

    #[test]
    fn letter_a_rows() {
        assert_eq!(
            Glyph::get('A').unwrap().rows(),
            &[0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x00]
        );
    }

    #[test]
    fn out_of_range_bits_are_unset() {
        let full = Glyph::get('A').unwrap();
        assert!(!full.is_set(8, 0));
        assert!(!full.is_set(0, 8));
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn placeholder_substitutes_question_mark() {
        let glyphs = resolve("a\u{7F}b", GlyphFallback::Placeholder).unwrap();
        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[1], Glyph::get('?').unwrap());
    }

    #[test]
    fn skip_drops_unsupported() {
        let glyphs = resolve("aéb", GlyphFallback::Skip).unwrap();
        assert_eq!(glyphs, vec![Glyph::get('a').unwrap(), Glyph::get('b').unwrap()]);
    }

    #[test]
    fn reject_reports_char_index() {
        assert_eq!(
            resolve("héllo", GlyphFallback::Reject),
            Err(DrawError::UnsupportedChar { ch: 'é', index: 1 })
        );
    }
}
