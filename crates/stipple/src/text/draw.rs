use crate::coords::Rect;
use crate::paint::Color;
use crate::raster::{Backend, Canvas, DrawError};

use super::glyph::{self, Glyph};

impl<B: Backend> Canvas<B> {
    /// Draws `text` with the built-in 8×8 font, scaled by `size`.
    ///
    /// `(x, y)` is the bottom-left corner of the first glyph; glyphs extend upward
    /// `8 × size` pixels and advance `8 × size` pixels each. Every lit glyph bit
    /// becomes a `size × size` block of unsmoothed unit points centered on pixel
    /// centers. Characters outside the table follow the canvas `GlyphFallback`.
    ///
    /// `size == 0` draws nothing.
    pub fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        size: u32,
        color: impl Into<Color>,
    ) -> Result<(), DrawError> {
        let glyphs = glyph::resolve(text, self.glyph_fallback)?;
        if size == 0 || !x.is_finite() || !y.is_finite() {
            return Ok(());
        }

        let color = color.into();
        let scale = size as f32;
        let mut cursor_x = x;

        for glyph in glyphs {
            for (row, col) in glyph.lit_pixels() {
                let block_x = cursor_x + col as f32 * scale;
                let block_y = y + (Glyph::HEIGHT - 1 - row) as f32 * scale;
                for dy in 0..size {
                    for dx in 0..size {
                        self.draw_point(
                            block_x + dx as f32 + 0.5,
                            block_y + dy as f32 + 0.5,
                            1.0,
                            color,
                            false,
                        );
                    }
                }
            }
            cursor_x += Glyph::WIDTH as f32 * scale;
        }

        Ok(())
    }

    /// Box `draw_text` would cover, honoring the current `GlyphFallback`.
    pub fn text_bounds(&self, x: f32, y: f32, text: &str, size: u32) -> Result<Rect, DrawError> {
        let glyphs = glyph::resolve(text, self.glyph_fallback)?;
        let scale = size as f32;
        Ok(Rect::new(
            x,
            y,
            glyphs.len() as f32 * Glyph::WIDTH as f32 * scale,
            Glyph::HEIGHT as f32 * scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::coords::Vec2;
    use crate::raster::{Recorder, Topology};
    use crate::text::GlyphFallback;

    use super::*;

    fn canvas() -> Canvas<Recorder> {
        Canvas::new(Recorder::new(), 320, 240)
    }

    /// Recorded point centers, floored to integer pixel offsets.
    fn pixels(c: &Canvas<Recorder>) -> BTreeSet<(i32, i32)> {
        c.backend()
            .calls()
            .iter()
            .map(|call| {
                assert_eq!(call.topology, Topology::Points);
                let Vec2 { x, y } = call.vertices[0];
                (x.floor() as i32, y.floor() as i32)
            })
            .collect()
    }

    fn expected_pixels(ch: char, origin_x: i32, size: i32) -> BTreeSet<(i32, i32)> {
        let glyph = Glyph::get(ch).unwrap();
        let mut out = BTreeSet::new();
        for (row, col) in glyph.lit_pixels() {
            for dy in 0..size {
                for dx in 0..size {
                    out.insert((
                        origin_x + col as i32 * size + dx,
                        (7 - row as i32) * size + dy,
                    ));
                }
            }
        }
        out
    }

    // ── emission ──────────────────────────────────────────────────────────

    #[test]
    fn letter_a_matches_bitmap() {
        let mut c = canvas();
        c.draw_text(0.0, 0.0, "A", 1, 0xFFFFFF).unwrap();

        assert_eq!(pixels(&c), expected_pixels('A', 0, 1));
        assert_eq!(c.backend().calls().len(), 30);

        // Top row 0x38: columns 2..=4 at the top of the cell.
        let top: Vec<i32> = pixels(&c).iter().filter(|p| p.1 == 7).map(|p| p.0).collect();
        assert_eq!(top, vec![2, 3, 4]);
        // Bottom row is blank.
        assert!(pixels(&c).iter().all(|p| p.1 != 0));
    }

    #[test]
    fn points_are_unsmoothed_unit_points() {
        let mut c = canvas();
        c.draw_text(0.0, 0.0, "H", 2, 0x123456).unwrap();

        for call in c.backend().calls() {
            assert_eq!(call.attribs.point_size, 1.0);
            assert!(!call.attribs.point_smooth);
            assert_eq!(call.color, Color::from_packed(0x123456));
        }
    }

    #[test]
    fn scale_expands_each_bit_into_a_block() {
        let mut c = canvas();
        c.draw_text(0.0, 0.0, "A", 3, 0xFFFFFF).unwrap();

        assert_eq!(c.backend().calls().len(), 30 * 9);
        assert_eq!(pixels(&c), expected_pixels('A', 0, 3));
    }

    #[test]
    fn advance_is_eight_times_size() {
        for size in [1, 2, 4] {
            let mut c = canvas();
            c.draw_text(0.0, 0.0, "AA", size, 0xFFFFFF).unwrap();

            let advance = 8 * size as i32;
            let mut expected = expected_pixels('A', 0, size as i32);
            expected.extend(expected_pixels('A', advance, size as i32));
            assert_eq!(pixels(&c), expected, "size={size}");
        }
    }

    #[test]
    fn baseline_offsets_whole_string() {
        let mut c = canvas();
        c.draw_text(100.0, 50.0, "I", 1, 0xFFFFFF).unwrap();

        let shifted: BTreeSet<(i32, i32)> =
            expected_pixels('I', 0, 1).into_iter().map(|(x, y)| (x + 100, y + 50)).collect();
        assert_eq!(pixels(&c), shifted);
    }

    #[test]
    fn empty_or_blank_text_draws_nothing() {
        let mut c = canvas();
        c.draw_text(0.0, 0.0, "", 1, 0xFFFFFF).unwrap();
        c.draw_text(0.0, 0.0, "   ", 1, 0xFFFFFF).unwrap();
        c.draw_text(0.0, 0.0, "A", 0, 0xFFFFFF).unwrap();
        assert!(c.backend().calls().is_empty());
    }

    // ── fallback ──────────────────────────────────────────────────────────

    #[test]
    fn placeholder_draws_question_mark() {
        let mut c = canvas();
        c.draw_text(0.0, 0.0, "\u{7F}", 1, 0xFFFFFF).unwrap();
        assert_eq!(pixels(&c), expected_pixels('?', 0, 1));
    }

    #[test]
    fn skip_closes_the_gap() {
        let mut c = canvas();
        c.set_glyph_fallback(GlyphFallback::Skip);
        c.draw_text(0.0, 0.0, "é!", 1, 0xFFFFFF).unwrap();
        assert_eq!(pixels(&c), expected_pixels('!', 0, 1));
    }

    #[test]
    fn reject_draws_nothing() {
        let mut c = canvas();
        c.set_glyph_fallback(GlyphFallback::Reject);
        let err = c.draw_text(0.0, 0.0, "ok\tno", 1, 0xFFFFFF).unwrap_err();
        assert_eq!(err, DrawError::UnsupportedChar { ch: '\t', index: 2 });
        assert!(c.backend().calls().is_empty());
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounds_cover_every_glyph_cell() {
        let c = canvas();
        let r = c.text_bounds(10.0, 20.0, "abc", 2).unwrap();
        assert_eq!(r, Rect::new(10.0, 20.0, 48.0, 16.0));
    }
}
