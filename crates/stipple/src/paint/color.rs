/// RGB intensities in `[0, 1]`, fully opaque.
///
/// Decoded from packed `0x00RRGGBB` values; bits above 23 are ignored.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_packed(0x00_00_00);
    pub const WHITE: Color = Color::from_packed(0xFF_FF_FF);
    pub const RED: Color = Color::from_packed(0xFF_00_00);
    pub const GREEN: Color = Color::from_packed(0x00_FF_00);
    pub const BLUE: Color = Color::from_packed(0x00_00_FF);
    pub const YELLOW: Color = Color::from_packed(0xFF_FF_00);
    pub const CYAN: Color = Color::from_packed(0x00_FF_FF);
    pub const MAGENTA: Color = Color::from_packed(0xFF_00_FF);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decodes a packed `0x00RRGGBB` color.
    ///
    /// Red is bits 16–23, green 8–15, blue 0–7; each channel is divided by 255.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as f32 / 255.0,
            g: ((packed >> 8) & 0xFF) as f32 / 255.0,
            b: (packed & 0xFF) as f32 / 255.0,
        }
    }

    /// Re-encodes to `0x00RRGGBB`, rounding each channel to the nearest byte.
    #[inline]
    pub fn to_packed(self) -> u32 {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.r) << 16) | (byte(self.g) << 8) | byte(self.b)
    }

    /// Straight RGBA with `a = 1`, as the GPU vertex format expects.
    #[inline]
    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(packed: u32) -> Self {
        Color::from_packed(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_split_by_byte() {
        let c = Color::from_packed(0x33_66_99);
        assert_eq!(c.r, 0x33 as f32 / 255.0);
        assert_eq!(c.g, 0x66 as f32 / 255.0);
        assert_eq!(c.b, 0x99 as f32 / 255.0);
    }

    #[test]
    fn high_byte_is_ignored() {
        assert_eq!(Color::from_packed(0xAB_12_34_56), Color::from_packed(0x12_34_56));
    }

    #[test]
    fn extremes_are_zero_and_one() {
        assert_eq!(Color::BLACK, Color::new(0.0, 0.0, 0.0));
        assert_eq!(Color::WHITE, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn round_trip_recovers_rgb_bits() {
        // Every channel value, in each channel position.
        for v in 0u32..=255 {
            for packed in [v << 16, v << 8, v, (v << 16) | ((255 - v) << 8) | (v ^ 0x5A)] {
                assert_eq!(Color::from_packed(packed).to_packed(), packed);
            }
        }
    }

    #[test]
    fn round_trip_masks_upper_bits() {
        assert_eq!(Color::from_packed(0xFF_C0_FF_EE).to_packed(), 0x00_C0_FF_EE);
    }

    #[test]
    fn from_u32_matches_from_packed() {
        assert_eq!(Color::from(0x80_40_20u32), Color::from_packed(0x80_40_20));
    }
}
