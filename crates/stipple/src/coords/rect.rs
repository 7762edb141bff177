use super::Vec2;

/// Axis-aligned rectangle in device pixels (bottom-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Smallest rectangle containing every point, or `None` for an empty slice.
    pub fn bounding(points: &[Vec2]) -> Option<Rect> {
        let first = *points.first()?;
        let (mut lo, mut hi) = (first, first);
        for p in &points[1..] {
            lo.x = lo.x.min(p.x);
            lo.y = lo.y.min(p.y);
            hi.x = hi.x.max(p.x);
            hi.y = hi.y.max(p.y);
        }
        Some(Rect::new(lo.x, lo.y, hi.x - lo.x, hi.y - lo.y))
    }

    #[inline]
    pub fn area(self) -> f32 {
        (self.size.x * self.size.y).abs()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Corners counter-clockwise from `origin`: bottom-left, bottom-right, top-right, top-left.
    ///
    /// Negative sizes are not normalized; the winding flips with the sign instead.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let Vec2 { x, y } = self.origin;
        let Vec2 { x: w, y: h } = self.size;
        [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    #[test]
    fn normalized_negative_height() {
        let n = r(0.0, 10.0, 5.0, -3.0).normalized();
        assert_eq!(n.origin.y, 7.0);
        assert_eq!(n.size.y, 3.0);
    }

    // ── bounding ──────────────────────────────────────────────────────────

    #[test]
    fn bounding_of_corners_is_the_rect() {
        let rect = r(2.0, 3.0, 10.0, 20.0);
        assert_eq!(Rect::bounding(&rect.corners()), Some(rect));
    }

    #[test]
    fn bounding_of_flipped_corners_is_normalized() {
        let rect = r(10.0, 10.0, -4.0, -6.0);
        assert_eq!(Rect::bounding(&rect.corners()), Some(rect.normalized()));
    }

    #[test]
    fn bounding_empty_slice_is_none() {
        assert!(Rect::bounding(&[]).is_none());
    }

    // ── area / is_empty ───────────────────────────────────────────────────

    #[test]
    fn area_ignores_orientation() {
        assert_eq!(r(0.0, 0.0, -3.0, 4.0).area(), 12.0);
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, -1.0, 1.0).is_empty());
    }
}
