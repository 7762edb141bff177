//! Pure vertex builders for each primitive.
//!
//! These do no validation beyond what their signatures imply; `Canvas` filters
//! degenerate and invalid input before calling them.

use std::f32::consts::TAU;

use crate::coords::{Rect, Vec2};

/// Fewest sides a tessellated circle may have.
pub const MIN_SIDES: u32 = 3;

/// Most sides a tessellated circle may have; bounds the fan's allocation.
pub const MAX_SIDES: u32 = 65_536;

/// Sides used when a caller wants a visually smooth circle.
pub const SMOOTH_SIDES: u32 = 360;

/// Quad corners: bottom-left, bottom-right, top-right, top-left.
#[inline]
pub fn quad(x: f32, y: f32, width: f32, height: f32) -> Vec<Vec2> {
    Rect::new(x, y, width, height).corners().to_vec()
}

#[inline]
pub fn point(x: f32, y: f32) -> Vec<Vec2> {
    vec![Vec2::new(x, y)]
}

#[inline]
pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Vec<Vec2> {
    vec![Vec2::new(x1, y1), Vec2::new(x2, y2)]
}

/// Triangle-fan approximation of a filled circle.
///
/// Returns `sides + 2` vertices: the center, then perimeter points at angle
/// `i * 2π / sides` for `i` in `1..=sides`, then the first perimeter point again,
/// which closes the fan. `sides` must lie in `MIN_SIDES..=MAX_SIDES`.
pub fn circle_fan(center: Vec2, radius: f32, sides: u32) -> Vec<Vec2> {
    debug_assert!((MIN_SIDES..=MAX_SIDES).contains(&sides));
    let step = TAU / sides as f32;
    let mut vertices = Vec::with_capacity(sides as usize + 2);
    vertices.push(center);
    vertices.extend(
        (1..=sides)
            .chain(std::iter::once(1))
            .map(|i| center + Vec2::from_polar(radius, i as f32 * step)),
    );
    vertices
}

/// Signed area of a simple polygon (shoelace); positive when counter-clockwise.
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── quad ──────────────────────────────────────────────────────────────

    #[test]
    fn quad_is_four_ccw_corners() {
        let v = quad(0.0, 0.0, 30.0, 20.0);
        assert_eq!(
            v,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(30.0, 0.0),
                Vec2::new(30.0, 20.0),
                Vec2::new(0.0, 20.0),
            ]
        );
        assert_eq!(signed_area(&v), 600.0);
    }

    #[test]
    fn quad_with_zero_side_has_zero_area() {
        assert_eq!(signed_area(&quad(5.0, 5.0, 0.0, 20.0)), 0.0);
        assert_eq!(signed_area(&quad(5.0, 5.0, 20.0, 0.0)), 0.0);
    }

    #[test]
    fn negative_width_flips_instead_of_failing() {
        let v = quad(10.0, 0.0, -10.0, 5.0);
        assert_eq!(v[0], Vec2::new(10.0, 0.0));
        assert_eq!(v[1], Vec2::new(0.0, 0.0));
        assert_eq!(signed_area(&v), -50.0);
        assert_eq!(Rect::bounding(&v), Some(Rect::new(0.0, 0.0, 10.0, 5.0)));
    }

    #[test]
    fn sub_pixel_coordinates_pass_through() {
        let v = quad(0.25, 0.75, 1.5, 2.5);
        assert_eq!(v[2], Vec2::new(1.75, 3.25));
    }

    // ── circle ────────────────────────────────────────────────────────────

    fn check_fan(sides: u32) {
        let center = Vec2::new(100.0, 50.0);
        let radius = 25.0;
        let v = circle_fan(center, radius, sides);

        assert_eq!(v.len(), sides as usize + 2);
        assert_eq!(v[0], center);

        for p in &v[1..] {
            assert!((p.distance(center) - radius).abs() < 1e-3, "sides={sides}");
        }

        let step = TAU / sides as f32;
        for pair in v[1..].windows(2) {
            let a = pair[0] - center;
            let b = pair[1] - center;
            let angle = (a.x * b.y - a.y * b.x).atan2(a.x * b.x + a.y * b.y);
            assert!((angle - step).abs() < 1e-3, "sides={sides} angle={angle}");
        }

        assert_eq!(v[1], v[sides as usize + 1], "fan does not close for sides={sides}");
    }

    #[test]
    fn fan_triangle() {
        check_fan(3);
    }

    #[test]
    fn fan_square() {
        check_fan(4);
    }

    #[test]
    fn fan_hexagon() {
        check_fan(6);
    }

    #[test]
    fn fan_smooth() {
        check_fan(SMOOTH_SIDES);
    }

    #[test]
    fn fan_at_max_sides() {
        let v = circle_fan(Vec2::zero(), 10.0, MAX_SIDES);
        assert_eq!(v.len(), MAX_SIDES as usize + 2);
        assert_eq!(v[1], v[MAX_SIDES as usize + 1]);
    }

    #[test]
    fn first_perimeter_point_is_one_step_from_x_axis() {
        let v = circle_fan(Vec2::zero(), 1.0, 4);
        assert!((v[1].x - 0.0).abs() < 1e-6);
        assert!((v[1].y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let v = circle_fan(Vec2::new(3.0, 4.0), 0.0, 8);
        assert!(v.iter().all(|p| *p == Vec2::new(3.0, 4.0)));
    }

    // ── signed_area ───────────────────────────────────────────────────────

    #[test]
    fn hexagon_area_matches_formula() {
        let v = circle_fan(Vec2::zero(), 2.0, 6);
        let area = signed_area(&v[1..=6]);
        let expected = 3.0 * 3f32.sqrt() / 2.0 * 4.0;
        assert!((area - expected).abs() < 1e-3);
    }
}
