use glam::{Mat4, Vec4};

use super::Vec2;

/// Orthographic pixel-space projection.
///
/// Maps the rectangle `[0, width] × [0, height]` (origin bottom-left, +Y up) onto
/// clip space `[-1, 1] × [-1, 1]`, with near/far planes `[0, 1]`. Depth is unused;
/// every vertex is emitted at `z = 0`.
///
/// The model-view transform is always identity: there is no transform stack.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    width: u32,
    height: u32,
    projection: Mat4,
    model_view: Mat4,
}

impl Projection {
    pub const NEAR: f32 = 0.0;
    pub const FAR: f32 = 1.0;

    /// Builds the projection for a surface of `width × height` pixels.
    ///
    /// Zero dimensions (minimized windows) are clamped to 1 so the matrix stays finite.
    pub fn ortho(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            projection: Mat4::orthographic_rh(
                0.0,
                width as f32,
                0.0,
                height as f32,
                Self::NEAR,
                Self::FAR,
            ),
            model_view: Mat4::IDENTITY,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn model_view(&self) -> Mat4 {
        self.model_view
    }

    /// Combined projection × model-view matrix, as uploaded to the shader.
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.projection * self.model_view
    }

    /// Column-major matrix for the GPU uniform.
    #[inline]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.matrix().to_cols_array_2d()
    }

    /// Maps a pixel-space point to clip space `(x, y)`.
    pub fn to_clip(&self, p: Vec2) -> Vec2 {
        let clip = self.matrix() * Vec4::new(p.x, p.y, 0.0, 1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::ortho(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn origin_maps_to_bottom_left_clip_corner() {
        let p = Projection::ortho(800, 600);
        assert!(close(p.to_clip(Vec2::zero()), Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn size_maps_to_far_clip_corner() {
        let p = Projection::ortho(800, 600);
        assert!(close(p.to_clip(Vec2::new(800.0, 600.0)), Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn center_maps_to_clip_origin() {
        let p = Projection::ortho(640, 480);
        assert!(close(p.to_clip(Vec2::new(320.0, 240.0)), Vec2::zero()));
    }

    #[test]
    fn resize_moves_far_corner() {
        let before = Projection::ortho(800, 600);
        let after = Projection::ortho(1024, 768);

        assert!(close(after.to_clip(Vec2::new(1024.0, 768.0)), Vec2::new(1.0, 1.0)));
        assert!(!close(after.to_clip(Vec2::new(800.0, 600.0)), Vec2::new(1.0, 1.0)));
        assert_ne!(before, after);
    }

    #[test]
    fn depth_stays_inside_clip_range() {
        let p = Projection::ortho(100, 100);
        let z = (p.matrix() * Vec4::new(50.0, 50.0, 0.0, 1.0)).z;
        assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn model_view_is_identity() {
        assert_eq!(Projection::ortho(10, 20).model_view(), Mat4::IDENTITY);
    }

    #[test]
    fn zero_size_is_clamped() {
        let p = Projection::ortho(0, 0);
        assert_eq!((p.width(), p.height()), (1, 1));
        assert!(p.to_clip(Vec2::new(1.0, 1.0)).is_finite());
    }
}
