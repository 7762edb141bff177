use crate::coords::{Projection, Rect, Vec2};
use crate::paint::Color;
use crate::text::GlyphFallback;

use super::geometry::{self, MAX_SIDES, MIN_SIDES};
use super::state::AttribScope;
use super::{Backend, DrawCall, DrawError, RenderState, Topology};

/// Immediate-mode drawing surface over a `Backend`.
///
/// Coordinates are device pixels with the origin at the bottom-left and +Y up.
/// Every `draw_*` call either submits exactly one `DrawCall` or, for degenerate
/// input, nothing at all. Sub-pixel coordinates are passed through unrounded.
pub struct Canvas<B: Backend> {
    backend: B,
    pub(crate) state: RenderState,
    projection: Projection,
    pub(crate) glyph_fallback: GlyphFallback,
}

impl<B: Backend> Canvas<B> {
    /// Wraps `backend` and configures it for a `width × height` surface.
    pub fn new(backend: B, width: u32, height: u32) -> Self {
        let mut canvas = Self {
            backend,
            state: RenderState::default(),
            projection: Projection::default(),
            glyph_fallback: GlyphFallback::default(),
        };
        canvas.configure_surface(width, height);
        canvas
    }

    /// Re-establishes the orthographic pixel mapping for new surface dimensions.
    ///
    /// Must be called on every resize; stale dimensions stretch the output.
    pub fn configure_surface(&mut self, width: u32, height: u32) {
        self.projection = Projection::ortho(width, height);
        self.backend.configure(&self.projection);
        log::debug!("surface configured: {}x{}", self.projection.width(), self.projection.height());
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    #[inline]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    #[inline]
    pub fn glyph_fallback(&self) -> GlyphFallback {
        self.glyph_fallback
    }

    /// Chooses what `draw_text` does with characters missing from the glyph table.
    #[inline]
    pub fn set_glyph_fallback(&mut self, fallback: GlyphFallback) {
        self.glyph_fallback = fallback;
    }

    /// Filled axis-aligned quad with its bottom-left corner at `(x, y)`.
    ///
    /// Negative sizes flip the quad; a zero size draws nothing.
    pub fn draw_quad(&mut self, x: f32, y: f32, width: f32, height: f32, color: impl Into<Color>) {
        let rect = Rect::new(x, y, width, height);
        if !rect.is_finite() || rect.is_empty() {
            return;
        }
        self.emit(Topology::Quads, geometry::quad(x, y, width, height), color.into());
    }

    /// Square point of side `size` centered on `(x, y)`; round with soft edges when `smooth`.
    ///
    /// Point attributes revert after the call.
    pub fn draw_point(&mut self, x: f32, y: f32, size: f32, color: impl Into<Color>, smooth: bool) {
        if !Vec2::new(x, y).is_finite() || !size.is_finite() || size <= 0.0 {
            return;
        }
        let color = color.into();

        let mut scope = AttribScope::new(self);
        let attribs = scope.attribs_mut();
        attribs.point_size = size;
        attribs.point_smooth = smooth;
        scope.emit(Topology::Points, geometry::point(x, y), color);
    }

    /// Line segment of thickness `width`; anti-aliased across its width when `smooth`.
    ///
    /// Line attributes revert after the call.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: impl Into<Color>,
        smooth: bool,
    ) {
        let (a, b) = (Vec2::new(x1, y1), Vec2::new(x2, y2));
        if !a.is_finite() || !b.is_finite() || !width.is_finite() || width <= 0.0 || a == b {
            return;
        }
        let color = color.into();

        let mut scope = AttribScope::new(self);
        let attribs = scope.attribs_mut();
        attribs.line_width = width;
        attribs.line_smooth = smooth;
        scope.emit(Topology::Lines, geometry::line(x1, y1, x2, y2), color);
    }

    /// Filled circle tessellated as a triangle fan with `sides` perimeter segments.
    ///
    /// `sides` outside `3..=MAX_SIDES` is rejected before anything is drawn. A zero
    /// radius draws nothing.
    pub fn draw_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        color: impl Into<Color>,
        sides: u32,
    ) -> Result<(), DrawError> {
        if sides < MIN_SIDES {
            return Err(DrawError::TooFewSides { sides });
        }
        if sides > MAX_SIDES {
            return Err(DrawError::TooManySides { sides, max: MAX_SIDES });
        }
        let center = Vec2::new(x, y);
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return Ok(());
        }
        self.emit(
            Topology::TriangleFan,
            geometry::circle_fan(center, radius, sides),
            color.into(),
        );
        Ok(())
    }

    /// Loads the color register, then hands one call to the backend.
    pub(crate) fn emit(&mut self, topology: Topology, vertices: Vec<Vec2>, color: Color) {
        self.state.set_color(color);
        self.backend.submit(DrawCall {
            topology,
            vertices,
            color: self.state.color,
            attribs: self.state.attribs,
        });
    }
}
