use crate::coords::Vec2;
use crate::paint::Color;

/// How a draw call's vertex list is interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Groups of 4 vertices, counter-clockwise from bottom-left.
    Quads,
    /// One point per vertex, sized by `Attribs::point_size`.
    Points,
    /// Pairs of vertices, thickened by `Attribs::line_width`.
    Lines,
    /// Vertex 0 is shared by every triangle `(0, i, i + 1)`.
    TriangleFan,
}

/// Rasterization attributes that point and line calls override for their own duration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Attribs {
    pub point_size: f32,
    pub line_width: f32,
    pub point_smooth: bool,
    pub line_smooth: bool,
}

impl Default for Attribs {
    fn default() -> Self {
        Self {
            point_size: 1.0,
            line_width: 1.0,
            point_smooth: false,
            line_smooth: false,
        }
    }
}

/// One primitive submission: an ephemeral vertex buffer plus the state it is drawn with.
///
/// A backend consumes the call; the vertex list is released when the call is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub topology: Topology,
    pub vertices: Vec<Vec2>,
    pub color: Color,
    pub attribs: Attribs,
}

impl DrawCall {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
