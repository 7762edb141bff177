//! Expansion of `DrawCall`s into triangle lists.
//!
//! wgpu only rasterizes triangles (and 1px points/lines), so quads, fans, sized
//! points and wide lines are all lowered here. `local` carries shape-space
//! coordinates the fragment shader uses for edge smoothing.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::raster::{DrawCall, Topology};

pub(super) const MODE_FILL: u32 = 0;
pub(super) const MODE_DISC: u32 = 1;
pub(super) const MODE_EDGE: u32 = 2;

/// Extra half-width given to smoothed lines so the soft edge has room.
const LINE_FRINGE: f32 = 0.5;

/// Vertex layout (36 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  color  [f32; 4]   loc 1
///  offset 24  local  [f32; 2]   loc 2
///  offset 32  mode   u32        loc 3
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct PrimVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
    pub local: [f32; 2],
    pub mode: u32,
}

impl PrimVertex {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4, // color
        2 => Float32x2, // local
        3 => Uint32     // mode
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PrimVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Appends the triangles for `call` to `out` and returns how many vertices were added.
pub(super) fn tessellate(call: &DrawCall, out: &mut Vec<PrimVertex>) -> usize {
    let start = out.len();
    let color = call.color.to_rgba();
    let v = &call.vertices;

    match call.topology {
        Topology::Quads => {
            for q in v.chunks_exact(4) {
                push_quad(out, [q[0], q[1], q[2], q[3]], [[0.0; 2]; 4], color, MODE_FILL);
            }
        }

        Topology::TriangleFan => {
            if v.len() >= 3 {
                for i in 1..v.len() - 1 {
                    for p in [v[0], v[i], v[i + 1]] {
                        out.push(vertex(p, [0.0; 2], color, MODE_FILL));
                    }
                }
            }
        }

        Topology::Points => {
            let half = call.attribs.point_size * 0.5;
            if half > 0.0 {
                let mode = if call.attribs.point_smooth { MODE_DISC } else { MODE_FILL };
                for &p in v {
                    let corners = [
                        p + Vec2::new(-half, -half),
                        p + Vec2::new(half, -half),
                        p + Vec2::new(half, half),
                        p + Vec2::new(-half, half),
                    ];
                    let local = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
                    push_quad(out, corners, local, color, mode);
                }
            }
        }

        Topology::Lines => {
            let smooth = call.attribs.line_smooth;
            let half = call.attribs.line_width * 0.5 + if smooth { LINE_FRINGE } else { 0.0 };
            let mode = if smooth { MODE_EDGE } else { MODE_FILL };
            if half > 0.0 {
                for seg in v.chunks_exact(2) {
                    let (a, b) = (seg[0], seg[1]);
                    let Some(dir) = (b - a).try_normalize() else { continue };
                    let n = dir.perp() * half;
                    let corners = [a - n, b - n, b + n, a + n];
                    let local = [[0.0, -1.0], [1.0, -1.0], [1.0, 1.0], [0.0, 1.0]];
                    push_quad(out, corners, local, color, mode);
                }
            }
        }
    }

    out.len() - start
}

#[inline]
fn vertex(p: Vec2, local: [f32; 2], color: [f32; 4], mode: u32) -> PrimVertex {
    PrimVertex { pos: p.to_array(), color, local, mode }
}

fn push_quad(
    out: &mut Vec<PrimVertex>,
    corners: [Vec2; 4],
    local: [[f32; 2]; 4],
    color: [f32; 4],
    mode: u32,
) {
    for i in [0, 1, 2, 0, 2, 3] {
        out.push(vertex(corners[i], local[i], color, mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::raster::{geometry, Attribs};

    fn call(topology: Topology, vertices: Vec<Vec2>, attribs: Attribs) -> DrawCall {
        DrawCall { topology, vertices, color: Color::WHITE, attribs }
    }

    fn run(c: &DrawCall) -> Vec<PrimVertex> {
        let mut out = Vec::new();
        let n = tessellate(c, &mut out);
        assert_eq!(n, out.len());
        out
    }

    #[test]
    fn vertex_is_36_bytes() {
        assert_eq!(std::mem::size_of::<PrimVertex>(), 36);
    }

    #[test]
    fn quad_becomes_two_triangles() {
        let out = run(&call(Topology::Quads, geometry::quad(0.0, 0.0, 4.0, 2.0), Attribs::default()));
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|v| v.mode == MODE_FILL && v.color == [1.0; 4]));
    }

    #[test]
    fn fan_becomes_one_triangle_per_side() {
        for sides in [3u32, 6, 360] {
            let fan = geometry::circle_fan(Vec2::new(5.0, 5.0), 3.0, sides);
            let out = run(&call(Topology::TriangleFan, fan, Attribs::default()));
            assert_eq!(out.len(), sides as usize * 3);
            assert!(out.chunks(3).all(|t| t[0].pos == [5.0, 5.0]));
        }
    }

    #[test]
    fn point_expands_to_square_of_its_size() {
        let attribs = Attribs { point_size: 4.0, ..Attribs::default() };
        let out = run(&call(Topology::Points, geometry::point(10.0, 10.0), attribs));
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].pos, [8.0, 8.0]);
        assert_eq!(out[2].pos, [12.0, 12.0]);
        assert_eq!(out[0].mode, MODE_FILL);
    }

    #[test]
    fn smooth_point_is_a_disc() {
        let attribs = Attribs { point_size: 4.0, point_smooth: true, ..Attribs::default() };
        let out = run(&call(Topology::Points, geometry::point(0.0, 0.0), attribs));
        assert!(out.iter().all(|v| v.mode == MODE_DISC));
    }

    #[test]
    fn line_expands_across_its_width() {
        let attribs = Attribs { line_width: 2.0, ..Attribs::default() };
        let out = run(&call(Topology::Lines, geometry::line(0.0, 0.0, 10.0, 0.0), attribs));
        assert_eq!(out.len(), 6);
        let ys: Vec<f32> = out.iter().map(|v| v.pos[1]).collect();
        assert!(ys.iter().all(|y| y.abs() == 1.0));
    }

    #[test]
    fn smooth_line_gains_fringe() {
        let attribs = Attribs { line_width: 2.0, line_smooth: true, ..Attribs::default() };
        let out = run(&call(Topology::Lines, geometry::line(0.0, 0.0, 0.0, 10.0), attribs));
        assert!(out.iter().all(|v| v.mode == MODE_EDGE));
        assert!(out.iter().all(|v| v.pos[0].abs() == 1.0 + LINE_FRINGE));
    }

    #[test]
    fn zero_length_line_emits_nothing() {
        let out = run(&call(Topology::Lines, geometry::line(3.0, 3.0, 3.0, 3.0), Attribs::default()));
        assert!(out.is_empty());
    }

    #[test]
    fn zero_size_point_emits_nothing() {
        let attribs = Attribs { point_size: 0.0, ..Attribs::default() };
        assert!(run(&call(Topology::Points, geometry::point(1.0, 1.0), attribs)).is_empty());
    }
}
