use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::Projection;
use crate::paint::Color;
use crate::raster::{Backend, DrawCall};
use crate::render::{RenderCtx, RenderTarget};

use super::tessellate::{tessellate, PrimVertex};

/// wgpu backend for `Canvas`.
///
/// `submit` lowers each call to triangles immediately and remembers its vertex
/// range; `render` uploads the frame's vertices and issues one `draw` per call.
/// Nothing is carried over between frames.
#[derive(Default)]
pub struct PrimitiveRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    projection_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    projection: Projection,
    vertices: Vec<PrimVertex>,
    draws: Vec<Range<u32>>,
}

impl PrimitiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of GPU draws queued for the next `render`.
    pub fn pending_draws(&self) -> usize {
        self.draws.len()
    }

    /// Drops queued draws without rendering them (e.g. when a frame is skipped).
    pub fn discard(&mut self) {
        self.vertices.clear();
        self.draws.clear();
    }

    /// Clears `target` to `clear` and replays every queued draw into it.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, clear: Color) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_projection_uniform(ctx);

        if !self.vertices.is_empty() {
            self.ensure_vertex_capacity(ctx, self.vertices.len());
            if let Some(vbo) = self.vertex_vbo.as_ref() {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));
            }
        }

        {
            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stipple primitive pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let (Some(pipeline), Some(bind_group), Some(vbo)) = (
                self.pipeline.as_ref(),
                self.bind_group.as_ref(),
                self.vertex_vbo.as_ref(),
            ) {
                if !self.draws.is_empty() {
                    rpass.set_pipeline(pipeline);
                    rpass.set_bind_group(0, bind_group, &[]);
                    rpass.set_vertex_buffer(0, vbo.slice(..));
                    for range in &self.draws {
                        rpass.draw(range.clone(), 0..1);
                    }
                }
            }
        }

        self.discard();
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("creating primitive pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stipple primitive shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/primitive.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("stipple primitive bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<ProjectionUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("stipple primitive pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("stipple primitive pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PrimVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Negative quad sizes flip winding; both faces must draw.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.projection_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.projection_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let projection_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("stipple projection ubo"),
            size: std::mem::size_of::<ProjectionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("stipple primitive bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_ubo.as_entire_binding(),
            }],
        });

        self.projection_ubo = Some(projection_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_projection_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.projection_ubo.as_ref() else { return };
        ctx.queue.write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&ProjectionUniform {
                matrix: self.projection.to_cols_array_2d(),
            }),
        );
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(1024);
        let new_size = (new_cap * std::mem::size_of::<PrimVertex>()) as u64;
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("stipple primitive vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

impl Backend for PrimitiveRenderer {
    fn configure(&mut self, projection: &Projection) {
        self.projection = *projection;
    }

    fn submit(&mut self, call: DrawCall) {
        let start = self.vertices.len() as u32;
        let added = tessellate(&call, &mut self.vertices) as u32;
        if added > 0 {
            self.draws.push(start..start + added);
        }
    }
}

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ProjectionUniform {
    matrix: [[f32; 4]; 4],
}
