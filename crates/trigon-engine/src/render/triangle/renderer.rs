use std::fmt::Display;

use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::core::FrameCtx;
use crate::paint::Color;
use crate::render::{FrameOutcome, RenderCtx, RenderTarget};

use super::{DrawCall, Presenter, Uniforms, Vertex, TRIANGLE_VERTICES};

/// Binding index of the uniform block, shared by both stages.
const UNIFORMS_BINDING: u32 = 1;

/// Triangle renderer.
///
/// Owns the pipeline, the vertex buffer and the uniform buffer. All of them are
/// created in [`new`](Self::new) and live as long as the renderer; nothing is
/// rebuilt per frame.
pub struct TriangleRenderer {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
}

impl TriangleRenderer {
    /// Uploads the geometry, allocates the uniform buffer and compiles the
    /// program for `ctx.surface_format`.
    ///
    /// Shader compilation and pipeline validation errors are captured and
    /// returned instead of reaching wgpu's uncaptured-error handler.
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self> {
        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trigon triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("trigon triangle bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: UNIFORMS_BINDING,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(Uniforms::SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("trigon triangle pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trigon triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vertex_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fragment_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
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

        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon triangle vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Contents are overwritten before the first draw reads them.
        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("trigon triangle ubo"),
            size: Uniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("trigon triangle bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: UNIFORMS_BINDING,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        validation_result(pollster::block_on(scope.pop()))?;
        log::debug!("triangle pipeline compiled for {:?}", ctx.surface_format);

        Ok(Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            vertex_buffer,
            uniform_buffer,
        })
    }

    /// Surface format the pipeline was compiled for.
    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Overwrites the whole uniform block.
    ///
    /// The copy is queued ahead of the next submission, so the draw recorded
    /// after it reads these values.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &Uniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, uniforms.as_bytes());
    }

    /// Records one pass drawing the triangle into `target`.
    pub fn encode(&self, target: &mut RenderTarget<'_>, draw: DrawCall) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: target.load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(draw.vertices(), 0..1);
    }
}

/// [`Presenter`] backed by the window's surface.
pub struct GpuPresenter<'r, 'c, 'a, 'w> {
    renderer: &'r TriangleRenderer,
    frame: &'c mut FrameCtx<'a, 'w>,
    clear: Color,
}

impl<'r, 'c, 'a, 'w> GpuPresenter<'r, 'c, 'a, 'w> {
    pub fn new(renderer: &'r TriangleRenderer, frame: &'c mut FrameCtx<'a, 'w>, clear: Color) -> Self {
        Self {
            renderer,
            frame,
            clear,
        }
    }
}

impl Presenter for GpuPresenter<'_, '_, '_, '_> {
    fn write_uniforms(&mut self, uniforms: &Uniforms) {
        self.renderer.write_uniforms(self.frame.gpu.queue(), uniforms);
    }

    fn present(&mut self, draw: DrawCall) -> FrameOutcome {
        let renderer = self.renderer;
        self.frame
            .render(self.clear, |target| renderer.encode(target, draw))
    }
}

/// Turns the error captured by a validation scope into a setup failure.
fn validation_result<E: Display>(captured: Option<E>) -> Result<()> {
    match captured {
        Some(err) => anyhow::bail!("triangle pipeline failed validation: {err}"),
        None => Ok(()),
    }
}
