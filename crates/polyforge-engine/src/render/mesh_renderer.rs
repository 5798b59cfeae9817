use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::mesh::{fan_indices, Mesh, Topology};
use crate::paint::Rgba;
use crate::render::{RenderCtx, RenderTarget};

use super::error::RenderError;
use super::program::{Program, FRAGMENT_ENTRY, VERTEX_ENTRY};
use super::vertex::{buffer_layouts, ModelUniform};

/// Renderer construction options.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Depth attachment format.
    pub depth_format: wgpu::TextureFormat,
    /// Initial depth-test state; toggle later with [`MeshRenderer::set_depth_test`].
    pub depth_test: bool,
    /// Back-face culling. Off by default so flat shapes show from both sides.
    pub cull_mode: Option<wgpu::Face>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            depth_format: wgpu::TextureFormat::Depth32Float,
            depth_test: false,
            cull_mode: None,
        }
    }
}

struct Pipelines {
    format: wgpu::TextureFormat,
    depth_tested: wgpu::RenderPipeline,
    depth_ignored: wgpu::RenderPipeline,
}

struct DepthTarget {
    size: (u32, u32),
    view: wgpu::TextureView,
    /// Frame whose first pass last cleared it.
    cleared_in: Option<u64>,
}

/// Draws colored triangle meshes.
///
/// Every draw call records its own render pass that loads the current color
/// and depth contents, so draws compose in call order within a frame. Buffers
/// are uploaded per call; nothing is retained between draws.
pub struct MeshRenderer {
    config: RendererConfig,
    program: Program,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    pipelines: Pipelines,
    depth: Option<DepthTarget>,
    depth_test: bool,
}

impl MeshRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self, RenderError> {
        Self::with_config(ctx, RendererConfig::default())
    }

    /// Compiles and links the mesh program, then builds the pipelines.
    ///
    /// Shader diagnostics surface as [`RenderError::ShaderCompile`] or
    /// [`RenderError::ProgramLink`]; nothing is created on the device in that case.
    pub fn with_config(ctx: &RenderCtx<'_>, config: RendererConfig) -> Result<Self, RenderError> {
        let program = Program::mesh()?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("polyforge mesh bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(ModelUniform::SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("polyforge mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipelines = create_pipelines(ctx, &program, &pipeline_layout, &config);
        let depth_test = config.depth_test;

        Ok(Self {
            config,
            program,
            bind_group_layout,
            pipeline_layout,
            pipelines,
            depth: None,
            depth_test,
        })
    }

    /// Enables or disables depth testing for subsequent draws.
    pub fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Fills the color target with `color` and resets depth to the far plane.
    pub fn clear(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, color: Rgba) {
        self.ensure_depth(ctx);
        let Some(depth) = self.depth.as_mut() else { return };
        depth.cleared_in = Some(target.frame);

        let _rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("polyforge clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    /// Draws a non-indexed vertex stream with the identity transform.
    ///
    /// # Panics
    /// If `positions` and `colors` differ in length.
    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        positions: &[[f32; 3]],
        colors: &[[f32; 3]],
        mode: Topology,
    ) {
        assert_eq!(
            positions.len(),
            colors.len(),
            "draw: one color per position required"
        );

        match mode {
            Topology::TriangleList => {
                self.submit(ctx, target, positions, colors, None, Mat4::IDENTITY);
            }
            Topology::TriangleFan => {
                let indices = fan_indices(positions.len() as u32);
                self.submit(
                    ctx,
                    target,
                    positions,
                    colors,
                    Some(indices.as_slice()),
                    Mat4::IDENTITY,
                );
            }
        }
    }

    /// Draws an indexed mesh under `transform` (identity when `None`).
    ///
    /// `mode` tells how the index list assembles into triangles; fans are
    /// rewritten to a list before upload.
    ///
    /// # Panics
    /// If `positions` and `colors` differ in length.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_3d(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        positions: &[[f32; 3]],
        colors: &[[f32; 3]],
        indices: &[u32],
        transform: Option<Mat4>,
        mode: Topology,
    ) {
        assert_eq!(
            positions.len(),
            colors.len(),
            "draw_3d: one color per position required"
        );

        let transform = transform.unwrap_or(Mat4::IDENTITY);
        match mode {
            Topology::TriangleList => {
                self.submit(ctx, target, positions, colors, Some(indices), transform);
            }
            Topology::TriangleFan => {
                let list = fan_over(indices);
                self.submit(ctx, target, positions, colors, Some(list.as_slice()), transform);
            }
        }
    }

    /// Draws a generated mesh, picking the indexed or non-indexed path.
    pub fn draw_mesh(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &Mesh,
        transform: Option<Mat4>,
    ) {
        match (&mesh.indices, transform) {
            (Some(indices), _) => self.draw_3d(
                ctx,
                target,
                &mesh.positions,
                &mesh.colors,
                indices,
                transform,
                Topology::TriangleList,
            ),
            (None, None) => self.draw(ctx, target, &mesh.positions, &mesh.colors, mesh.topology),
            (None, Some(_)) => {
                let indices = match mesh.topology {
                    Topology::TriangleList => (0..mesh.vertex_count() as u32).collect(),
                    Topology::TriangleFan => fan_indices(mesh.vertex_count() as u32),
                };
                self.draw_3d(
                    ctx,
                    target,
                    &mesh.positions,
                    &mesh.colors,
                    &indices,
                    transform,
                    Topology::TriangleList,
                );
            }
        }
    }

    fn submit(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        positions: &[[f32; 3]],
        colors: &[[f32; 3]],
        indices: Option<&[u32]>,
        transform: Mat4,
    ) {
        let element_count = match indices {
            Some(i) => i.len() - i.len() % 3,
            None => positions.len() - positions.len() % 3,
        };
        if element_count == 0 {
            log::trace!("mesh draw skipped: no complete triangle");
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_depth(ctx);

        let position_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("polyforge mesh positions"),
                contents: bytemuck::cast_slice(positions),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let color_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("polyforge mesh colors"),
                contents: bytemuck::cast_slice(colors),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let ibo = indices.map(|indices| {
            ctx.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("polyforge mesh indices"),
                    contents: bytemuck::cast_slice(&indices[..element_count]),
                    usage: wgpu::BufferUsages::INDEX,
                })
        });

        let model_ubo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("polyforge mesh model ubo"),
                contents: bytemuck::bytes_of(&ModelUniform::new(transform)),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("polyforge mesh bind group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_ubo.as_entire_binding(),
            }],
        });

        let Some(depth) = self.depth.as_mut() else { return };
        let depth_clear = depth_load(&mut depth.cleared_in, target.frame);

        let pipeline = if self.depth_test {
            &self.pipelines.depth_tested
        } else {
            &self.pipelines.depth_ignored
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("polyforge mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: depth_clear,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &bind_group, &[]);
        rpass.set_vertex_buffer(0, position_vbo.slice(..));
        rpass.set_vertex_buffer(1, color_vbo.slice(..));

        match &ibo {
            Some(ibo) => {
                rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..element_count as u32, 0, 0..1);
            }
            None => rpass.draw(0..element_count as u32, 0..1),
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipelines.format == ctx.surface_format {
            return;
        }
        log::debug!(
            "surface format changed to {:?}; rebuilding mesh pipelines",
            ctx.surface_format
        );
        self.pipelines = create_pipelines(ctx, &self.program, &self.pipeline_layout, &self.config);
    }

    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>) {
        if self.depth.as_ref().is_some_and(|d| d.size == ctx.surface_size) {
            return;
        }

        let (width, height) = ctx.surface_size;
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("polyforge depth"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.config.depth_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.depth = Some(DepthTarget {
            size: ctx.surface_size,
            view,
            cleared_in: None,
        });
    }
}

/// Loads depth already cleared this frame; otherwise clears it and records the
/// frame.
fn depth_load(cleared_in: &mut Option<u64>, frame: u64) -> wgpu::LoadOp<f32> {
    if *cleared_in == Some(frame) {
        wgpu::LoadOp::Load
    } else {
        *cleared_in = Some(frame);
        wgpu::LoadOp::Clear(1.0)
    }
}

/// Rewrites a fan over `indices` as a triangle list.
fn fan_over(indices: &[u32]) -> Vec<u32> {
    fan_indices(indices.len() as u32)
        .into_iter()
        .map(|i| indices[i as usize])
        .collect()
}

fn create_pipelines(
    ctx: &RenderCtx<'_>,
    program: &Program,
    layout: &wgpu::PipelineLayout,
    config: &RendererConfig,
) -> Pipelines {
    let vs = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("polyforge mesh vertex shader"),
        source: wgpu::ShaderSource::Wgsl(program.vertex().source().into()),
    });
    let fs = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("polyforge mesh fragment shader"),
        source: wgpu::ShaderSource::Wgsl(program.fragment().source().into()),
    });

    let build = |label: &str, depth_test: bool| {
        ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &buffer_layouts(),
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: config.cull_mode,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: config.depth_format,
                depth_write_enabled: depth_test,
                depth_compare: if depth_test {
                    wgpu::CompareFunction::Less
                } else {
                    wgpu::CompareFunction::Always
                },
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        })
    };

    Pipelines {
        format: ctx.surface_format,
        depth_tested: build("polyforge mesh pipeline (depth)", true),
        depth_ignored: build("polyforge mesh pipeline", false),
    }
}
