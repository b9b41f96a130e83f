use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::device::DEPTH_FORMAT;
use crate::mesh::{Vertex, CUBE_INDEX_COUNT, CUBE_INDICES, CUBE_VERTICES};
use crate::render::{RenderCtx, RenderTarget};
use crate::transform::{TransformState, TransformUniform};

const SHADER_SRC: &str = include_str!("shaders/cube.wgsl");

/// Draws the vertex-colored cube.
///
/// All GPU resources are created once in [`CubeRenderer::new`] and reused for
/// every frame; only the transform uniform is rewritten per draw.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    transform_ubo: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl CubeRenderer {
    /// Compiles the shader, builds the pipeline and uploads the cube geometry.
    ///
    /// Fails if shader compilation or pipeline validation reports any error.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self> {
        // Captured here instead of reaching the device's panicking default handler.
        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("spincube cube shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });
        let compiled = check_compilation(&shader);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("spincube cube bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<TransformUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("spincube cube pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("spincube cube pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // Face winding in the index table is mixed; rely on depth testing only.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let validation = pollster::block_on(scope.pop());
        compiled?;
        if let Some(err) = validation {
            anyhow::bail!("cube pipeline failed validation: {err}");
        }

        let transform_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("spincube transform ubo"),
            size: std::mem::size_of::<TransformUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("spincube cube bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.as_entire_binding(),
            }],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spincube cube vbo"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spincube cube ibo"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "cube renderer ready: {} vertices, {} indices, format {surface_format:?}",
            CUBE_VERTICES.len(),
            CUBE_INDEX_COUNT
        );

        Ok(Self {
            pipeline,
            bind_group,
            transform_ubo,
            vertex_buffer,
            index_buffer,
        })
    }

    /// Uploads `transforms` and draws the cube into `target`.
    ///
    /// The target is loaded, not cleared; clearing is the frame's job.
    pub fn draw(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        transforms: &TransformState,
    ) {
        ctx.queue
            .write_buffer(&self.transform_ubo, 0, bytemuck::bytes_of(&transforms.uniform()));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("spincube cube pass"),
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
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let (w, h) = (ctx.viewport.width.max(1), ctx.viewport.height.max(1));
        rpass.set_viewport(0.0, 0.0, w as f32, h as f32, 0.0, 1.0);

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..CUBE_INDEX_COUNT, 0, 0..1);
    }
}

/// Logs shader compiler warnings and turns compiler errors into a setup failure.
fn check_compilation(shader: &wgpu::ShaderModule) -> Result<()> {
    let info = pollster::block_on(shader.get_compilation_info());

    let mut errors = Vec::new();
    for msg in &info.messages {
        let at = msg
            .location
            .as_ref()
            .map(|l| format!("{}:{}", l.line_number, l.line_position))
            .unwrap_or_else(|| "?".to_string());

        match msg.message_type {
            wgpu::CompilationMessageType::Error => errors.push(format!("{at}: {}", msg.message)),
            wgpu::CompilationMessageType::Warning => {
                log::warn!("cube shader warning at {at}: {}", msg.message)
            }
            _ => {
                log::debug!("cube shader note at {at}: {}", msg.message)
            }
        }
    }

    anyhow::ensure!(
        errors.is_empty(),
        "cube shader failed to compile:\n{}",
        errors.join("\n")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use naga::valid::{Capabilities, ValidationFlags, Validator};

    use super::*;

    fn parse_shader() -> naga::Module {
        naga::front::wgsl::parse_str(SHADER_SRC)
            .unwrap_or_else(|e| panic!("{}", e.emit_to_string(SHADER_SRC)))
    }

    #[test]
    fn shader_passes_validation() {
        let module = parse_shader();
        Validator::new(ValidationFlags::all(), Capabilities::empty())
            .validate(&module)
            .unwrap_or_else(|e| panic!("{}", e.emit_to_string(SHADER_SRC)));
    }

    #[test]
    fn shader_entry_points_match_pipeline() {
        let module = parse_shader();

        let vs = module
            .entry_points
            .iter()
            .find(|ep| ep.name == "vs_main")
            .expect("vertex entry point");
        assert_eq!(vs.stage, naga::ShaderStage::Vertex);
        assert_eq!(vs.function.arguments.len(), 1);

        let fs = module.entry_points.iter().find(|ep| ep.name == "fs_main");
        assert_eq!(fs.map(|ep| ep.stage), Some(naga::ShaderStage::Fragment));
    }

    #[test]
    fn shader_vertex_inputs_match_vertex_layout() {
        let module = parse_shader();
        let vs = module
            .entry_points
            .iter()
            .find(|ep| ep.name == "vs_main")
            .expect("vertex entry point");

        let arg_ty = &module.types[vs.function.arguments[0].ty];
        let naga::TypeInner::Struct { members, .. } = &arg_ty.inner else {
            panic!("vertex input is not a struct");
        };

        let locations: Vec<u32> = members
            .iter()
            .filter_map(|m| match m.binding {
                Some(naga::Binding::Location { location, .. }) => Some(location),
                _ => None,
            })
            .collect();
        let layout_locations: Vec<u32> =
            Vertex::layout().attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, layout_locations);
    }

    #[test]
    fn shader_uniform_block_matches_transform_uniform() {
        let module = parse_shader();

        let (_, global) = module
            .global_variables
            .iter()
            .find(|(_, g)| {
                g.binding
                    == Some(naga::ResourceBinding {
                        group: 0,
                        binding: 0,
                    })
            })
            .expect("uniform at group 0 binding 0");
        assert_eq!(global.space, naga::AddressSpace::Uniform);

        let naga::TypeInner::Struct { span, .. } = module.types[global.ty].inner else {
            panic!("uniform is not a struct");
        };
        assert_eq!(span as usize, std::mem::size_of::<TransformUniform>());
    }
}
