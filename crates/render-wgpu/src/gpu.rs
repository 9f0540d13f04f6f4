use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use lightbox_render::RenderView;
use lightbox_scene::Scene;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct PhongUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    view_pos: [f32; 4],
    material_ambient: [f32; 4],
    material_diffuse: [f32; 4],
    material_specular: [f32; 4],
    light_position: [f32; 4],
    light_ambient: [f32; 4],
    light_diffuse: [f32; 4],
    light_specular: [f32; 4],
}

impl PhongUniforms {
    fn new(view: &RenderView, scene: &Scene) -> Self {
        let model = scene.cube_model_matrix();
        let light = scene.light.terms();
        let material = &scene.material;
        Self {
            view_proj: view.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            view_pos: padded(view.eye, 1.0),
            material_ambient: padded(material.ambient, 0.0),
            material_diffuse: padded(material.diffuse, 0.0),
            material_specular: padded(material.specular, material.shininess),
            light_position: padded(scene.light.position, 1.0),
            light_ambient: padded(light.ambient, 0.0),
            light_diffuse: padded(light.diffuse, 0.0),
            light_specular: padded(light.specular, 0.0),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct LightUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl LightUniforms {
    fn new(view: &RenderView, scene: &Scene) -> Self {
        Self {
            view_proj: view.view_projection().to_cols_array_2d(),
            model: scene.light.model_matrix().to_cols_array_2d(),
            color: padded(scene.light.color, 1.0),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// WGSL aligns vec3 uniforms to 16 bytes; every vector travels as vec4.
fn padded(v: Vec3, w: f32) -> [f32; 4] {
    v.extend(w).to_array()
}

/// Unit cube centred on the origin with per-face normals.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis (u x v = normal, so faces wind CCW)
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in FACES {
        let (n, u, v) = (Vec3::from(normal), Vec3::from(u), Vec3::from(v));
        let base = vertices.len() as u16;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            vertices.push(Vertex {
                position: (n * 0.5 + u * su + v * sv).to_array(),
                normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    (vertices, indices)
}

/// Uniform buffer plus the bind group that exposes it at binding 0.
struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformSlot {
    fn new<T: Pod>(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        initial: &T,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    cube_pipeline: wgpu::RenderPipeline,
    light_pipeline: wgpu::RenderPipeline,
    cube_uniforms: UniformSlot,
    light_uniforms: UniformSlot,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    depth_texture: wgpu::TextureView,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let view = RenderView::default();
        let scene = Scene::default();
        let cube_uniforms = UniformSlot::new(
            device,
            &bind_group_layout,
            "cube_uniforms",
            &PhongUniforms::new(&view, &scene),
        );
        let light_uniforms = UniformSlot::new(
            device,
            &bind_group_layout,
            "light_uniforms",
            &LightUniforms::new(&view, &scene),
        );

        let phong_shader = shaders::compile(device, "phong_shader", shaders::PHONG_SHADER);
        let cube_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            surface_format,
            "cube_pipeline",
            &phong_shader,
            ("vs_main", "fs_main"),
            &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        );

        let light_shader = shaders::compile(device, "light_shader", shaders::LIGHT_SHADER);
        let light_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            surface_format,
            "light_pipeline",
            &light_shader,
            ("vs_light", "fs_light"),
            &wgpu::vertex_attr_array![0 => Float32x3],
        );

        let (vertices, indices) = cube_mesh();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertex_buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_index_buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            cube_pipeline,
            light_pipeline,
            cube_uniforms,
            light_uniforms,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            depth_texture,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Render one frame: lit cube, then the light marker.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        view: &RenderView,
        scene: &Scene,
    ) {
        queue.write_buffer(
            &self.cube_uniforms.buffer,
            0,
            bytemuck::bytes_of(&PhongUniforms::new(view, scene)),
        );
        queue.write_buffer(
            &self.light_uniforms.buffer,
            0,
            bytemuck::bytes_of(&LightUniforms::new(view, scene)),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

            pass.set_pipeline(&self.cube_pipeline);
            pass.set_bind_group(0, &self.cube_uniforms.bind_group, &[]);
            pass.draw_indexed(0..self.index_count, 0, 0..1);

            pass.set_pipeline(&self.light_pipeline);
            pass.set_bind_group(0, &self.light_uniforms.bind_group, &[]);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        surface_format: wgpu::TextureFormat,
        label: &str,
        shader: &wgpu::ShaderModule,
        (vs_entry, fs_entry): (&str, &str),
        attributes: &[wgpu::VertexAttribute],
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vs_entry),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fs_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        })
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
