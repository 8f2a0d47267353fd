//! wgpu renderer: surface setup, the three scene pipelines (lit meshes,
//! the sun halo, instanced point billboards), bloom compositing and the
//! egui overlay pass.
//!
//! The scene passes render into an offscreen target; [`BloomState`] then
//! composites it to the swapchain, and the UI draws on top of that.

mod egui_integration;
pub mod mesh;
mod post_process;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3, Vec4};
use wgpu::util::DeviceExt;
use winit::window::Window;

pub use egui_integration::EguiIntegration;
use post_process::BloomState;

use crate::assets::{self, ShaderCatalog};
use crate::body::SUN_RADIUS;
use crate::error::GpuError;
use crate::galaxy::GalaxyCloud;
use crate::scene::{Scene, GALAXY_POSITION};
use crate::settings::BloomSettings;
use crate::spacecraft::SPACECRAFT_SCALE;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Radius of the halo shell around the sun.
const HALO_SCALE: f32 = 12.0;
/// Intensity of the sun and hull point lights.
const LIGHT_INTENSITY: f32 = 100.0;

const SUN_COLOR: Vec3 = Vec3::new(1.0, 0.55, 0.12);
const HALO_COLOR: Vec3 = Vec3::new(1.0, 0.45, 0.1);
const CRAFT_COLOR: Vec3 = Vec3::new(0.9, 0.9, 0.95);

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    sun_light: [f32; 4],
    front_light: [f32; 4],
    mid_light: [f32; 4],
    ambient: [f32; 4],
    time: f32,
    delta_time: f32,
    _padding: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct ModelUniforms {
    model: [[f32; 4]; 4],
    /// rgb is the draw color; w > 0.5 marks the draw emissive (unlit).
    tint: [f32; 4],
}

/// One point instance: 32 bytes, position / size / color.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct PointInstance {
    position: [f32; 3],
    size: f32,
    color: [f32; 3],
    _padding: f32,
}

/// Per-draw model uniform buffer plus its bind group.
struct ModelBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ModelBinding {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ModelUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
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

    fn write(&self, queue: &wgpu::Queue, model: Mat4, tint: Vec4) {
        let uniforms = ModelUniforms {
            model: model.to_cols_array_2d(),
            tint: tint.to_array(),
        };
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&uniforms));
    }
}

/// An uploaded mesh with its per-draw binding.
struct MeshGpu {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl MeshGpu {
    fn new(device: &wgpu::Device, data: &mesh::MeshData, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.index_count(),
        }
    }
}

/// An uploaded point cloud with its model binding.
struct PointCloudGpu {
    instance_buffer: wgpu::Buffer,
    count: u32,
    binding: ModelBinding,
}

impl PointCloudGpu {
    fn from_instances(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        instances: &[PointInstance],
        label: &str,
    ) -> Self {
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(instances),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            instance_buffer,
            count: instances.len() as u32,
            binding: ModelBinding::new(device, layout, label),
        }
    }

    fn from_cloud(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        cloud: &GalaxyCloud,
        label: &str,
    ) -> Self {
        let instances = cloud
            .positions
            .iter()
            .zip(&cloud.colors)
            .map(|(position, color)| PointInstance {
                position: position.to_array(),
                size: cloud.point_size,
                color: color.to_array(),
                _padding: 0.0,
            })
            .collect::<Vec<_>>();
        Self::from_instances(device, layout, &instances, label)
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    model_layout: wgpu::BindGroupLayout,

    mesh_pipeline: wgpu::RenderPipeline,
    halo_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,

    sphere: MeshGpu,
    craft_mesh: MeshGpu,

    sun_binding: ModelBinding,
    halo_binding: ModelBinding,
    planet_bindings: Vec<ModelBinding>,
    craft_binding: ModelBinding,

    galaxy: PointCloudGpu,
    /// Mirrors `Scene::galaxy_generation`; a lagging copy triggers re-upload.
    galaxy_generation: u64,
    scattered: Vec<PointCloudGpu>,
    starfield: PointCloudGpu,

    bloom: BloomState,
    bloom_settings: BloomSettings,
    pub egui: EguiIntegration,
}

impl GpuState {
    pub async fn new(
        window: Arc<Window>,
        shaders: &ShaderCatalog,
        scene: &Scene,
        bloom_settings: BloomSettings,
    ) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| GpuError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Buffer"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let model_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Model Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&globals_layout, &model_layout],
            push_constant_ranges: &[],
        });

        let mesh_pipeline = create_mesh_pipeline(
            &device,
            &pipeline_layout,
            shaders.require(assets::MESH_SHADER)?,
            surface_format,
        );
        let halo_pipeline = create_halo_pipeline(
            &device,
            &pipeline_layout,
            shaders.require(assets::HALO_SHADER)?,
            surface_format,
        );
        let point_pipeline = create_point_pipeline(
            &device,
            &pipeline_layout,
            shaders.require(assets::POINT_SHADER)?,
            surface_format,
        );

        let sphere = MeshGpu::new(&device, &mesh::uv_sphere(50, 50), "Sphere Mesh");
        let craft_mesh = MeshGpu::new(&device, &mesh::spacecraft(), "Spacecraft Mesh");

        let sun_binding = ModelBinding::new(&device, &model_layout, "Sun Model");
        let halo_binding = ModelBinding::new(&device, &model_layout, "Halo Model");
        let planet_bindings = scene
            .planets
            .iter()
            .map(|planet| ModelBinding::new(&device, &model_layout, planet.name))
            .collect();
        let craft_binding = ModelBinding::new(&device, &model_layout, "Spacecraft Model");

        let galaxy = PointCloudGpu::from_cloud(&device, &model_layout, &scene.galaxy, "Galaxy");
        let scattered = scene
            .scattered
            .iter()
            .map(|g| {
                let cloud =
                    PointCloudGpu::from_cloud(&device, &model_layout, &g.cloud, "Scattered Galaxy");
                cloud
                    .binding
                    .write(&queue, scattered_model(g.rotation, g.offset), Vec4::ONE);
                cloud
            })
            .collect();

        let star_instances = scene
            .starfield
            .positions
            .iter()
            .zip(&scene.starfield.sizes)
            .map(|(position, size)| PointInstance {
                position: position.to_array(),
                size: *size,
                color: [1.0, 1.0, 1.0],
                _padding: 0.0,
            })
            .collect::<Vec<_>>();
        let starfield =
            PointCloudGpu::from_instances(&device, &model_layout, &star_instances, "Starfield");

        let bloom = BloomState::new(
            &device,
            &queue,
            shaders.require(assets::BLOOM_SHADER)?,
            bloom_settings,
            config.width,
            config.height,
            surface_format,
        );

        let egui = EguiIntegration::new(&device, surface_format, &window);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bind_group,
            model_layout,
            mesh_pipeline,
            halo_pipeline,
            point_pipeline,
            sphere,
            craft_mesh,
            sun_binding,
            halo_binding,
            planet_bindings,
            craft_binding,
            galaxy,
            galaxy_generation: scene.galaxy_generation,
            scattered,
            starfield,
            bloom,
            bloom_settings,
            egui,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.bloom.resize(
                &self.device,
                self.config.width,
                self.config.height,
                self.config.format,
            );
            self.bloom.set_settings(
                &self.queue,
                self.bloom_settings,
                self.config.width,
                self.config.height,
            );
        }
    }

    pub fn set_bloom(&mut self, settings: BloomSettings) {
        self.bloom_settings = settings;
        self.bloom
            .set_settings(&self.queue, settings, self.config.width, self.config.height);
    }

    fn update_globals(&mut self, scene: &Scene, time: f32, delta_time: f32) {
        let aspect = self.config.width as f32 / self.config.height as f32;
        let proj = Mat4::perspective_rh(100.0_f32.to_radians(), aspect, 0.1, 500.0);
        let view_proj = proj * scene.camera.view_matrix();

        let light = |position: Vec3| position.extend(LIGHT_INTENSITY).to_array();

        let globals = Globals {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: scene.camera.position().extend(1.0).to_array(),
            sun_light: light(Vec3::ZERO),
            front_light: light(scene.spacecraft.front_light),
            mid_light: light(scene.spacecraft.mid_light),
            ambient: [0.25, 0.25, 0.25, 0.75],
            time,
            delta_time,
            _padding: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    /// Bring GPU buffers in line with the scene: re-upload the galaxy when
    /// its generation counter moved (the old buffer drops here), and upload
    /// any newly scattered galaxies. Scattered clouds are immutable once
    /// uploaded, so existing entries are never touched.
    fn sync_scene(&mut self, scene: &Scene) {
        if self.galaxy_generation != scene.galaxy_generation {
            self.galaxy = PointCloudGpu::from_cloud(
                &self.device,
                &self.model_layout,
                &scene.galaxy,
                "Galaxy",
            );
            self.galaxy_generation = scene.galaxy_generation;
        }

        for g in &scene.scattered[self.scattered.len()..] {
            let cloud = PointCloudGpu::from_cloud(
                &self.device,
                &self.model_layout,
                &g.cloud,
                "Scattered Galaxy",
            );
            cloud
                .binding
                .write(&self.queue, scattered_model(g.rotation, g.offset), Vec4::ONE);
            self.scattered.push(cloud);
        }
    }

    fn write_models(&self, scene: &Scene) {
        let sun = Mat4::from_rotation_y(scene.sun_rotation) * Mat4::from_scale(Vec3::splat(SUN_RADIUS));
        self.sun_binding
            .write(&self.queue, sun, SUN_COLOR.extend(1.0));

        self.halo_binding.write(
            &self.queue,
            Mat4::from_scale(Vec3::splat(HALO_SCALE)),
            HALO_COLOR.extend(0.0),
        );

        for (planet, binding) in scene.planets.iter().zip(&self.planet_bindings) {
            let model = Mat4::from_translation(planet.offset)
                * Mat4::from_rotation_y(planet.rotation)
                * Mat4::from_scale(Vec3::splat(planet.radius));
            binding.write(&self.queue, model, planet.color.extend(0.0));
        }

        let craft = Mat4::from_translation(scene.spacecraft.position)
            * Mat4::from_rotation_y(scene.spacecraft.yaw)
            * Mat4::from_scale(Vec3::splat(SPACECRAFT_SCALE));
        self.craft_binding
            .write(&self.queue, craft, CRAFT_COLOR.extend(0.0));

        self.galaxy.binding.write(
            &self.queue,
            Mat4::from_translation(GALAXY_POSITION),
            Vec4::ONE,
        );

        let star_rotation = Quat::from_rotation_y(scene.starfield.rotation.y)
            * Quat::from_rotation_x(scene.starfield.rotation.x);
        self.starfield
            .binding
            .write(&self.queue, Mat4::from_quat(star_rotation), Vec4::ONE);
    }

    pub fn render(
        &mut self,
        window: &Window,
        scene: &Scene,
        time: f32,
        delta_time: f32,
        run_ui: impl FnOnce(&egui::Context),
    ) -> Result<(), wgpu::SurfaceError> {
        self.update_globals(scene, time, delta_time);
        self.sync_scene(scene);
        self.write_models(scene);

        self.egui.begin_frame(window);
        run_ui(&self.egui.ctx);
        let ui_output = self.egui.end_frame(window);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: ui_output.pixels_per_point,
        };
        self.egui.prepare(
            &self.device,
            &self.queue,
            &mut encoder,
            &ui_output,
            &screen_descriptor,
        );

        // Scene pass into the offscreen bloom source.
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.bloom.view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.bloom.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.globals_bind_group, &[]);

            pass.set_pipeline(&self.mesh_pipeline);
            pass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
            pass.set_index_buffer(self.sphere.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            pass.set_bind_group(1, &self.sun_binding.bind_group, &[]);
            pass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
            for binding in &self.planet_bindings {
                pass.set_bind_group(1, &binding.bind_group, &[]);
                pass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
            }

            pass.set_vertex_buffer(0, self.craft_mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(
                self.craft_mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.set_bind_group(1, &self.craft_binding.bind_group, &[]);
            pass.draw_indexed(0..self.craft_mesh.index_count, 0, 0..1);

            pass.set_pipeline(&self.halo_pipeline);
            pass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
            pass.set_index_buffer(self.sphere.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.set_bind_group(1, &self.halo_binding.bind_group, &[]);
            pass.draw_indexed(0..self.sphere.index_count, 0, 0..1);

            pass.set_pipeline(&self.point_pipeline);
            for cloud in std::iter::once(&self.galaxy)
                .chain(&self.scattered)
                .chain(std::iter::once(&self.starfield))
            {
                pass.set_bind_group(1, &cloud.binding.bind_group, &[]);
                pass.set_vertex_buffer(0, cloud.instance_buffer.slice(..));
                pass.draw(0..6, 0..cloud.count);
            }
        }

        self.bloom.composite(&mut encoder, &view);

        // UI pass over the composited frame.
        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut pass = pass.forget_lifetime();
            self.egui.paint(&mut pass, &ui_output, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.egui.cleanup(&ui_output);

        Ok(())
    }
}

/// Rigid model transform for a scattered galaxy: XYZ Euler rotation, then
/// the placement offset.
fn scattered_model(rotation: Vec3, offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
        * Mat4::from_euler(glam::EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

fn mesh_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
    ];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<mesh::MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

fn create_mesh_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader_src: &str,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Mesh Shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Mesh Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[mesh_vertex_layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Additive fresnel shell over the sun. Depth tested so planets occlude it,
/// never written so the points behind still draw.
fn create_halo_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader_src: &str,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Halo Shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Halo Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[mesh_vertex_layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(additive_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_point_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader_src: &str,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Point Shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Point Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    0 => Float32x3,
                    1 => Float32,
                    2 => Float32x3,
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(additive_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn additive_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    }
}
