use bytemuck::Zeroable;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::mesh::{self, MarkerInstance, SphereMesh, SphereVertex};
use crate::textures::{self, LayerKind};

pub const PLANET_RADIUS: f32 = 2.0;
pub const CLOUD_RADIUS: f32 = 2.03;
pub const ATMOSPHERE_RADIUS: f32 = 2.12;
/// Country markers float just above the cloud shell so they stay visible.
pub const COUNTRY_ALTITUDE: f32 = 2.05;
pub const CITY_ALTITUDE: f32 = 2.04;

pub const MAX_MARKERS: usize = 64;

/// Offscreen scene target formats. The color target is sampled by the page
/// UI, so it is created with `TEXTURE_BINDING` and registered with egui.
pub const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Sun direction in world space. It does not rotate with the globe.
const LIGHT_DIR: Vec3 = Vec3::new(5.0, 2.0, 5.0);
const SHININESS: f32 = 12.0;

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    eye: [f32; 4],
    light_dir: [f32; 4], // xyz direction, w directional intensity
    ambient: [f32; 4],   // w ambient intensity
    specular: [f32; 4],  // rgb specular color, w shininess
    tint: [f32; 4],      // layer color, w layer opacity
}

/// Theme-dependent rendering parameters, linear color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLighting {
    pub directional_intensity: f32,
    pub ambient_intensity: f32,
    pub specular_rgb: [f32; 3],
    pub cloud_opacity: f32,
    pub atmosphere_rgba: [f32; 4],
}

/// Everything that changes between frames.
pub struct FrameParams {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub rotation: f32,
    pub cloud_rotation: f32,
    pub lighting: SceneLighting,
}

pub struct SceneTarget {
    pub color_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl SceneTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };
        let color = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene color"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SCENE_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene depth"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        Self {
            color_view: color.create_view(&wgpu::TextureViewDescriptor::default()),
            depth_view: depth.create_view(&wgpu::TextureViewDescriptor::default()),
            width,
            height,
        }
    }
}

struct Layer {
    pipeline: wgpu::RenderPipeline,
    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    mesh: SphereMesh,
}

pub struct GlobeRenderer {
    planet: Layer,
    markers: Layer,
    clouds: Layer,
    atmosphere: Layer,

    marker_instances: wgpu::Buffer,

    sampler: wgpu::Sampler,
    planet_tex_layout: wgpu::BindGroupLayout,
    cloud_tex_layout: wgpu::BindGroupLayout,
    planet_tex_bg: wgpu::BindGroup,
    cloud_tex_bg: wgpu::BindGroup,
    albedo_view: wgpu::TextureView,
    normal_view: wgpu::TextureView,
    specular_view: wgpu::TextureView,
    cloud_view: wgpu::TextureView,
}

impl GlobeRenderer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globe globals layout"),
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

        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        let planet_tex_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("planet textures layout"),
            entries: &[
                texture_entry(0),
                texture_entry(1),
                texture_entry(2),
                sampler_entry(3),
            ],
        });
        let cloud_tex_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cloud texture layout"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });

        // Trilinear + anisotropic; the equirectangular layers alias badly at
        // oblique angles otherwise.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("layer sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            anisotropy_clamp: 16,
            ..Default::default()
        });

        // Neutral stand-ins until the real layers arrive: a bare gray-blue
        // sphere, flat normals, no ocean highlights, fully clear sky.
        let albedo_view =
            textures::solid_1x1(device, queue, "fallback albedo", [90, 110, 140, 255], true);
        let normal_view =
            textures::solid_1x1(device, queue, "fallback normal", [128, 128, 255, 255], false);
        let specular_view =
            textures::solid_1x1(device, queue, "fallback specular", [0, 0, 0, 255], false);
        let cloud_view = textures::solid_1x1(device, queue, "fallback clouds", [0, 0, 0, 0], false);

        let planet_tex_bg = Self::planet_bind_group(
            device,
            &planet_tex_layout,
            &albedo_view,
            &normal_view,
            &specular_view,
            &sampler,
        );
        let cloud_tex_bg =
            Self::cloud_bind_group(device, &cloud_tex_layout, &cloud_view, &sampler);

        let planet_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("planet shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/planet.wgsl").into()),
        });
        let cloud_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cloud shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/clouds.wgsl").into()),
        });
        let atmo_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("atmosphere shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/atmosphere.wgsl").into()),
        });
        let marker_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("marker shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/marker.wgsl").into()),
        });

        let planet_geom = mesh::build_sphere_geometry(PLANET_RADIUS, 256, 128);
        let cloud_geom = mesh::build_sphere_geometry(CLOUD_RADIUS, 256, 128);
        let atmo_geom = mesh::build_sphere_geometry(ATMOSPHERE_RADIUS, 128, 64);
        let marker_geom = mesh::build_sphere_geometry(1.0, 24, 16);

        let (planet_buf, planet_bg) = make_globals(device, &globals_layout, "planet globals");
        let planet = Layer {
            pipeline: make_pipeline(
                device,
                "planet pipeline",
                &planet_shader,
                &[&globals_layout, &planet_tex_layout],
                &[SphereVertex::layout()],
                None,
                Some(wgpu::Face::Back),
                true,
            ),
            globals_buf: planet_buf,
            globals_bg: planet_bg,
            mesh: mesh::upload_sphere(device, "planet mesh", &planet_geom),
        };

        let (marker_buf, marker_bg) = make_globals(device, &globals_layout, "marker globals");
        let markers = Layer {
            pipeline: make_pipeline(
                device,
                "marker pipeline",
                &marker_shader,
                &[&globals_layout],
                &[SphereVertex::layout(), MarkerInstance::layout()],
                None,
                Some(wgpu::Face::Back),
                true,
            ),
            globals_buf: marker_buf,
            globals_bg: marker_bg,
            mesh: mesh::upload_sphere(device, "marker mesh", &marker_geom),
        };

        let (cloud_buf, cloud_bg) = make_globals(device, &globals_layout, "cloud globals");
        let clouds = Layer {
            pipeline: make_pipeline(
                device,
                "cloud pipeline",
                &cloud_shader,
                &[&globals_layout, &cloud_tex_layout],
                &[SphereVertex::layout()],
                Some(wgpu::BlendState::ALPHA_BLENDING),
                Some(wgpu::Face::Back),
                false,
            ),
            globals_buf: cloud_buf,
            globals_bg: cloud_bg,
            mesh: mesh::upload_sphere(device, "cloud mesh", &cloud_geom),
        };

        // Front faces culled: only the shell's inside renders, which reads as
        // a rim of glow around the limb.
        let (atmo_buf, atmo_bg) = make_globals(device, &globals_layout, "atmosphere globals");
        let atmosphere = Layer {
            pipeline: make_pipeline(
                device,
                "atmosphere pipeline",
                &atmo_shader,
                &[&globals_layout],
                &[SphereVertex::layout()],
                Some(wgpu::BlendState::ALPHA_BLENDING),
                Some(wgpu::Face::Front),
                false,
            ),
            globals_buf: atmo_buf,
            globals_bg: atmo_bg,
            mesh: mesh::upload_sphere(device, "atmosphere mesh", &atmo_geom),
        };

        let marker_instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker instances"),
            size: (MAX_MARKERS * std::mem::size_of::<MarkerInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            planet,
            markers,
            clouds,
            atmosphere,
            marker_instances,
            sampler,
            planet_tex_layout,
            cloud_tex_layout,
            planet_tex_bg,
            cloud_tex_bg,
            albedo_view,
            normal_view,
            specular_view,
            cloud_view,
        }
    }

    fn planet_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        albedo: &wgpu::TextureView,
        normal: &wgpu::TextureView,
        specular: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("planet textures"),
            layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(albedo) },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(normal) },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::TextureView(specular) },
                wgpu::BindGroupEntry { binding: 3, resource: wgpu::BindingResource::Sampler(sampler) },
            ],
        })
    }

    fn cloud_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        clouds: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cloud texture"),
            layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(clouds) },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::Sampler(sampler) },
            ],
        })
    }

    /// Swap in a freshly loaded texture layer and rebuild the affected bind
    /// group. Albedo is treated as sRGB, the data layers as linear.
    pub fn set_layer(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        kind: LayerKind,
        img: &image::RgbaImage,
    ) {
        let srgb = kind == LayerKind::Albedo;
        let view = textures::upload_mipmapped(device, queue, kind.label(), img, srgb);
        match kind {
            LayerKind::Albedo => self.albedo_view = view,
            LayerKind::Normal => self.normal_view = view,
            LayerKind::Specular => self.specular_view = view,
            LayerKind::Clouds => self.cloud_view = view,
        }
        match kind {
            LayerKind::Clouds => {
                self.cloud_tex_bg = Self::cloud_bind_group(
                    device,
                    &self.cloud_tex_layout,
                    &self.cloud_view,
                    &self.sampler,
                );
            }
            _ => {
                self.planet_tex_bg = Self::planet_bind_group(
                    device,
                    &self.planet_tex_layout,
                    &self.albedo_view,
                    &self.normal_view,
                    &self.specular_view,
                    &self.sampler,
                );
            }
        }
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, frame: &FrameParams) {
        let l = &frame.lighting;
        let light_dir = LIGHT_DIR.normalize();
        let base = Globals {
            view_proj: frame.view_proj.to_cols_array_2d(),
            model: Mat4::from_rotation_y(frame.rotation).to_cols_array_2d(),
            eye: [frame.eye.x, frame.eye.y, frame.eye.z, 0.0],
            light_dir: [light_dir.x, light_dir.y, light_dir.z, l.directional_intensity],
            ambient: [1.0, 1.0, 1.0, l.ambient_intensity],
            specular: [l.specular_rgb[0], l.specular_rgb[1], l.specular_rgb[2], SHININESS],
            tint: [0.0, 0.0, 0.0, 0.0],
        };

        queue.write_buffer(&self.planet.globals_buf, 0, bytemuck::bytes_of(&base));
        queue.write_buffer(&self.markers.globals_buf, 0, bytemuck::bytes_of(&base));

        // Clouds are a child of the spinning group with their own slow drift
        // layered on top.
        let clouds = Globals {
            model: Mat4::from_rotation_y(frame.rotation + frame.cloud_rotation)
                .to_cols_array_2d(),
            tint: [1.0, 1.0, 1.0, l.cloud_opacity],
            ..base
        };
        queue.write_buffer(&self.clouds.globals_buf, 0, bytemuck::bytes_of(&clouds));

        let atmosphere = Globals { tint: l.atmosphere_rgba, ..base };
        queue.write_buffer(&self.atmosphere.globals_buf, 0, bytemuck::bytes_of(&atmosphere));
    }

    pub fn update_markers(&self, queue: &wgpu::Queue, instances: &[MarkerInstance]) {
        let n = instances.len().min(MAX_MARKERS);
        queue.write_buffer(&self.marker_instances, 0, bytemuck::cast_slice(&instances[..n]));
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &SceneTarget,
        clear: wgpu::Color,
        marker_count: u32,
    ) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("globe pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.planet.pipeline);
        rpass.set_bind_group(0, &self.planet.globals_bg, &[]);
        rpass.set_bind_group(1, &self.planet_tex_bg, &[]);
        rpass.set_vertex_buffer(0, self.planet.mesh.vertex_buf.slice(..));
        rpass.set_index_buffer(self.planet.mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.planet.mesh.index_count, 0, 0..1);

        let count = marker_count.min(MAX_MARKERS as u32);
        if count > 0 {
            rpass.set_pipeline(&self.markers.pipeline);
            rpass.set_bind_group(0, &self.markers.globals_bg, &[]);
            rpass.set_vertex_buffer(0, self.markers.mesh.vertex_buf.slice(..));
            rpass.set_vertex_buffer(1, self.marker_instances.slice(..));
            rpass
                .set_index_buffer(self.markers.mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.markers.mesh.index_count, 0, 0..count);
        }

        rpass.set_pipeline(&self.clouds.pipeline);
        rpass.set_bind_group(0, &self.clouds.globals_bg, &[]);
        rpass.set_bind_group(1, &self.cloud_tex_bg, &[]);
        rpass.set_vertex_buffer(0, self.clouds.mesh.vertex_buf.slice(..));
        rpass.set_index_buffer(self.clouds.mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.clouds.mesh.index_count, 0, 0..1);

        rpass.set_pipeline(&self.atmosphere.pipeline);
        rpass.set_bind_group(0, &self.atmosphere.globals_bg, &[]);
        rpass.set_vertex_buffer(0, self.atmosphere.mesh.vertex_buf.slice(..));
        rpass
            .set_index_buffer(self.atmosphere.mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.atmosphere.mesh.index_count, 0, 0..1);
    }
}

fn make_globals(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    label: &str,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::bytes_of(&Globals::zeroed()),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry { binding: 0, resource: buf.as_entire_binding() }],
    });
    (buf, bg)
}

#[allow(clippy::too_many_arguments)]
fn make_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader: &wgpu::ShaderModule,
    layouts: &[&wgpu::BindGroupLayout],
    buffers: &[wgpu::VertexBufferLayout<'_>],
    blend: Option<wgpu::BlendState>,
    cull: Option<wgpu::Face>,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: layouts,
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pl),
        vertex: wgpu::VertexState { module: shader, entry_point: "vs_main", buffers },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: SCENE_FORMAT,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: cull,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}
