//! Portal viewer binary.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use egui_wgpu::Renderer as EguiRenderer;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use portal_viewer::globe::{FrameParams, GlobeRenderer, GlobeScene, SceneTarget};
use portal_viewer::textures::{self, TextureSource};
use portal_viewer::ui::{self, Theme};

#[derive(Parser)]
#[command(name = "portal-viewer")]
#[command(about = "Interactive 3D globe with per-country statistics", long_about = None)]
struct Cli {
    /// Load the earth textures from a local directory (albedo.jpg,
    /// normal.jpg, specular.jpg, clouds.png) instead of the bundled URLs
    #[arg(long)]
    textures_dir: Option<PathBuf>,

    /// Initial color theme
    #[arg(long, value_enum, default_value_t = ThemeOpt::Dark)]
    theme: ThemeOpt,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeOpt {
    Light,
    Dark,
}

impl From<ThemeOpt> for Theme {
    fn from(opt: ThemeOpt) -> Self {
        match opt {
            ThemeOpt::Light => Theme::Light,
            ThemeOpt::Dark => Theme::Dark,
        }
    }
}

struct GpuState<'w> {
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> Self {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = match instance.create_surface(window) {
            Ok(s) => s,
            Err(e) => panic!("create surface: {e}"),
        };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap_or_else(|| panic!("no suitable GPU adapters"));

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .unwrap_or_else(|e| panic!("request device: {e}"));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Self { _instance: instance, surface, device, queue, config }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    println!("[viewer] portal v{} starting", env!("CARGO_PKG_VERSION"));

    let event_loop = EventLoop::new().unwrap_or_else(|e| panic!("event loop: {e}"));
    let window_init = WindowBuilder::new()
        .with_title("Portal — Find Anyone Anywhere")
        .with_inner_size(LogicalSize::new(1280.0, 900.0))
        .build(&event_loop)
        .unwrap_or_else(|e| panic!("create window: {e}"));

    // Leak the window to obtain a 'static reference for the surface lifetime
    // without unsafe.
    let window: &'static Window = Box::leak(Box::new(window_init));
    let mut gpu = pollster::block_on(GpuState::new(window));

    let egui_ctx = egui::Context::default();
    let mut egui_state =
        EguiWinitState::new(egui_ctx.clone(), egui::ViewportId::ROOT, &event_loop, None, None);
    let mut egui_renderer = EguiRenderer::new(&gpu.device, gpu.config.format, None, 1);

    let mut theme = Theme::from(cli.theme);
    egui_ctx.set_visuals(theme.visuals());

    let source = match cli.textures_dir {
        Some(dir) => {
            println!("[textures] loading from {}", dir.display());
            TextureSource::LocalDir(dir)
        }
        None => TextureSource::Remote,
    };
    let texture_rx = textures::spawn_loader(source);

    let mut renderer = GlobeRenderer::new(&gpu.device, &gpu.queue);
    let mut scene = GlobeScene::new();

    let mut desired_size = egui::vec2(1264.0, ui::VIEWPORT_HEIGHT);
    let mut target = SceneTarget::new(&gpu.device, desired_size.x as u32, desired_size.y as u32);
    let mut scene_tex_id = egui_renderer.register_native_texture(
        &gpu.device,
        &target.color_view,
        wgpu::FilterMode::Linear,
    );

    let mut last_frame = std::time::Instant::now();

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::AboutToWait => {
                    window.request_redraw();
                }
                Event::WindowEvent { event, window_id } if window_id == window.id() => {
                    let _ = egui_state.on_window_event(window, &event);
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => {
                            gpu.resize(size);
                        }
                        WindowEvent::RedrawRequested => {
                            let now = std::time::Instant::now();
                            let dt = now.duration_since(last_frame).as_secs_f32();
                            last_frame = now;

                            // Texture layers arrive whenever the loader is done
                            // with them; missing ones just stay absent.
                            while let Ok((kind, img)) = texture_rx.try_recv() {
                                renderer.set_layer(&gpu.device, &gpu.queue, kind, &img);
                            }

                            scene.advance(dt);

                            // Match the offscreen target to the size the page
                            // asked for last frame.
                            let ppp = window.scale_factor() as f32;
                            let want_w = ((desired_size.x * ppp).round() as u32).max(1);
                            let want_h = ((desired_size.y * ppp).round() as u32).max(1);
                            if want_w != target.width || want_h != target.height {
                                target = SceneTarget::new(&gpu.device, want_w, want_h);
                                egui_renderer.free_texture(&scene_tex_id);
                                scene_tex_id = egui_renderer.register_native_texture(
                                    &gpu.device,
                                    &target.color_view,
                                    wgpu::FilterMode::Linear,
                                );
                            }

                            let raw_input = egui_state.take_egui_input(window);
                            let full_output = egui_ctx.run(raw_input, |ctx| {
                                let tex_size = egui::vec2(
                                    target.width as f32 / ppp,
                                    target.height as f32 / ppp,
                                );
                                let page =
                                    ui::show(ctx, theme, &mut scene, (scene_tex_id, tex_size));
                                if page.viewport_size.x > 0.0 {
                                    desired_size = page.viewport_size;
                                }
                                if page.toggle_theme {
                                    theme = theme.toggled();
                                    ctx.set_visuals(theme.visuals());
                                    println!("[viewer] theme -> {theme:?}");
                                }
                            });

                            let lighting = theme.lighting();
                            renderer.update_uniforms(
                                &gpu.queue,
                                &FrameParams {
                                    view_proj: scene.camera.view_proj(),
                                    eye: scene.camera.eye(),
                                    rotation: scene.rotation,
                                    cloud_rotation: scene.cloud_rotation,
                                    lighting,
                                },
                            );
                            let instances = scene.marker_instances();
                            renderer.update_markers(&gpu.queue, &instances);

                            for (id, image_delta) in &full_output.textures_delta.set {
                                egui_renderer.update_texture(
                                    &gpu.device,
                                    &gpu.queue,
                                    *id,
                                    image_delta,
                                );
                            }
                            for id in &full_output.textures_delta.free {
                                egui_renderer.free_texture(id);
                            }
                            let paint_jobs = egui_ctx.tessellate(full_output.shapes, ppp);

                            let frame = match gpu.surface.get_current_texture() {
                                Ok(f) => f,
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    gpu.resize(window.inner_size());
                                    return;
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    elwt.exit();
                                    return;
                                }
                                Err(wgpu::SurfaceError::Timeout) => {
                                    return;
                                }
                            };
                            let view = frame
                                .texture
                                .create_view(&wgpu::TextureViewDescriptor::default());
                            let mut encoder = gpu.device.create_command_encoder(
                                &wgpu::CommandEncoderDescriptor { label: Some("encoder") },
                            );

                            let [r, g, b, a] = theme.scene_clear();
                            renderer.render(
                                &mut encoder,
                                &target,
                                wgpu::Color { r, g, b, a },
                                instances.len() as u32,
                            );

                            let screen_desc = ScreenDescriptor {
                                size_in_pixels: [gpu.config.width, gpu.config.height],
                                pixels_per_point: ppp,
                            };
                            egui_renderer.update_buffers(
                                &gpu.device,
                                &gpu.queue,
                                &mut encoder,
                                &paint_jobs,
                                &screen_desc,
                            );

                            {
                                let mut rpass =
                                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                        label: Some("egui pass"),
                                        color_attachments: &[Some(
                                            wgpu::RenderPassColorAttachment {
                                                view: &view,
                                                resolve_target: None,
                                                ops: wgpu::Operations {
                                                    load: wgpu::LoadOp::Clear(wgpu::Color {
                                                        r,
                                                        g,
                                                        b,
                                                        a,
                                                    }),
                                                    store: wgpu::StoreOp::Store,
                                                },
                                            },
                                        )],
                                        depth_stencil_attachment: None,
                                        occlusion_query_set: None,
                                        timestamp_writes: None,
                                    });
                                egui_renderer.render(&mut rpass, &paint_jobs, &screen_desc);
                            }
                            gpu.queue.submit(std::iter::once(encoder.finish()));
                            frame.present();

                            egui_state
                                .handle_platform_output(window, full_output.platform_output);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })
        .unwrap_or_else(|e| panic!("run app: {e}"));
}
