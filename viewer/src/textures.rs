//! Asynchronous loading of the four equirectangular texture layers.
//!
//! A background thread fetches and decodes the images and hands them to the
//! frame loop over a channel. A layer that fails to load is logged and simply
//! stays absent; the globe keeps rendering with its neutral fallback.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

use image::RgbaImage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    Albedo,
    Normal,
    Specular,
    Clouds,
}

impl LayerKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Albedo => "albedo",
            Self::Normal => "normal",
            Self::Specular => "specular",
            Self::Clouds => "clouds",
        }
    }
}

/// Public-domain/NASA based textures hosted by the threejs.org examples.
pub const REMOTE_URLS: [(LayerKind, &str); 4] = [
    (LayerKind::Albedo, "https://threejs.org/examples/textures/planets/earth_atmos_2048.jpg"),
    (LayerKind::Normal, "https://threejs.org/examples/textures/planets/earth_normal_2048.jpg"),
    (LayerKind::Specular, "https://threejs.org/examples/textures/planets/earth_specular_2048.jpg"),
    (LayerKind::Clouds, "https://threejs.org/examples/textures/planets/earth_clouds_1024.png"),
];

/// File names expected under `--textures-dir`.
pub const LOCAL_FILES: [(LayerKind, &str); 4] = [
    (LayerKind::Albedo, "albedo.jpg"),
    (LayerKind::Normal, "normal.jpg"),
    (LayerKind::Specular, "specular.jpg"),
    (LayerKind::Clouds, "clouds.png"),
];

#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("http error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
}

pub enum TextureSource {
    Remote,
    LocalDir(PathBuf),
}

/// Fire-and-forget loader. Drops the sender when done; failures are logged,
/// never surfaced.
pub fn spawn_loader(source: TextureSource) -> Receiver<(LayerKind, RgbaImage)> {
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        for i in 0..4 {
            let (kind, result) = match &source {
                TextureSource::Remote => {
                    let (kind, url) = REMOTE_URLS[i];
                    (kind, fetch_remote(url))
                }
                TextureSource::LocalDir(dir) => {
                    let (kind, file) = LOCAL_FILES[i];
                    (kind, load_local(&dir.join(file)))
                }
            };
            match result {
                Ok(img) => {
                    println!(
                        "[textures] {} ready ({}x{})",
                        kind.label(),
                        img.width(),
                        img.height()
                    );
                    if tx.send((kind, img)).is_err() {
                        return;
                    }
                }
                Err(e) => println!("[textures] {} failed: {e}", kind.label()),
            }
        }
    });
    rx
}

fn fetch_remote(url: &str) -> Result<RgbaImage, TextureError> {
    let resp = ureq::get(url).call().map_err(Box::new)?;
    let mut buf = Vec::new();
    resp.into_reader().read_to_end(&mut buf)?;
    Ok(image::load_from_memory(&buf)?.to_rgba8())
}

fn load_local(path: &Path) -> Result<RgbaImage, TextureError> {
    let buf = std::fs::read(path)?;
    Ok(image::load_from_memory(&buf)?.to_rgba8())
}

/// Successive half-resolution levels down to 1x1, base level first.
pub fn mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let mut levels = vec![base];
    loop {
        let (w, h) = levels[levels.len() - 1].dimensions();
        if w == 1 && h == 1 {
            break;
        }
        let next = image::imageops::resize(
            &levels[levels.len() - 1],
            (w / 2).max(1),
            (h / 2).max(1),
            image::imageops::FilterType::Triangle,
        );
        levels.push(next);
    }
    levels
}

/// Upload an image with a full CPU-built mip chain and return its view.
pub fn upload_mipmapped(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    img: &RgbaImage,
    srgb: bool,
) -> wgpu::TextureView {
    let mips = mip_chain(img.clone());
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: mips[0].width(),
            height: mips[0].height(),
            depth_or_array_layers: 1,
        },
        mip_level_count: mips.len() as u32,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: if srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        },
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    for (level, mip) in mips.iter().enumerate() {
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: level as u32,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            mip.as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * mip.width()),
                rows_per_image: Some(mip.height()),
            },
            wgpu::Extent3d {
                width: mip.width(),
                height: mip.height(),
                depth_or_array_layers: 1,
            },
        );
    }
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Single-pixel stand-in used until (or instead of) a real layer.
pub fn solid_1x1(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    rgba: [u8; 4],
    srgb: bool,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d { width: 1, height: 1, depth_or_array_layers: 1 },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: if srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        },
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &rgba,
        wgpu::ImageDataLayout { offset: 0, bytes_per_row: Some(4), rows_per_image: Some(1) },
        wgpu::Extent3d { width: 1, height: 1, depth_or_array_layers: 1 },
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
