use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl SphereVertex {
    pub const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Per-marker instance data: a unit marker sphere is scaled and translated in
/// the globe's model space. `emissive` carries the glow color in rgb and its
/// intensity in w.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MarkerInstance {
    pub center: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

impl MarkerInstance {
    pub const ATTRS: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![3 => Float32x3, 4 => Float32, 5 => Float32x4, 6 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// CPU-side UV sphere. The grid parameterization is the inverse of
/// `portal_geo::lat_lon_to_vec3`: `theta = u·2π`, `phi = v·π`, position
/// `(-sin φ cos θ, cos φ, sin φ sin θ)·r`, so an equirectangular texture with
/// longitude -180 at its left edge and the north pole on its top row lands
/// exactly where the markers expect it.
pub struct SphereGeometry {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

pub fn build_sphere_geometry(radius: f32, segments: u32, rings: u32) -> SphereGeometry {
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let phi = v * std::f32::consts::PI;
        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let theta = u * std::f32::consts::TAU;
            let unit = [
                -phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(SphereVertex {
                pos: [unit[0] * radius, unit[1] * radius, unit[2] * radius],
                normal: unit,
                uv: [u, v],
            });
        }
    }

    // Two CCW triangles per grid quad, outward-facing.
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * (segments + 1) + seg;
            let b = a + segments + 1;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    SphereGeometry { vertices, indices }
}

pub struct SphereMesh {
    pub vertex_buf: wgpu::Buffer,
    pub index_buf: wgpu::Buffer,
    pub index_count: u32,
}

pub fn upload_sphere(device: &wgpu::Device, label: &str, geom: &SphereGeometry) -> SphereMesh {
    let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&geom.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&geom.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    SphereMesh { vertex_buf, index_buf, index_count: geom.indices.len() as u32 }
}
