use image::{Rgba, RgbaImage};

use portal_viewer::globe::build_sphere_geometry;
use portal_viewer::textures::mip_chain;

#[test]
fn sphere_counts() {
    let g = build_sphere_geometry(2.0, 16, 8);
    assert_eq!(g.vertices.len(), 17 * 9);
    assert_eq!(g.indices.len(), (16 * 8 * 6) as usize);
    let max = *g.indices.iter().max().unwrap();
    assert!((max as usize) < g.vertices.len());
}

#[test]
fn sphere_vertices_on_the_sphere() {
    let radius = 2.0f32;
    let g = build_sphere_geometry(radius, 16, 8);
    for v in &g.vertices {
        let len = (v.pos[0] * v.pos[0] + v.pos[1] * v.pos[1] + v.pos[2] * v.pos[2]).sqrt();
        assert!((len - radius).abs() < 1e-4);
        let nlen =
            (v.normal[0] * v.normal[0] + v.normal[1] * v.normal[1] + v.normal[2] * v.normal[2])
                .sqrt();
        assert!((nlen - 1.0).abs() < 1e-4);
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

/// The mesh parameterization must be the inverse of the marker projection,
/// or textures and markers drift apart.
#[test]
fn sphere_grid_matches_geo_projection() {
    let radius = 2.0f32;
    let g = build_sphere_geometry(radius, 16, 8);
    for v in &g.vertices {
        let lat = 90.0 - v.uv[1] * 180.0;
        let lon = v.uv[0] * 360.0 - 180.0;
        let p = portal_geo::lat_lon_to_vec3(lat, lon, radius);
        let d = ((p.x - v.pos[0]).powi(2)
            + (p.y - v.pos[1]).powi(2)
            + (p.z - v.pos[2]).powi(2))
        .sqrt();
        assert!(d < 2e-3, "uv {:?} -> {:?} vs {:?}", v.uv, (p.x, p.y, p.z), v.pos);
    }
}

#[test]
fn mip_chain_halves_to_one() {
    let base = RgbaImage::from_pixel(8, 4, Rgba([10, 20, 30, 255]));
    let mips = mip_chain(base);
    let dims: Vec<_> = mips.iter().map(image::RgbaImage::dimensions).collect();
    assert_eq!(dims, vec![(8, 4), (4, 2), (2, 1), (1, 1)]);
}

#[test]
fn mip_chain_handles_odd_sizes() {
    let base = RgbaImage::from_pixel(5, 3, Rgba([0, 0, 0, 255]));
    let mips = mip_chain(base);
    let dims: Vec<_> = mips.iter().map(image::RgbaImage::dimensions).collect();
    assert_eq!(dims, vec![(5, 3), (2, 1), (1, 1)]);
}

#[test]
fn mip_chain_of_single_pixel_is_just_itself() {
    let base = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));
    let mips = mip_chain(base);
    assert_eq!(mips.len(), 1);
}

#[test]
fn mip_chain_preserves_constant_color() {
    let base = RgbaImage::from_pixel(16, 16, Rgba([200, 100, 50, 255]));
    let mips = mip_chain(base);
    let last = mips.last().unwrap();
    let px = last.get_pixel(0, 0);
    for (got, want) in px.0.iter().zip([200u8, 100, 50, 255]) {
        assert!((i16::from(*got) - i16::from(want)).abs() <= 1);
    }
}
