use super::{lat_lon_to_vec3, unit_from_lat_lon, Vec3};

fn close(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a.sub(b)).length() <= tol
}

#[test]
fn deterministic_bitwise() {
    let a = lat_lon_to_vec3(48.8566, 2.3522, 2.05);
    let b = lat_lon_to_vec3(48.8566, 2.3522, 2.05);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.z.to_bits(), b.z.to_bits());
}

#[test]
fn north_pole_maps_to_top() {
    let p = lat_lon_to_vec3(90.0, 0.0, 3.0);
    assert!(close(p, Vec3::new(0.0, 3.0, 0.0), 1e-4));
}

#[test]
fn south_pole_maps_to_bottom() {
    let p = lat_lon_to_vec3(-90.0, 0.0, 3.0);
    assert!(close(p, Vec3::new(0.0, -3.0, 0.0), 1e-4));
}

#[test]
fn azimuth_reference_frame() {
    // (0, 0) fixes the prime meridian on -X; (0, 90) lands on +Z.
    let origin = lat_lon_to_vec3(0.0, 0.0, 2.0);
    assert!(close(origin, Vec3::new(-2.0, 0.0, 0.0), 1e-4));
    let east = lat_lon_to_vec3(0.0, 90.0, 2.0);
    assert!(close(east, Vec3::new(0.0, 0.0, 2.0), 1e-4));
}

#[test]
fn magnitude_equals_radius() {
    let radius = 2.05;
    let mut lat = -90.0f32;
    while lat <= 90.0 {
        let mut lon = -180.0f32;
        while lon <= 180.0 {
            let p = lat_lon_to_vec3(lat, lon, radius);
            assert!(
                (p.length() - radius).abs() <= radius * 1e-4,
                "|p({lat},{lon})| = {} != {radius}",
                p.length()
            );
            lon += 7.5;
        }
        lat += 7.5;
    }
}

#[test]
fn unit_helper_matches_projection() {
    let a = unit_from_lat_lon(35.8617, 104.1954);
    let b = lat_lon_to_vec3(35.8617, 104.1954, 1.0);
    assert_eq!(a, b);
    assert!((a.length() - 1.0).abs() <= 1e-5);
}

#[test]
fn opposite_longitudes_mirror_across_polar_axis() {
    let w = lat_lon_to_vec3(10.0, -90.0, 1.0);
    let e = lat_lon_to_vec3(10.0, 90.0, 1.0);
    assert!((w.x + e.x).abs() <= 1e-5);
    assert!((w.z + e.z).abs() <= 1e-5);
    assert!((w.y - e.y).abs() <= 1e-6);
}
