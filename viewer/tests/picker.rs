use glam::Vec3;

use portal_data::COUNTRIES;
use portal_viewer::globe::picker::{
    intersect_sphere, pick_markers, ray_through, to_model_space, MarkerHit, PickTarget, Ray,
};
use portal_viewer::globe::pipeline::COUNTRY_ALTITUDE;
use portal_viewer::globe::{GlobeScene, OrbitCamera};

fn marker_world(index: usize, rotation: f32) -> Vec3 {
    let ll = COUNTRIES[index].coordinate;
    let p = portal_geo::lat_lon_to_vec3(ll.lat_deg, ll.lon_deg, COUNTRY_ALTITUDE);
    glam::Mat4::from_rotation_y(rotation).transform_point3(Vec3::new(p.x, p.y, p.z))
}

/// Project a world point to 0..1 viewport coordinates.
fn to_viewport(cam: &OrbitCamera, world: Vec3) -> (f32, f32) {
    let ndc = cam.view_proj().project_point3(world);
    ((ndc.x + 1.0) / 2.0, (1.0 - ndc.y) / 2.0)
}

#[test]
fn sphere_hit_head_on() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::new(0.0, 0.0, -1.0) };
    let t = intersect_sphere(&ray, Vec3::ZERO, 2.0);
    assert!(t.is_some());
    assert!((t.unwrap() - 3.0).abs() < 1e-5);
}

#[test]
fn sphere_miss() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::new(0.0, 1.0, 0.0) };
    assert_eq!(intersect_sphere(&ray, Vec3::ZERO, 2.0), None);
}

#[test]
fn sphere_behind_ray() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::new(0.0, 0.0, 1.0) };
    assert_eq!(intersect_sphere(&ray, Vec3::ZERO, 2.0), None);
}

#[test]
fn center_ray_points_down_the_view_axis() {
    let cam = OrbitCamera::default();
    let inv = cam.view_proj().inverse();
    let ray = ray_through(0.5, 0.5, &inv);
    assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
    // Origin sits on the near plane in front of the eye at (0, 0, 5).
    assert!(ray.origin.z < 5.0 && ray.origin.z > 4.0);
    // And the ray hits the planet.
    assert!(intersect_sphere(&ray, Vec3::ZERO, 2.0).is_some());
}

#[test]
fn model_space_undoes_the_spin() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::new(0.0, 0.0, -1.0) };
    let m = to_model_space(&ray, core::f32::consts::FRAC_PI_2);
    assert!((m.origin - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-4);
    assert!((m.dir - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn country_beats_city_and_lower_index_wins() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::new(0.0, 0.0, -1.0) };
    let target = PickTarget { center: Vec3::new(0.0, 0.0, 3.0), radius: 0.1 };
    let hit = pick_markers(&ray, &[target, target], &[target], 2.0);
    assert_eq!(hit, Some(MarkerHit::Country(0)));
}

#[test]
fn planet_occludes_far_side_targets() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::new(0.0, 0.0, -1.0) };
    let behind = PickTarget { center: Vec3::new(0.0, 0.0, -3.0), radius: 0.1 };
    assert_eq!(pick_markers(&ray, &[behind], &[], 2.0), None);
}

#[test]
fn clicking_a_front_marker_picks_it() {
    let mut scene = GlobeScene::new();
    scene.camera.aspect = 800.0 / 520.0;
    // United States faces the default camera at rotation zero.
    let (nx, ny) = to_viewport(&scene.camera, marker_world(0, scene.rotation));
    assert_eq!(scene.pick_at(nx, ny), Some(MarkerHit::Country(0)));
}

#[test]
fn picking_tracks_the_globe_rotation() {
    let mut scene = GlobeScene::new();
    scene.camera.aspect = 800.0 / 520.0;
    scene.rotation = 0.7;
    let (nx, ny) = to_viewport(&scene.camera, marker_world(0, scene.rotation));
    assert_eq!(scene.pick_at(nx, ny), Some(MarkerHit::Country(0)));
}

#[test]
fn far_side_marker_is_not_pickable() {
    let mut scene = GlobeScene::new();
    scene.camera.aspect = 800.0 / 520.0;
    // Japan sits on the far side of the globe at rotation zero.
    let japan = COUNTRIES.iter().position(|c| c.code == "JP").unwrap();
    let (nx, ny) = to_viewport(&scene.camera, marker_world(japan, scene.rotation));
    assert_ne!(scene.pick_at(nx, ny), Some(MarkerHit::Country(japan)));
}

#[test]
fn empty_viewport_corner_picks_nothing() {
    let mut scene = GlobeScene::new();
    scene.camera.aspect = 800.0 / 520.0;
    assert_eq!(scene.pick_at(0.01, 0.01), None);
}
