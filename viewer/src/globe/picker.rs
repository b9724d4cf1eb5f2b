//! CPU ray picking for the globe's surface markers.
//!
//! Ordering contract: the closest hit along the ray wins; at equal distance
//! the lower dataset index wins, and country markers win over city markers.
//! Markers occluded by the planet sphere are never hit.

use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// A marker's bounding sphere in the globe's model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickTarget {
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerHit {
    Country(usize),
    City(usize),
}

/// World-space ray through a cursor position given in 0..1 viewport
/// coordinates (y down, as egui reports them).
pub fn ray_through(norm_x: f32, norm_y: f32, inv_view_proj: &Mat4) -> Ray {
    let ndc_x = norm_x * 2.0 - 1.0;
    let ndc_y = 1.0 - norm_y * 2.0;
    let near = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
    let far = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
    Ray { origin: near, dir: (far - near).normalize() }
}

/// Rotate a world-space ray into the model space of a globe spun by
/// `rotation_y` radians about +Y.
pub fn to_model_space(ray: &Ray, rotation_y: f32) -> Ray {
    let inv = Mat4::from_rotation_y(-rotation_y);
    Ray {
        origin: inv.transform_point3(ray.origin),
        dir: inv.transform_vector3(ray.dir).normalize(),
    }
}

/// Nearest positive ray parameter at which the ray enters the sphere, if any.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_d = disc.sqrt();
    let t0 = -b - sqrt_d;
    let t1 = -b + sqrt_d;
    if t0 > 0.0 {
        Some(t0)
    } else if t1 > 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Test a model-space ray against every marker, honoring planet occlusion.
pub fn pick_markers(
    ray: &Ray,
    countries: &[PickTarget],
    cities: &[PickTarget],
    planet_radius: f32,
) -> Option<MarkerHit> {
    let horizon = intersect_sphere(ray, Vec3::ZERO, planet_radius).unwrap_or(f32::INFINITY);

    let mut best: Option<(f32, MarkerHit)> = None;
    let mut consider = |t: f32, hit: MarkerHit| {
        if t > horizon {
            return;
        }
        // Strict < keeps the first (lowest-index, country-first) hit on ties.
        if best.map_or(true, |(bt, _)| t < bt) {
            best = Some((t, hit));
        }
    };

    for (i, target) in countries.iter().enumerate() {
        if let Some(t) = intersect_sphere(ray, target.center, target.radius) {
            consider(t, MarkerHit::Country(i));
        }
    }
    for (i, target) in cities.iter().enumerate() {
        if let Some(t) = intersect_sphere(ray, target.center, target.radius) {
            consider(t, MarkerHit::City(i));
        }
    }

    best.map(|(_, hit)| hit)
}
