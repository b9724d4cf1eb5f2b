#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

//! Spherical placement math shared by the globe renderer.
//!
//! The one load-bearing function here is [`lat_lon_to_vec3`]: it fixes the
//! orientation of the sphere relative to an equirectangular texture, so the
//! renderer's mesh parameterization and every surface marker agree on where a
//! given coordinate lands. Keep imports minimal; this crate stays
//! dependency-free on purpose.

#[cfg(test)]
mod tests;

/// Degrees-to-radians factor for `f32` inputs.
pub const DEG: f32 = core::f32::consts::PI / 180.0;

/// Minimal 3D vector. Mirrors what the shaders consume; the viewer converts
/// to its own linear-algebra types at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
    #[must_use]
    pub fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
    #[must_use]
    pub fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
    #[must_use]
    pub fn mul(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
    #[must_use]
    pub fn dot(self, o: Self) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }
    #[must_use]
    pub fn cross(self, o: Self) -> Self {
        Self::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }
    #[must_use]
    pub fn normalized(self) -> Self {
        let l = self.length();
        if l == 0.0 {
            self
        } else {
            self.mul(1.0 / l)
        }
    }
}

/// Place a geographic coordinate on a sphere of the given radius.
///
/// Latitude/longitude are in degrees. The polar angle is `(90 - lat)·π/180`
/// and the azimuth `(lon + 180)·π/180`, with
///
/// ```text
/// x = -r · sin(phi) · cos(theta)
/// y =  r · cos(phi)
/// z =  r · sin(phi) · sin(theta)
/// ```
///
/// The sign of `x` and the 180° azimuth offset match the equirectangular
/// texture mapping used by the planet mesh (u = 0 at longitude -180, north
/// pole at v = 0). Markers drift off their countries the moment either
/// changes.
#[must_use]
pub fn lat_lon_to_vec3(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg) * DEG;
    let theta = (lon_deg + 180.0) * DEG;
    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// [`lat_lon_to_vec3`] on the unit sphere.
#[must_use]
pub fn unit_from_lat_lon(lat_deg: f32, lon_deg: f32) -> Vec3 {
    lat_lon_to_vec3(lat_deg, lon_deg, 1.0)
}
