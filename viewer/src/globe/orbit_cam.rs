/// Orbit camera around the globe: drag rotates, scroll zooms, no panning.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

/// Zoom stops just outside the atmosphere shell.
pub const MIN_DISTANCE: f32 = 2.15;
pub const MAX_DISTANCE: f32 = 8.0;

impl Default for OrbitCamera {
    fn default() -> Self {
        // Eye starts at (0, 0, 5) looking at the origin.
        Self {
            yaw: core::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            distance: 5.0,
            fov_y: 45f32.to_radians(),
            aspect: 1.6,
            z_near: 0.05,
            z_far: 1000.0,
        }
    }
}

impl OrbitCamera {
    pub fn apply_drag(&mut self, delta: egui::Vec2) {
        let k = 0.005f32;
        self.yaw -= delta.x * k;
        self.pitch -= delta.y * k;
        let lim = core::f32::consts::FRAC_PI_2 - 0.017;
        self.pitch = self.pitch.clamp(-lim, lim);
    }

    pub fn apply_scroll(&mut self, scroll: f32) {
        let factor = (-scroll * 0.0015).exp();
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn eye(&self) -> glam::Vec3 {
        glam::Vec3::new(
            self.distance * self.yaw.cos() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn view_proj(&self) -> glam::Mat4 {
        let view = glam::Mat4::look_at_rh(self.eye(), glam::Vec3::ZERO, glam::Vec3::Y);
        let proj = glam::Mat4::perspective_rh(
            self.fov_y,
            self.aspect.max(1e-3),
            self.z_near,
            self.z_far,
        );
        proj * view
    }
}
