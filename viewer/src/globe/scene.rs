//! Per-frame globe state: rotation, hover/selection slots, marker styling.

use portal_data::{CityRecord, CountryRecord, CITIES, COUNTRIES};

use super::mesh::MarkerInstance;
use super::orbit_cam::OrbitCamera;
use super::picker::{self, MarkerHit, PickTarget};
use super::pipeline::{CITY_ALTITUDE, COUNTRY_ALTITUDE, PLANET_RADIUS};

/// Marker radii for the two visual states. Picking always uses the hovered
/// radius so the hit target never shrinks under the cursor.
pub const COUNTRY_RADIUS: f32 = 0.05;
pub const COUNTRY_RADIUS_HOVERED: f32 = 0.08;
pub const CITY_RADIUS: f32 = 0.04;
pub const CITY_RADIUS_HOVERED: f32 = 0.055;

const EMISSIVE_NORMAL: f32 = 0.5;
const EMISSIVE_HOVERED: f32 = 0.9;

const COUNTRY_COLOR: u32 = 0xef4444;
const COUNTRY_COLOR_HOVERED: u32 = 0xfbbf24;
const CITY_COLOR: u32 = 0x22d3ee;
const CITY_COLOR_HOVERED: u32 = 0x38bdf8;
const CITY_EMISSIVE: u32 = 0x0891b2;

/// Spin rates in radians per second.
const GROUP_SPIN: f32 = 0.05;
const CLOUD_DRIFT: f32 = 0.01;

pub struct GlobeScene {
    pub camera: OrbitCamera,
    /// Rotation of the planet-and-markers group about +Y.
    pub rotation: f32,
    /// Extra cloud rotation, layered on top of the group rotation.
    pub cloud_rotation: f32,
    pub hovered_country: Option<usize>,
    pub hovered_city: Option<usize>,
    pub selected_country: Option<usize>,
}

impl Default for GlobeScene {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobeScene {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::default(),
            rotation: 0.0,
            cloud_rotation: 0.0,
            hovered_country: None,
            hovered_city: None,
            selected_country: None,
        }
    }

    /// Advance the auto-rotation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.rotation += GROUP_SPIN * dt;
        self.cloud_rotation += CLOUD_DRIFT * dt;
    }

    pub fn selected(&self) -> Option<&'static CountryRecord> {
        self.selected_country.map(|i| &COUNTRIES[i])
    }

    /// Replace the current selection. There is no explicit deselect.
    pub fn select(&mut self, index: usize) {
        self.selected_country = Some(index);
    }

    pub fn set_hover(&mut self, hit: Option<MarkerHit>) {
        match hit {
            Some(MarkerHit::Country(i)) => {
                self.hovered_country = Some(i);
                self.hovered_city = None;
            }
            Some(MarkerHit::City(i)) => {
                self.hovered_city = Some(i);
                self.hovered_country = None;
            }
            None => {
                self.hovered_country = None;
                self.hovered_city = None;
            }
        }
    }

    /// Pick the marker under a cursor position given in 0..1 viewport
    /// coordinates, accounting for the globe's current spin.
    pub fn pick_at(&self, norm_x: f32, norm_y: f32) -> Option<MarkerHit> {
        let inv = self.camera.view_proj().inverse();
        let ray = picker::ray_through(norm_x, norm_y, &inv);
        let ray = picker::to_model_space(&ray, self.rotation);
        picker::pick_markers(&ray, &country_targets(), &city_targets(), PLANET_RADIUS)
    }

    /// One instance per marker, countries first, hover emphasis applied.
    pub fn marker_instances(&self) -> Vec<MarkerInstance> {
        let mut out = Vec::with_capacity(COUNTRIES.len() + CITIES.len());
        for (i, c) in COUNTRIES.iter().enumerate() {
            let hovered = self.hovered_country == Some(i);
            let color = if hovered { COUNTRY_COLOR_HOVERED } else { COUNTRY_COLOR };
            out.push(MarkerInstance {
                center: marker_center(c.coordinate.lat_deg, c.coordinate.lon_deg, COUNTRY_ALTITUDE),
                scale: if hovered { COUNTRY_RADIUS_HOVERED } else { COUNTRY_RADIUS },
                color: rgba_linear(color),
                emissive: emissive(color, if hovered { EMISSIVE_HOVERED } else { EMISSIVE_NORMAL }),
            });
        }
        for (i, c) in CITIES.iter().enumerate() {
            let hovered = self.hovered_city == Some(i);
            out.push(MarkerInstance {
                center: marker_center(c.coordinate.lat_deg, c.coordinate.lon_deg, CITY_ALTITUDE),
                scale: if hovered { CITY_RADIUS_HOVERED } else { CITY_RADIUS },
                color: rgba_linear(if hovered { CITY_COLOR_HOVERED } else { CITY_COLOR }),
                emissive: emissive(
                    if hovered { CITY_COLOR_HOVERED } else { CITY_EMISSIVE },
                    if hovered { EMISSIVE_HOVERED } else { EMISSIVE_NORMAL },
                ),
            });
        }
        out
    }

    /// Feed viewport interactions (drag, scroll, hover, click) into the
    /// camera and the hover/selection slots. Returns the index of a country
    /// selected by this event, if any.
    pub fn handle_viewport(&mut self, resp: &egui::Response, ctx: &egui::Context) -> Option<usize> {
        let rect = resp.rect;
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.camera.aspect = rect.width() / rect.height();
        }

        if resp.dragged_by(egui::PointerButton::Primary) {
            self.camera.apply_drag(resp.drag_delta());
        }
        if resp.hovered() {
            let scroll = ctx.input(|i| i.raw_scroll_delta.y + i.smooth_scroll_delta.y);
            if scroll.abs() > 0.0 {
                self.camera.apply_scroll(scroll);
            }
        }

        let hit = resp.hover_pos().and_then(|pos| {
            self.pick_at(
                (pos.x - rect.left()) / rect.width(),
                (pos.y - rect.top()) / rect.height(),
            )
        });
        self.set_hover(hit);

        if let Some(MarkerHit::Country(i)) = hit {
            ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
            if resp.clicked() {
                self.select(i);
                println!("[scene] selected {} ({})", COUNTRIES[i].name, COUNTRIES[i].code);
                return Some(i);
            }
        }
        None
    }
}

fn marker_center(lat_deg: f32, lon_deg: f32, altitude: f32) -> [f32; 3] {
    let p = portal_geo::lat_lon_to_vec3(lat_deg, lon_deg, altitude);
    [p.x, p.y, p.z]
}

fn country_targets() -> Vec<PickTarget> {
    COUNTRIES
        .iter()
        .map(|c: &CountryRecord| PickTarget {
            center: glam::Vec3::from_array(marker_center(
                c.coordinate.lat_deg,
                c.coordinate.lon_deg,
                COUNTRY_ALTITUDE,
            )),
            radius: COUNTRY_RADIUS_HOVERED,
        })
        .collect()
}

fn city_targets() -> Vec<PickTarget> {
    CITIES
        .iter()
        .map(|c: &CityRecord| PickTarget {
            center: glam::Vec3::from_array(marker_center(
                c.coordinate.lat_deg,
                c.coordinate.lon_deg,
                CITY_ALTITUDE,
            )),
            radius: CITY_RADIUS_HOVERED,
        })
        .collect()
}

/// One sRGB byte to its linear value. Marker and lighting colors are given as
/// sRGB hex but the shaders work in linear space against an sRGB target.
pub fn srgb_to_linear(byte: u8) -> f32 {
    let c = f32::from(byte) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` to linear rgba with alpha 1.
pub fn rgba_linear(hex: u32) -> [f32; 4] {
    [
        srgb_to_linear((hex >> 16) as u8),
        srgb_to_linear((hex >> 8) as u8),
        srgb_to_linear(hex as u8),
        1.0,
    ]
}

fn emissive(hex: u32, intensity: f32) -> [f32; 4] {
    let c = rgba_linear(hex);
    [c[0], c[1], c[2], intensity]
}
