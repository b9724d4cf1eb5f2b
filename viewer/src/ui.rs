//! Page composition: header, hero, globe viewport, statistics, filters,
//! app-promotion and footer, plus the two-state theme.

use egui::{Color32, RichText};
use portal_data::CountryRecord;

use crate::globe::scene::srgb_to_linear;
use crate::globe::{GlobeScene, SceneLighting};

pub const VIEWPORT_HEIGHT: f32 = 520.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }

    /// Scene parameters in linear color space.
    pub fn lighting(self) -> SceneLighting {
        match self {
            Self::Light => SceneLighting {
                directional_intensity: 1.2,
                ambient_intensity: 0.5,
                specular_rgb: gray_linear(0x33),
                cloud_opacity: 0.35,
                atmosphere_rgba: atmosphere(0x93c5fd),
            },
            Self::Dark => SceneLighting {
                directional_intensity: 0.9,
                ambient_intensity: 0.4,
                specular_rgb: gray_linear(0x22),
                cloud_opacity: 0.25,
                atmosphere_rgba: atmosphere(0x60a5fa),
            },
        }
    }

    /// Clear color behind the globe, linear rgba.
    pub fn scene_clear(self) -> [f64; 4] {
        match self {
            Self::Light => [0.80, 0.86, 0.94, 1.0],
            Self::Dark => [0.02, 0.02, 0.04, 1.0],
        }
    }
}

fn gray_linear(byte: u8) -> [f32; 3] {
    let v = srgb_to_linear(byte);
    [v, v, v]
}

fn atmosphere(hex: u32) -> [f32; 4] {
    [
        srgb_to_linear((hex >> 16) as u8),
        srgb_to_linear((hex >> 8) as u8),
        srgb_to_linear(hex as u8),
        0.08,
    ]
}

/// What the page reported back to the frame loop.
pub struct PageResponse {
    pub toggle_theme: bool,
    /// Logical size the globe viewport wants; the offscreen target follows it
    /// on the next frame.
    pub viewport_size: egui::Vec2,
}

pub fn show(
    ctx: &egui::Context,
    theme: Theme,
    scene: &mut GlobeScene,
    viewport_tex: (egui::TextureId, egui::Vec2),
) -> PageResponse {
    let mut toggle_theme = false;

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Portal").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = match theme {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀",
                };
                if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                    toggle_theme = true;
                }
            });
        });
    });

    let mut viewport_size = egui::vec2(0.0, VIEWPORT_HEIGHT);
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            hero(ui);
            viewport_size = globe_viewport(ui, scene, viewport_tex);
            if let Some(country) = scene.selected() {
                statistics(ui, country);
            }
            filters(ui);
            mobile_app(ui);
            footer(ui);
        });
    });

    PageResponse { toggle_theme, viewport_size }
}

fn hero(ui: &mut egui::Ui) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Find Anyone Anywhere in the World").size(32.0).strong());
        ui.add_space(6.0);
        ui.label(
            "Explore the interactive 3D globe, select a country, and discover \
             statistics on nationalities and languages",
        );
    });
    ui.add_space(16.0);
}

fn globe_viewport(
    ui: &mut egui::Ui,
    scene: &mut GlobeScene,
    (tex_id, tex_size): (egui::TextureId, egui::Vec2),
) -> egui::Vec2 {
    let size = egui::vec2(ui.available_width(), VIEWPORT_HEIGHT);
    let image = egui::Image::from_texture(egui::load::SizedTexture::new(tex_id, tex_size))
        .fit_to_exact_size(size)
        .sense(egui::Sense::click_and_drag());
    let resp = ui.add(image);
    scene.handle_viewport(&resp, ui.ctx());

    ui.vertical_centered(|ui| {
        ui.weak("🌍 Drag to rotate • Scroll to zoom • Click markers for country stats");
    });
    ui.add_space(16.0);
    size
}

const NATIONALITY_BAR: Color32 = Color32::from_rgb(99, 102, 241);
const LANGUAGE_BAR: Color32 = Color32::from_rgb(16, 185, 129);

fn statistics(ui: &mut egui::Ui, country: &CountryRecord) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(format!("Statistics for {}", country.name)).size(24.0).strong());
    });
    ui.add_space(8.0);
    ui.columns(2, |cols| {
        stat_card(&mut cols[0], "Nationalities", country.nationalities, NATIONALITY_BAR);
        stat_card(&mut cols[1], "Languages", country.languages, LANGUAGE_BAR);
    });
    ui.add_space(24.0);
}

fn stat_card(ui: &mut egui::Ui, title: &str, entries: &[(&str, u8)], fill: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(title);
        ui.add_space(4.0);
        for (label, pct) in entries {
            ui.horizontal(|ui| {
                ui.add_sized([110.0, 18.0], egui::Label::new(*label));
                let track_width = (ui.available_width() - 48.0).max(20.0);
                let (rect, _) = ui
                    .allocate_exact_size(egui::vec2(track_width, 14.0), egui::Sense::hover());
                let painter = ui.painter();
                painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
                let frac = (f32::from(*pct) / 100.0).clamp(0.0, 1.0);
                let bar = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width() * frac, rect.height()),
                );
                painter.rect_filled(bar, 4.0, fill);
                ui.label(format!("{pct}%"));
            });
        }
    });
}

fn filters(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Search Filters").size(24.0).strong());
        ui.add_space(2.0);
        ui.label("Filter people by interests, language, and nationality");
    });
    ui.add_space(8.0);
    let cards = [
        ("🎯", "Interests", "Find people who share your hobbies and passions"),
        ("🗣", "Language", "Connect with speakers of your preferred languages"),
        ("🌍", "Nationality", "Discover people from specific countries and cultures"),
    ];
    ui.columns(3, |cols| {
        for (col, (icon, title, blurb)) in cols.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(icon).size(28.0));
                    ui.strong(title);
                    ui.label(blurb);
                });
            });
        }
    });
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.weak(
            "Note: full search and messaging features are available in the Portal \
             mobile application.",
        );
    });
    ui.add_space(24.0);
}

fn mobile_app(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Get the Full Experience").size(24.0).strong());
            ui.label("Download the Portal mobile app to access all features including:");
        });
        ui.add_space(6.0);
        for line in [
            "✉ Send messages and connection requests",
            "🔍 Advanced search with all filters",
            "💬 Real-time chat and video calls",
            "🌟 Premium features and matching algorithms",
        ] {
            ui.label(line);
        }
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            for (small, big) in [("Download on the", "App Store"), ("Get it on", "Google Play")] {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.small(small);
                        ui.strong(big);
                    });
                });
            }
        });
    });
    ui.add_space(16.0);
}

fn footer(ui: &mut egui::Ui) {
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.weak("© 2025 Portal. Full functionality available in the Portal mobile app.");
    });
    ui.add_space(8.0);
}
