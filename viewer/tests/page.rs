//! Headless smoke tests: the page composes without a GPU, egui only needs a
//! texture id and a screen rect.

use portal_viewer::globe::GlobeScene;
use portal_viewer::ui::{self, Theme, VIEWPORT_HEIGHT};

fn raw_input() -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(1280.0, 900.0),
        )),
        ..Default::default()
    }
}

fn show_once(scene: &mut GlobeScene, theme: Theme) -> ui::PageResponse {
    let ctx = egui::Context::default();
    ctx.set_visuals(theme.visuals());
    let tex = (egui::TextureId::User(1), egui::vec2(1264.0, VIEWPORT_HEIGHT));
    let mut page = None;
    let _ = ctx.run(raw_input(), |ctx| {
        page = Some(ui::show(ctx, theme, scene, tex));
    });
    page.unwrap()
}

#[test]
fn page_lays_out_without_a_selection() {
    let mut scene = GlobeScene::new();
    let page = show_once(&mut scene, Theme::Dark);
    assert!(!page.toggle_theme);
    assert_eq!(page.viewport_size.y, VIEWPORT_HEIGHT);
    assert!(page.viewport_size.x > 0.0);
}

#[test]
fn page_lays_out_with_a_selection_in_both_themes() {
    let mut scene = GlobeScene::new();
    scene.select(2);
    for theme in [Theme::Light, Theme::Dark] {
        let page = show_once(&mut scene, theme);
        assert_eq!(page.viewport_size.y, VIEWPORT_HEIGHT);
    }
    // Composing the page never mutates the selection.
    assert_eq!(scene.selected().map(|c| c.code), Some("CN"));
}
