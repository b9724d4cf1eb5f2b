use portal_data::{CITIES, COUNTRIES};
use portal_viewer::globe::scene::{
    srgb_to_linear, CITY_RADIUS, COUNTRY_RADIUS, COUNTRY_RADIUS_HOVERED,
};
use portal_viewer::globe::{GlobeScene, MarkerHit};
use portal_viewer::ui::Theme;

#[test]
fn theme_toggle_round_trips() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn themes_parameterize_the_scene_differently() {
    let light = Theme::Light.lighting();
    let dark = Theme::Dark.lighting();
    assert!(light.directional_intensity > dark.directional_intensity);
    assert!(light.cloud_opacity > dark.cloud_opacity);
    assert_ne!(light.atmosphere_rgba, dark.atmosphere_rgba);
}

#[test]
fn selecting_replaces_previous_selection() {
    let mut scene = GlobeScene::new();
    assert!(scene.selected().is_none());
    scene.select(0);
    assert_eq!(scene.selected().map(|c| c.name), Some("United States"));
    scene.select(3);
    assert_eq!(scene.selected().map(|c| c.name), Some("Brazil"));
}

#[test]
fn hover_slots_are_exclusive() {
    let mut scene = GlobeScene::new();
    scene.set_hover(Some(MarkerHit::Country(2)));
    assert_eq!(scene.hovered_country, Some(2));
    assert_eq!(scene.hovered_city, None);
    scene.set_hover(Some(MarkerHit::City(4)));
    assert_eq!(scene.hovered_country, None);
    assert_eq!(scene.hovered_city, Some(4));
    scene.set_hover(None);
    assert_eq!(scene.hovered_country, None);
    assert_eq!(scene.hovered_city, None);
}

#[test]
fn instances_cover_every_marker_in_order() {
    let scene = GlobeScene::new();
    let instances = scene.marker_instances();
    assert_eq!(instances.len(), COUNTRIES.len() + CITIES.len());
    for inst in &instances[..COUNTRIES.len()] {
        assert_eq!(inst.scale, COUNTRY_RADIUS);
    }
    for inst in &instances[COUNTRIES.len()..] {
        assert_eq!(inst.scale, CITY_RADIUS);
    }
}

#[test]
fn hover_emphasis_is_fully_reversible() {
    let mut scene = GlobeScene::new();
    let baseline = scene.marker_instances();

    scene.set_hover(Some(MarkerHit::Country(2)));
    let hovered = scene.marker_instances();
    assert_eq!(hovered[2].scale, COUNTRY_RADIUS_HOVERED);
    assert_ne!(hovered[2].color, baseline[2].color);
    // Only the hovered marker changes.
    for i in (0..baseline.len()).filter(|&i| i != 2) {
        assert_eq!(hovered[i], baseline[i]);
    }

    scene.set_hover(None);
    assert_eq!(scene.marker_instances(), baseline);
}

#[test]
fn rotation_rates() {
    let mut scene = GlobeScene::new();
    scene.advance(2.0);
    assert!((scene.rotation - 0.1).abs() < 1e-6);
    assert!((scene.cloud_rotation - 0.02).abs() < 1e-6);
}

#[test]
fn srgb_to_linear_endpoints_and_monotonicity() {
    assert_eq!(srgb_to_linear(0), 0.0);
    assert!((srgb_to_linear(255) - 1.0).abs() < 1e-6);
    let mut prev = -1.0f32;
    for b in (0..=255).step_by(5) {
        let v = srgb_to_linear(b as u8);
        assert!(v > prev);
        prev = v;
    }
    // Mid-gray: sRGB 188 is about 0.5 linear.
    assert!((srgb_to_linear(188) - 0.5).abs() < 0.01);
}
