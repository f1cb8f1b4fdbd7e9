use pagefx_core::*;

#[test]
fn centered_element_has_no_offset() {
    // 200px tall element whose midpoint sits at the center of an 800px viewport
    assert_eq!(parallax_offset(300.0, 200.0, 800.0, 0.05), 0.0);
}

#[test]
fn offset_sign_follows_side_of_center() {
    let below = parallax_offset(700.0, 100.0, 800.0, 0.05);
    let above = parallax_offset(-300.0, 100.0, 800.0, 0.05);
    assert!(below > 0.0);
    assert!(above < 0.0);
    assert!((below - 17.5).abs() < 1e-9);
}

#[test]
fn geometry_layer_moves_faster() {
    let params = ParallaxParams::default();
    let geometry = ParallaxLayer::from_classes("hero geometry".split_whitespace());
    let section = ParallaxLayer::from_classes("process-step".split_whitespace());
    assert_eq!(geometry, ParallaxLayer::Geometry);
    assert_eq!(section, ParallaxLayer::Section);
    assert_eq!(geometry.speed(&params), PARALLAX_SPEED_GEOMETRY);
    assert_eq!(section.speed(&params), PARALLAX_SPEED_DEFAULT);
}

#[test]
fn class_match_is_exact() {
    let layer = ParallaxLayer::from_classes("geometry-lines".split_whitespace());
    assert_eq!(layer, ParallaxLayer::Section);
}

#[test]
fn transform_string_is_css_translate() {
    assert_eq!(translate_y_css(12.0), "translateY(12px)");
    assert_eq!(translate_y_css(-3.5), "translateY(-3.5px)");
}
