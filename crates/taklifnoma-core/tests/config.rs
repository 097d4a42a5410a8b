use taklifnoma_core::models::config::{
    BackgroundKind, LayoutStyle, TemplateConfig, TextTransform, normalize_font_weight, ranges,
};
use taklifnoma_core::models::patch::{BackgroundPatch, TemplateConfigPatch, TypographyPatch};

#[test]
fn empty_json_is_fully_populated_default() {
    let config: TemplateConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, TemplateConfig::default());
    assert_eq!(config.colors.primary, "#1f2937");
    assert_eq!(config.fonts.heading, "Playfair Display");
    assert_eq!(config.layout.style, LayoutStyle::Classic);
}

#[test]
fn partial_json_fills_missing_roles() {
    let json = r##"{
        "colors": { "primary": "#be185d" },
        "layout": { "style": "vintage", "spacing": 40 },
        "typography": { "text_transform": "uppercase" }
    }"##;
    let config: TemplateConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.colors.primary, "#be185d");
    assert_eq!(config.colors.secondary, "#6b7280");
    assert_eq!(config.colors.border, "#e5e7eb");
    assert_eq!(config.layout.style, LayoutStyle::Vintage);
    assert_eq!(config.layout.spacing, 40.0);
    assert_eq!(config.layout.padding, 32.0);
    assert_eq!(config.typography.text_transform, TextTransform::Uppercase);
    assert_eq!(config.typography.font_weight, 400);
    assert_eq!(config.animations.easing, "ease-in-out");
}

#[test]
fn clamped_brings_every_field_into_range() {
    let mut config = TemplateConfig::default();
    config.layout.spacing = 250.0;
    config.layout.border_radius = -4.0;
    config.animations.duration = 0.0;
    config.animations.delay = -1.0;
    config.effects.blur = 99.0;
    config.effects.hue_rotate = 720.0;
    config.border.width = 50.0;
    config.typography.letter_spacing = -30.0;
    config.typography.line_height = 10.0;
    config.typography.font_weight = 1200;

    let config = config.clamped();
    assert_eq!(config.layout.spacing, 100.0);
    assert_eq!(config.layout.border_radius, 0.0);
    assert_eq!(config.animations.duration, 0.1);
    assert_eq!(config.animations.delay, 0.0);
    assert_eq!(config.effects.blur, 20.0);
    assert_eq!(config.effects.hue_rotate, 360.0);
    assert_eq!(config.border.width, 20.0);
    assert_eq!(config.typography.letter_spacing, -5.0);
    assert_eq!(config.typography.line_height, 3.0);
    assert_eq!(config.typography.font_weight, 900);
}

#[test]
fn nan_clamps_to_range_minimum() {
    assert_eq!(ranges::LINE_HEIGHT.clamp(f64::NAN), 0.8);
    assert_eq!(ranges::OPACITY.clamp(f64::NAN), 0.0);

    let mut config = TemplateConfig::default();
    config.effects.brightness = f64::NAN;
    assert_eq!(config.clamped().effects.brightness, 0.0);
}

#[test]
fn defaults_are_within_their_ranges() {
    let config = TemplateConfig::default();
    assert_eq!(config.clone().clamped(), config);
    assert!(ranges::SPACING.contains(config.layout.spacing));
    assert!(ranges::ANIMATION_DURATION.contains(config.animations.duration));
}

#[test]
fn font_weight_rounds_to_nearest_hundred() {
    assert_eq!(normalize_font_weight(449.0), 400);
    assert_eq!(normalize_font_weight(450.0), 500);
    assert_eq!(normalize_font_weight(40.0), 100);
    assert_eq!(normalize_font_weight(5000.0), 900);
    assert_eq!(normalize_font_weight(f64::NAN), 100);
}

#[test]
fn patch_touches_only_named_fields() {
    let mut config = TemplateConfig::default();
    let patch = TemplateConfigPatch {
        typography: Some(TypographyPatch {
            font_weight: Some(630.0),
            ..TypographyPatch::default()
        }),
        background: Some(BackgroundPatch {
            kind: Some(BackgroundKind::Image),
            image: Some("https://example.com/bg.jpg".to_string()),
            ..BackgroundPatch::default()
        }),
        ..TemplateConfigPatch::default()
    };
    patch.apply_to(&mut config);

    assert_eq!(config.typography.font_weight, 600);
    assert_eq!(config.typography.line_height, 1.6);
    assert_eq!(config.background.kind, BackgroundKind::Image);
    assert_eq!(config.background.image.as_deref(), Some("https://example.com/bg.jpg"));
    assert_eq!(config.colors, TemplateConfig::default().colors);
}

#[test]
fn empty_background_image_clears_it() {
    let mut config = TemplateConfig::default();
    config.background.image = Some("old.png".to_string());
    let patch = TemplateConfigPatch {
        background: Some(BackgroundPatch {
            image: Some(String::new()),
            ..BackgroundPatch::default()
        }),
        ..TemplateConfigPatch::default()
    };
    patch.apply_to(&mut config);
    assert_eq!(config.background.image, None);
}
