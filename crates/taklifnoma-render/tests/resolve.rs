use taklifnoma_core::models::config::{Colors, TemplateConfig};
use taklifnoma_core::models::patch::{
    ColorsPatch, EffectsPatch, LayoutPatch, TemplateConfigPatch, TypographyPatch,
};
use taklifnoma_core::presets;
use taklifnoma_render::resolve::{History, apply_preset, merge_patch};

fn spacing(value: f64) -> TemplateConfigPatch {
    TemplateConfigPatch {
        layout: Some(LayoutPatch {
            spacing: Some(value),
            ..LayoutPatch::default()
        }),
        ..TemplateConfigPatch::default()
    }
}

#[test]
fn rose_preset_replaces_colors_only() {
    let mut current = TemplateConfig::default();
    current.colors.gradient_from = "#123456".to_string();
    current.layout.spacing = 48.0;
    current.fonts.heading = "Cormorant".to_string();

    let rose = presets::find("rose").unwrap();
    let next = apply_preset(&current, &rose.colors());

    assert_eq!(next.colors.primary, "#be185d");
    assert_eq!(next.colors.secondary, "#fda4af");
    assert_eq!(next.colors.accent, "#fb7185");
    assert_eq!(next.colors.background, "#fdf2f8");
    assert_eq!(next.colors.text, "#881337");
    // Unset roles come from the defaults, not from the current palette.
    assert_eq!(next.colors.gradient_from, Colors::default().gradient_from);
    assert_eq!(next.layout, current.layout);
    assert_eq!(next.fonts, current.fonts);
    assert_eq!(next.typography, current.typography);
}

#[test]
fn apply_preset_leaves_input_untouched() {
    let current = TemplateConfig::default();
    let before = current.clone();
    let preset = ColorsPatch {
        primary: Some("#000000".to_string()),
        ..ColorsPatch::default()
    };
    let _ = apply_preset(&current, &preset);
    assert_eq!(current, before);
}

#[test]
fn merge_patch_clamps_out_of_range_input() {
    let patch = TemplateConfigPatch {
        effects: Some(EffectsPatch {
            blur: Some(500.0),
            opacity: Some(-10.0),
            ..EffectsPatch::default()
        }),
        typography: Some(TypographyPatch {
            line_height: Some(f64::NAN),
            ..TypographyPatch::default()
        }),
        ..TemplateConfigPatch::default()
    };
    let next = merge_patch(&TemplateConfig::default(), &patch);
    assert_eq!(next.effects.blur, 20.0);
    assert_eq!(next.effects.opacity, 0.0);
    assert_eq!(next.typography.line_height, 0.8);
    assert_eq!(next.effects.contrast, 100.0);
}

#[test]
fn undo_and_redo_walk_the_history() {
    let mut history = History::new(TemplateConfig::default());
    history.apply(&spacing(10.0));
    history.apply(&spacing(20.0));
    assert_eq!(history.len(), 3);
    assert_eq!(history.current().layout.spacing, 20.0);

    assert_eq!(history.undo().layout.spacing, 10.0);
    assert_eq!(history.undo().layout.spacing, 24.0);
    assert!(!history.can_undo());
    assert_eq!(history.undo().layout.spacing, 24.0);
    assert_eq!(history.cursor(), 0);

    assert_eq!(history.redo().layout.spacing, 10.0);
    assert_eq!(history.redo().layout.spacing, 20.0);
    assert!(!history.can_redo());
    assert_eq!(history.redo().layout.spacing, 20.0);
}

#[test]
fn new_edit_discards_redo_branch() {
    let mut history = History::new(TemplateConfig::default());
    history.apply(&spacing(10.0));
    history.apply(&spacing(20.0));
    history.undo();
    history.apply(&spacing(30.0));

    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());
    assert_eq!(history.undo().layout.spacing, 10.0);
}

#[test]
fn limit_drops_oldest_snapshots() {
    let mut history = History::with_limit(TemplateConfig::default(), 3);
    for value in [1.0, 2.0, 3.0, 4.0] {
        history.apply(&spacing(value));
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.current().layout.spacing, 4.0);
    history.undo();
    assert_eq!(history.undo().layout.spacing, 2.0);
    assert!(!history.can_undo());
    assert!(!history.is_empty());
}
