use std::collections::HashSet;

use taklifnoma_core::builtin;
use taklifnoma_core::models::config::{BackgroundKind, LayoutStyle};
use taklifnoma_core::models::template::{CategoryFilter, TemplateCategory};
use taklifnoma_core::presets;

#[test]
fn builtin_ids_are_unique() {
    let templates = builtin::templates();
    let ids: HashSet<&str> = templates.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), templates.len());
    assert_eq!(templates.len(), 8);
}

#[test]
fn every_category_has_a_builtin() {
    let templates = builtin::templates();
    for category in TemplateCategory::ALL {
        assert!(
            templates.iter().any(|t| t.category == category),
            "no built-in for {category}"
        );
    }
}

#[test]
fn builtins_are_marked_builtin_and_clamped() {
    for template in builtin::templates() {
        assert!(template.is_builtin());
        assert_eq!(template.config.clone().clamped(), template.config);
    }
}

#[test]
fn find_and_fallback() {
    let rustic = builtin::find("rustic-kraft").unwrap();
    assert_eq!(rustic.config.layout.style, LayoutStyle::Rustic);
    assert_eq!(rustic.config.background.kind, BackgroundKind::Pattern);
    assert_eq!(rustic.config.background.pattern.as_deref(), Some("linen"));

    assert!(builtin::find("no-such-template").is_none());
    assert_eq!(builtin::fallback().id, "classic-ivory");
}

#[test]
fn category_parsing() {
    assert_eq!("Rustic".parse::<TemplateCategory>().unwrap(), TemplateCategory::Rustic);
    assert!("baroque".parse::<TemplateCategory>().is_err());

    assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    let luxury: CategoryFilter = "luxury".parse().unwrap();
    assert!(luxury.matches(TemplateCategory::Luxury));
    assert!(!luxury.matches(TemplateCategory::Modern));
    assert!(CategoryFilter::All.matches(TemplateCategory::Modern));
}

#[test]
fn category_serializes_snake_case() {
    let json = serde_json::to_string(&TemplateCategory::Minimalist).unwrap();
    assert_eq!(json, "\"minimalist\"");
}

#[test]
fn rose_preset_sets_five_roles() {
    let rose = presets::find("rose").unwrap();
    let colors = rose.colors();
    assert_eq!(colors.primary.as_deref(), Some("#be185d"));
    assert_eq!(colors.secondary.as_deref(), Some("#fda4af"));
    assert_eq!(colors.accent.as_deref(), Some("#fb7185"));
    assert_eq!(colors.background.as_deref(), Some("#fdf2f8"));
    assert_eq!(colors.text.as_deref(), Some("#881337"));
    assert_eq!(colors.gradient_from, None);
    assert_eq!(colors.border, None);
}

#[test]
fn preset_ids_are_unique() {
    let ids: HashSet<&str> = presets::PRESETS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), presets::PRESETS.len());
    assert!(presets::find("sunset").is_none());
}
