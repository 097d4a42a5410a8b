//! Partial updates to a [`TemplateConfig`].
//!
//! Every field is optional; `None` leaves the target untouched. Numeric
//! fields are raw user input and may be out of range; callers clamp after
//! applying.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::config::{
    Alignment, AnimationKind, Animations, Background, BackgroundKind, Border, BorderStyle,
    Colors, Direction, Effects, Fonts, Layout, LayoutStyle, TemplateConfig, TextDecoration,
    TextTransform, Typography, normalize_font_weight,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TemplateConfigPatch {
    pub colors: Option<ColorsPatch>,
    pub fonts: Option<FontsPatch>,
    pub layout: Option<LayoutPatch>,
    pub animations: Option<AnimationsPatch>,
    pub effects: Option<EffectsPatch>,
    pub border: Option<BorderPatch>,
    pub background: Option<BackgroundPatch>,
    pub typography: Option<TypographyPatch>,
}

impl TemplateConfigPatch {
    pub fn apply_to(&self, config: &mut TemplateConfig) {
        if let Some(p) = &self.colors {
            p.apply_to(&mut config.colors);
        }
        if let Some(p) = &self.fonts {
            p.apply_to(&mut config.fonts);
        }
        if let Some(p) = &self.layout {
            p.apply_to(&mut config.layout);
        }
        if let Some(p) = &self.animations {
            p.apply_to(&mut config.animations);
        }
        if let Some(p) = &self.effects {
            p.apply_to(&mut config.effects);
        }
        if let Some(p) = &self.border {
            p.apply_to(&mut config.border);
        }
        if let Some(p) = &self.background {
            p.apply_to(&mut config.background);
        }
        if let Some(p) = &self.typography {
            p.apply_to(&mut config.typography);
        }
    }
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

/// A color palette, possibly incomplete. Also the shape of a named preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ColorsPatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub gradient_from: Option<String>,
    pub gradient_to: Option<String>,
    pub shadow: Option<String>,
    pub border: Option<String>,
}

impl ColorsPatch {
    pub fn apply_to(&self, colors: &mut Colors) {
        set(&mut colors.primary, &self.primary);
        set(&mut colors.secondary, &self.secondary);
        set(&mut colors.accent, &self.accent);
        set(&mut colors.background, &self.background);
        set(&mut colors.text, &self.text);
        set(&mut colors.gradient_from, &self.gradient_from);
        set(&mut colors.gradient_to, &self.gradient_to);
        set(&mut colors.shadow, &self.shadow);
        set(&mut colors.border, &self.border);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FontsPatch {
    pub heading: Option<String>,
    pub body: Option<String>,
    pub accent: Option<String>,
    pub caption: Option<String>,
}

impl FontsPatch {
    pub fn apply_to(&self, fonts: &mut Fonts) {
        set(&mut fonts.heading, &self.heading);
        set(&mut fonts.body, &self.body);
        set(&mut fonts.accent, &self.accent);
        set(&mut fonts.caption, &self.caption);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct LayoutPatch {
    pub style: Option<LayoutStyle>,
    pub spacing: Option<f64>,
    pub padding: Option<f64>,
    pub margin: Option<f64>,
    pub border_radius: Option<f64>,
    pub shadow_intensity: Option<f64>,
    pub alignment: Option<Alignment>,
    pub direction: Option<Direction>,
}

impl LayoutPatch {
    pub fn apply_to(&self, layout: &mut Layout) {
        set(&mut layout.style, &self.style);
        set(&mut layout.spacing, &self.spacing);
        set(&mut layout.padding, &self.padding);
        set(&mut layout.margin, &self.margin);
        set(&mut layout.border_radius, &self.border_radius);
        set(&mut layout.shadow_intensity, &self.shadow_intensity);
        set(&mut layout.alignment, &self.alignment);
        set(&mut layout.direction, &self.direction);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AnimationsPatch {
    pub enabled: Option<bool>,
    pub kind: Option<AnimationKind>,
    pub duration: Option<f64>,
    pub delay: Option<f64>,
    pub easing: Option<String>,
}

impl AnimationsPatch {
    pub fn apply_to(&self, animations: &mut Animations) {
        set(&mut animations.enabled, &self.enabled);
        set(&mut animations.kind, &self.kind);
        set(&mut animations.duration, &self.duration);
        set(&mut animations.delay, &self.delay);
        set(&mut animations.easing, &self.easing);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EffectsPatch {
    pub blur: Option<f64>,
    pub brightness: Option<f64>,
    pub contrast: Option<f64>,
    pub saturate: Option<f64>,
    pub sepia: Option<f64>,
    pub grayscale: Option<f64>,
    pub hue_rotate: Option<f64>,
    pub opacity: Option<f64>,
}

impl EffectsPatch {
    pub fn apply_to(&self, effects: &mut Effects) {
        set(&mut effects.blur, &self.blur);
        set(&mut effects.brightness, &self.brightness);
        set(&mut effects.contrast, &self.contrast);
        set(&mut effects.saturate, &self.saturate);
        set(&mut effects.sepia, &self.sepia);
        set(&mut effects.grayscale, &self.grayscale);
        set(&mut effects.hue_rotate, &self.hue_rotate);
        set(&mut effects.opacity, &self.opacity);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BorderPatch {
    pub width: Option<f64>,
    pub style: Option<BorderStyle>,
    pub color: Option<String>,
    pub radius: Option<f64>,
}

impl BorderPatch {
    pub fn apply_to(&self, border: &mut Border) {
        set(&mut border.width, &self.width);
        set(&mut border.style, &self.style);
        set(&mut border.color, &self.color);
        set(&mut border.radius, &self.radius);
    }
}

/// `image` / `pattern` set to an empty string clear the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BackgroundPatch {
    pub kind: Option<BackgroundKind>,
    pub gradient_direction: Option<String>,
    pub image: Option<String>,
    pub pattern: Option<String>,
    pub blend_mode: Option<String>,
}

impl BackgroundPatch {
    pub fn apply_to(&self, background: &mut Background) {
        set(&mut background.kind, &self.kind);
        set(&mut background.gradient_direction, &self.gradient_direction);
        if let Some(image) = &self.image {
            background.image = non_empty(image);
        }
        if let Some(pattern) = &self.pattern {
            background.pattern = non_empty(pattern);
        }
        set(&mut background.blend_mode, &self.blend_mode);
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TypographyPatch {
    pub letter_spacing: Option<f64>,
    pub line_height: Option<f64>,
    pub text_transform: Option<TextTransform>,
    /// Raw slider value; rounded to the nearest valid weight.
    pub font_weight: Option<f64>,
    pub text_decoration: Option<TextDecoration>,
    pub text_shadow: Option<String>,
}

impl TypographyPatch {
    pub fn apply_to(&self, typography: &mut Typography) {
        set(&mut typography.letter_spacing, &self.letter_spacing);
        set(&mut typography.line_height, &self.line_height);
        set(&mut typography.text_transform, &self.text_transform);
        if let Some(weight) = self.font_weight {
            typography.font_weight = normalize_font_weight(weight);
        }
        set(&mut typography.text_decoration, &self.text_decoration);
        set(&mut typography.text_shadow, &self.text_shadow);
    }
}
