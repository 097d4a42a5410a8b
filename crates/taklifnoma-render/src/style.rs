//! Flattening a [`TemplateConfig`] into CSS-equivalent style attributes.

use serde::{Deserialize, Serialize};

use taklifnoma_core::models::config::{
    Alignment, AnimationKind, BackgroundKind, BorderStyle, Direction, Effects, TemplateConfig,
    TextDecoration, TextTransform, Typography,
};

/// Container-level presentation derived from a config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub background: String,
    pub background_blend_mode: String,
    pub color: String,
    pub padding: String,
    pub margin: String,
    pub gap: String,
    pub border: String,
    pub border_radius: String,
    pub box_shadow: String,
    pub filter: String,
    /// 0.0..=1.0
    pub opacity: f64,
    pub text_align: String,
    pub flex_direction: String,
    pub align_items: String,
    pub animation: Option<String>,
    pub fonts: FontStacks,
    pub text: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStacks {
    pub heading: String,
    pub body: String,
    pub accent: String,
    pub caption: String,
}

/// Typography overrides applied to the principal names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub letter_spacing: String,
    pub line_height: String,
    pub text_transform: String,
    pub font_weight: u16,
    pub text_decoration: String,
    pub text_shadow: String,
}

impl TextStyle {
    pub fn css(&self) -> String {
        format!(
            "letter-spacing: {}; line-height: {}; text-transform: {}; font-weight: {}; text-decoration: {}; text-shadow: {}",
            self.letter_spacing,
            self.line_height,
            self.text_transform,
            self.font_weight,
            self.text_decoration,
            self.text_shadow,
        )
    }
}

impl StyleDescriptor {
    /// Inline `style` attribute for the invitation card.
    pub fn container_css(&self) -> String {
        let mut css = format!(
            "background: {}; background-blend-mode: {}; color: {}; padding: {}; margin: {}; gap: {}; \
             border: {}; border-radius: {}; box-shadow: {}; filter: {}; opacity: {}; \
             text-align: {}; flex-direction: {}; align-items: {}; font-family: {}; line-height: {}",
            self.background,
            self.background_blend_mode,
            self.color,
            self.padding,
            self.margin,
            self.gap,
            self.border,
            self.border_radius,
            self.box_shadow,
            self.filter,
            num(self.opacity),
            self.text_align,
            self.flex_direction,
            self.align_items,
            self.fonts.body,
            self.text.line_height,
        );
        if let Some(animation) = &self.animation {
            css.push_str("; animation: ");
            css.push_str(animation);
        }
        css
    }
}

pub fn compute_style(config: &TemplateConfig) -> StyleDescriptor {
    let layout = &config.layout;
    let border = &config.border;

    let (border_css, radius) = if border.width > 0.0 {
        (
            format!(
                "{} {} {}",
                px(border.width),
                border_style(border.style),
                border.color
            ),
            border.radius,
        )
    } else {
        ("none".to_string(), layout.border_radius)
    };

    StyleDescriptor {
        background: background(config),
        background_blend_mode: config.background.blend_mode.clone(),
        color: config.colors.text.clone(),
        padding: px(layout.padding),
        margin: px(layout.margin),
        gap: px(layout.spacing),
        border: border_css,
        border_radius: px(radius),
        box_shadow: box_shadow(layout.shadow_intensity, &config.colors.shadow),
        filter: filter(&config.effects),
        opacity: config.effects.opacity / 100.0,
        text_align: match layout.alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
        .to_string(),
        flex_direction: match layout.direction {
            Direction::Horizontal => "row",
            Direction::Vertical => "column",
        }
        .to_string(),
        align_items: match layout.alignment {
            Alignment::Left => "flex-start",
            Alignment::Center => "center",
            Alignment::Right => "flex-end",
        }
        .to_string(),
        animation: animation(config),
        fonts: FontStacks {
            heading: font_stack(&config.fonts.heading, "serif"),
            body: font_stack(&config.fonts.body, "sans-serif"),
            accent: font_stack(&config.fonts.accent, "cursive"),
            caption: font_stack(&config.fonts.caption, "sans-serif"),
        },
        text: text_style(&config.typography),
    }
}

fn background(config: &TemplateConfig) -> String {
    let colors = &config.colors;
    let bg = &config.background;
    match bg.kind {
        BackgroundKind::Solid => colors.background.clone(),
        BackgroundKind::Gradient => format!(
            "linear-gradient({}, {}, {})",
            bg.gradient_direction, colors.gradient_from, colors.gradient_to
        ),
        BackgroundKind::Image => match &bg.image {
            Some(image) => format!(
                "{} url(\"{}\") center / cover no-repeat",
                colors.background, image
            ),
            None => colors.background.clone(),
        },
        BackgroundKind::Pattern => match bg.pattern.as_deref() {
            Some("dots") => format!(
                "radial-gradient({} 1px, transparent 1px) 0 0 / 16px 16px, {}",
                colors.accent, colors.background
            ),
            Some("stripes") => format!(
                "repeating-linear-gradient(45deg, {bg}, {bg} 10px, {to} 10px, {to} 20px)",
                bg = colors.background,
                to = colors.gradient_to
            ),
            Some("grid") => format!(
                "linear-gradient({c} 1px, transparent 1px) 0 0 / 24px 24px, \
                 linear-gradient(90deg, {c} 1px, transparent 1px) 0 0 / 24px 24px, {bg}",
                c = colors.border,
                bg = colors.background
            ),
            _ => format!(
                "repeating-linear-gradient(0deg, {bg}, {bg} 2px, {from} 2px, {from} 4px)",
                bg = colors.background,
                from = colors.gradient_from
            ),
        },
    }
}

fn box_shadow(intensity: f64, color: &str) -> String {
    if intensity <= 0.0 {
        return "none".to_string();
    }
    let y = intensity * 0.2;
    let blur = intensity * 0.6;
    let alpha = intensity / 100.0 * 0.5;
    format!("0 {} {} {}", px(y), px(blur), rgba(color, alpha))
}

fn filter(effects: &Effects) -> String {
    let neutral = Effects::default();
    let mut parts = Vec::new();
    if effects.blur != neutral.blur {
        parts.push(format!("blur({})", px(effects.blur)));
    }
    let percentages = [
        ("brightness", effects.brightness, neutral.brightness),
        ("contrast", effects.contrast, neutral.contrast),
        ("saturate", effects.saturate, neutral.saturate),
        ("sepia", effects.sepia, neutral.sepia),
        ("grayscale", effects.grayscale, neutral.grayscale),
    ];
    for (name, value, default) in percentages {
        if value != default {
            parts.push(format!("{name}({}%)", num(value)));
        }
    }
    if effects.hue_rotate != neutral.hue_rotate {
        parts.push(format!("hue-rotate({}deg)", num(effects.hue_rotate)));
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(" ")
    }
}

fn animation(config: &TemplateConfig) -> Option<String> {
    let anim = &config.animations;
    if !anim.enabled {
        return None;
    }
    let name = match anim.kind {
        AnimationKind::Fade => "fade",
        AnimationKind::Slide => "slide",
        AnimationKind::Scale => "scale",
        AnimationKind::Bounce => "bounce",
        AnimationKind::Rotate => "rotate",
        AnimationKind::Flip => "flip",
    };
    Some(format!(
        "taklif-{name} {}s {} {}s both",
        num(anim.duration),
        anim.easing,
        num(anim.delay)
    ))
}

fn text_style(typography: &Typography) -> TextStyle {
    TextStyle {
        letter_spacing: px(typography.letter_spacing),
        line_height: num(typography.line_height),
        text_transform: match typography.text_transform {
            TextTransform::None => "none",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Capitalize => "capitalize",
        }
        .to_string(),
        font_weight: typography.font_weight,
        text_decoration: match typography.text_decoration {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
            TextDecoration::Overline => "overline",
            TextDecoration::LineThrough => "line-through",
        }
        .to_string(),
        text_shadow: typography.text_shadow.clone(),
    }
}

fn border_style(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::Solid => "solid",
        BorderStyle::Dashed => "dashed",
        BorderStyle::Dotted => "dotted",
        BorderStyle::Double => "double",
    }
}

fn font_stack(family: &str, generic: &str) -> String {
    format!("'{}', {generic}", family.replace('\'', ""))
}

/// `#rgb` / `#rrggbb` to `rgba(...)`. Anything else falls back to black.
fn rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or((0, 0, 0));
    format!("rgba({r}, {g}, {b}, {})", num(alpha))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut it = digits.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((it.next()??, it.next()??, it.next()??))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

fn px(value: f64) -> String {
    format!("{}px", num(value))
}

/// Up to two decimals, trailing zeros dropped.
fn num(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
