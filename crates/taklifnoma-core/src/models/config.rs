//! Visual configuration of an invitation template.
//!
//! A [`TemplateConfig`] is always fully populated. Stored JSON that omits a
//! field picks up the built-in default for it, and every numeric field has a
//! declared [`NumericRange`] that [`TemplateConfig::clamped`] enforces.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive bounds for a numeric config field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

pub mod ranges {
    use super::NumericRange;

    pub const SPACING: NumericRange = NumericRange::new(0.0, 100.0);
    pub const PADDING: NumericRange = NumericRange::new(0.0, 100.0);
    pub const MARGIN: NumericRange = NumericRange::new(0.0, 100.0);
    pub const BORDER_RADIUS: NumericRange = NumericRange::new(0.0, 50.0);
    pub const SHADOW_INTENSITY: NumericRange = NumericRange::new(0.0, 100.0);

    pub const ANIMATION_DURATION: NumericRange = NumericRange::new(0.1, 10.0);
    pub const ANIMATION_DELAY: NumericRange = NumericRange::new(0.0, 10.0);

    pub const BLUR: NumericRange = NumericRange::new(0.0, 20.0);
    pub const BRIGHTNESS: NumericRange = NumericRange::new(0.0, 200.0);
    pub const CONTRAST: NumericRange = NumericRange::new(0.0, 200.0);
    pub const SATURATE: NumericRange = NumericRange::new(0.0, 200.0);
    pub const SEPIA: NumericRange = NumericRange::new(0.0, 100.0);
    pub const GRAYSCALE: NumericRange = NumericRange::new(0.0, 100.0);
    pub const HUE_ROTATE: NumericRange = NumericRange::new(0.0, 360.0);
    pub const OPACITY: NumericRange = NumericRange::new(0.0, 100.0);

    pub const BORDER_WIDTH: NumericRange = NumericRange::new(0.0, 20.0);

    pub const LETTER_SPACING: NumericRange = NumericRange::new(-5.0, 20.0);
    pub const LINE_HEIGHT: NumericRange = NumericRange::new(0.8, 3.0);
    pub const FONT_WEIGHT: NumericRange = NumericRange::new(100.0, 900.0);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TemplateConfig {
    pub colors: Colors,
    pub fonts: Fonts,
    pub layout: Layout,
    pub animations: Animations,
    pub effects: Effects,
    pub border: Border,
    pub background: Background,
    pub typography: Typography,
}

impl TemplateConfig {
    /// Bring every numeric field into its declared range.
    pub fn clamped(mut self) -> Self {
        self.layout = self.layout.clamped();
        self.animations = self.animations.clamped();
        self.effects = self.effects.clamped();
        self.border = self.border.clamped();
        self.typography = self.typography.clamped();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub gradient_from: String,
    pub gradient_to: String,
    pub shadow: String,
    pub border: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "#1f2937".to_string(),
            secondary: "#6b7280".to_string(),
            accent: "#d4af37".to_string(),
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            gradient_from: "#fdf2f8".to_string(),
            gradient_to: "#fce7f3".to_string(),
            shadow: "#000000".to_string(),
            border: "#e5e7eb".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
    pub accent: String,
    pub caption: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            heading: "Playfair Display".to_string(),
            body: "Inter".to_string(),
            accent: "Dancing Script".to_string(),
            caption: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LayoutStyle {
    #[default]
    Classic,
    Modern,
    Elegant,
    Rustic,
    Luxury,
    Minimalist,
    Artistic,
    Vintage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Layout {
    pub style: LayoutStyle,
    pub spacing: f64,
    pub padding: f64,
    pub margin: f64,
    pub border_radius: f64,
    pub shadow_intensity: f64,
    pub alignment: Alignment,
    pub direction: Direction,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            style: LayoutStyle::Classic,
            spacing: 24.0,
            padding: 32.0,
            margin: 16.0,
            border_radius: 12.0,
            shadow_intensity: 30.0,
            alignment: Alignment::Center,
            direction: Direction::Vertical,
        }
    }
}

impl Layout {
    fn clamped(mut self) -> Self {
        self.spacing = ranges::SPACING.clamp(self.spacing);
        self.padding = ranges::PADDING.clamp(self.padding);
        self.margin = ranges::MARGIN.clamp(self.margin);
        self.border_radius = ranges::BORDER_RADIUS.clamp(self.border_radius);
        self.shadow_intensity = ranges::SHADOW_INTENSITY.clamp(self.shadow_intensity);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnimationKind {
    #[default]
    Fade,
    Slide,
    Scale,
    Bounce,
    Rotate,
    Flip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Animations {
    pub enabled: bool,
    pub kind: AnimationKind,
    /// Seconds, always > 0.
    pub duration: f64,
    /// Seconds, always >= 0.
    pub delay: f64,
    pub easing: String,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: AnimationKind::Fade,
            duration: 0.8,
            delay: 0.0,
            easing: "ease-in-out".to_string(),
        }
    }
}

impl Animations {
    fn clamped(mut self) -> Self {
        self.duration = ranges::ANIMATION_DURATION.clamp(self.duration);
        self.delay = ranges::ANIMATION_DELAY.clamp(self.delay);
        self
    }
}

/// CSS-filter style parameters. Percentages except `blur` (px) and
/// `hue_rotate` (degrees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Effects {
    pub blur: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub saturate: f64,
    pub sepia: f64,
    pub grayscale: f64,
    pub hue_rotate: f64,
    pub opacity: f64,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            blur: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            saturate: 100.0,
            sepia: 0.0,
            grayscale: 0.0,
            hue_rotate: 0.0,
            opacity: 100.0,
        }
    }
}

impl Effects {
    fn clamped(mut self) -> Self {
        self.blur = ranges::BLUR.clamp(self.blur);
        self.brightness = ranges::BRIGHTNESS.clamp(self.brightness);
        self.contrast = ranges::CONTRAST.clamp(self.contrast);
        self.saturate = ranges::SATURATE.clamp(self.saturate);
        self.sepia = ranges::SEPIA.clamp(self.sepia);
        self.grayscale = ranges::GRAYSCALE.clamp(self.grayscale);
        self.hue_rotate = ranges::HUE_ROTATE.clamp(self.hue_rotate);
        self.opacity = ranges::OPACITY.clamp(self.opacity);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Border {
    pub width: f64,
    pub style: BorderStyle,
    pub color: String,
    pub radius: f64,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 0.0,
            style: BorderStyle::Solid,
            color: "#e5e7eb".to_string(),
            radius: 12.0,
        }
    }
}

impl Border {
    fn clamped(mut self) -> Self {
        self.width = ranges::BORDER_WIDTH.clamp(self.width);
        self.radius = ranges::BORDER_RADIUS.clamp(self.radius);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BackgroundKind {
    #[default]
    Solid,
    Gradient,
    Image,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Background {
    pub kind: BackgroundKind,
    /// CSS gradient direction, e.g. `135deg` or `to bottom`.
    pub gradient_direction: String,
    pub image: Option<String>,
    pub pattern: Option<String>,
    pub blend_mode: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Solid,
            gradient_direction: "135deg".to_string(),
            image: None,
            pattern: None,
            blend_mode: "normal".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Overline,
    LineThrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Typography {
    /// Pixels.
    pub letter_spacing: f64,
    pub line_height: f64,
    pub text_transform: TextTransform,
    /// 100..=900 in steps of 100.
    pub font_weight: u16,
    pub text_decoration: TextDecoration,
    /// CSS `text-shadow` value, `none` for no shadow.
    pub text_shadow: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            letter_spacing: 0.0,
            line_height: 1.6,
            text_transform: TextTransform::None,
            font_weight: 400,
            text_decoration: TextDecoration::None,
            text_shadow: "none".to_string(),
        }
    }
}

impl Typography {
    fn clamped(mut self) -> Self {
        self.letter_spacing = ranges::LETTER_SPACING.clamp(self.letter_spacing);
        self.line_height = ranges::LINE_HEIGHT.clamp(self.line_height);
        self.font_weight = clamp_font_weight(self.font_weight);
        self
    }
}

pub fn clamp_font_weight(weight: u16) -> u16 {
    normalize_font_weight(f64::from(weight))
}

/// Round to the nearest hundred within 100..=900.
pub fn normalize_font_weight(weight: f64) -> u16 {
    let clamped = ranges::FONT_WEIGHT.clamp(weight);
    ((clamped / 100.0).round() * 100.0) as u16
}
