//! Built-in templates shipped with the application.
//!
//! The table below is the compile-time source of truth; [`templates`] turns
//! it into fully populated catalog entries.

use crate::models::config::{
    Alignment, BackgroundKind, BorderStyle, LayoutStyle, TemplateConfig, TextTransform,
};
use crate::models::template::{Template, TemplateCategory, TemplateOrigin};

struct BuiltinSpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: TemplateCategory,
    preview: &'static str,
    style: LayoutStyle,
    /// primary, secondary, accent, background, text
    palette: [&'static str; 5],
    /// heading, body, accent
    fonts: [&'static str; 3],
    background: BackgroundKind,
    border: Option<(f64, BorderStyle)>,
    uppercase_names: bool,
}

const BUILTINS: &[BuiltinSpec] = &[
    BuiltinSpec {
        id: "classic-ivory",
        name: "Klassik fil suyagi",
        description: "Timeless serif layout on an ivory card",
        category: TemplateCategory::Classic,
        preview: "💍",
        style: LayoutStyle::Classic,
        palette: ["#1f2937", "#6b7280", "#d4af37", "#fffdf7", "#111827"],
        fonts: ["Playfair Display", "Lora", "Great Vibes"],
        background: BackgroundKind::Solid,
        border: Some((2.0, BorderStyle::Double)),
        uppercase_names: false,
    },
    BuiltinSpec {
        id: "modern-mono",
        name: "Zamonaviy",
        description: "Clean sans-serif with bold contrast",
        category: TemplateCategory::Modern,
        preview: "◼",
        style: LayoutStyle::Modern,
        palette: ["#0f172a", "#475569", "#0ea5e9", "#f8fafc", "#0f172a"],
        fonts: ["Montserrat", "Inter", "Montserrat"],
        background: BackgroundKind::Solid,
        border: None,
        uppercase_names: true,
    },
    BuiltinSpec {
        id: "elegant-rose",
        name: "Nafis atirgul",
        description: "Soft rose gradient with script accents",
        category: TemplateCategory::Elegant,
        preview: "🌹",
        style: LayoutStyle::Elegant,
        palette: ["#be185d", "#fda4af", "#fb7185", "#fdf2f8", "#881337"],
        fonts: ["Cormorant Garamond", "Lato", "Great Vibes"],
        background: BackgroundKind::Gradient,
        border: None,
        uppercase_names: false,
    },
    BuiltinSpec {
        id: "rustic-kraft",
        name: "Qishloq uslubi",
        description: "Warm kraft-paper tones with hand-drawn flourishes",
        category: TemplateCategory::Rustic,
        preview: "🌾",
        style: LayoutStyle::Rustic,
        palette: ["#78350f", "#a16207", "#65a30d", "#fef3c7", "#451a03"],
        fonts: ["Amatic SC", "Josefin Sans", "Sacramento"],
        background: BackgroundKind::Pattern,
        border: Some((1.0, BorderStyle::Dashed)),
        uppercase_names: false,
    },
    BuiltinSpec {
        id: "luxury-gold",
        name: "Hashamatli oltin",
        description: "Gold on deep navy",
        category: TemplateCategory::Luxury,
        preview: "👑",
        style: LayoutStyle::Luxury,
        palette: ["#d4af37", "#e5e7eb", "#f59e0b", "#0b1120", "#f9fafb"],
        fonts: ["Cinzel", "Raleway", "Pinyon Script"],
        background: BackgroundKind::Solid,
        border: Some((3.0, BorderStyle::Solid)),
        uppercase_names: true,
    },
    BuiltinSpec {
        id: "minimalist-white",
        name: "Minimalist",
        description: "Lots of whitespace, one accent color",
        category: TemplateCategory::Minimalist,
        preview: "○",
        style: LayoutStyle::Minimalist,
        palette: ["#111827", "#9ca3af", "#10b981", "#ffffff", "#111827"],
        fonts: ["Inter", "Inter", "Inter"],
        background: BackgroundKind::Solid,
        border: None,
        uppercase_names: false,
    },
    BuiltinSpec {
        id: "artistic-watercolor",
        name: "Akvarel",
        description: "Watercolor wash with playful type",
        category: TemplateCategory::Artistic,
        preview: "🎨",
        style: LayoutStyle::Artistic,
        palette: ["#7c3aed", "#a78bfa", "#f472b6", "#faf5ff", "#4c1d95"],
        fonts: ["Abril Fatface", "Nunito", "Satisfy"],
        background: BackgroundKind::Gradient,
        border: None,
        uppercase_names: false,
    },
    BuiltinSpec {
        id: "vintage-sepia",
        name: "Retro",
        description: "Aged paper and letterpress type",
        category: TemplateCategory::Vintage,
        preview: "📜",
        style: LayoutStyle::Vintage,
        palette: ["#44403c", "#78716c", "#b45309", "#f5f5dc", "#292524"],
        fonts: ["Old Standard TT", "EB Garamond", "Pinyon Script"],
        background: BackgroundKind::Solid,
        border: Some((1.0, BorderStyle::Solid)),
        uppercase_names: false,
    },
];

impl BuiltinSpec {
    fn to_template(&self) -> Template {
        let mut config = TemplateConfig::default();
        let [primary, secondary, accent, background, text] = self.palette;
        config.colors.primary = primary.to_string();
        config.colors.secondary = secondary.to_string();
        config.colors.accent = accent.to_string();
        config.colors.background = background.to_string();
        config.colors.text = text.to_string();
        config.colors.gradient_from = background.to_string();
        config.colors.gradient_to = secondary.to_string();
        config.colors.border = accent.to_string();

        let [heading, body, accent_font] = self.fonts;
        config.fonts.heading = heading.to_string();
        config.fonts.body = body.to_string();
        config.fonts.accent = accent_font.to_string();
        config.fonts.caption = body.to_string();

        config.layout.style = self.style;
        config.layout.alignment = Alignment::Center;
        config.background.kind = self.background;
        if self.background == BackgroundKind::Pattern {
            config.background.pattern = Some("linen".to_string());
        }
        if let Some((width, style)) = self.border {
            config.border.width = width;
            config.border.style = style;
            config.border.color = accent.to_string();
        }
        if self.uppercase_names {
            config.typography.text_transform = TextTransform::Uppercase;
            config.typography.letter_spacing = 2.0;
        }

        Template {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            config,
            preview: self.preview.to_string(),
            origin: TemplateOrigin::BuiltIn,
        }
    }
}

/// All built-in templates, in display order.
pub fn templates() -> Vec<Template> {
    BUILTINS.iter().map(BuiltinSpec::to_template).collect()
}

/// Look up a built-in by id.
pub fn find(id: &str) -> Option<Template> {
    BUILTINS
        .iter()
        .find(|spec| spec.id == id)
        .map(BuiltinSpec::to_template)
}

/// The template used when an invitation names an unknown template id.
pub fn fallback() -> Template {
    BUILTINS[0].to_template()
}
