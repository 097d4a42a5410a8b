//! Named color palettes offered by the customization panel.

use crate::models::patch::ColorsPatch;

pub struct ColorPreset {
    pub id: &'static str,
    pub name: &'static str,
    /// primary, secondary, accent, background, text
    pub palette: [&'static str; 5],
}

impl ColorPreset {
    pub fn colors(&self) -> ColorsPatch {
        let [primary, secondary, accent, background, text] = self.palette;
        ColorsPatch {
            primary: Some(primary.to_string()),
            secondary: Some(secondary.to_string()),
            accent: Some(accent.to_string()),
            background: Some(background.to_string()),
            text: Some(text.to_string()),
            ..ColorsPatch::default()
        }
    }
}

pub const PRESETS: &[ColorPreset] = &[
    ColorPreset {
        id: "rose",
        name: "Atirgul",
        palette: ["#be185d", "#fda4af", "#fb7185", "#fdf2f8", "#881337"],
    },
    ColorPreset {
        id: "gold",
        name: "Oltin",
        palette: ["#92400e", "#d97706", "#d4af37", "#fffbeb", "#451a03"],
    },
    ColorPreset {
        id: "ocean",
        name: "Okean",
        palette: ["#1e40af", "#60a5fa", "#06b6d4", "#eff6ff", "#1e3a8a"],
    },
    ColorPreset {
        id: "emerald",
        name: "Zumrad",
        palette: ["#065f46", "#34d399", "#10b981", "#ecfdf5", "#064e3b"],
    },
    ColorPreset {
        id: "lavender",
        name: "Lavanda",
        palette: ["#6d28d9", "#c4b5fd", "#a78bfa", "#f5f3ff", "#4c1d95"],
    },
    ColorPreset {
        id: "noir",
        name: "Qora",
        palette: ["#f9fafb", "#9ca3af", "#d4af37", "#111827", "#f3f4f6"],
    },
];

pub fn find(id: &str) -> Option<&'static ColorPreset> {
    PRESETS.iter().find(|p| p.id == id)
}
