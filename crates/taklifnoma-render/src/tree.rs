//! Toolkit-independent description of a rendered invitation.

use serde::{Deserialize, Serialize};

use crate::style::{StyleDescriptor, TextStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualTree {
    pub style: StyleDescriptor,
    pub sections: Vec<Section>,
}

impl VisualTree {
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(Section::kind).collect()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind() == kind)
    }
}

/// A run of text with its resolved font stack and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    pub font: String,
    pub color: String,
    #[serde(default)]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TextStyle>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, font: &str, color: &str) -> Self {
        Self {
            text: text.into(),
            font: font.to_string(),
            color: color.to_string(),
            italic: false,
            typography: None,
        }
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_typography(mut self, typography: &TextStyle) -> Self {
        self.typography = Some(typography.clone());
        self
    }

    pub fn css(&self) -> String {
        let mut css = format!("font-family: {}; color: {}", self.font, self.color);
        if self.italic {
            css.push_str("; font-style: italic");
        }
        if let Some(typography) = &self.typography {
            css.push_str("; ");
            css.push_str(&typography.css());
        }
        css
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoKind {
    DressCode,
    RsvpDeadline,
    AdditionalInfo,
}

/// Sections in the fixed order the renderer emits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Header {
        label: TextNode,
    },
    Names {
        first: TextNode,
        separator: TextNode,
        second: TextNode,
    },
    Divider {
        glyph: String,
        color: String,
    },
    DateTime {
        date: TextNode,
        time: Option<TextNode>,
    },
    Venue {
        name: Option<TextNode>,
        address: Vec<TextNode>,
    },
    Message {
        text: TextNode,
    },
    Info {
        info: InfoKind,
        label: TextNode,
        text: TextNode,
    },
    Footer {
        glyph: String,
        color: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Names,
    Divider,
    DateTime,
    Venue,
    Message,
    Info(InfoKind),
    Footer,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Header { .. } => SectionKind::Header,
            Section::Names { .. } => SectionKind::Names,
            Section::Divider { .. } => SectionKind::Divider,
            Section::DateTime { .. } => SectionKind::DateTime,
            Section::Venue { .. } => SectionKind::Venue,
            Section::Message { .. } => SectionKind::Message,
            Section::Info { info, .. } => SectionKind::Info(*info),
            Section::Footer { .. } => SectionKind::Footer,
        }
    }
}
