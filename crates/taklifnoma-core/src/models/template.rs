use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::config::TemplateConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TemplateCategory {
    Classic,
    Modern,
    Elegant,
    Rustic,
    Luxury,
    Minimalist,
    Artistic,
    Vintage,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 8] = [
        TemplateCategory::Classic,
        TemplateCategory::Modern,
        TemplateCategory::Elegant,
        TemplateCategory::Rustic,
        TemplateCategory::Luxury,
        TemplateCategory::Minimalist,
        TemplateCategory::Artistic,
        TemplateCategory::Vintage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Classic => "classic",
            TemplateCategory::Modern => "modern",
            TemplateCategory::Elegant => "elegant",
            TemplateCategory::Rustic => "rustic",
            TemplateCategory::Luxury => "luxury",
            TemplateCategory::Minimalist => "minimalist",
            TemplateCategory::Artistic => "artistic",
            TemplateCategory::Vintage => "vintage",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        TemplateCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Category selector for catalog listings. `all` disables filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TemplateCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: TemplateCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// An entry in the template catalog, built-in or user-created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub config: TemplateConfig,
    /// Short glyph shown on the picker card.
    pub preview: String,
    pub origin: TemplateOrigin,
}

impl Template {
    pub fn is_builtin(&self) -> bool {
        matches!(self.origin, TemplateOrigin::BuiltIn)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum TemplateOrigin {
    BuiltIn,
    Custom(CustomMeta),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomMeta {
    pub user_id: Option<String>,
    pub is_public: bool,
    pub is_featured: bool,
    pub usage_count: u64,
    pub tags: Vec<String>,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

/// The stored row of a user-created template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomTemplate {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: TemplateCategory,
    #[serde(default)]
    pub config: TemplateConfig,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<jiff::Timestamp>,
}

impl From<CustomTemplate> for Template {
    fn from(row: CustomTemplate) -> Self {
        let preview = if row.preview.is_empty() {
            "✎".to_string()
        } else {
            row.preview
        };
        Template {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            config: row.config.clamped(),
            preview,
            origin: TemplateOrigin::Custom(CustomMeta {
                user_id: row.user_id,
                is_public: row.is_public,
                is_featured: row.is_featured,
                usage_count: row.usage_count,
                tags: row.tags,
                created_at: row.created_at,
                updated_at: row.updated_at,
            }),
        }
    }
}
