use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::config::TemplateConfig;

/// The event facts printed on one invitation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvitationContent {
    pub groom_name: String,
    pub bride_name: String,
    /// Usually ISO `YYYY-MM-DD`; anything else is displayed verbatim.
    pub wedding_date: String,
    #[serde(default)]
    pub wedding_time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    #[serde(default)]
    pub custom_message: String,
    pub dress_code: Option<String>,
    pub rsvp_deadline: Option<String>,
    pub additional_info: Option<String>,
    #[serde(default)]
    pub template_id: String,
}

/// A persisted invitation. The `slug` is assigned before the first save and
/// is both the local storage key and the public link segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invitation {
    /// Row id assigned by the remote store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub content: InvitationContent,
    /// Per-invitation overrides of the template's own config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_config: Option<TemplateConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::Timestamp>,
}

impl Invitation {
    pub fn new(content: InvitationContent) -> Self {
        Self {
            id: None,
            slug: String::new(),
            user_id: None,
            content,
            template_config: None,
            created_at: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let invitation: Invitation = serde_json::from_str(json)?;
        invitation.validate()?;
        Ok(invitation)
    }

    /// Both names and the date are required; everything else may be blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("groom_name", &self.content.groom_name),
            ("bride_name", &self.content.bride_name),
            ("wedding_date", &self.content.wedding_date),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(field.to_string()));
            }
        }
        Ok(())
    }
}
