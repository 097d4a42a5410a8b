use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A guest's reply to an invitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rsvp {
    #[serde(default)]
    pub id: String,
    pub invitation_slug: String,
    pub guest_name: String,
    pub attending: bool,
    #[serde(default = "default_guest_count")]
    pub guest_count: u32,
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::Timestamp>,
}

fn default_guest_count() -> u32 {
    1
}
