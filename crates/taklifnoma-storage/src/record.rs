//! Record kinds the gateway knows how to persist.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

use taklifnoma_core::keys;
use taklifnoma_core::models::invitation::Invitation;
use taklifnoma_core::models::rsvp::Rsvp;
use taklifnoma_core::models::template::CustomTemplate;
use taklifnoma_core::slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Invitation,
    Template,
    Rsvp,
}

impl RecordKind {
    /// Remote collection (table) name.
    pub fn collection(&self) -> &'static str {
        match self {
            RecordKind::Invitation => keys::INVITATIONS,
            RecordKind::Template => keys::TEMPLATES,
            RecordKind::Rsvp => keys::RSVPS,
        }
    }

    /// Row field holding the logical key remotely.
    pub fn key_field(&self) -> &'static str {
        keys::key_field(self.collection())
    }

    /// Namespaced key in the local store.
    pub fn local_key(&self, key: &str) -> String {
        match self {
            RecordKind::Invitation => keys::invitation(key),
            RecordKind::Template => keys::template(key),
            RecordKind::Rsvp => keys::rsvp(key),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Invitation => "invitation",
            RecordKind::Template => "template",
            RecordKind::Rsvp => "rsvp",
        })
    }
}

/// A value the gateway can save and load.
///
/// Every record has a logical key that is assigned locally before the first
/// save and never changes afterwards. Re-saving a record with the same key
/// replaces the earlier copy in both stores.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    const KIND: RecordKind;

    /// The logical key, `None` until assigned.
    fn key(&self) -> Option<&str>;

    fn assign_key(&mut self);

    fn set_owner(&mut self, _user_id: &str) {}

    /// Fill creation/update timestamps.
    fn touch(&mut self, _now: jiff::Timestamp) {}
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

impl Record for Invitation {
    const KIND: RecordKind = RecordKind::Invitation;

    fn key(&self) -> Option<&str> {
        non_empty(&self.slug)
    }

    fn assign_key(&mut self) {
        self.slug = slug::invitation_slug(&self.content.groom_name, &self.content.bride_name);
    }

    fn set_owner(&mut self, user_id: &str) {
        self.user_id = Some(user_id.to_string());
    }

    fn touch(&mut self, now: jiff::Timestamp) {
        self.created_at.get_or_insert(now);
    }
}

impl Record for CustomTemplate {
    const KIND: RecordKind = RecordKind::Template;

    fn key(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn assign_key(&mut self) {
        self.id = keys::custom_template_id(Uuid::new_v4());
    }

    fn set_owner(&mut self, user_id: &str) {
        self.user_id = Some(user_id.to_string());
    }

    fn touch(&mut self, now: jiff::Timestamp) {
        self.created_at.get_or_insert(now);
        self.updated_at = Some(now);
    }
}

impl Record for Rsvp {
    const KIND: RecordKind = RecordKind::Rsvp;

    fn key(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn assign_key(&mut self) {
        self.id = Uuid::new_v4().to_string();
    }

    fn touch(&mut self, now: jiff::Timestamp) {
        self.created_at.get_or_insert(now);
    }
}
