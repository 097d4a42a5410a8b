//! Storage key and collection conventions.
//!
//! Pure string functions. Local keys are namespaced per record kind so that
//! invitations, templates and RSVPs never collide in the shared local store.

pub const INVITATIONS: &str = "invitations";
pub const TEMPLATES: &str = "user_templates";
pub const RSVPS: &str = "rsvps";

/// Row field holding the logical key in a collection. Invitations are
/// addressed by slug, everything else by id.
pub fn key_field(collection: &str) -> &'static str {
    if collection == INVITATIONS { "slug" } else { "id" }
}

pub fn invitation(slug: &str) -> String {
    format!("{INVITATIONS}/{slug}")
}

pub fn template(id: &str) -> String {
    format!("{TEMPLATES}/{id}")
}

pub fn rsvp(id: &str) -> String {
    format!("{RSVPS}/{id}")
}

/// Prefix for custom template ids, keeps them apart from built-in ids.
pub const CUSTOM_TEMPLATE_PREFIX: &str = "custom-";

pub fn custom_template_id(uuid: uuid::Uuid) -> String {
    format!("{CUSTOM_TEMPLATE_PREFIX}{}", uuid.simple())
}
