use taklifnoma_core::error::CoreError;
use taklifnoma_core::keys;
use taklifnoma_core::models::invitation::{Invitation, InvitationContent};
use taklifnoma_core::models::rsvp::Rsvp;
use taklifnoma_core::slug::{invitation_slug, is_valid_slug, slugify};

const JSON: &str = r#"{
    "groom_name": "Jahongir",
    "bride_name": "Sarvinoz",
    "wedding_date": "2024-06-15",
    "wedding_time": "18:00",
    "venue": "Navro'z to'yxonasi",
    "address": "Amir Temur ko'chasi 12",
    "city": "Toshkent",
    "custom_message": "Sizni to'yimizga taklif qilamiz",
    "template_id": "classic-ivory"
}"#;

#[test]
fn content_is_flattened_into_invitation() {
    let invitation = Invitation::from_json(JSON).unwrap();
    assert_eq!(invitation.content.groom_name, "Jahongir");
    assert_eq!(invitation.content.city.as_deref(), Some("Toshkent"));
    assert_eq!(invitation.content.dress_code, None);
    assert!(invitation.slug.is_empty());
    assert!(invitation.template_config.is_none());

    let value = serde_json::to_value(&invitation).unwrap();
    assert_eq!(value["bride_name"], "Sarvinoz");
    assert!(value.get("content").is_none());
    assert!(value.get("id").is_none());
}

#[test]
fn missing_names_fail_validation() {
    let invitation = Invitation::new(InvitationContent {
        groom_name: "Jahongir".to_string(),
        bride_name: "  ".to_string(),
        wedding_date: "2024-06-15".to_string(),
        ..InvitationContent::default()
    });
    match invitation.validate() {
        Err(CoreError::MissingField(field)) => assert_eq!(field, "bride_name"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_serialization_error() {
    assert!(matches!(
        Invitation::from_json("{ not json"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn rsvp_guest_count_defaults_to_one() {
    let rsvp: Rsvp = serde_json::from_str(
        r#"{ "invitation_slug": "a-b-123abc", "guest_name": "Dilnoza", "attending": true, "message": null }"#,
    )
    .unwrap();
    assert_eq!(rsvp.guest_count, 1);
    assert!(rsvp.id.is_empty());
}

#[test]
fn slug_from_names() {
    let slug = invitation_slug("Jahongir", "Sarvinoz");
    assert!(slug.starts_with("jahongir-sarvinoz-"));
    assert_eq!(slug.len(), "jahongir-sarvinoz-".len() + 6);
    assert!(is_valid_slug(&slug));
    assert_ne!(slug, invitation_slug("Jahongir", "Sarvinoz"));
}

#[test]
fn slug_falls_back_when_names_have_no_ascii() {
    let slug = invitation_slug("Жаҳонгир", "Сарвиноз");
    assert!(slug.starts_with("taklifnoma-"));
    assert!(is_valid_slug(&slug));
}

#[test]
fn slugify_collapses_separators() {
    assert_eq!(slugify("  Ali  &  Vali!! "), "ali-vali");
    assert_eq!(slugify("O'tkir"), "o-tkir");
    assert!(!is_valid_slug("Ali-Vali"));
    assert!(!is_valid_slug("ali--vali"));
}

#[test]
fn local_keys_are_namespaced() {
    assert_eq!(keys::invitation("a-b-1"), "invitations/a-b-1");
    assert_eq!(keys::rsvp("x"), "rsvps/x");
    assert_eq!(keys::template("custom-1"), "user_templates/custom-1");
    let id = keys::custom_template_id(uuid::Uuid::new_v4());
    assert!(id.starts_with(keys::CUSTOM_TEMPLATE_PREFIX));
}
