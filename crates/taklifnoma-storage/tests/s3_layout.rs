use taklifnoma_core::keys;
use taklifnoma_storage::error::StorageError;
use taklifnoma_storage::remote::Filter;
use taklifnoma_storage::s3::{object_key, pinned_key};

#[test]
fn rows_live_under_their_logical_key() {
    assert_eq!(
        object_key(keys::INVITATIONS, "jahongir-sarvinoz-3f9a1c").unwrap(),
        "invitations/jahongir-sarvinoz-3f9a1c.json"
    );
    assert_eq!(
        object_key(keys::TEMPLATES, "custom-aaa").unwrap(),
        "user_templates/custom-aaa.json"
    );
}

#[test]
fn keys_cannot_escape_the_collection() {
    assert!(matches!(
        object_key(keys::INVITATIONS, "../other"),
        Err(StorageError::InvalidKey(_))
    ));
    assert!(matches!(
        object_key(keys::INVITATIONS, ""),
        Err(StorageError::InvalidKey(_))
    ));
}

#[test]
fn slug_lookup_is_a_direct_get() {
    let filter = Filter::new().eq("slug", "jahongir-sarvinoz-3f9a1c");
    assert_eq!(
        pinned_key(keys::INVITATIONS, &filter),
        Some("jahongir-sarvinoz-3f9a1c")
    );
    // Invitations are not keyed by id.
    let by_id = Filter::new().eq("id", "row-1");
    assert_eq!(pinned_key(keys::INVITATIONS, &by_id), None);
}

#[test]
fn catalog_queries_fall_back_to_a_scan() {
    let public = Filter::new().eq("is_public", true);
    assert_eq!(pinned_key(keys::TEMPLATES, &public), None);

    let own = Filter::new().eq("user_id", "user-1").eq("id", "custom-aaa");
    assert_eq!(pinned_key(keys::TEMPLATES, &own), Some("custom-aaa"));
}
