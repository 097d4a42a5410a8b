use std::sync::Arc;

use taklifnoma_cli::app::App;
use taklifnoma_cli::commands::{invitation_html, read_invitation};
use taklifnoma_storage::gateway::{CallOptions, PersistedVia, Timeouts};
use taklifnoma_storage::local::FileStore;
use taklifnoma_storage::remote::Unavailable;

const INVITATION: &str = r#"{
    "groom_name": "Jahongir",
    "bride_name": "Sarvinoz",
    "wedding_date": "2024-06-15",
    "venue": "Rose Garden",
    "address": "Tashkent",
    "custom_message": "Sizni kutamiz",
    "template_id": "no-longer-exists"
}"#;

#[tokio::test]
async fn render_with_unknown_template_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invitation.json");
    std::fs::write(&path, INVITATION).unwrap();

    let app = App::with_stores(
        Arc::new(Unavailable),
        Arc::new(FileStore::new(dir.path().join("data"))),
        Timeouts::default(),
        None,
    );
    let listing = app.catalog.list_all(&app.identity).await;
    assert!(listing.warning.is_some());

    let invitation = read_invitation(&path).unwrap();
    let html = invitation_html(&listing, &invitation, None, Some("rose")).unwrap();
    assert!(html.contains("Jahongir &amp; Sarvinoz"));
    assert!(html.contains("#be185d"));
    assert!(html.contains("Sizni kutamiz"));
}

#[tokio::test]
async fn unknown_preset_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invitation.json");
    std::fs::write(&path, INVITATION).unwrap();

    let app = App::with_stores(
        Arc::new(Unavailable),
        Arc::new(FileStore::new(dir.path())),
        Timeouts::default(),
        None,
    );
    let listing = app.catalog.list_all(&app.identity).await;
    let invitation = read_invitation(&path).unwrap();
    assert!(invitation_html(&listing, &invitation, Some("modern-mono"), Some("sunset")).is_err());
}

#[tokio::test]
async fn offline_save_lands_in_the_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invitation.json");
    std::fs::write(&path, INVITATION).unwrap();
    let data = dir.path().join("data");

    let app = App::with_stores(
        Arc::new(Unavailable),
        Arc::new(FileStore::new(&data)),
        Timeouts::default(),
        Some("user-1".to_string()),
    );
    let invitation = read_invitation(&path).unwrap();
    let saved = app
        .gateway
        .save(&app.identity, invitation, CallOptions::default())
        .await
        .unwrap();

    assert_eq!(saved.via, PersistedVia::Local);
    assert_eq!(saved.payload.user_id.as_deref(), Some("user-1"));
    let file = data
        .join("invitations")
        .join(format!("{}.json", saved.payload.slug));
    assert!(file.exists());
}
