use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use taklifnoma_core::keys;
use taklifnoma_core::models::template::{CategoryFilter, TemplateCategory};
use taklifnoma_storage::catalog::Catalog;
use taklifnoma_storage::error::StorageError;
use taklifnoma_storage::gateway::Identity;
use taklifnoma_storage::remote::{BoxFuture, Filter, MemoryRemote, RemoteStore, Unavailable};

struct Stalled;

impl RemoteStore for Stalled {
    fn upsert<'a>(&'a self, _: &'a str, _: Value) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(std::future::pending())
    }

    fn select<'a>(
        &'a self,
        _: &'a str,
        _: &'a Filter,
    ) -> BoxFuture<'a, Result<Vec<Value>, StorageError>> {
        Box::pin(std::future::pending())
    }

    fn delete<'a>(&'a self, _: &'a str, _: &'a Filter) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(std::future::pending())
    }
}

async fn seeded() -> Arc<MemoryRemote> {
    let remote = Arc::new(MemoryRemote::new());
    let rows = [
        json!({
            "id": "classic-ivory",
            "name": "Ivory (custom)",
            "category": "classic",
            "config": { "colors": { "primary": "#000000" } },
            "is_public": true
        }),
        json!({
            "id": "custom-aaa",
            "user_id": "user-1",
            "name": "Bog'",
            "category": "rustic",
            "is_public": false
        }),
        json!({
            "id": "custom-bbb",
            "name": "Featured",
            "category": "luxury",
            "is_public": true,
            "is_featured": true,
            "tags": ["gold"]
        }),
        json!({ "id": "custom-broken", "is_public": true }),
    ];
    for row in rows {
        remote.upsert(keys::TEMPLATES, row).await.unwrap();
    }
    remote
}

#[tokio::test]
async fn custom_templates_shadow_builtins() {
    let catalog = Catalog::new(seeded().await);
    let listing = catalog.list_all(&Identity::anonymous()).await;

    assert_eq!(listing.warning, None);
    let ivory: Vec<_> = listing
        .templates
        .iter()
        .filter(|t| t.id == "classic-ivory")
        .collect();
    assert_eq!(ivory.len(), 1);
    assert!(!ivory[0].is_builtin());
    assert_eq!(ivory[0].config.colors.primary, "#000000");
    // Fields missing from the stored config are filled from defaults.
    assert_eq!(ivory[0].config.fonts.heading, "Playfair Display");

    let builtin = listing.builtin("classic-ivory").unwrap();
    assert!(builtin.is_builtin());
    assert_ne!(builtin.config.colors.primary, "#000000");
}

#[tokio::test]
async fn custom_entries_come_first_featured_leading() {
    let catalog = Catalog::new(seeded().await);
    let listing = catalog.list_all(&Identity::anonymous()).await;

    assert_eq!(listing.templates[0].id, "custom-bbb");
    assert_eq!(listing.templates[1].id, "classic-ivory");
    assert!(listing.templates[2..].iter().all(|t| t.is_builtin()));
    // 2 public customs + 7 unshadowed built-ins; the malformed row is skipped.
    assert_eq!(listing.templates.len(), 9);
}

#[tokio::test]
async fn private_templates_are_visible_to_their_owner_only() {
    let remote = seeded().await;
    let catalog = Catalog::new(remote);

    let anonymous = catalog.list_all(&Identity::anonymous()).await;
    assert!(anonymous.find("custom-aaa").is_none());

    let owner = catalog.list_all(&Identity::user("user-1")).await;
    let own = owner.find("custom-aaa").unwrap();
    assert_eq!(own.category, TemplateCategory::Rustic);
    assert_eq!(own.preview, "✎");
}

#[tokio::test]
async fn remote_failure_degrades_to_builtins() {
    let catalog = Catalog::new(Arc::new(Unavailable));
    let listing = catalog.list_all(&Identity::user("user-1")).await;
    assert_eq!(listing.templates.len(), 8);
    assert!(listing.templates.iter().all(|t| t.is_builtin()));
    assert!(listing.warning.is_some());
}

#[tokio::test]
async fn remote_timeout_degrades_to_builtins() {
    let catalog = Catalog::new(Arc::new(Stalled)).with_timeout(Duration::from_millis(20));
    let listing = catalog.list_all(&Identity::anonymous()).await;
    assert_eq!(listing.templates.len(), 8);
    assert!(listing.warning.unwrap().contains("timed out"));
}

#[tokio::test]
async fn category_filter_applies_to_merged_listing() {
    let catalog = Catalog::new(seeded().await);
    let luxury = catalog
        .list_by_category(
            &Identity::anonymous(),
            CategoryFilter::Only(TemplateCategory::Luxury),
        )
        .await;
    let ids: Vec<&str> = luxury.templates.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["custom-bbb", "luxury-gold"]);

    let all = catalog
        .list_by_category(&Identity::anonymous(), CategoryFilter::All)
        .await;
    assert_eq!(all.templates.len(), 9);
}

#[tokio::test]
async fn resolve_falls_back_for_unknown_ids() {
    let catalog = Catalog::new(Arc::new(MemoryRemote::new()));
    let listing = catalog.list_all(&Identity::anonymous()).await;
    assert_eq!(listing.resolve("vintage-sepia").id, "vintage-sepia");
    assert_eq!(listing.resolve("deleted-template").id, "classic-ivory");
}
