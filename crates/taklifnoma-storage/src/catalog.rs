//! Template catalog: built-ins merged with custom templates from the remote
//! store.
//!
//! Custom templates come first and shadow built-ins that share an id. A
//! shadowed built-in is still reachable through [`CatalogListing::builtin`]
//! so it can serve as a fallback render target.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use taklifnoma_core::builtin;
use taklifnoma_core::keys;
use taklifnoma_core::models::template::{
    CategoryFilter, CustomTemplate, Template, TemplateOrigin,
};

use crate::error::StorageError;
use crate::gateway::{DEFAULT_READ_TIMEOUT, Identity};
use crate::remote::{Filter, RemoteStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogListing {
    pub templates: Vec<Template>,
    /// Set when custom templates could not be fetched.
    pub warning: Option<String>,
}

impl CatalogListing {
    /// The entry displayed for `id`.
    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// The built-in with `id`, even if a custom template shadows it.
    pub fn builtin(&self, id: &str) -> Option<Template> {
        builtin::find(id)
    }

    /// The template to render `id` with: the displayed entry, else the
    /// built-in of that id, else the default built-in.
    pub fn resolve(&self, id: &str) -> Template {
        self.find(id)
            .cloned()
            .or_else(|| builtin::find(id))
            .unwrap_or_else(builtin::fallback)
    }

    pub fn filtered(mut self, filter: CategoryFilter) -> Self {
        self.templates.retain(|t| filter.matches(t.category));
        self
    }
}

pub struct Catalog {
    remote: Arc<dyn RemoteStore>,
    timeout: Duration,
}

impl Catalog {
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            remote,
            timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Custom templates visible to `identity` followed by unshadowed
    /// built-ins. Never fails: a remote problem yields built-ins only plus a
    /// warning. Each call fetches again.
    pub async fn list_all(&self, identity: &Identity) -> CatalogListing {
        let (custom, warning) =
            match tokio::time::timeout(self.timeout, self.fetch_custom(identity)).await {
                Ok(Ok(custom)) => (custom, None),
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "custom templates unavailable, showing built-ins");
                    (Vec::new(), Some(format!("custom templates unavailable: {e}")))
                }
                Err(_) => {
                    tracing::warn!(timeout = ?self.timeout, "custom template fetch timed out");
                    (
                        Vec::new(),
                        Some(format!(
                            "custom templates unavailable: timed out after {:?}",
                            self.timeout
                        )),
                    )
                }
            };

        CatalogListing {
            templates: merge(custom, builtin::templates()),
            warning,
        }
    }

    pub async fn list_by_category(
        &self,
        identity: &Identity,
        filter: CategoryFilter,
    ) -> CatalogListing {
        self.list_all(identity).await.filtered(filter)
    }

    /// Public templates plus the caller's own, featured first.
    async fn fetch_custom(&self, identity: &Identity) -> Result<Vec<Template>, StorageError> {
        let mut rows = self
            .remote
            .select(keys::TEMPLATES, &Filter::new().eq("is_public", true))
            .await?;
        if let Some(user_id) = &identity.user_id {
            let own = Filter::new().eq("user_id", user_id.as_str());
            rows.extend(self.remote.select(keys::TEMPLATES, &own).await?);
        }

        let mut seen = HashSet::new();
        let mut templates = Vec::new();
        for row in rows {
            match serde_json::from_value::<CustomTemplate>(row) {
                Ok(custom) if custom.id.is_empty() => {
                    tracing::warn!(name = %custom.name, "skipping custom template without id");
                }
                Ok(custom) => {
                    if seen.insert(custom.id.clone()) {
                        templates.push(Template::from(custom));
                    }
                }
                Err(e) => tracing::warn!(error = %e, "skipping malformed custom template"),
            }
        }
        templates.sort_by_key(|t| !is_featured(t));
        Ok(templates)
    }
}

fn is_featured(template: &Template) -> bool {
    match &template.origin {
        TemplateOrigin::Custom(meta) => meta.is_featured,
        TemplateOrigin::BuiltIn => false,
    }
}

/// Custom entries first; built-ins whose id is taken by a custom entry are
/// left out of the listing.
pub fn merge(custom: Vec<Template>, builtins: Vec<Template>) -> Vec<Template> {
    let taken: HashSet<String> = custom.iter().map(|t| t.id.clone()).collect();
    let mut merged = custom;
    merged.extend(builtins.into_iter().filter(|t| !taken.contains(&t.id)));
    merged
}
