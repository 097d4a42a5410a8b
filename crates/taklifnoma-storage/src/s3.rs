//! S3-backed remote store. Each row is one JSON object at
//! `<collection>/<key>.json`, where the key is the collection's key field
//! (slug for invitations, id otherwise).
//!
//! Lookups and deletes by key touch one object. Any other filter lists the
//! collection and scans it.

use aws_sdk_s3::Client;
use serde_json::Value;

use taklifnoma_core::keys;

use crate::error::StorageError;
use crate::objects;
use crate::remote::{BoxFuture, Filter, RemoteStore, row_key, stamp_new_row};

#[derive(Debug, Clone)]
pub struct S3Remote {
    client: Client,
    bucket: String,
}

impl S3Remote {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn get_row(&self, object_key: &str) -> Result<Option<Value>, StorageError> {
        match objects::get_object(&self.client, &self.bucket, object_key).await {
            Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn scan(&self, collection: &str, filter: &Filter) -> Result<Vec<Value>, StorageError> {
        let prefix = format!("{collection}/");
        let object_keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut rows = Vec::new();
        for key in object_keys.iter().filter(|k| k.ends_with(".json")) {
            match self.get_row(key).await {
                Ok(Some(row)) if filter.matches(&row) => rows.push(row),
                // Deleted between list and get, or filtered out.
                Ok(_) => {}
                Err(StorageError::Serialization(e)) => {
                    tracing::warn!(key = %key, error = %e, "skipping malformed row");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(rows)
    }
}

/// `<collection>/<key>.json`. Keys never contain `/`.
pub fn object_key(collection: &str, key: &str) -> Result<String, StorageError> {
    if key.is_empty() || key.contains('/') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(format!("{collection}/{key}.json"))
}

/// The key value when `filter` pins the collection's key field.
pub fn pinned_key<'f>(collection: &str, filter: &'f Filter) -> Option<&'f str> {
    let field = keys::key_field(collection);
    filter
        .conditions
        .iter()
        .find(|(name, _)| name == field)
        .and_then(|(_, value)| value.as_str())
}

impl RemoteStore for S3Remote {
    fn upsert<'a>(
        &'a self,
        collection: &'a str,
        row: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async move {
            let row = stamp_new_row(row)?;
            let path = object_key(collection, &row_key(collection, &row)?)?;
            let body = serde_json::to_vec(&row)?;
            // A PUT replaces the object whole, so readers see the old or the
            // new row, never neither.
            objects::put_json(&self.client, &self.bucket, &path, body).await?;
            Ok(row)
        })
    }

    fn select<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxFuture<'a, Result<Vec<Value>, StorageError>> {
        Box::pin(async move {
            match pinned_key(collection, filter) {
                Some(key) => {
                    let row = self.get_row(&object_key(collection, key)?).await?;
                    Ok(row.into_iter().filter(|r| filter.matches(r)).collect())
                }
                None => self.scan(collection, filter).await,
            }
        })
    }

    fn delete<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            if filter.conditions.len() == 1 {
                if let Some(key) = pinned_key(collection, filter) {
                    let path = object_key(collection, key)?;
                    return objects::delete_object(&self.client, &self.bucket, &path).await;
                }
            }
            for row in self.scan(collection, filter).await? {
                let path = object_key(collection, &row_key(collection, &row)?)?;
                objects::delete_object(&self.client, &self.bucket, &path).await?;
            }
            Ok(())
        })
    }
}
