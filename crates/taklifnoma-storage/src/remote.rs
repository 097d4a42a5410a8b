//! Remote structured store: named collections of JSON rows.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use serde_json::Value;
use uuid::Uuid;

use taklifnoma_core::keys;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Equality conditions on top-level row fields, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((field.to_string(), value.into()));
        self
    }

    pub fn matches(&self, row: &Value) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| row.get(field) == Some(expected))
    }
}

/// One impl per backend. Every call may fail with a human-readable message.
///
/// Rows are addressed by their collection's key field
/// ([`keys::key_field`]); a collection holds at most one row per key.
pub trait RemoteStore: Send + Sync {
    /// Write a row, replacing any row with the same key in a single step.
    /// Returns the row as stored, including any server-assigned `id` /
    /// `created_at`.
    fn upsert<'a>(
        &'a self,
        collection: &'a str,
        row: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>>;

    fn select<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxFuture<'a, Result<Vec<Value>, StorageError>>;

    /// Remove every row matching `filter`. Matching nothing is not an error.
    fn delete<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxFuture<'a, Result<(), StorageError>>;
}

/// The `id` field of a row as a string, if present.
pub fn row_id(row: &Value) -> Option<String> {
    match row.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The logical key of a row in `collection`.
pub fn row_key(collection: &str, row: &Value) -> Result<String, StorageError> {
    let field = keys::key_field(collection);
    match row.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(StorageError::Remote(format!(
            "row in {collection} has no `{field}`"
        ))),
    }
}

/// Fill in `id` and `created_at` the way a hosted table would.
pub(crate) fn stamp_new_row(mut row: Value) -> Result<Value, StorageError> {
    let obj = row
        .as_object_mut()
        .ok_or_else(|| StorageError::Remote("row is not a JSON object".to_string()))?;

    if !matches!(obj.get("id"), Some(Value::String(s)) if !s.is_empty()) {
        obj.insert(
            "id".to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
    }
    if obj.get("created_at").is_none_or(Value::is_null) {
        obj.insert(
            "created_at".to_string(),
            Value::String(jiff::Timestamp::now().to_string()),
        );
    }
    Ok(row)
}

/// In-process remote store. Useful for local development and tests.
#[derive(Debug, Default)]
pub struct MemoryRemote {
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_collections<R>(
        &self,
        f: impl FnOnce(&mut HashMap<String, Vec<Value>>) -> R,
    ) -> Result<R, StorageError> {
        let mut guard = self
            .collections
            .lock()
            .map_err(|_| StorageError::Remote("memory remote lock poisoned".to_string()))?;
        Ok(f(&mut guard))
    }

    /// Number of rows in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.with_collections(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl RemoteStore for MemoryRemote {
    fn upsert<'a>(
        &'a self,
        collection: &'a str,
        row: Value,
    ) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async move {
            let key = row_key(collection, &row)?;
            let field = keys::key_field(collection);
            let mut row = row;
            self.with_collections(|c| {
                let rows = c.entry(collection.to_string()).or_default();
                let existing = rows
                    .iter()
                    .position(|r| r.get(field).and_then(Value::as_str) == Some(key.as_str()));
                // A replacement keeps the stored row's id when the new one has none.
                if let (Some(i), None) = (existing, row_id(&row)) {
                    if let (Some(id), Some(obj)) = (row_id(&rows[i]), row.as_object_mut()) {
                        obj.insert("id".to_string(), Value::String(id));
                    }
                }
                let row = stamp_new_row(row)?;
                match existing {
                    Some(i) => rows[i] = row.clone(),
                    None => rows.push(row.clone()),
                }
                Ok(row)
            })?
        })
    }

    fn select<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxFuture<'a, Result<Vec<Value>, StorageError>> {
        Box::pin(async move {
            self.with_collections(|c| {
                c.get(collection)
                    .map(|rows| rows.iter().filter(|r| filter.matches(r)).cloned().collect())
                    .unwrap_or_default()
            })
        })
    }

    fn delete<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.with_collections(|c| {
                if let Some(rows) = c.get_mut(collection) {
                    rows.retain(|r| !filter.matches(r));
                }
            })
        })
    }
}

/// Stand-in when no remote backend is configured. Every call fails, so the
/// gateway always takes the local path.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl Unavailable {
    fn error() -> StorageError {
        StorageError::Remote("no remote store configured".to_string())
    }
}

impl RemoteStore for Unavailable {
    fn upsert<'a>(&'a self, _: &'a str, _: Value) -> BoxFuture<'a, Result<Value, StorageError>> {
        Box::pin(async { Err(Self::error()) })
    }

    fn select<'a>(
        &'a self,
        _: &'a str,
        _: &'a Filter,
    ) -> BoxFuture<'a, Result<Vec<Value>, StorageError>> {
        Box::pin(async { Err(Self::error()) })
    }

    fn delete<'a>(&'a self, _: &'a str, _: &'a Filter) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async { Err(Self::error()) })
    }
}
