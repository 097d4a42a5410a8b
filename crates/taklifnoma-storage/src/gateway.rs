//! Save/load with a bounded remote attempt and local fallback.
//!
//! ```text
//! save:  RemoteAttempt --ok--> Succeeded(remote)   (+ best-effort local mirror)
//!        RemoteAttempt --err/timeout--> LocalFallback --ok--> Succeeded(local) + warning
//!                                                     --err--> Failed
//! ```
//!
//! The remote write is one keyed upsert, so a failed or timed-out attempt
//! leaves the previous remote copy in place. The local fallback write only
//! starts once the remote attempt has failed or timed out. Two saves of the
//! same record must be serialized by the caller; saves of different records
//! may interleave.
//!
//! Load trusts the remote: a synced local copy of a record the remote no
//! longer has is evicted, while an unsynced one is still served.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PersistError, StorageError};
use crate::local::LocalStore;
use crate::record::Record;
use crate::remote::{Filter, RemoteStore};

pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub read: Duration,
    pub write: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            read: DEFAULT_READ_TIMEOUT,
            write: DEFAULT_WRITE_TIMEOUT,
        }
    }
}

/// Per-call overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOptions {
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Who is calling. Supplied by the caller, never read from ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Option<String>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    fn label(&self) -> &str {
        self.user_id.as_deref().unwrap_or("anonymous")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistedVia {
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersistResult<T> {
    pub via: PersistedVia,
    pub payload: T,
    pub warning: Option<String>,
}

/// What the local store holds for each record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalEnvelope<T> {
    pub payload: T,
    /// Whether this copy is known to match the remote store.
    pub synced: bool,
    pub saved_at: jiff::Timestamp,
}

pub struct Gateway {
    remote: Arc<dyn RemoteStore>,
    local: Arc<dyn LocalStore>,
    timeouts: Timeouts,
}

impl Gateway {
    pub fn new(remote: Arc<dyn RemoteStore>, local: Arc<dyn LocalStore>) -> Self {
        Self {
            remote,
            local,
            timeouts: Timeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn remote(&self) -> &Arc<dyn RemoteStore> {
        &self.remote
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Persist a record, remote first, local on remote failure.
    ///
    /// The record's key is assigned here if it has none, so the returned
    /// payload is always addressable. Saving that payload again reuses the
    /// key and replaces rather than duplicates.
    pub async fn save<T: Record>(
        &self,
        identity: &Identity,
        mut record: T,
        options: CallOptions,
    ) -> Result<PersistResult<T>, PersistError> {
        if record.key().is_none() {
            record.assign_key();
        }
        if let Some(user_id) = &identity.user_id {
            record.set_owner(user_id);
        }
        record.touch(jiff::Timestamp::now());

        let key = record.key().unwrap_or_default().to_string();
        let local_key = T::KIND.local_key(&key);
        let limit = options.timeout.unwrap_or(self.timeouts.write);

        match self.remote_upsert(&record, limit).await {
            Ok(stored) => {
                tracing::debug!(kind = %T::KIND, key = %key, user = identity.label(), "saved to remote");
                if let Err(e) = self.write_local(&local_key, &stored, true) {
                    tracing::warn!(error = %e, key = %key, "failed to mirror remote save locally");
                }
                Ok(PersistResult {
                    via: PersistedVia::Remote,
                    payload: stored,
                    warning: None,
                })
            }
            Err(remote_err) => {
                tracing::warn!(
                    error = %remote_err,
                    kind = %T::KIND,
                    key = %key,
                    "remote save failed, falling back to local storage"
                );
                match self.write_local(&local_key, &record, false) {
                    Ok(()) => Ok(PersistResult {
                        via: PersistedVia::Local,
                        payload: record,
                        warning: Some(format!(
                            "saved on this device only; remote unavailable: {remote_err}"
                        )),
                    }),
                    Err(local_err) => {
                        tracing::error!(
                            remote = %remote_err,
                            local = %local_err,
                            key = %key,
                            "save failed in both stores"
                        );
                        Err(PersistError::Failed {
                            remote: remote_err.to_string(),
                            local: local_err.to_string(),
                        })
                    }
                }
            }
        }
    }

    /// Load a record by key. The remote copy wins when it can be reached.
    pub async fn load<T: Record>(
        &self,
        identity: &Identity,
        key: &str,
        options: CallOptions,
    ) -> Result<PersistResult<T>, PersistError> {
        let local_key = T::KIND.local_key(key);
        let local = match self.read_local::<T>(&local_key) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "unreadable local copy ignored");
                None
            }
        };
        let limit = options.timeout.unwrap_or(self.timeouts.read);

        match self.remote_fetch::<T>(key, limit).await {
            Ok(Some(remote)) => {
                tracing::debug!(kind = %T::KIND, key = %key, user = identity.label(), "loaded from remote");
                if let Err(e) = self.write_local(&local_key, &remote, true) {
                    tracing::warn!(error = %e, key = %key, "failed to refresh local copy");
                }
                Ok(PersistResult {
                    via: PersistedVia::Remote,
                    payload: remote,
                    warning: None,
                })
            }
            Ok(None) => match local {
                Some(envelope) if envelope.synced => {
                    // Deleted remotely after this device last synced it.
                    tracing::info!(kind = %T::KIND, key = %key, "record gone remotely, evicting local copy");
                    if let Err(e) = self.local.remove(&local_key) {
                        tracing::warn!(error = %e, key = %key, "failed to evict local copy");
                    }
                    Err(PersistError::NotFound {
                        kind: T::KIND,
                        key: key.to_string(),
                    })
                }
                Some(envelope) => Ok(PersistResult {
                    via: PersistedVia::Local,
                    payload: envelope.payload,
                    warning: Some(
                        "record has not been synced yet; showing the copy saved on this device"
                            .to_string(),
                    ),
                }),
                None => Err(PersistError::NotFound {
                    kind: T::KIND,
                    key: key.to_string(),
                }),
            },
            Err(remote_err) => {
                tracing::warn!(error = %remote_err, key = %key, "remote load failed");
                match local {
                    Some(envelope) => Ok(PersistResult {
                        via: PersistedVia::Local,
                        payload: envelope.payload,
                        warning: Some(format!(
                            "remote unavailable ({remote_err}); showing the copy saved on this device"
                        )),
                    }),
                    None => Err(PersistError::NotFound {
                        kind: T::KIND,
                        key: key.to_string(),
                    }),
                }
            }
        }
    }

    /// Remove a record from both stores. A remote failure is returned as a
    /// warning; failing in both stores is an error.
    pub async fn delete<T: Record>(
        &self,
        key: &str,
        options: CallOptions,
    ) -> Result<Option<String>, PersistError> {
        let limit = options.timeout.unwrap_or(self.timeouts.write);
        let filter = Filter::new().eq(T::KIND.key_field(), key);

        let remote_result = with_timeout(
            "remote delete",
            limit,
            self.remote.delete(T::KIND.collection(), &filter),
        )
        .await;
        let local_result = self.local.remove(&T::KIND.local_key(key));

        match (remote_result, local_result) {
            (Ok(()), Ok(())) => Ok(None),
            (Ok(()), Err(local_err)) => {
                tracing::warn!(error = %local_err, key = %key, "failed to remove local copy");
                Ok(Some(format!("local copy could not be removed: {local_err}")))
            }
            (Err(remote_err), Ok(())) => {
                tracing::warn!(error = %remote_err, key = %key, "remote delete failed");
                Ok(Some(format!("removed on this device only: {remote_err}")))
            }
            (Err(remote_err), Err(local_err)) => Err(PersistError::Failed {
                remote: remote_err.to_string(),
                local: local_err.to_string(),
            }),
        }
    }

    /// Replace the remote row carrying this key with the record.
    async fn remote_upsert<T: Record>(
        &self,
        record: &T,
        limit: Duration,
    ) -> Result<T, StorageError> {
        let row = serde_json::to_value(record)?;
        let stored = with_timeout(
            "remote save",
            limit,
            self.remote.upsert(T::KIND.collection(), row),
        )
        .await?;
        Ok(serde_json::from_value(stored)?)
    }

    async fn remote_fetch<T: Record>(
        &self,
        key: &str,
        limit: Duration,
    ) -> Result<Option<T>, StorageError> {
        let collection = T::KIND.collection();
        let filter = Filter::new().eq(T::KIND.key_field(), key);

        with_timeout("remote load", limit, async {
            let rows = self.remote.select(collection, &filter).await?;
            match rows.into_iter().next() {
                Some(row) => Ok(Some(serde_json::from_value(row)?)),
                None => Ok(None),
            }
        })
        .await
    }

    fn write_local<T: Record>(
        &self,
        local_key: &str,
        payload: &T,
        synced: bool,
    ) -> Result<(), StorageError> {
        let envelope = LocalEnvelope {
            payload,
            synced,
            saved_at: jiff::Timestamp::now(),
        };
        let json = serde_json::to_string(&envelope)?;
        self.local.set(local_key, &json)
    }

    fn read_local<T: Record>(
        &self,
        local_key: &str,
    ) -> Result<Option<LocalEnvelope<T>>, StorageError> {
        match self.local.get(local_key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

async fn with_timeout<T>(
    operation: &'static str,
    limit: Duration,
    work: impl Future<Output = Result<T, StorageError>>,
) -> Result<T, StorageError> {
    match tokio::time::timeout(limit, work).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout {
            operation,
            after: limit,
        }),
    }
}
