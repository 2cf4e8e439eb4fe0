//! Ordered collection mirrored as one JSON blob in key-value storage.
//!
//! # Invariants
//! - Items are kept in insertion order; persistence rewrites the whole array.
//! - A failed write never drops in-memory items; `unsaved` stays set until a
//!   later write succeeds.
//! - A malformed blob is copied to a free backup key (`<key>.corrupt`,
//!   then `<key>.corrupt.1`, ...) before the first overwrite; earlier
//!   backups are never replaced.
//! - `created_at` of successive items is strictly increasing.

use super::error::{DeserializationError, StoreResult};
use crate::clock::Clock;
use crate::model::timestamp::ceil_to_millis;
use crate::model::Timestamped;
use crate::storage::kv::{KeyValueStorage, StorageResult};
use chrono::{DateTime, Duration, Utc};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) struct PersistedList<T, S> {
    key: &'static str,
    storage: S,
    items: Vec<T>,
    load_issue: Option<DeserializationError>,
    corrupt_blob: Option<String>,
    unsaved: bool,
}

impl<T, S> PersistedList<T, S>
where
    T: Serialize + DeserializeOwned + Timestamped,
    S: KeyValueStorage,
{
    /// Reads the blob under `key`. Absent or malformed blobs yield an empty
    /// list; only storage failures are errors.
    pub(crate) fn load(key: &'static str, storage: S) -> StorageResult<Self> {
        let raw = match storage.get_item(key) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error key={key} error_code=storage_read_failed error={err}"
                );
                return Err(err);
            }
        };

        let mut list = Self {
            key,
            storage,
            items: Vec::new(),
            load_issue: None,
            corrupt_blob: None,
            unsaved: false,
        };

        let Some(raw) = raw else {
            info!("event=store_load module=store status=ok key={key} count=0 source=absent");
            return Ok(list);
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                info!(
                    "event=store_load module=store status=ok key={key} count={} source=blob",
                    items.len()
                );
                list.items = items;
            }
            Err(err) => {
                let backup_key = match free_backup_key(&list.storage, key) {
                    Ok(backup_key) => backup_key,
                    Err(err) => {
                        error!(
                            "event=store_load module=store status=error key={key} error_code=backup_lookup_failed error={err}"
                        );
                        return Err(err);
                    }
                };
                let issue = DeserializationError {
                    key: key.to_string(),
                    message: err.to_string(),
                    backup_key,
                };
                warn!(
                    "event=store_load module=store status=degraded key={key} error_code=blob_malformed blob_bytes={} error={}",
                    raw.len(),
                    issue.message
                );
                list.load_issue = Some(issue);
                list.corrupt_blob = Some(raw);
            }
        }

        Ok(list)
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn load_issue(&self) -> Option<&DeserializationError> {
        self.load_issue.as_ref()
    }

    pub(crate) fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Creation time for the next item: the clock reading rounded up to
    /// milliseconds, bumped past the last item when the clock lags.
    pub(crate) fn next_timestamp(&self, clock: &dyn Clock) -> DateTime<Utc> {
        let now = ceil_to_millis(clock.now());
        match self.items.last().map(Timestamped::created_at) {
            Some(last) if now <= last => last + Duration::milliseconds(1),
            _ => now,
        }
    }

    /// Appends at the tail and writes the whole collection.
    ///
    /// The item stays in memory even when the write fails.
    pub(crate) fn push(&mut self, item: T) -> StoreResult<()> {
        self.items.push(item);
        self.unsaved = true;
        self.persist()
    }

    /// Writes the whole collection, preserving a corrupt blob first.
    pub(crate) fn persist(&mut self) -> StoreResult<()> {
        let key = self.key;
        let pending_backup = self.corrupt_blob.as_deref().zip(self.load_issue.as_ref());
        if let Some((raw, issue)) = pending_backup {
            let backup = issue.backup_key.as_str();
            if let Err(err) = self.storage.set_item(backup, raw) {
                error!(
                    "event=store_persist module=store status=error key={key} error_code=backup_failed error={err}"
                );
                return Err(err.into());
            }
            warn!("event=store_backup module=store status=ok key={key} backup_key={backup}");
            self.corrupt_blob = None;
        }

        let encoded = serde_json::to_string(&self.items)?;
        match self.storage.set_item(key, &encoded) {
            Ok(()) => {
                self.unsaved = false;
                info!(
                    "event=store_persist module=store status=ok key={key} count={} blob_bytes={}",
                    self.items.len(),
                    encoded.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error key={key} count={} error_code=storage_write_failed error={err}",
                    self.items.len()
                );
                Err(err.into())
            }
        }
    }
}

/// First backup slot under `key` that holds nothing yet.
fn free_backup_key<S: KeyValueStorage>(storage: &S, key: &str) -> StorageResult<String> {
    let base = format!("{key}.corrupt");
    if storage.get_item(&base)?.is_none() {
        return Ok(base);
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{base}.{n}");
        if storage.get_item(&candidate)?.is_none() {
            return Ok(candidate);
        }
        n += 1;
    }
}
