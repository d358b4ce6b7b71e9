//! Typed access to the JSON records kept in a `KeyValueStore`.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::{KeyValueStore, StorageError};

/// Key of the progression record.
pub const PROGRESSION_KEY: &str = "journeyProgression";

/// Key of the visitor journal record.
pub const JOURNAL_KEY: &str = "journeyJournal";

/// What a slot held when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRecord<T> {
    Absent,
    Present(T),
    /// The entry exists but does not parse; carries the parser message.
    Malformed(String),
}

impl<T> StoredRecord<T> {
    /// The parsed value, or `fallback()` for absent and malformed entries.
    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            StoredRecord::Present(value) => value,
            StoredRecord::Absent | StoredRecord::Malformed(_) => fallback(),
        }
    }
}

/// A single named record in the store.
pub struct RecordSlot<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordSlot<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key,
            _record: PhantomData,
        }
    }
}

impl<T> RecordSlot<T>
where
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read and parse the record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the backend fails; parse failures are
    /// reported as `StoredRecord::Malformed`.
    pub async fn load(&self) -> Result<StoredRecord<T>, StorageError> {
        let Some(raw) = self.store.get(self.key).await? else {
            return Ok(StoredRecord::Absent);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(StoredRecord::Present(value)),
            Err(err) => {
                tracing::warn!(key = self.key, error = %err, "stored record does not parse");
                Ok(StoredRecord::Malformed(err.to_string()))
            }
        }
    }

    /// Serialize and store the whole record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    pub async fn save(&self, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.store.put(self.key, &raw).await?;
        tracing::debug!(key = self.key, bytes = raw.len(), "record saved");
        Ok(())
    }

    /// Delete the record entirely.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn delete(&self) -> Result<(), StorageError> {
        self.store.remove(self.key).await?;
        tracing::debug!(key = self.key, "record deleted");
        Ok(())
    }
}
