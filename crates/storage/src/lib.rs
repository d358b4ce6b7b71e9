#![forbid(unsafe_code)]

pub mod records;
pub mod repository;
pub mod sqlite;

pub use records::{JOURNAL_KEY, PROGRESSION_KEY, RecordSlot, StoredRecord};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
