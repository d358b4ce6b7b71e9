use std::sync::Arc;

use journey_core::ProgressionGate;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::journal_service::JournalService;
use crate::progression_service::ProgressionService;

/// Assembles the app-facing services over one storage origin.
#[derive(Clone)]
pub struct AppServices {
    progression: Arc<ProgressionService>,
    journal: Arc<JournalService>,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, gate: ProgressionGate) -> Self {
        let progression = Arc::new(ProgressionService::new(clock, gate, storage));
        let journal = Arc::new(JournalService::new(clock, storage));
        Self {
            progression,
            journal,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        gate: ProgressionGate,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, gate))
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, ProgressionGate::canonical())
    }

    #[must_use]
    pub fn progression(&self) -> Arc<ProgressionService> {
        Arc::clone(&self.progression)
    }

    #[must_use]
    pub fn journal(&self) -> Arc<JournalService> {
        Arc::clone(&self.journal)
    }
}
