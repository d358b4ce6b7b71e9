use std::sync::Arc;

use services::{AppServices, JournalService, ProgressionService};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn progression(&self) -> Arc<ProgressionService>;
    fn journal(&self) -> Arc<JournalService>;
}

impl UiApp for AppServices {
    fn progression(&self) -> Arc<ProgressionService> {
        AppServices::progression(self)
    }

    fn journal(&self) -> Arc<JournalService> {
        AppServices::journal(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    progression: Arc<ProgressionService>,
    journal: Arc<JournalService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progression: app.progression(),
            journal: app.journal(),
        }
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

// Provided by the application composition root (`crates/app`) or the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
