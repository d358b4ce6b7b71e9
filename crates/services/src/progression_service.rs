use journey_core::model::{FinalDecision, PageId, ProgressionState, VisitorJournal};
use journey_core::{
    AccessDecision, PageSession, ProgressStep, ProgressionGate, Rejection, progress_steps,
};
use storage::repository::Storage;
use storage::RecordSlot;

use crate::Clock;
use crate::error::ProgressionError;

/// Result of loading a page through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEntry {
    /// The page may render; `state` already has it as the current page.
    Granted { state: ProgressionState },
    /// The page is locked; load `to` instead. Nothing was written.
    Redirect { to: PageId },
}

/// Result of a forward navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced { to: PageId, state: ProgressionState },
    Rejected(Rejection),
}

/// Result of a closing choice on the terminal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The closing message is revealed for either choice.
    Closed {
        decision: FinalDecision,
        state: ProgressionState,
    },
    Rejected(Rejection),
}

/// Explicit answer to the "start over?" prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetConfirmation {
    Confirmed,
    Declined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    Cleared,
    Declined,
}

/// Accessor for the persisted progression record.
///
/// Every operation reads the record fresh, applies the gate, and writes the
/// whole record back before returning. Absent or unreadable records are
/// replaced by the gate's fresh state here and nowhere else.
#[derive(Clone)]
pub struct ProgressionService {
    clock: Clock,
    gate: ProgressionGate,
    progression: RecordSlot<ProgressionState>,
    journal: RecordSlot<VisitorJournal>,
}

impl ProgressionService {
    #[must_use]
    pub fn new(clock: Clock, gate: ProgressionGate, storage: &Storage) -> Self {
        Self {
            clock,
            gate,
            progression: storage.progression(),
            journal: storage.journal(),
        }
    }

    #[must_use]
    pub fn gate(&self) -> &ProgressionGate {
        &self.gate
    }

    /// Current state, or the fresh-visitor state if nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Storage` if the backend cannot be read.
    pub async fn load(&self) -> Result<ProgressionState, ProgressionError> {
        Ok(self
            .progression
            .load()
            .await?
            .unwrap_or_else(|| self.gate.fresh_state(self.clock.now())))
    }

    async fn save(&self, state: &ProgressionState) -> Result<(), ProgressionError> {
        self.progression.save(state).await?;
        Ok(())
    }

    /// Check access for a page load. A granted page becomes the current page.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Storage` on storage failures.
    pub async fn enter_page(&self, page: PageId) -> Result<PageEntry, ProgressionError> {
        let mut state = self.load().await?;
        match self.gate.check_access(&state, page) {
            AccessDecision::Granted => {
                self.gate.enter(&mut state, page, self.clock.now());
                self.save(&state).await?;
                tracing::debug!(%page, "page access granted");
                Ok(PageEntry::Granted { state })
            }
            AccessDecision::Redirect(to) => {
                tracing::info!(requested = %page, redirect = %to, "page locked; redirecting");
                Ok(PageEntry::Redirect { to })
            }
        }
    }

    /// Mark the current page completed and make `next` current.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Storage` on storage failures.
    pub async fn unlock_next_page(
        &self,
        next: PageId,
    ) -> Result<ProgressionState, ProgressionError> {
        let mut state = self.load().await?;
        let from = state.current_page();
        self.gate.unlock_next_page(&mut state, next, self.clock.now());
        self.save(&state).await?;
        tracing::info!(%from, to = %next, "unlocked next page");
        Ok(state)
    }

    /// Move past the page of `session` if its guard is satisfied.
    ///
    /// A rejected attempt writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Gate` when the session is on the last page
    /// and `ProgressionError::Storage` on storage failures.
    pub async fn advance(&self, session: &PageSession) -> Result<AdvanceOutcome, ProgressionError> {
        if let Err(rejection) = session.request_advance() {
            tracing::debug!(page = %session.page(), guard = ?rejection.guard, "advance rejected");
            return Ok(AdvanceOutcome::Rejected(rejection));
        }
        let from = session.page();
        let next = self.gate.next_page(from)?;
        let mut state = self.load().await?;
        self.gate.complete_page(&mut state, from, next, self.clock.now());
        self.save(&state).await?;
        tracing::info!(%from, to = %next, "advanced");
        Ok(AdvanceOutcome::Advanced { to: next, state })
    }

    /// Apply the closing choice made on the terminal page.
    ///
    /// Both choices reveal the closing message; only the affirmative one
    /// marks the experience complete.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Gate` if `session` is not on the terminal
    /// page and `ProgressionError::Storage` on storage failures.
    pub async fn complete_experience(
        &self,
        session: &PageSession,
    ) -> Result<CompletionOutcome, ProgressionError> {
        let page = session.page();
        if !self.gate.catalog().is_terminal(page) {
            return Err(journey_core::GateError::NotTerminal(page).into());
        }
        let Some(decision) = session.final_decision() else {
            let rejection = session
                .request_advance()
                .err()
                .unwrap_or_else(|| Rejection::new(session.guard()));
            return Ok(CompletionOutcome::Rejected(rejection));
        };

        let mut state = self.load().await?;
        if decision.completes_experience() {
            state.mark_experience_complete(self.clock.now());
            self.save(&state).await?;
            tracing::info!("experience completed");
        } else {
            tracing::info!(%decision, "closing choice deferred");
        }
        Ok(CompletionOutcome::Closed { decision, state })
    }

    /// Delete the stored progression and journal. Requires confirmation.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Storage` if a record cannot be deleted.
    pub async fn reset(
        &self,
        confirmation: ResetConfirmation,
    ) -> Result<ResetOutcome, ProgressionError> {
        if confirmation == ResetConfirmation::Declined {
            return Ok(ResetOutcome::Declined);
        }
        self.progression.delete().await?;
        self.journal.delete().await?;
        tracing::info!("progression reset");
        Ok(ResetOutcome::Cleared)
    }

    /// Indicator steps for `rendered`. Never writes.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Storage` if the backend cannot be read.
    pub async fn progress_steps(
        &self,
        rendered: PageId,
    ) -> Result<Vec<ProgressStep>, ProgressionError> {
        let state = self.load().await?;
        Ok(progress_steps(&self.gate, &state, rendered))
    }

    /// True if `page` is open for the stored state.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Storage` if the backend cannot be read.
    pub async fn is_accessible(&self, page: PageId) -> Result<bool, ProgressionError> {
        let state = self.load().await?;
        Ok(self.gate.is_accessible(&state, page))
    }
}
