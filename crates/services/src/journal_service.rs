use journey_core::PageInteraction;
use journey_core::model::{PageId, TimeSinceVisit, VisitorJournal};
use storage::RecordSlot;
use storage::repository::Storage;

use crate::Clock;
use crate::error::JournalError;

/// Greeting data captured when a page loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitGreeting {
    pub visits: u32,
    pub returning: bool,
    pub since_last_visit: TimeSinceVisit,
}

/// Accessor for the visitor journal record.
#[derive(Clone)]
pub struct JournalService {
    clock: Clock,
    journal: RecordSlot<VisitorJournal>,
}

impl JournalService {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage) -> Self {
        Self {
            clock,
            journal: storage.journal(),
        }
    }

    /// Stored journal, or an empty one if nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` if the backend cannot be read.
    pub async fn load(&self) -> Result<VisitorJournal, JournalError> {
        Ok(self.journal.load().await?.unwrap_or_else(VisitorJournal::new))
    }

    async fn update<R>(
        &self,
        apply: impl FnOnce(&mut VisitorJournal) -> R,
    ) -> Result<(R, VisitorJournal), JournalError> {
        let mut journal = self.load().await?;
        let result = apply(&mut journal);
        self.journal.save(&journal).await?;
        Ok((result, journal))
    }

    /// Count a page load and report how long the visitor was away.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` on storage failures.
    pub async fn record_page_load(&self, page: PageId) -> Result<VisitGreeting, JournalError> {
        let now = self.clock.now();
        let (since_last_visit, journal) = self
            .update(|journal| journal.record_page_load(page, now))
            .await?;
        tracing::debug!(%page, visits = journal.visits(), "page load recorded");
        Ok(VisitGreeting {
            visits: journal.visits(),
            returning: journal.is_returning(),
            since_last_visit,
        })
    }

    /// Remember the choice carried by a page interaction.
    ///
    /// Events that carry no choice leave the journal untouched and are not
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` on storage failures.
    pub async fn record_interaction(
        &self,
        event: &PageInteraction,
    ) -> Result<VisitorJournal, JournalError> {
        let records_choice = matches!(
            event,
            PageInteraction::RevealOpened
                | PageInteraction::MemoryFlipped(_)
                | PageInteraction::ReactionSelected(_)
                | PageInteraction::TopicSelected(Some(_))
                | PageInteraction::GrowthSelected(_)
                | PageInteraction::FinalChoice(_)
        );
        if !records_choice {
            return self.load().await;
        }

        let (_, journal) = self
            .update(|journal| match event {
                PageInteraction::RevealOpened => journal.record_reveal(),
                PageInteraction::MemoryFlipped(id) => {
                    journal.record_memory_viewed(id.clone());
                }
                PageInteraction::ReactionSelected(reaction) => journal.record_reaction(*reaction),
                PageInteraction::TopicSelected(Some(topic)) => journal.record_topic(*topic),
                PageInteraction::GrowthSelected(value) => journal.record_growth(*value),
                PageInteraction::FinalChoice(decision) => journal.record_final_decision(*decision),
                _ => {}
            })
            .await?;
        Ok(journal)
    }

    /// Flip dark mode and return the new preference.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` on storage failures.
    pub async fn toggle_dark_mode(&self) -> Result<bool, JournalError> {
        let (dark, _) = self.update(VisitorJournal::toggle_dark_mode).await?;
        Ok(dark)
    }
}
