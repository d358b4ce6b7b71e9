use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ConversationTopic, FinalDecision, GrowthValue, MemoryId, PageId, Reaction};

/// Choices the visitor made while moving through the pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JournalChoices {
    pub revealed_more: bool,
    pub viewed_memories: Vec<MemoryId>,
    pub conversation_topic: Option<ConversationTopic>,
    pub growth_value: Option<GrowthValue>,
    pub final_decision: Option<FinalDecision>,
}

/// Persisted record of visits and interactions, kept next to the progression
/// record. Used for the returning-visitor greeting and for restoring earlier
/// selections when a page is shown again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorJournal {
    visits: u32,
    last_visit: Option<DateTime<Utc>>,
    page_visits: BTreeSet<PageId>,
    reactions: Vec<Reaction>,
    choices: JournalChoices,
    dark_mode: bool,
}

/// How long it has been since the previous visit, at the granularity the
/// greeting shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeSinceVisit {
    Days(i64),
    Hours(i64),
    Unknown,
}

impl VisitorJournal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visits(&self) -> u32 {
        self.visits
    }

    #[must_use]
    pub fn last_visit(&self) -> Option<DateTime<Utc>> {
        self.last_visit
    }

    #[must_use]
    pub fn is_returning(&self) -> bool {
        self.visits > 1
    }

    #[must_use]
    pub fn has_visited(&self, page: PageId) -> bool {
        self.page_visits.contains(&page)
    }

    #[must_use]
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    #[must_use]
    pub fn last_reaction(&self) -> Option<Reaction> {
        self.reactions.last().copied()
    }

    #[must_use]
    pub fn choices(&self) -> &JournalChoices {
        &self.choices
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Count a page load. Returns the time since the previous visit, measured
    /// before this visit overwrites it.
    pub fn record_page_load(&mut self, page: PageId, now: DateTime<Utc>) -> TimeSinceVisit {
        let since = self.time_since_last_visit(now);
        self.visits = self.visits.saturating_add(1);
        self.last_visit = Some(now);
        self.page_visits.insert(page);
        since
    }

    pub fn record_reveal(&mut self) {
        self.choices.revealed_more = true;
    }

    /// Returns true if this memory had not been viewed before.
    pub fn record_memory_viewed(&mut self, memory: MemoryId) -> bool {
        if self.choices.viewed_memories.contains(&memory) {
            return false;
        }
        self.choices.viewed_memories.push(memory);
        true
    }

    pub fn record_reaction(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }

    pub fn record_topic(&mut self, topic: ConversationTopic) {
        self.choices.conversation_topic = Some(topic);
    }

    pub fn record_growth(&mut self, value: GrowthValue) {
        self.choices.growth_value = Some(value);
    }

    pub fn record_final_decision(&mut self, decision: FinalDecision) {
        self.choices.final_decision = Some(decision);
    }

    /// Flip the dark-mode preference and return the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    #[must_use]
    pub fn time_since_last_visit(&self, now: DateTime<Utc>) -> TimeSinceVisit {
        let Some(last) = self.last_visit else {
            return TimeSinceVisit::Unknown;
        };
        let elapsed = (now - last).abs();
        if elapsed >= Duration::days(1) {
            TimeSinceVisit::Days(elapsed.num_days())
        } else {
            TimeSinceVisit::Hours(elapsed.num_hours())
        }
    }
}
