use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::PageId;

/// Persisted record of how far the visitor has progressed.
///
/// `completed_pages` is append-only: entries are never removed or reordered
/// except by deleting the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    completed_pages: Vec<PageId>,
    current_page: PageId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    last_interaction: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "is_false")]
    is_complete: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl ProgressionState {
    /// Fresh-visitor state: the first page is both completed and current.
    #[must_use]
    pub fn fresh(first_page: PageId, now: DateTime<Utc>) -> Self {
        Self {
            completed_pages: vec![first_page],
            current_page: first_page,
            last_interaction: now,
            is_complete: false,
        }
    }

    /// Rehydrate a state from persisted parts, dropping duplicate entries.
    #[must_use]
    pub fn from_persisted(
        completed_pages: Vec<PageId>,
        current_page: PageId,
        last_interaction: DateTime<Utc>,
        is_complete: bool,
    ) -> Self {
        let mut state = Self {
            completed_pages: Vec::with_capacity(completed_pages.len()),
            current_page,
            last_interaction,
            is_complete,
        };
        for page in completed_pages {
            state.push_completed(page);
        }
        state
    }

    #[must_use]
    pub fn completed_pages(&self) -> &[PageId] {
        &self.completed_pages
    }

    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    #[must_use]
    pub fn last_interaction(&self) -> DateTime<Utc> {
        self.last_interaction
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[must_use]
    pub fn has_completed(&self, page: PageId) -> bool {
        self.completed_pages.contains(&page)
    }

    /// Index of `page` within the completion order, if completed.
    #[must_use]
    pub fn completion_index(&self, page: PageId) -> Option<usize> {
        self.completed_pages.iter().position(|p| *p == page)
    }

    /// Append `page` unless it is already recorded. Returns true if appended.
    pub fn push_completed(&mut self, page: PageId) -> bool {
        if self.has_completed(page) {
            return false;
        }
        self.completed_pages.push(page);
        true
    }

    pub fn set_current_page(&mut self, page: PageId, now: DateTime<Utc>) {
        self.current_page = page;
        self.last_interaction = now;
    }

    pub fn mark_experience_complete(&mut self, now: DateTime<Utc>) {
        self.is_complete = true;
        self.last_interaction = now;
    }
}
