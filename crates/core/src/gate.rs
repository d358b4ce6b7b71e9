//! Access control over the page sequence.
//!
//! The gate is pure: it reads and mutates a `ProgressionState` in memory and
//! leaves loading/persisting to the services layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::GateError;
use crate::model::{PageCatalog, PageId, PrerequisiteMap, ProgressionState};

/// How a denied page load picks its redirect target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Go to the catalog page after the catalog-latest satisfied prerequisite.
    #[default]
    CanonicalOrder,
    /// Go to the entry after the latest satisfied prerequisite *within
    /// `completed_pages`*. Can diverge from catalog order when pages were
    /// completed out of order.
    CompletedOrder,
}

impl FallbackPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FallbackPolicy::CanonicalOrder => "canonical",
            FallbackPolicy::CompletedOrder => "completed",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fallback policy: {0} (expected `canonical` or `completed`)")]
pub struct ParseFallbackPolicyError(String);

impl FromStr for FallbackPolicy {
    type Err = ParseFallbackPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(FallbackPolicy::CanonicalOrder),
            "completed" => Ok(FallbackPolicy::CompletedOrder),
            _ => Err(ParseFallbackPolicyError(s.to_string())),
        }
    }
}

/// Result of checking a page load against the prerequisites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Redirect(PageId),
}

impl AccessDecision {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, AccessDecision::Granted)
    }
}

/// Page order, prerequisites and redirect policy for one experience.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressionGate {
    catalog: PageCatalog,
    prerequisites: PrerequisiteMap,
    fallback: FallbackPolicy,
}

impl ProgressionGate {
    #[must_use]
    pub fn new(catalog: PageCatalog, prerequisites: PrerequisiteMap) -> Self {
        Self {
            catalog,
            prerequisites,
            fallback: FallbackPolicy::default(),
        }
    }

    /// The five canonical pages, each requiring the one before it.
    #[must_use]
    pub fn canonical() -> Self {
        let catalog = PageCatalog::canonical();
        let prerequisites = PrerequisiteMap::linear_chain(&catalog);
        Self::new(catalog, prerequisites)
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn prerequisites(&self) -> &PrerequisiteMap {
        &self.prerequisites
    }

    #[must_use]
    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback
    }

    #[must_use]
    pub fn first_page(&self) -> PageId {
        self.catalog.first()
    }

    /// The state a visitor without a stored record starts from.
    #[must_use]
    pub fn fresh_state(&self, now: DateTime<Utc>) -> ProgressionState {
        ProgressionState::fresh(self.first_page(), now)
    }

    /// True if `page` may be rendered for `state`.
    #[must_use]
    pub fn is_accessible(&self, state: &ProgressionState, page: PageId) -> bool {
        page == self.first_page()
            || self
                .prerequisites
                .is_satisfied(page, state.completed_pages())
    }

    #[must_use]
    pub fn check_access(&self, state: &ProgressionState, requested: PageId) -> AccessDecision {
        if self.is_accessible(state, requested) {
            AccessDecision::Granted
        } else {
            AccessDecision::Redirect(self.fallback_for(state, requested))
        }
    }

    /// Where to send a visitor who may not see `requested`.
    ///
    /// A target that would itself be denied is replaced by the first page.
    #[must_use]
    pub fn fallback_for(&self, state: &ProgressionState, requested: PageId) -> PageId {
        let first = self.first_page();
        let target = match self.fallback {
            FallbackPolicy::CanonicalOrder => self
                .prerequisites
                .prerequisites_of(requested)
                .filter(|page| state.has_completed(*page))
                .filter_map(|page| self.catalog.position(page).map(|idx| (idx, page)))
                .max_by_key(|(idx, _)| *idx)
                .and_then(|(_, page)| self.catalog.next_after(page)),
            FallbackPolicy::CompletedOrder => {
                let completed = state.completed_pages();
                self.prerequisites
                    .prerequisites_of(requested)
                    .filter_map(|page| state.completion_index(page))
                    .max()
                    .and_then(|idx| completed.get(idx + 1).copied())
            }
        };

        match target {
            Some(page) if page != requested && self.is_accessible(state, page) => page,
            _ => first,
        }
    }

    /// Record a granted page load: `page` becomes the current page.
    pub fn enter(&self, state: &mut ProgressionState, page: PageId, now: DateTime<Utc>) {
        state.set_current_page(page, now);
    }

    /// Mark the current page completed and move on to `next`.
    ///
    /// Repeating the call does not duplicate completion entries.
    pub fn unlock_next_page(&self, state: &mut ProgressionState, next: PageId, now: DateTime<Utc>) {
        let current = state.current_page();
        self.complete_page(state, current, next, now);
    }

    /// Mark `from` completed and move on to `next`.
    ///
    /// `from` is the page the visitor acted on, which can differ from the
    /// stored current page once an earlier advance from it has landed.
    pub fn complete_page(
        &self,
        state: &mut ProgressionState,
        from: PageId,
        next: PageId,
        now: DateTime<Utc>,
    ) {
        state.push_completed(from);
        state.set_current_page(next, now);
    }

    /// The page that follows `page` in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `GateError::UnknownPage` if `page` is not in the catalog and
    /// `GateError::TerminalPage` if it is the last page.
    pub fn next_page(&self, page: PageId) -> Result<PageId, GateError> {
        if self.catalog.position(page).is_none() {
            return Err(GateError::UnknownPage(page));
        }
        self.catalog
            .next_after(page)
            .ok_or(GateError::TerminalPage(page))
    }
}

impl Default for ProgressionGate {
    fn default() -> Self {
        Self::canonical()
    }
}
