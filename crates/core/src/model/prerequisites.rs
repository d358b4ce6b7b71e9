use std::collections::{BTreeMap, BTreeSet};

use crate::model::{PageCatalog, PageId};

/// Which pages must be completed before a page may be viewed.
///
/// Pages without an entry have no prerequisites.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrerequisiteMap {
    rules: BTreeMap<PageId, BTreeSet<PageId>>,
}

impl PrerequisiteMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Each page requires exactly the page before it in `catalog`.
    #[must_use]
    pub fn linear_chain(catalog: &PageCatalog) -> Self {
        let mut map = Self::new();
        for pair in catalog.pages().windows(2) {
            map = map.require(pair[1].id, [pair[0].id]);
        }
        map
    }

    /// Add `required` to the prerequisite set of `page`.
    #[must_use]
    pub fn require(mut self, page: PageId, required: impl IntoIterator<Item = PageId>) -> Self {
        self.rules.entry(page).or_default().extend(required);
        self
    }

    /// Prerequisites of `page` in page order.
    pub fn prerequisites_of(&self, page: PageId) -> impl Iterator<Item = PageId> + '_ {
        self.rules
            .get(&page)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    #[must_use]
    pub fn has_prerequisites(&self, page: PageId) -> bool {
        self.rules.get(&page).is_some_and(|set| !set.is_empty())
    }

    /// True if every prerequisite of `page` appears in `completed`.
    #[must_use]
    pub fn is_satisfied(&self, page: PageId, completed: &[PageId]) -> bool {
        self.prerequisites_of(page)
            .all(|required| completed.contains(&required))
    }
}
