use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── PAGE IDENTIFIERS ──────────────────────────────────────────────────────────
//

/// One of the five pages of the experience.
///
/// Serialized as the lower-case page name (`"index"`, `"journey"`, ...).
/// Parsing also accepts the `.html` file names older records stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PageId {
    Index,
    Journey,
    Memories,
    Future,
    Connect,
}

impl PageId {
    /// All pages in canonical display order.
    pub const ALL: [PageId; 5] = [
        PageId::Index,
        PageId::Journey,
        PageId::Memories,
        PageId::Future,
        PageId::Connect,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PageId::Index => "index",
            PageId::Journey => "journey",
            PageId::Memories => "memories",
            PageId::Future => "future",
            PageId::Connect => "connect",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a page identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {raw}")]
pub struct ParsePageIdError {
    raw: String,
}

impl FromStr for PageId {
    type Err = ParsePageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix(".html").unwrap_or(name);
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == name)
            .ok_or_else(|| ParsePageIdError { raw: s.to_string() })
    }
}

impl TryFrom<String> for PageId {
    type Error = ParsePageIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageId> for &'static str {
    fn from(page: PageId) -> Self {
        page.as_str()
    }
}

//
// ─── PAGE CATALOG ──────────────────────────────────────────────────────────────
//

/// Static description of a page: identifier plus display title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageDefinition {
    pub id: PageId,
    pub title: &'static str,
}

impl PageDefinition {
    #[must_use]
    pub const fn new(id: PageId, title: &'static str) -> Self {
        Self { id, title }
    }
}

/// Ordered list of the pages that make up the experience.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCatalog {
    pages: Vec<PageDefinition>,
}

impl PageCatalog {
    /// The five canonical pages in display order.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            pages: vec![
                PageDefinition::new(PageId::Index, "Start"),
                PageDefinition::new(PageId::Journey, "Your Journey"),
                PageDefinition::new(PageId::Memories, "Memories"),
                PageDefinition::new(PageId::Future, "Our Future"),
                PageDefinition::new(PageId::Connect, "Connect"),
            ],
        }
    }

    /// Build a catalog from an explicit ordering.
    ///
    /// Returns `None` if the list is empty or names a page twice.
    #[must_use]
    pub fn from_pages(pages: Vec<PageDefinition>) -> Option<Self> {
        if pages.is_empty() {
            return None;
        }
        let mut seen = Vec::with_capacity(pages.len());
        for page in &pages {
            if seen.contains(&page.id) {
                return None;
            }
            seen.push(page.id);
        }
        Some(Self { pages })
    }

    #[must_use]
    pub fn pages(&self) -> &[PageDefinition] {
        &self.pages
    }

    #[must_use]
    pub fn first(&self) -> PageId {
        self.pages[0].id
    }

    #[must_use]
    pub fn last(&self) -> PageId {
        self.pages[self.pages.len() - 1].id
    }

    #[must_use]
    pub fn position(&self, page: PageId) -> Option<usize> {
        self.pages.iter().position(|def| def.id == page)
    }

    /// The page after `page` in display order, if any.
    #[must_use]
    pub fn next_after(&self, page: PageId) -> Option<PageId> {
        let idx = self.position(page)?;
        self.pages.get(idx + 1).map(|def| def.id)
    }

    /// The page before `page` in display order, if any.
    #[must_use]
    pub fn previous_before(&self, page: PageId) -> Option<PageId> {
        let idx = self.position(page)?;
        idx.checked_sub(1)
            .and_then(|prev| self.pages.get(prev))
            .map(|def| def.id)
    }

    #[must_use]
    pub fn title_of(&self, page: PageId) -> Option<&'static str> {
        self.pages
            .iter()
            .find(|def| def.id == page)
            .map(|def| def.title)
    }

    #[must_use]
    pub fn is_terminal(&self, page: PageId) -> bool {
        self.last() == page
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::canonical()
    }
}
