use journey_core::model::{PageCatalog, PageId, VisitorJournal};

use crate::routes::page_path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkVm {
    pub page: PageId,
    pub path: String,
    pub title: &'static str,
    pub class: &'static str,
}

/// Header links in catalog order; pages the visitor has loaded are marked.
#[must_use]
pub fn map_nav_links(catalog: &PageCatalog, visited: &[PageId]) -> Vec<NavLinkVm> {
    catalog
        .pages()
        .iter()
        .map(|def| NavLinkVm {
            page: def.id,
            path: page_path(def.id),
            title: def.title,
            class: if visited.contains(&def.id) {
                "nav-link visited"
            } else {
                "nav-link"
            },
        })
        .collect()
}

#[must_use]
pub fn visited_pages(journal: &VisitorJournal) -> Vec<PageId> {
    PageId::ALL
        .into_iter()
        .filter(|page| journal.has_visited(*page))
        .collect()
}
