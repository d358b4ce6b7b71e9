use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use journey_core::model::PageId;

use crate::views::{ConnectView, FutureView, IndexView, JourneyView, MemoriesView, SiteFrame};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", IndexView)] Index {},
        #[route("/journey", JourneyView)] Journey {},
        #[route("/memories", MemoriesView)] Memories {},
        #[route("/future", FutureView)] Future {},
        #[route("/connect", ConnectView)] Connect {},
}

impl Route {
    #[must_use]
    pub fn page(&self) -> PageId {
        match self {
            Route::Index {} => PageId::Index,
            Route::Journey {} => PageId::Journey,
            Route::Memories {} => PageId::Memories,
            Route::Future {} => PageId::Future,
            Route::Connect {} => PageId::Connect,
        }
    }
}

#[must_use]
pub fn route_for(page: PageId) -> Route {
    match page {
        PageId::Index => Route::Index {},
        PageId::Journey => Route::Journey {},
        PageId::Memories => Route::Memories {},
        PageId::Future => Route::Future {},
        PageId::Connect => Route::Connect {},
    }
}

/// Path string for `page`. Links and navigation use the path so they resolve in any router.
#[must_use]
pub fn page_path(page: PageId) -> String {
    route_for(page).to_string()
}

#[component]
fn Layout() -> Element {
    rsx! {
        SiteFrame { Outlet::<Route> {} }
    }
}
