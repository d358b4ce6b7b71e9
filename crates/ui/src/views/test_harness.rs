use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use journey_core::ProgressionGate;
use journey_core::model::{ProgressionState, VisitorJournal};
use journey_core::time::fixed_now;
use services::{AppServices, Clock};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::index::IndexTestHandles;
use crate::views::shell::PageTestHandles;
use crate::views::{ConnectView, FutureView, IndexView, JourneyView, MemoriesView, SiteFrame};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Index,
    Journey,
    Memories,
    Future,
    Connect,
}

#[derive(Clone, Copy)]
struct HarnessView {
    kind: ViewKind,
    framed: bool,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: HarnessView,
    page_handles: PageTestHandles,
    index_handles: IndexTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.page_handles.clone());
    use_context_provider(|| props.index_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<HarnessView>();
    let page = match view.kind {
        ViewKind::Index => rsx! { IndexView {} },
        ViewKind::Journey => rsx! { JourneyView {} },
        ViewKind::Memories => rsx! { MemoriesView {} },
        ViewKind::Future => rsx! { FutureView {} },
        ViewKind::Connect => rsx! { ConnectView {} },
    };
    if view.framed {
        rsx! {
            SiteFrame { {page} }
        }
    } else {
        page
    }
}

/// Where a page navigated to; the views only know `/`.
#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        p { class: "navigated", "navigated to /{path}" }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub page_handles: PageTestHandles,
    pub index_handles: IndexTestHandles,
}

impl ViewHarness {
    /// Build the DOM and let the page gate and indicator resources settle.
    pub async fn settle(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    /// Run `action` inside the runtime, as an event handler would, then settle.
    pub async fn fire(&mut self, action: impl FnOnce()) {
        self.dom.in_runtime(action);
        drive_dom(&mut self.dom);
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Storage pre-filled with the given records.
pub async fn seeded_storage(
    state: Option<&ProgressionState>,
    journal: Option<&VisitorJournal>,
) -> Storage {
    let storage = Storage::in_memory();
    if let Some(state) = state {
        storage.progression().save(state).await.expect("seed progression");
    }
    if let Some(journal) = journal {
        storage.journal().save(journal).await.expect("seed journal");
    }
    storage
}

pub fn setup_view_harness(view: ViewKind, storage: Storage) -> ViewHarness {
    build_harness(view, false, storage)
}

/// Same as `setup_view_harness`, with the header and nav around the page.
pub fn setup_framed_view_harness(view: ViewKind, storage: Storage) -> ViewHarness {
    build_harness(view, true, storage)
}

fn build_harness(kind: ViewKind, framed: bool, storage: Storage) -> ViewHarness {
    let app = Arc::new(AppServices::from_storage(
        &storage,
        Clock::fixed(fixed_now()),
        ProgressionGate::canonical(),
    ));
    let page_handles = PageTestHandles::default();
    let index_handles = IndexTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view: HarnessView { kind, framed },
            page_handles: page_handles.clone(),
            index_handles: index_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        storage,
        page_handles,
        index_handles,
    }
}
