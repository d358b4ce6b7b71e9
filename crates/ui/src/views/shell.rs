//! Page gating and the interaction plumbing shared by every page.

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use journey_core::model::{PageId, ProgressionState, VisitorJournal};
use journey_core::{InteractionOutcome, PageInteraction, PageSession};
use services::{AdvanceOutcome, PageEntry, VisitGreeting};

use crate::context::AppContext;
use crate::routes::page_path;
use crate::views::frame::NavState;
use crate::views::progress::ProgressIndicator;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{restored_session, visited_pages};

/// What a granted page load hands to the page body.
#[derive(Clone, Debug, PartialEq)]
pub struct GateData {
    pub state: ProgressionState,
    pub journal: VisitorJournal,
    pub greeting: VisitGreeting,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageGate {
    Open(GateData),
    Redirect(PageId),
}

/// Handles a page view uses to talk to the gate and its own session.
#[derive(Clone, Copy)]
pub struct PageController {
    pub page: PageId,
    pub gate: Resource<Result<PageGate, ViewError>>,
    pub session: Signal<PageSession>,
    pub notice: Signal<Option<String>>,
    pub dispatch: Callback<PageInteraction>,
    pub advance: Callback<()>,
}

impl PartialEq for PageController {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page && self.session == other.session && self.notice == other.notice
    }
}

impl PageController {
    pub fn show_notice(&self, message: impl Into<String>) {
        let mut notice = self.notice;
        notice.set(Some(message.into()));
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.session.read().is_unlocked()
    }

    /// Re-run the gate check as if the page had been loaded again.
    pub fn reload(&self) {
        let mut gate = self.gate;
        gate.restart();
    }
}

pub fn use_page_controller(page: PageId) -> PageController {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session = use_signal(|| PageSession::new(page));
    let notice = use_signal(|| None::<String>);
    let nav = try_use_context::<NavState>();

    let progression = ctx.progression();
    let journal = ctx.journal();
    let gate = use_resource(move || {
        let progression = progression.clone();
        let journal = journal.clone();
        let mut session = session;
        let mut notice = notice;
        async move {
            let entry = progression.enter_page(page).await.map_err(|err| {
                tracing::warn!(%page, error = %err, "page gate failed");
                ViewError::Storage
            })?;
            let state = match entry {
                PageEntry::Granted { state } => state,
                PageEntry::Redirect { to } => return Ok(PageGate::Redirect(to)),
            };
            let greeting = journal
                .record_page_load(page)
                .await
                .map_err(|_| ViewError::Storage)?;
            let record = journal.load().await.map_err(|_| ViewError::Storage)?;
            session.set(restored_session(page, &record));
            notice.set(None);
            if let Some(nav) = nav {
                let mut visited = nav.visited;
                visited.set(visited_pages(&record));
            }
            Ok(PageGate::Open(GateData {
                state,
                journal: record,
                greeting,
            }))
        }
    });

    let journal = ctx.journal();
    let dispatch = use_callback(move |event: PageInteraction| {
        let mut session = session;
        let mut notice = notice;
        let outcome = session.write().record(&event);
        match outcome {
            InteractionOutcome::Accepted => notice.set(None),
            InteractionOutcome::Rejected(rejection) => {
                notice.set(Some(rejection.notice.to_string()));
            }
            InteractionOutcome::Ignored => {}
        }
        let journal = journal.clone();
        spawn(async move {
            if let Err(err) = journal.record_interaction(&event).await {
                tracing::warn!(error = %err, "could not record interaction");
            }
        });
    });

    let progression = ctx.progression();
    let advance = use_callback(move |()| {
        let mut notice = notice;
        let snapshot = session.read().clone();
        let progression = progression.clone();
        spawn(async move {
            match progression.advance(&snapshot).await {
                Ok(AdvanceOutcome::Advanced { to, .. }) => {
                    let _ = navigator.push(page_path(to));
                }
                Ok(AdvanceOutcome::Rejected(rejection)) => {
                    notice.set(Some(rejection.notice.to_string()));
                }
                Err(err) => {
                    tracing::warn!(page = %snapshot.page(), error = %err, "advance failed");
                    notice.set(Some(ViewError::Storage.message().to_string()));
                }
            }
        });
    });

    let controller = PageController {
        page,
        gate,
        session,
        notice,
        dispatch,
        advance,
    };

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<PageTestHandles>() {
            handles.register(controller);
        }
    }

    controller
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PageTestHandles {
    controller: std::rc::Rc<std::cell::RefCell<Option<PageController>>>,
}

#[cfg(test)]
impl PageTestHandles {
    fn register(&self, controller: PageController) {
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn controller(&self) -> PageController {
        self.controller
            .borrow()
            .as_ref()
            .copied()
            .expect("page controller registered")
    }
}

/// Render the gate outcome; `body` is only called for a granted load.
pub fn render_gated(controller: PageController, body: impl FnOnce(GateData) -> Element) -> Element {
    match view_state_from_resource(&controller.gate) {
        ViewState::Ready(PageGate::Open(data)) => {
            let page = controller.page;
            rsx! {
                div { class: "page page-{page}",
                    ProgressIndicator { page }
                    NoticeBanner { notice: controller.notice }
                    {body(data)}
                }
            }
        }
        ViewState::Ready(PageGate::Redirect(to)) => rsx! {
            RedirectTo { to }
        },
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "page-loading", "Loading..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page-error",
                p { "{err.message()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| controller.reload(),
                    "Retry"
                }
            }
        },
    }
}

#[component]
fn RedirectTo(to: PageId) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        tracing::debug!(%to, "redirecting away from a locked page");
        let _ = navigator.replace(page_path(to));
    });
    rsx! {
        p { class: "page-redirect", "This page is still locked. Taking you back..." }
    }
}

#[component]
pub fn NoticeBanner(mut notice: Signal<Option<String>>) -> Element {
    let Some(message) = notice() else {
        return rsx! {};
    };
    rsx! {
        div { class: "notice", role: "alert",
            p { class: "notice-text", "{message}" }
            button {
                class: "btn btn-ghost notice-dismiss",
                r#type: "button",
                onclick: move |_| notice.set(None),
                "OK"
            }
        }
    }
}

/// Forward button. Stays clickable while locked so the visitor gets told why.
#[component]
pub fn ContinueButton(controller: PageController, label: &'static str) -> Element {
    let class = if controller.is_unlocked() {
        "btn btn-primary continue-btn"
    } else {
        "btn btn-primary continue-btn disabled"
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| controller.advance.call(()),
            "{label}"
        }
    }
}

/// Class list for a choice button, marking the chosen one.
#[must_use]
pub fn choice_class(base: &str, selected: bool) -> String {
    if selected {
        format!("{base} selected")
    } else {
        base.to_string()
    }
}
