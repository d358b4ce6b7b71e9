use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use journey_core::PageInteraction;
use journey_core::interaction::LOCKED_PAGE_NOTICE;
use journey_core::model::PageId;
use services::{ResetConfirmation, ResetOutcome};

use crate::context::AppContext;
use crate::routes::page_path;
use crate::views::ViewError;
use crate::views::shell::{GateData, PageController, render_gated, use_page_controller};
use crate::vm::copy::{THOUGHT_CURIOUS, THOUGHT_DEFAULT, THOUGHT_SKEPTICAL};
use crate::vm::map_greeting;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResetState {
    Closed,
    Confirming,
    Resetting,
    Error(ViewError),
}

#[component]
pub fn IndexView() -> Element {
    let controller = use_page_controller(PageId::Index);
    let thought = use_signal(|| THOUGHT_DEFAULT);
    let reset_state = use_signal(|| ResetState::Closed);
    render_gated(controller, move |data| {
        rsx! {
            IndexBody { controller, data, thought, reset_state }
        }
    })
}

#[component]
fn IndexBody(
    controller: PageController,
    data: GateData,
    mut thought: Signal<&'static str>,
    mut reset_state: Signal<ResetState>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let greeting = map_greeting(&data.greeting);

    let completed = data.state.completed_pages().to_vec();
    let open_chapter = use_callback(move |page: PageId| {
        if completed.contains(&page) {
            let _ = navigator.push(page_path(page));
        } else {
            controller.show_notice(LOCKED_PAGE_NOTICE);
        }
    });

    let open_reset = use_callback(move |()| reset_state.set(ResetState::Confirming));

    let progression = ctx.progression();
    let answer_reset = use_callback(move |confirmation: ResetConfirmation| {
        let progression = progression.clone();
        let mut reset_state = reset_state;
        if confirmation == ResetConfirmation::Confirmed {
            reset_state.set(ResetState::Resetting);
        }
        spawn(async move {
            match progression.reset(confirmation).await {
                Ok(ResetOutcome::Cleared) => {
                    reset_state.set(ResetState::Closed);
                    controller.reload();
                }
                Ok(ResetOutcome::Declined) => reset_state.set(ResetState::Closed),
                Err(err) => {
                    tracing::warn!(error = %err, "reset failed");
                    reset_state.set(ResetState::Error(ViewError::Storage));
                }
            }
        });
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<IndexTestHandles>() {
            handles.register(IndexActions {
                open_chapter,
                open_reset,
                answer_reset,
            });
        }
    }

    let chapters = ctx
        .progression()
        .gate()
        .catalog()
        .pages()
        .iter()
        .filter(|def| def.id != PageId::Index)
        .map(|def| {
            let page = def.id;
            let title = def.title;
            let unlocked = data.state.has_completed(page);
            rsx! {
                li { key: "{page}",
                    if unlocked {
                        Link { class: "chapter-link", to: page_path(page), "{title}" }
                    } else {
                        button {
                            class: "chapter-link locked",
                            r#type: "button",
                            onclick: move |_| open_chapter.call(page),
                            "{title}"
                        }
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        section { class: "hero",
            if let Some(greeting) = greeting {
                div { class: "greeting",
                    h2 { class: "greeting-headline", "{greeting.headline}" }
                    if let Some(detail) = greeting.detail {
                        p { class: "greeting-detail", "{detail}" }
                    }
                }
            } else {
                h2 { class: "greeting-headline", "Hello there" }
            }
            p { class: "thought-bubble", "{thought()}" }
            div { class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onmouseenter: move |_| thought.set(THOUGHT_CURIOUS),
                    onmouseleave: move |_| thought.set(THOUGHT_DEFAULT),
                    onclick: move |_| {
                        controller.dispatch.call(PageInteraction::CuriousChosen);
                        controller.advance.call(());
                    },
                    "I'm curious..."
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onmouseenter: move |_| thought.set(THOUGHT_SKEPTICAL),
                    onmouseleave: move |_| thought.set(THOUGHT_DEFAULT),
                    onclick: move |_| controller.dispatch.call(PageInteraction::SkepticalChosen),
                    "I'm skeptical"
                }
            }
        }
        section { class: "chapters",
            h3 { "Chapters" }
            ul { class: "chapter-list", {chapters.into_iter()} }
        }
        section { class: "reset",
            button {
                class: "btn btn-ghost reset-btn",
                r#type: "button",
                onclick: move |_| open_reset.call(()),
                "Start over"
            }
        }
        if reset_state() != ResetState::Closed {
            div {
                class: "modal-overlay",
                onclick: move |_| answer_reset.call(ResetConfirmation::Declined),
                div {
                    class: "modal",
                    onclick: move |evt| evt.stop_propagation(),
                    h3 { class: "modal-title", "Start the journey over?" }
                    p { class: "modal-body",
                        "This clears your progress and every choice you made along the way."
                    }
                    if let ResetState::Error(err) = reset_state() {
                        p { class: "modal-error", "{err.message()}" }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn modal-cancel",
                            r#type: "button",
                            onclick: move |_| answer_reset.call(ResetConfirmation::Declined),
                            "Keep my progress"
                        }
                        button {
                            class: "btn btn-danger modal-confirm",
                            r#type: "button",
                            disabled: reset_state() == ResetState::Resetting,
                            onclick: move |_| answer_reset.call(ResetConfirmation::Confirmed),
                            "Start over"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct IndexActions {
    pub open_chapter: Callback<PageId>,
    pub open_reset: Callback<()>,
    pub answer_reset: Callback<ResetConfirmation>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct IndexTestHandles {
    actions: std::rc::Rc<std::cell::RefCell<Option<IndexActions>>>,
}

#[cfg(test)]
impl IndexTestHandles {
    fn register(&self, actions: IndexActions) {
        *self.actions.borrow_mut() = Some(actions);
    }

    pub(crate) fn actions(&self) -> IndexActions {
        self.actions
            .borrow()
            .as_ref()
            .copied()
            .expect("index actions registered")
    }
}
