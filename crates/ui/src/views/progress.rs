use dioxus::prelude::*;
use journey_core::model::PageId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressStepVm, map_progress_steps};

/// Row of numbered steps above every page.
#[component]
pub fn ProgressIndicator(page: PageId) -> Element {
    let ctx = use_context::<AppContext>();
    let progression = ctx.progression();
    let steps = use_resource(move || {
        let progression = progression.clone();
        async move {
            let steps = progression.progress_steps(page).await.map_err(|err| {
                tracing::warn!(%page, error = %err, "progress indicator unavailable");
                ViewError::Storage
            })?;
            Ok::<_, ViewError>(map_progress_steps(&steps))
        }
    });

    match view_state_from_resource(&steps) {
        ViewState::Ready(steps) => rsx! {
            ol { class: "progress-indicator",
                for step in steps {
                    ProgressStepItem { step }
                }
            }
        },
        ViewState::Idle | ViewState::Loading | ViewState::Error(_) => rsx! {
            ol { class: "progress-indicator" }
        },
    }
}

#[component]
fn ProgressStepItem(step: ProgressStepVm) -> Element {
    rsx! {
        li { class: "{step.class}", "data-page": "{step.page}",
            span { class: "step-indicator", "{step.marker}" }
            span { class: "step-title", "{step.title}" }
        }
    }
}
