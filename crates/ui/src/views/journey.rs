use dioxus::prelude::*;
use journey_core::PageInteraction;
use journey_core::model::PageId;

use crate::views::shell::{ContinueButton, PageController, render_gated, use_page_controller};

#[component]
pub fn JourneyView() -> Element {
    let controller = use_page_controller(PageId::Journey);
    render_gated(controller, move |data| {
        let restored = data.journal.choices().revealed_more;
        rsx! {
            JourneyBody { controller, restored }
        }
    })
}

#[component]
fn JourneyBody(controller: PageController, restored: bool) -> Element {
    let mut open = use_signal(move || restored);
    let toggle_label = if open() { "Show less" } else { "Who is this?" };
    rsx! {
        section { class: "story",
            h2 { "Your Journey" }
            p {
                "Some stories start with a single message. This one started with someone who kept "
                "thinking about a conversation long after it ended."
            }
            button {
                class: "btn btn-secondary reveal-btn",
                r#type: "button",
                onclick: move |_| {
                    let opening = !open();
                    open.set(opening);
                    if opening {
                        controller.dispatch.call(PageInteraction::RevealOpened);
                    }
                },
                "{toggle_label}"
            }
            if open() {
                div { class: "reveal-content",
                    p {
                        "It's me. I built these pages because some things are easier to show than to say. "
                        "Take your time with each one."
                    }
                }
            }
        }
        ContinueButton { controller, label: "Continue" }
    }
}
