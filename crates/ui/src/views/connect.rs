use dioxus::prelude::*;
use journey_core::PageInteraction;
use journey_core::model::{FinalDecision, PageId};
use services::CompletionOutcome;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::shell::{PageController, render_gated, use_page_controller};

const PHONE: &str = "+1 555 0100";
const EMAIL: &str = "hello@example.com";

fn closing_message(decision: FinalDecision) -> &'static str {
    match decision {
        FinalDecision::Connect => {
            "Thank you for walking all the way here with me. I can't wait to hear from you."
        }
        FinalDecision::MaybeLater => {
            "Take all the time you need. The door stays open, and I'll be right here."
        }
    }
}

fn decision_class(decision: FinalDecision) -> &'static str {
    if decision.completes_experience() {
        "btn btn-primary final-btn"
    } else {
        "btn btn-secondary final-btn"
    }
}

#[component]
pub fn ConnectView() -> Element {
    let controller = use_page_controller(PageId::Connect);
    render_gated(controller, move |_| {
        rsx! {
            ConnectBody { controller }
        }
    })
}

#[component]
fn ConnectBody(controller: PageController) -> Element {
    let ctx = use_context::<AppContext>();
    let progression = ctx.progression();
    let mut phone_shown = use_signal(|| false);
    let mut email_shown = use_signal(|| false);
    let decision = controller.session.read().final_decision();

    let choose = use_callback(move |choice: FinalDecision| {
        controller.dispatch.call(PageInteraction::FinalChoice(choice));
        let snapshot = controller.session.read().clone();
        let progression = progression.clone();
        spawn(async move {
            match progression.complete_experience(&snapshot).await {
                Ok(CompletionOutcome::Closed { decision, .. }) => {
                    tracing::debug!(%decision, "closing message shown");
                }
                Ok(CompletionOutcome::Rejected(rejection)) => {
                    controller.show_notice(rejection.notice);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "could not record the closing choice");
                    controller.show_notice(ViewError::Storage.message());
                }
            }
        });
    });

    rsx! {
        section { class: "connect",
            h2 { "Connect" }
            p { "If you'd like to talk, here's how to reach me." }
            ul { class: "contact-list",
                li {
                    span { class: "contact-label", "Phone: " }
                    button {
                        class: "contact-reveal",
                        r#type: "button",
                        onclick: move |_| phone_shown.set(true),
                        if phone_shown() { "{PHONE}" } else { "Tap to show" }
                    }
                }
                li {
                    span { class: "contact-label", "Email: " }
                    button {
                        class: "contact-reveal",
                        r#type: "button",
                        onclick: move |_| email_shown.set(true),
                        if email_shown() { "{EMAIL}" } else { "Tap to show" }
                    }
                }
            }
        }
        section { class: "final-choice",
            h3 { "So, what do you say?" }
            div { class: "final-actions",
                for choice in FinalDecision::ALL.iter().copied() {
                    button {
                        key: "{choice}",
                        class: decision_class(choice),
                        r#type: "button",
                        onclick: move |_| choose.call(choice),
                        "{choice.label()}"
                    }
                }
            }
            if let Some(decision) = decision {
                div { class: "final-message active",
                    p { "{closing_message(decision)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_choice_has_its_own_closing_message() {
        assert_ne!(
            closing_message(FinalDecision::Connect),
            closing_message(FinalDecision::MaybeLater)
        );
    }
}
