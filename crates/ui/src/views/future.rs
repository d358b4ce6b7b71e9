use dioxus::prelude::*;
use journey_core::PageInteraction;
use journey_core::model::{ConversationTopic, GrowthValue, PageId};

use crate::views::shell::{
    ContinueButton, PageController, choice_class, render_gated, use_page_controller,
};
use crate::vm::copy::{NOT_YET_NOTICE, growth_response, topic_response};

#[component]
pub fn FutureView() -> Element {
    let controller = use_page_controller(PageId::Future);
    render_gated(controller, move |data| {
        let choices = data.journal.choices();
        let topic = choices.conversation_topic;
        let growth = choices.growth_value;
        rsx! {
            FutureBody { controller, topic, growth }
        }
    })
}

#[component]
fn FutureBody(
    controller: PageController,
    topic: Option<ConversationTopic>,
    growth: Option<GrowthValue>,
) -> Element {
    let mut topic = use_signal(move || topic);
    let mut growth = use_signal(move || growth);

    rsx! {
        section { class: "conversation",
            h2 { "Our Future" }
            label { r#for: "conversation-select", "What would you like to talk about first?" }
            select {
                id: "conversation-select",
                class: "conversation-select",
                onchange: move |evt: FormEvent| {
                    let choice = evt.value().parse::<ConversationTopic>().ok();
                    topic.set(choice);
                    controller.dispatch.call(PageInteraction::TopicSelected(choice));
                },
                option { value: "", selected: topic().is_none(), "Choose a topic..." }
                for choice in ConversationTopic::ALL.iter().copied() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: topic() == Some(choice),
                        "{choice.label()}"
                    }
                }
            }
            if let Some(current) = topic() {
                p { class: "conversation-response active", "{topic_response(current)}" }
            }
        }
        section { class: "growth",
            h3 { "What helps you grow?" }
            div { class: "growth-buttons",
                for value in GrowthValue::ALL.iter().copied() {
                    button {
                        key: "{value}",
                        class: choice_class("btn growth-btn", growth() == Some(value)),
                        r#type: "button",
                        "data-growth": "{value}",
                        onclick: move |_| {
                            growth.set(Some(value));
                            controller.dispatch.call(PageInteraction::GrowthSelected(value));
                        },
                        "{value.label()}"
                    }
                }
            }
            if let Some(current) = growth() {
                p { class: "growth-response active", "{growth_response(current)}" }
            }
        }
        section { class: "ready",
            h3 { "Ready to take the next step?" }
            div { class: "ready-actions",
                button {
                    class: "btn btn-primary ready-btn",
                    r#type: "button",
                    onclick: move |_| {
                        controller.dispatch.call(PageInteraction::ReadyNow);
                        controller.advance.call(());
                    },
                    "Yes, I'm ready"
                }
                button {
                    class: "btn btn-secondary not-yet-btn",
                    r#type: "button",
                    onclick: move |_| controller.show_notice(NOT_YET_NOTICE),
                    "Not yet"
                }
            }
        }
        ContinueButton { controller, label: "Continue" }
    }
}
