use dioxus::prelude::*;
use journey_core::PageInteraction;
use journey_core::model::{MemoryId, PageId, Reaction};

use crate::views::shell::{
    ContinueButton, PageController, choice_class, render_gated, use_page_controller,
};
use crate::vm::copy::{MEMORY_CARDS, MemoryCard, reaction_response};

#[component]
pub fn MemoriesView() -> Element {
    let controller = use_page_controller(PageId::Memories);
    render_gated(controller, move |data| {
        let flipped = data
            .journal
            .choices()
            .viewed_memories
            .iter()
            .map(|id| id.as_str().to_string())
            .collect::<Vec<_>>();
        let reaction = data.journal.last_reaction();
        rsx! {
            MemoriesBody { controller, flipped, reaction }
        }
    })
}

#[component]
fn MemoriesBody(
    controller: PageController,
    flipped: Vec<String>,
    reaction: Option<Reaction>,
) -> Element {
    let flipped = use_signal(move || flipped);
    let mut selected = use_signal(move || reaction);

    rsx! {
        section { class: "memories",
            h2 { "Memories" }
            p { class: "view-hint", "Tap a card to turn it over." }
            div { class: "memory-grid",
                for card in MEMORY_CARDS {
                    MemoryCardView { key: "{card.id}", controller, card, flipped }
                }
            }
        }
        section { class: "reactions",
            h3 { "How does this make you feel?" }
            div { class: "reaction-buttons",
                for option in Reaction::ALL.iter().copied() {
                    button {
                        key: "{option}",
                        class: choice_class("btn reaction-btn", selected() == Some(option)),
                        r#type: "button",
                        onclick: move |_| {
                            selected.set(Some(option));
                            controller.dispatch.call(PageInteraction::ReactionSelected(option));
                        },
                        "{option.label()}"
                    }
                }
            }
            if let Some(current) = selected() {
                p { class: "reaction-response active", "{reaction_response(current)}" }
            }
        }
        ContinueButton { controller, label: "Continue" }
    }
}

#[component]
fn MemoryCardView(
    controller: PageController,
    card: MemoryCard,
    mut flipped: Signal<Vec<String>>,
) -> Element {
    let is_flipped = flipped.read().iter().any(|id| id == card.id);
    let class = if is_flipped {
        "memory-card flipped"
    } else {
        "memory-card"
    };
    rsx! {
        div {
            class: "{class}",
            id: "{card.id}",
            onclick: move |_| {
                let mut ids = flipped.write();
                if let Some(pos) = ids.iter().position(|id| id == card.id) {
                    ids.remove(pos);
                } else {
                    ids.push(card.id.to_string());
                }
                drop(ids);
                controller.dispatch.call(PageInteraction::MemoryFlipped(MemoryId::new(card.id)));
            },
            div { class: "memory-front", "{card.front}" }
            div { class: "memory-back", "{card.back}" }
        }
    }
}
