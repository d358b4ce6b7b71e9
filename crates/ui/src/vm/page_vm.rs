use journey_core::model::{PageId, VisitorJournal};
use journey_core::{PageInteraction, PageSession};

/// Earlier choices for `page`, replayed as the events that produced them.
#[must_use]
pub fn restore_events(page: PageId, journal: &VisitorJournal) -> Vec<PageInteraction> {
    let choices = journal.choices();
    match page {
        PageId::Index => Vec::new(),
        PageId::Journey => {
            if choices.revealed_more {
                vec![PageInteraction::RevealOpened]
            } else {
                Vec::new()
            }
        }
        PageId::Memories => choices
            .viewed_memories
            .iter()
            .cloned()
            .map(PageInteraction::MemoryFlipped)
            .chain(journal.last_reaction().map(PageInteraction::ReactionSelected))
            .collect(),
        PageId::Future => {
            let mut events = Vec::new();
            if let Some(topic) = choices.conversation_topic {
                events.push(PageInteraction::TopicSelected(Some(topic)));
            }
            if let Some(value) = choices.growth_value {
                events.push(PageInteraction::GrowthSelected(value));
            }
            events
        }
        PageId::Connect => choices
            .final_decision
            .map(PageInteraction::FinalChoice)
            .into_iter()
            .collect(),
    }
}

/// A fresh session for `page` with the visitor's earlier choices applied.
#[must_use]
pub fn restored_session(page: PageId, journal: &VisitorJournal) -> PageSession {
    let mut session = PageSession::new(page);
    for event in restore_events(page, journal) {
        session.record(&event);
    }
    session
}
