use journey_core::model::{
    ConversationTopic, FinalDecision, GrowthValue, MemoryId, PageId, Reaction,
};
use journey_core::time::fixed_now;
use journey_core::{PageInteraction, PageSession, ProgressionGate};
use services::{
    AdvanceOutcome, AppServices, Clock, CompletionOutcome, PageEntry, ResetConfirmation,
    ResetOutcome,
};
use storage::repository::Storage;

fn services(storage: &Storage) -> AppServices {
    AppServices::from_storage(storage, Clock::fixed(fixed_now()), ProgressionGate::canonical())
}

async fn walk_page(app: &AppServices, page: PageId, events: &[PageInteraction]) -> PageId {
    let progression = app.progression();
    let journal = app.journal();
    let entry = progression.enter_page(page).await.unwrap();
    assert!(matches!(entry, PageEntry::Granted { .. }), "{page} should be open");
    journal.record_page_load(page).await.unwrap();

    let mut session = PageSession::new(page);
    for event in events {
        session.record(event);
        journal.record_interaction(event).await.unwrap();
    }
    match progression.advance(&session).await.unwrap() {
        AdvanceOutcome::Advanced { to, .. } => to,
        AdvanceOutcome::Rejected(rejection) => panic!("{page} rejected: {}", rejection.notice),
    }
}

#[tokio::test]
async fn visitor_walks_all_pages_and_connects() {
    let storage = Storage::in_memory();
    let app = services(&storage);

    let next = walk_page(&app, PageId::Index, &[PageInteraction::CuriousChosen]).await;
    assert_eq!(next, PageId::Journey);
    let next = walk_page(&app, next, &[PageInteraction::RevealOpened]).await;
    assert_eq!(next, PageId::Memories);
    let next = walk_page(
        &app,
        next,
        &[
            PageInteraction::ReactionSelected(Reaction::Intrigued),
            PageInteraction::MemoryFlipped(MemoryId::new("memory-1")),
        ],
    )
    .await;
    assert_eq!(next, PageId::Future);
    let next = walk_page(
        &app,
        next,
        &[
            PageInteraction::GrowthSelected(GrowthValue::Connection),
            PageInteraction::TopicSelected(Some(ConversationTopic::Philosophy)),
        ],
    )
    .await;
    assert_eq!(next, PageId::Connect);

    let progression = app.progression();
    assert!(matches!(
        progression.enter_page(PageId::Connect).await.unwrap(),
        PageEntry::Granted { .. }
    ));
    let mut session = PageSession::new(PageId::Connect);
    session.record(&PageInteraction::FinalChoice(FinalDecision::Connect));
    let CompletionOutcome::Closed { state, .. } =
        progression.complete_experience(&session).await.unwrap()
    else {
        panic!("final choice made");
    };
    assert!(state.is_complete());
    assert_eq!(
        state.completed_pages(),
        &[PageId::Index, PageId::Journey, PageId::Memories, PageId::Future]
    );

    let journal = app.journal().load().await.unwrap();
    assert_eq!(journal.visits(), 4);
    assert_eq!(journal.choices().growth_value, Some(GrowthValue::Connection));
}

#[tokio::test]
async fn deferred_final_choice_does_not_complete() {
    let storage = Storage::in_memory();
    let app = services(&storage);
    let progression = app.progression();
    for next in [PageId::Journey, PageId::Memories, PageId::Future, PageId::Connect] {
        progression.unlock_next_page(next).await.unwrap();
    }

    let mut session = PageSession::new(PageId::Connect);
    session.record(&PageInteraction::FinalChoice(FinalDecision::MaybeLater));
    let outcome = progression.complete_experience(&session).await.unwrap();
    let CompletionOutcome::Closed { decision, state } = outcome else {
        panic!("final choice made");
    };
    assert_eq!(decision, FinalDecision::MaybeLater);
    assert!(!state.is_complete());
    assert!(!progression.load().await.unwrap().is_complete());
}

#[tokio::test]
async fn future_fast_path_skips_both_selections() {
    let storage = Storage::in_memory();
    let app = services(&storage);
    let progression = app.progression();
    for next in [PageId::Journey, PageId::Memories, PageId::Future] {
        progression.unlock_next_page(next).await.unwrap();
    }
    let next = walk_page(&app, PageId::Future, &[PageInteraction::ReadyNow]).await;
    assert_eq!(next, PageId::Connect);
}

#[tokio::test]
async fn fresh_visitor_is_sent_back_to_index() {
    let storage = Storage::in_memory();
    let app = services(&storage);
    let entry = app.progression().enter_page(PageId::Memories).await.unwrap();
    assert_eq!(entry, PageEntry::Redirect { to: PageId::Index });
}

#[tokio::test]
async fn confirmed_reset_returns_to_default_state() {
    let storage = Storage::in_memory();
    let app = services(&storage);
    let progression = app.progression();
    walk_page(&app, PageId::Index, &[PageInteraction::CuriousChosen]).await;
    walk_page(&app, PageId::Journey, &[PageInteraction::RevealOpened]).await;

    let outcome = progression.reset(ResetConfirmation::Confirmed).await.unwrap();
    assert_eq!(outcome, ResetOutcome::Cleared);

    // A reload reads the store fresh.
    let reloaded = services(&storage);
    let state = reloaded.progression().load().await.unwrap();
    assert_eq!(state.completed_pages(), &[PageId::Index]);
    assert_eq!(state.current_page(), PageId::Index);
    assert!(!state.is_complete());
    assert_eq!(reloaded.journal().load().await.unwrap().visits(), 0);
}

#[tokio::test]
async fn state_survives_a_reload() {
    let storage = Storage::in_memory();
    let app = services(&storage);
    walk_page(&app, PageId::Index, &[PageInteraction::CuriousChosen]).await;

    let reloaded = services(&storage);
    let entry = reloaded.progression().enter_page(PageId::Journey).await.unwrap();
    let PageEntry::Granted { state } = entry else {
        panic!("journey unlocked before reload");
    };
    assert_eq!(state.completed_pages(), &[PageId::Index]);
}
