use chrono::Duration;
use journey_core::model::{
    ConversationTopic, FinalDecision, GrowthValue, MemoryId, PageId, ProgressionState, Reaction,
    VisitorJournal,
};
use journey_core::PageInteraction;
use journey_core::interaction::LOCKED_PAGE_NOTICE;
use journey_core::time::fixed_now;
use services::ResetConfirmation;
use storage::StoredRecord;

use super::test_harness::{
    ViewHarness, ViewKind, seeded_storage, setup_framed_view_harness, setup_view_harness,
};

async fn stored_state(harness: &ViewHarness) -> ProgressionState {
    match harness.storage.progression().load().await.unwrap() {
        StoredRecord::Present(state) => state,
        other => panic!("expected a stored progression, got {other:?}"),
    }
}

fn state_on(current: PageId, completed: &[PageId]) -> ProgressionState {
    let mut state = ProgressionState::fresh(PageId::Index, fixed_now());
    for page in completed {
        state.push_completed(*page);
    }
    state.set_current_page(current, fixed_now());
    state
}

#[tokio::test(flavor = "current_thread")]
async fn index_renders_for_a_first_visit() {
    let mut harness = setup_view_harness(ViewKind::Index, seeded_storage(None, None).await);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("I'm curious..."), "missing hero buttons in {html}");
    assert!(html.contains("I'm skeptical"), "missing hero buttons in {html}");
    assert!(!html.contains("Welcome back!"), "unexpected greeting in {html}");
    assert!(
        html.contains("progress-step completed active"),
        "missing indicator in {html}"
    );
    assert!(html.contains("chapter-link locked"), "chapters should be locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn index_load_persists_a_fresh_state() {
    let mut harness = setup_view_harness(ViewKind::Index, seeded_storage(None, None).await);
    harness.settle().await;

    let stored = harness.storage.progression().load().await.unwrap();
    let StoredRecord::Present(state) = stored else {
        panic!("expected a stored progression, got {stored:?}");
    };
    assert_eq!(state.current_page(), PageId::Index);
    assert_eq!(state.completed_pages(), &[PageId::Index]);
}

#[tokio::test(flavor = "current_thread")]
async fn index_greets_a_returning_visitor() {
    let mut journal = VisitorJournal::new();
    journal.record_page_load(PageId::Index, fixed_now() - Duration::days(2));
    let storage = seeded_storage(None, Some(&journal)).await;
    let mut harness = setup_view_harness(ViewKind::Index, storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Welcome back!"), "missing greeting in {html}");
    assert!(
        html.contains("It's been 2 days since your last visit."),
        "missing time away in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn index_links_completed_chapters() {
    let state = state_on(PageId::Memories, &[PageId::Index, PageId::Journey]);
    let storage = seeded_storage(Some(&state), None).await;
    let mut harness = setup_view_harness(ViewKind::Index, storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("href=\"/journey\""), "journey should be linked in {html}");
    assert!(!html.contains("href=\"/future\""), "future should stay locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn memories_renders_when_unlocked() {
    let state = state_on(PageId::Memories, &[PageId::Index, PageId::Journey]);
    let storage = seeded_storage(Some(&state), None).await;
    let mut harness = setup_view_harness(ViewKind::Memories, storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("id=\"memory-1\""), "missing memory cards in {html}");
    assert!(html.contains("How does this make you feel?"), "missing reactions in {html}");
    assert!(html.contains("continue-btn disabled"), "continue should look locked in {html}");
    assert!(html.contains("progress-step completed"), "missing indicator in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn memories_restores_earlier_choices() {
    let state = state_on(PageId::Memories, &[PageId::Index, PageId::Journey]);
    let mut journal = VisitorJournal::new();
    journal.record_memory_viewed(MemoryId::new("memory-2"));
    journal.record_reaction(Reaction::Intrigued);
    let storage = seeded_storage(Some(&state), Some(&journal)).await;
    let mut harness = setup_view_harness(ViewKind::Memories, storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("memory-card flipped"), "missing flipped card in {html}");
    assert!(html.contains("reaction-btn selected"), "missing selected reaction in {html}");
    assert!(
        !html.contains("continue-btn disabled"),
        "restored choices should unlock continue in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn locked_page_shows_the_redirect_notice() {
    let mut harness = setup_view_harness(ViewKind::Memories, seeded_storage(None, None).await);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("still locked"), "missing redirect notice in {html}");
    assert!(!html.contains("memory-card"), "locked content rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn future_restores_topic_and_growth() {
    let state = state_on(
        PageId::Future,
        &[PageId::Index, PageId::Journey, PageId::Memories],
    );
    let mut journal = VisitorJournal::new();
    journal.record_topic(ConversationTopic::Travel);
    journal.record_growth(GrowthValue::Learning);
    let storage = seeded_storage(Some(&state), Some(&journal)).await;
    let mut harness = setup_view_harness(ViewKind::Future, storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("cherry blossoms"), "missing topic response in {html}");
    assert!(html.contains("growth-btn selected"), "missing growth selection in {html}");
    assert!(html.contains("Yes, I'm ready"), "missing fast path in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn connect_shows_the_closing_message_for_a_saved_choice() {
    let state = state_on(
        PageId::Connect,
        &[PageId::Index, PageId::Journey, PageId::Memories, PageId::Future],
    );
    let mut journal = VisitorJournal::new();
    journal.record_final_decision(FinalDecision::Connect);
    let storage = seeded_storage(Some(&state), Some(&journal)).await;
    let mut harness = setup_view_harness(ViewKind::Connect, storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("final-message active"), "missing closing message in {html}");
    assert!(html.contains("Tap to show"), "contact details should start hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn locked_chapter_shows_the_locked_notice() {
    let mut harness = setup_view_harness(ViewKind::Index, seeded_storage(None, None).await);
    harness.settle().await;
    assert!(!harness.render().contains(LOCKED_PAGE_NOTICE));

    let actions = harness.index_handles.actions();
    harness
        .fire(|| actions.open_chapter.call(PageId::Memories))
        .await;
    let html = harness.render();

    assert!(html.contains(LOCKED_PAGE_NOTICE), "missing locked notice in {html}");
    assert!(!html.contains("navigated to"), "locked chapter navigated in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_chapter_navigates() {
    let state = state_on(PageId::Memories, &[PageId::Index, PageId::Journey]);
    let storage = seeded_storage(Some(&state), None).await;
    let mut harness = setup_view_harness(ViewKind::Index, storage);
    harness.settle().await;

    let actions = harness.index_handles.actions();
    harness
        .fire(|| actions.open_chapter.call(PageId::Journey))
        .await;
    let html = harness.render();

    assert!(html.contains("navigated to /journey"), "expected navigation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn declining_the_reset_keeps_progress() {
    let state = state_on(PageId::Memories, &[PageId::Index, PageId::Journey]);
    let storage = seeded_storage(Some(&state), None).await;
    let mut harness = setup_view_harness(ViewKind::Index, storage);
    harness.settle().await;

    let actions = harness.index_handles.actions();
    harness.fire(|| actions.open_reset.call(())).await;
    assert!(
        harness.render().contains("Start the journey over?"),
        "confirmation should be open"
    );

    harness
        .fire(|| actions.answer_reset.call(ResetConfirmation::Declined))
        .await;
    let html = harness.render();

    assert!(!html.contains("Start the journey over?"), "modal still open in {html}");
    assert!(html.contains("href=\"/journey\""), "progress lost in {html}");
    let stored = stored_state(&harness).await;
    assert_eq!(stored.completed_pages(), &[PageId::Index, PageId::Journey]);
    assert_eq!(stored.current_page(), PageId::Memories);
}

#[tokio::test(flavor = "current_thread")]
async fn confirming_the_reset_reloads_the_default_state() {
    let state = state_on(PageId::Memories, &[PageId::Index, PageId::Journey]);
    let mut journal = VisitorJournal::new();
    journal.record_page_load(PageId::Index, fixed_now() - Duration::days(2));
    journal.record_reaction(Reaction::Intrigued);
    let storage = seeded_storage(Some(&state), Some(&journal)).await;
    let mut harness = setup_view_harness(ViewKind::Index, storage);
    harness.settle().await;
    assert!(harness.render().contains("Welcome back!"));

    let actions = harness.index_handles.actions();
    harness.fire(|| actions.open_reset.call(())).await;
    harness
        .fire(|| actions.answer_reset.call(ResetConfirmation::Confirmed))
        .await;
    let html = harness.render();

    assert!(!html.contains("Start the journey over?"), "modal still open in {html}");
    assert!(!html.contains("Welcome back!"), "journal survived the reset in {html}");
    assert!(!html.contains("href=\"/journey\""), "chapters should lock again in {html}");

    let stored = stored_state(&harness).await;
    assert_eq!(stored.completed_pages(), &[PageId::Index]);
    assert_eq!(stored.current_page(), PageId::Index);
    let StoredRecord::Present(journal) = harness.storage.journal().load().await.unwrap() else {
        panic!("the reload should store a new journal");
    };
    assert_eq!(journal.visits(), 1);
    assert!(journal.reactions().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn journey_continue_needs_the_reveal_first() {
    let state = state_on(PageId::Journey, &[PageId::Index]);
    let storage = seeded_storage(Some(&state), None).await;
    let mut harness = setup_view_harness(ViewKind::Journey, storage);
    harness.settle().await;
    assert!(harness.render().contains("continue-btn disabled"));

    let controller = harness.page_handles.controller();
    harness.fire(|| controller.advance.call(())).await;
    let html = harness.render();
    assert!(
        html.contains("Oops, you skipped something important!"),
        "missing guard notice in {html}"
    );
    assert!(!html.contains("navigated to"), "advanced while locked in {html}");
    assert_eq!(stored_state(&harness).await.completed_pages(), &[PageId::Index]);

    harness
        .fire(|| controller.dispatch.call(PageInteraction::RevealOpened))
        .await;
    let html = harness.render();
    assert!(!html.contains("continue-btn disabled"), "reveal should unlock in {html}");
    assert!(!html.contains("Oops, you skipped"), "notice should clear in {html}");

    harness.fire(|| controller.advance.call(())).await;
    let html = harness.render();
    assert!(html.contains("navigated to /memories"), "expected navigation in {html}");

    let stored = stored_state(&harness).await;
    assert_eq!(stored.completed_pages(), &[PageId::Index, PageId::Journey]);
    assert_eq!(stored.current_page(), PageId::Memories);
}

#[tokio::test(flavor = "current_thread")]
async fn nav_marks_only_the_loaded_page_on_a_first_visit() {
    let mut harness =
        setup_framed_view_harness(ViewKind::Index, seeded_storage(None, None).await);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("site-nav"), "missing nav in {html}");
    assert_eq!(html.matches("nav-link visited").count(), 1, "in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn nav_marks_pages_from_earlier_visits() {
    let state = state_on(PageId::Memories, &[PageId::Index, PageId::Journey]);
    let mut journal = VisitorJournal::new();
    journal.record_page_load(PageId::Index, fixed_now() - Duration::days(1));
    journal.record_page_load(PageId::Journey, fixed_now() - Duration::days(1));
    let storage = seeded_storage(Some(&state), Some(&journal)).await;
    let mut harness = setup_framed_view_harness(ViewKind::Memories, storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("id=\"memory-1\""), "missing page body in {html}");
    assert_eq!(html.matches("nav-link visited").count(), 3, "in {html}");
}
