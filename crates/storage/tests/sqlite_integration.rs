use journey_core::model::{PageId, ProgressionState, Reaction, VisitorJournal};
use journey_core::time::fixed_now;
use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;
use storage::{PROGRESSION_KEY, StoredRecord};

#[tokio::test]
async fn sqlite_kv_roundtrip_and_remove() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.migrate().await.expect("migrate is idempotent");

    assert_eq!(repo.get("missing").await.unwrap(), None);

    repo.put("greeting", "hello").await.unwrap();
    repo.put("greeting", "hello again").await.unwrap();
    assert_eq!(
        repo.get("greeting").await.unwrap().as_deref(),
        Some("hello again")
    );

    repo.remove("greeting").await.unwrap();
    assert_eq!(repo.get("greeting").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_storage_persists_both_records() {
    let storage = Storage::sqlite("sqlite:file:memdb_records?mode=memory&cache=shared")
        .await
        .expect("open storage");

    let mut state = ProgressionState::fresh(PageId::Index, fixed_now());
    state.push_completed(PageId::Journey);
    state.set_current_page(PageId::Memories, fixed_now());
    storage.progression().save(&state).await.unwrap();

    let mut journal = VisitorJournal::new();
    journal.record_page_load(PageId::Memories, fixed_now());
    journal.record_reaction(Reaction::Intrigued);
    storage.journal().save(&journal).await.unwrap();

    assert_eq!(
        storage.progression().load().await.unwrap(),
        StoredRecord::Present(state)
    );
    assert_eq!(
        storage.journal().load().await.unwrap(),
        StoredRecord::Present(journal)
    );
}

#[tokio::test]
async fn sqlite_storage_reports_malformed_progression() {
    let storage = Storage::sqlite("sqlite:file:memdb_malformed?mode=memory&cache=shared")
        .await
        .expect("open storage");
    storage
        .kv
        .put(PROGRESSION_KEY, r#"{"completedPages":"nope"}"#)
        .await
        .unwrap();

    let loaded = storage.progression().load().await.unwrap();
    assert!(matches!(loaded, StoredRecord::Malformed(_)), "{loaded:?}");
}
