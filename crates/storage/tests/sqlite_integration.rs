use focal_core::{CardType, FilterSelection, ScoreBoard, catalog};
use storage::repository::{FilterRepository, ScoreRepository, StorageError};
use storage::sqlite::{SqliteRepository, keys};

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrips_scores() {
    let repo = connect("memdb_scores").await;

    assert!(repo.load_scores().await.expect("load").is_none());

    let board = ScoreBoard::new()
        .record(true)
        .record(true)
        .record(false)
        .record(true);
    repo.save_scores(&board).await.expect("save");

    let loaded = repo.load_scores().await.expect("load").expect("present");
    assert_eq!(loaded, board);

    // A second save overwrites rather than duplicating.
    let board = loaded.record(false);
    repo.save_scores(&board).await.expect("save again");
    let loaded = repo.load_scores().await.expect("load").expect("present");
    assert_eq!(loaded.total_attempts(), 5);
}

#[tokio::test]
async fn sqlite_roundtrips_filter_selection() {
    let repo = connect("memdb_filter").await;

    assert!(repo.load_filter().await.expect("load").is_none());

    let mut selection = FilterSelection::all(catalog());
    selection.toggle_category("Months");
    selection.toggle_type(CardType::Sentence);
    repo.save_filter(&selection).await.expect("save");

    let loaded = repo.load_filter().await.expect("load").expect("present");
    assert_eq!(loaded, selection);
}

#[tokio::test]
async fn sqlite_surfaces_malformed_values_as_serialization_errors() {
    let repo = connect("memdb_malformed").await;

    sqlx::query("INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)")
        .bind(keys::SCORES)
        .bind("not json")
        .bind("2024-03-17T12:00:00Z")
        .execute(repo.pool())
        .await
        .expect("insert garbage");

    let err = repo.load_scores().await.expect_err("should fail to decode");
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn sqlite_rejects_invariant_violating_scores() {
    let repo = connect("memdb_invariant").await;

    sqlx::query("INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)")
        .bind(keys::SCORES)
        .bind(r#"{"currentStreak":7,"bestStreak":1,"totalCorrect":1,"totalAttempts":1}"#)
        .bind("2024-03-17T12:00:00Z")
        .execute(repo.pool())
        .await
        .expect("insert row");

    let err = repo.load_scores().await.expect_err("invariants should reject");
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");

    let board = ScoreBoard::new().record(true);
    repo.save_scores(&board).await.expect("save");
    repo.migrate().await.expect("third migrate");

    // Data survives re-running migrations.
    let loaded = repo.load_scores().await.expect("load").expect("present");
    assert_eq!(loaded, board);
}
