//! Tests for SQLite database connection and migrations.

use crate::db::SqliteDatabase;

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_todos_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations is created by sqlx for migration tracking;
    // sqlite_sequence appears because todos uses AUTOINCREMENT.
    for table in ["_sqlx_migrations", "todos"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file() {
    let dir = std::env::temp_dir().join("todos-connection-test");
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join("todos.db");
    let _ = std::fs::remove_file(&path);

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Failed to open database");
    db.migrate().await.expect("Migration should succeed");

    assert!(path.exists());

    drop(db);
    let _ = std::fs::remove_file(&path);
}
