//! Tests for the SQLite TodoStore implementation.

use crate::db::{DbError, NewTodo, PageQuery, SortOrder, SqliteDatabase, TodoStore};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn make_todo(title: &str) -> NewTodo {
    NewTodo {
        title: Some(title.to_string()),
        completed: false,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_id_and_timestamp() {
    let db = setup_db().await;

    let before = chrono::Utc::now();
    let created = db
        .create(make_todo("Buy milk"))
        .await
        .expect("Create should succeed");

    assert!(created.id > 0);
    assert_eq!(created.title.as_deref(), Some("Buy milk"));
    assert!(!created.completed);
    assert!(created.created_at >= before);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_distinct_ids() {
    let db = setup_db().await;

    let first = db.create(make_todo("one")).await.expect("Create should succeed");
    let second = db.create(make_todo("two")).await.expect("Create should succeed");

    assert_ne!(first.id, second.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_allows_null_title() {
    let db = setup_db().await;

    let created = db
        .create(NewTodo {
            title: None,
            completed: true,
        })
        .await
        .expect("Create should succeed");

    assert!(created.title.is_none());
    assert!(created.completed);

    let fetched = db.get(created.id).await.expect("Get should succeed");
    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_round_trips_created_record() {
    let db = setup_db().await;

    let created = db.create(make_todo("Walk the dog")).await.expect("Create should succeed");
    let fetched = db.get(created.id).await.expect("Get should succeed");

    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_id_is_not_found() {
    let db = setup_db().await;

    let err = db.get(999).await.expect_err("Get should fail");
    assert!(matches!(err, DbError::NotFound { id: 999 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_defaults_to_newest_first() {
    let db = setup_db().await;

    let first = db.create(make_todo("first")).await.expect("Create should succeed");
    let second = db.create(make_todo("second")).await.expect("Create should succeed");
    let third = db.create(make_todo("third")).await.expect("Create should succeed");

    let page = db
        .list(&PageQuery::default())
        .await
        .expect("List should succeed");

    assert_eq!(page.total_elements, 3);
    let ids: Vec<i64> = page.content.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_ascending_reverses_order() {
    let db = setup_db().await;

    let first = db.create(make_todo("first")).await.expect("Create should succeed");
    let second = db.create(make_todo("second")).await.expect("Create should succeed");

    let page = db
        .list(&PageQuery {
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        })
        .await
        .expect("List should succeed");

    let ids: Vec<i64> = page.content.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_paginates() {
    let db = setup_db().await;

    for i in 1..=5 {
        db.create(make_todo(&format!("todo {}", i)))
            .await
            .expect("Create should succeed");
    }

    let first_page = db
        .list(&PageQuery {
            page: Some(0),
            size: Some(2),
            ..Default::default()
        })
        .await
        .expect("List should succeed");

    assert_eq!(first_page.content.len(), 2);
    assert_eq!(first_page.total_elements, 5);
    assert_eq!(first_page.total_pages(), 3);

    let last_page = db
        .list(&PageQuery {
            page: Some(2),
            size: Some(2),
            ..Default::default()
        })
        .await
        .expect("List should succeed");

    assert_eq!(last_page.content.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_sorts_by_title() {
    let db = setup_db().await;

    for title in ["Zebra", "Apple", "Mango"] {
        db.create(make_todo(title)).await.expect("Create should succeed");
    }

    let page = db
        .list(&PageQuery {
            sort_by: Some("title".to_string()),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        })
        .await
        .expect("List should succeed");

    let titles: Vec<&str> = page
        .content
        .iter()
        .filter_map(|t| t.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["Apple", "Mango", "Zebra"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_mutable_fields_only() {
    let db = setup_db().await;

    let mut todo = db.create(make_todo("Buy milk")).await.expect("Create should succeed");
    todo.completed = true;

    db.update(&todo).await.expect("Update should succeed");

    let fetched = db.get(todo.id).await.expect("Get should succeed");
    assert!(fetched.completed);
    assert_eq!(fetched.title.as_deref(), Some("Buy milk"));
    assert_eq!(fetched.id, todo.id);
    assert_eq!(fetched.created_at, todo.created_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_id_is_not_found() {
    let db = setup_db().await;

    let mut todo = db.create(make_todo("ephemeral")).await.expect("Create should succeed");
    db.delete(todo.id).await.expect("Delete should succeed");

    todo.completed = true;
    let err = db.update(&todo).await.expect_err("Update should fail");
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_record() {
    let db = setup_db().await;

    let todo = db.create(make_todo("to be deleted")).await.expect("Create should succeed");
    db.delete(todo.id).await.expect("Delete should succeed");

    let err = db.get(todo.id).await.expect_err("Get should fail");
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_id_is_a_noop() {
    let db = setup_db().await;

    db.delete(12345).await.expect("Delete of missing id should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn deleted_id_is_never_reused() {
    let db = setup_db().await;

    let first = db.create(make_todo("first")).await.expect("Create should succeed");
    db.delete(first.id).await.expect("Delete should succeed");

    let second = db.create(make_todo("second")).await.expect("Create should succeed");
    assert!(second.id > first.id);
}
