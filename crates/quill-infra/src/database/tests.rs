use chrono::{Duration, Utc};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, RuntimeErr,
};

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use crate::database::SeaOrmPostRepository;
use crate::database::entity::post;
use crate::database::post_repo::map_db_err;

fn model(id: i32, title: &str) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "Test Post")]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let post = repo.find_by_id(1).await.unwrap();

    assert_eq!(post.id, Some(1));
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.updated_at, None);
}

#[tokio::test]
async fn test_find_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    assert!(matches!(
        repo.find_by_id(5).await,
        Err(RepoError::NotFound(5))
    ));
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "first"), model(2, "second")]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let posts = repo.find_all().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].id, Some(2));
    assert_eq!(posts[1].title, "second");
}

#[tokio::test]
async fn test_save_new_post_inserts_and_returns_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(7, "Fresh")]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let saved = repo.save(Post::new("Fresh")).await.unwrap();

    assert_eq!(saved.id, Some(7));
    assert_eq!(saved.title, "Fresh");
}

#[tokio::test]
async fn test_save_saved_post_updates_title_and_keeps_created_at() {
    let created_at = Utc::now() - Duration::days(2);
    let updated_at = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post::Model {
            id: 2,
            title: "Edited".to_owned(),
            created_at: created_at.into(),
            updated_at: Some(updated_at.into()),
        }]])
        .into_connection();

    // `DatabaseConnection` is not `Clone` with the `mock` feature; share the mock handle.
    let shared = match &db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(conn.clone())
        }
        _ => unreachable!("expected a mock connection"),
    };
    let repo = SeaOrmPostRepository::new(shared);
    let mut post = Post {
        id: Some(2),
        title: "Draft".to_owned(),
        created_at,
        updated_at: None,
    };
    post.retitle("Edited");

    let saved = repo.save(post).await.unwrap();
    assert_eq!(saved.id, Some(2));
    assert_eq!(saved.title, "Edited");
    assert_eq!(saved.created_at, created_at);
    assert_eq!(saved.updated_at, Some(updated_at));

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let statements = log[0].statements();
    assert_eq!(statements.len(), 1);

    let sql = &statements[0].sql;
    assert!(sql.starts_with(r#"UPDATE "posts" SET"#), "unexpected SQL: {sql}");
    let set_clause = sql.split(" WHERE ").next().unwrap();
    assert!(set_clause.contains(r#""title""#));
    assert!(set_clause.contains(r#""updated_at""#));
    assert!(!set_clause.contains(r#""created_at""#));
}

#[tokio::test]
async fn test_save_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let mut post = Post::new("Gone");
    post.id = Some(3);
    post.retitle("Still gone");

    assert!(matches!(repo.save(post).await, Err(RepoError::NotFound(3))));
}

#[tokio::test]
async fn test_delete_reports_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let mut post = Post::new("Doomed");
    post.id = Some(4);

    repo.delete(&post).await.unwrap();
    assert!(matches!(
        repo.delete(&post).await,
        Err(RepoError::NotFound(4))
    ));
}

#[tokio::test]
async fn test_delete_unsaved_post_skips_database() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = SeaOrmPostRepository::new(db);

    assert!(matches!(
        repo.delete(&Post::new("draft")).await,
        Err(RepoError::Unsaved)
    ));
}

#[tokio::test]
async fn test_query_failure_surfaces_as_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Query(RuntimeErr::Internal("boom".to_owned()))])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    assert!(matches!(repo.find_all().await, Err(RepoError::Query(_))));
}

#[test]
fn test_connection_errors_map_to_connection() {
    let err = DbErr::Conn(RuntimeErr::Internal("connection refused".to_owned()));
    assert!(matches!(map_db_err(err), RepoError::Connection(_)));
}

#[test]
fn test_error_text_alone_is_not_a_constraint_violation() {
    let err = DbErr::Custom("duplicate key value violates unique constraint".to_owned());
    assert!(matches!(map_db_err(err), RepoError::Query(_)));
}
