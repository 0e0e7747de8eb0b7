//! Database schema integration tests

use craneshell::backend::auth::users::{create_user, delete_user};
use craneshell::backend::configs::db::{create_config, get_config};
use craneshell::backend::database::{connect, run_migrations};
use craneshell::shared::ConfigPayload;
use tempfile::TempDir;

use crate::common::TestDatabase;

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = TestDatabase::new().await;
    assert_ok!(run_migrations(db.pool()).await);
    assert_eq!(db.count("users").await, 0);
    assert_eq!(db.count("configs").await, 0);
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("reopen.db").display());

    {
        let pool = connect(&url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        create_user(&pool, "alice", "alice@x.com", "hash").await.unwrap();
        pool.close().await;
    }

    let pool = connect(&url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_foreign_keys_enforced() {
    let db = TestDatabase::new().await;

    // No user 42
    let result = create_config(db.pool(), 42, &ConfigPayload::named("Orphan")).await;
    assert!(result.is_err());

    let user = create_user(db.pool(), "alice", "alice@x.com", "hash").await.unwrap();
    let config = create_config(db.pool(), user.id, &ConfigPayload::named("Mine"))
        .await
        .unwrap();

    delete_user(db.pool(), user.id).await.unwrap();
    assert!(get_config(db.pool(), config.id).await.unwrap().is_none());
}
