#![allow(dead_code)]

use alias_shortener::application::services::UrlService;
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use alias_shortener::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const ALIAS_LENGTH: usize = 6;

pub async fn memory_repository() -> SqliteUrlRepository {
    SqliteUrlRepository::in_memory().await.unwrap()
}

/// Opens a file-backed repository inside `dir`, allowing real concurrent connections.
pub async fn file_repository(dir: &TempDir, max_connections: u32) -> SqliteUrlRepository {
    let url = format!("sqlite://{}", dir.path().join("storage.db").display());

    SqliteUrlRepository::connect(&url, max_connections, Duration::from_secs(30))
        .await
        .unwrap()
}

pub async fn insert_mapping(repo: &SqliteUrlRepository, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(repo.pool())
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_alias(repo: &SqliteUrlRepository, alias: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url WHERE alias = ?")
        .bind(alias)
        .fetch_one(repo.pool())
        .await
        .unwrap()
}

pub async fn create_test_state() -> (AppState, SqliteUrlRepository) {
    let repo = memory_repository().await;
    let url_service = Arc::new(UrlService::new(Arc::new(repo.clone()), ALIAS_LENGTH));

    (AppState::new(url_service), repo)
}
