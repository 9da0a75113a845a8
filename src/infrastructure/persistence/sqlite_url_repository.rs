//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::error::StoreError;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};

/// SQLite repository for alias → URL mappings.
///
/// Alias uniqueness is enforced by the `UNIQUE` constraint on `url.alias`, so
/// concurrent inserts of the same alias are serialized by SQLite itself and
/// exactly one of them wins. Constraint violations are translated into
/// [`StoreError::AliasConflict`] here and nowhere else.
#[derive(Debug, Clone)]
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a repository from an existing connection pool.
    ///
    /// The schema is not touched; call [`Self::init`] before first use.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url` and initializes the schema.
    ///
    /// The database file is created if missing and switched to WAL mode with a
    /// busy timeout, so concurrent writers wait for each other instead of
    /// failing with `SQLITE_BUSY`.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        const OP: &str = "storage.sqlite.connect";

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::backing(OP, "parse url", e))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::backing(OP, "open pool", e))?;

        let repository = Self::new(pool);
        repository.init().await?;

        Ok(repository)
    }

    /// Creates an initialized repository backed by a private in-memory database.
    ///
    /// The pool's shared in-memory database is dropped once its last
    /// connection closes, so one connection is kept open and never recycled.
    pub async fn in_memory() -> Result<Self, StoreError> {
        const OP: &str = "storage.sqlite.in_memory";

        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StoreError::backing(OP, "parse url", e))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::backing(OP, "open pool", e))?;

        let repository = Self::new(pool);
        repository.init().await?;

        Ok(repository)
    }

    /// Ensures the `url` table and its alias index exist.
    ///
    /// Runs the embedded migrations; safe to call any number of times.
    pub async fn init(&self) -> Result<(), StoreError> {
        const OP: &str = "storage.sqlite.init";

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::backing(OP, "migrate", e))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save_url(&self, target: &str, alias: &str) -> Result<i64, StoreError> {
        const OP: &str = "storage.sqlite.save_url";

        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(target)
            .bind(alias)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::alias_conflict(OP, alias)),
            Err(e) => Err(StoreError::backing(OP, "insert", e)),
        }
    }
}

#[async_trait]
impl UrlGetter for SqliteUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StoreError> {
        const OP: &str = "storage.sqlite.get_url";

        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::backing(OP, "select", e))?
            .ok_or_else(|| StoreError::not_found(OP, alias))
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StoreError> {
        const OP: &str = "storage.sqlite.delete_url";

        let done = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::backing(OP, "delete", e))?;

        if done.rows_affected() == 0 {
            return Err(StoreError::not_found(OP, alias));
        }

        Ok(())
    }
}
