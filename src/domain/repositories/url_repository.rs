//! Store capabilities for alias → URL mappings.
//!
//! Each capability is its own trait so callers can depend on exactly what they
//! use: saving, reading, or deleting. [`UrlRepository`] bundles all three.

use crate::domain::error::StoreError;
use async_trait::async_trait;

/// Persists new mappings.
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a mapping from `alias` to `target` and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasConflict`] if `alias` is already mapped. When
    /// several calls race on the same alias, exactly one succeeds.
    /// Returns [`StoreError::BackingStoreFailure`] on any other storage error.
    async fn save_url(&self, target: &str, alias: &str) -> Result<i64, StoreError>;
}

/// Resolves aliases.
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the target URL stored for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping exists for `alias`.
    /// Returns [`StoreError::BackingStoreFailure`] on storage errors.
    async fn get_url(&self, alias: &str) -> Result<String, StoreError>;
}

/// Removes mappings.
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Permanently removes the mapping for `alias`.
    ///
    /// Deletion is not idempotent: removing an alias that does not exist is
    /// reported, not ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping exists for `alias`.
    /// Returns [`StoreError::BackingStoreFailure`] on storage errors.
    async fn delete_url(&self, alias: &str) -> Result<(), StoreError>;
}

/// Full read/write access to the URL store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - `MockUrlRepository` with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
pub trait UrlRepository: UrlSaver + UrlGetter + UrlDeleter {}

impl<T> UrlRepository for T where T: UrlSaver + UrlGetter + UrlDeleter {}

#[cfg(test)]
mockall::mock! {
    pub UrlRepository {}

    #[async_trait]
    impl UrlSaver for UrlRepository {
        async fn save_url(&self, target: &str, alias: &str) -> Result<i64, StoreError>;
    }

    #[async_trait]
    impl UrlGetter for UrlRepository {
        async fn get_url(&self, alias: &str) -> Result<String, StoreError>;
    }

    #[async_trait]
    impl UrlDeleter for UrlRepository {
        async fn delete_url(&self, alias: &str) -> Result<(), StoreError>;
    }
}
