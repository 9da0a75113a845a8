//! Short link creation, resolution and removal.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_alias};
use crate::utils::target_url::check_target_url;
use serde_json::json;

/// Attempts made with freshly generated aliases before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service for creating, resolving and deleting short links.
///
/// Validates input before it reaches the store and supplies a random alias
/// when the caller does not provide one.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    alias_length: usize,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `alias_length` is the length of generated aliases. Aliases are never
    /// empty, so a length of 0 is raised to 1.
    pub fn new(repository: Arc<dyn UrlRepository>, alias_length: usize) -> Self {
        Self {
            repository,
            alias_length: alias_length.max(1),
        }
    }

    /// Creates a short link for `target`.
    ///
    /// # Alias Selection
    ///
    /// - If `alias` is provided and non-empty, it is validated and used as-is;
    ///   a taken alias is reported as a conflict
    /// - Otherwise a random alias is generated; on collision a new one is drawn,
    ///   up to 10 times
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the custom alias is invalid.
    /// Returns [`AppError::Conflict`] if the custom alias is already taken.
    /// Returns [`AppError::Internal`] on storage errors or repeated collisions.
    pub async fn shorten(&self, target: &str, alias: Option<&str>) -> Result<UrlMapping, AppError> {
        check_target_url(target).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        match alias.filter(|a| !a.is_empty()) {
            Some(custom) => {
                validate_alias(custom)?;

                let id = self.repository.save_url(target, custom).await?;
                Ok(UrlMapping::new(id, custom, target))
            }
            None => self.save_with_generated_alias(target).await,
        }
    }

    /// Returns the target URL for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::bad_request("Alias is empty", json!({})));
        }

        Ok(self.repository.get_url(alias).await?)
    }

    /// Deletes the short link for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown (including a
    /// second delete of the same alias).
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn remove(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            return Err(AppError::bad_request("Alias is empty", json!({})));
        }

        Ok(self.repository.delete_url(alias).await?)
    }

    async fn save_with_generated_alias(&self, target: &str) -> Result<UrlMapping, AppError> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let alias = generate_alias(self.alias_length);

            match self.repository.save_url(target, &alias).await {
                Ok(id) => return Ok(UrlMapping::new(id, alias, target)),
                Err(e) if e.is_alias_conflict() => {
                    tracing::debug!(alias = %alias, "Generated alias collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StoreError;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::alias_generator::ALIAS_ALPHABET;

    fn service(mock: MockUrlRepository) -> UrlService {
        UrlService::new(Arc::new(mock), 6)
    }

    #[tokio::test]
    async fn test_shorten_with_custom_alias() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url()
            .withf(|target, alias| target == "https://example.com/b" && alias == "custom")
            .times(1)
            .returning(|_, _| Ok(1));

        let mapping = service(mock)
            .shorten("https://example.com/b", Some("custom"))
            .await
            .unwrap();

        assert_eq!(mapping, UrlMapping::new(1, "custom", "https://example.com/b"));
    }

    #[tokio::test]
    async fn test_shorten_generates_alias_when_missing() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url()
            .withf(|_, alias| {
                alias.len() == 6 && alias.bytes().all(|b| ALIAS_ALPHABET.contains(&b))
            })
            .times(1)
            .returning(|_, _| Ok(7));

        let mapping = service(mock)
            .shorten("https://example.com/a", None)
            .await
            .unwrap();

        assert_eq!(mapping.id, 7);
        assert_eq!(mapping.alias.len(), 6);
        assert_eq!(mapping.target, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_zero_alias_length_still_generates_non_empty_alias() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url()
            .withf(|_, alias| alias.len() == 1)
            .times(1)
            .returning(|_, _| Ok(1));

        let mapping = UrlService::new(Arc::new(mock), 0)
            .shorten("https://example.com/a", None)
            .await
            .unwrap();

        assert_eq!(mapping.alias.len(), 1);
    }

    #[tokio::test]
    async fn test_shorten_treats_empty_alias_as_missing() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url()
            .withf(|_, alias| alias.len() == 6)
            .times(1)
            .returning(|_, _| Ok(1));

        let mapping = service(mock)
            .shorten("https://example.com/a", Some(""))
            .await
            .unwrap();

        assert_eq!(mapping.alias.len(), 6);
    }

    #[tokio::test]
    async fn test_shorten_custom_alias_conflict_is_not_retried() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url()
            .times(1)
            .returning(|_, alias| Err(StoreError::alias_conflict("test", alias)));

        let err = service(mock)
            .shorten("https://example.com/c", Some("custom"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_shorten_generated_alias_retries_on_conflict() {
        let mut mock = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_save_url()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, alias| Err(StoreError::alias_conflict("test", alias)));
        mock.expect_save_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(3));

        let mapping = service(mock)
            .shorten("https://example.com/a", None)
            .await
            .unwrap();

        assert_eq!(mapping.id, 3);
    }

    #[tokio::test]
    async fn test_shorten_generated_alias_gives_up() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url()
            .times(MAX_GENERATE_ATTEMPTS)
            .returning(|_, alias| Err(StoreError::alias_conflict("test", alias)));

        let err = service(mock)
            .shorten("https://example.com/a", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_backing_failure_is_not_retried() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url().times(1).returning(|_, _| {
            Err(StoreError::backing(
                "test",
                "insert",
                std::io::Error::other("disk full"),
            ))
        });

        let err = service(mock)
            .shorten("https://example.com/a", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url().times(0);

        let err = service(mock)
            .shorten("not-a-url", Some("custom"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_invalid_custom_alias() {
        let mut mock = MockUrlRepository::new();
        mock.expect_save_url().times(0);

        let err = service(mock)
            .shorten("https://example.com", Some("has space"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock = MockUrlRepository::new();
        mock.expect_get_url()
            .withf(|alias| alias == "custom")
            .times(1)
            .returning(|_| Ok("https://example.com/b".to_string()));

        let target = service(mock).resolve("custom").await.unwrap();

        assert_eq!(target, "https://example.com/b");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock = MockUrlRepository::new();
        mock.expect_get_url()
            .times(1)
            .returning(|alias| Err(StoreError::not_found("test", alias)));

        let err = service(mock).resolve("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_empty_alias() {
        let mut mock = MockUrlRepository::new();
        mock.expect_get_url().times(0);

        let err = service(mock).resolve("").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_remove_success() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url()
            .withf(|alias| alias == "custom")
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(mock).remove("custom").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_not_found() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url()
            .times(1)
            .returning(|alias| Err(StoreError::not_found("test", alias)));

        let err = service(mock).remove("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
