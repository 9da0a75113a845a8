//! Error taxonomy shared by every URL store implementation.

use thiserror::Error;

/// Boxed driver-level error carried by [`StoreError::BackingStoreFailure`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the URL store capabilities.
///
/// Only two kinds are domain-specific. Everything the backing store reports
/// beyond those is wrapped into [`StoreError::BackingStoreFailure`] together
/// with the operation and stage that produced it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested alias is already mapped to a URL.
    #[error("{op}: alias '{alias}' already exists")]
    AliasConflict { op: &'static str, alias: String },

    /// No mapping exists for the alias.
    #[error("{op}: alias '{alias}' not found")]
    NotFound { op: &'static str, alias: String },

    /// Any other I/O or driver failure.
    #[error("{op}: {stage}: {source}")]
    BackingStoreFailure {
        op: &'static str,
        stage: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub fn alias_conflict(op: &'static str, alias: impl Into<String>) -> Self {
        Self::AliasConflict {
            op,
            alias: alias.into(),
        }
    }

    pub fn not_found(op: &'static str, alias: impl Into<String>) -> Self {
        Self::NotFound {
            op,
            alias: alias.into(),
        }
    }

    pub fn backing(op: &'static str, stage: &'static str, source: impl Into<BoxError>) -> Self {
        Self::BackingStoreFailure {
            op,
            stage,
            source: source.into(),
        }
    }

    pub fn is_alias_conflict(&self) -> bool {
        matches!(self, Self::AliasConflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Name of the store operation that produced the error.
    pub fn op(&self) -> &'static str {
        match self {
            Self::AliasConflict { op, .. }
            | Self::NotFound { op, .. }
            | Self::BackingStoreFailure { op, .. } => op,
        }
    }
}
