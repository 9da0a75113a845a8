//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the URL store. The concrete SQLite implementation
//! lives in `crate::infrastructure::persistence`, and a `mockall` mock is
//! generated for unit tests.
//!
//! # Available Capabilities
//!
//! - [`UrlSaver`] - Create a mapping
//! - [`UrlGetter`] - Resolve an alias
//! - [`UrlDeleter`] - Remove a mapping
//! - [`UrlRepository`] - All of the above

pub mod url_repository;

pub use url_repository::{UrlDeleter, UrlGetter, UrlRepository, UrlSaver};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
