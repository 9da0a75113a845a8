//! SQLite repository implementations.
//!
//! Concrete implementations of the domain store traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Alias → URL mapping storage

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
