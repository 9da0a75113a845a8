//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite. Long URLs are
//! stored under short aliases, either chosen by the client or generated, and
//! resolved back with an HTTP redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL mapping entity, store traits and error taxonomy
//! - **Application Layer** ([`application`]) - Input checks and alias selection
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - At most one mapping exists per alias; concurrent creates of the same
//!   alias yield exactly one success and conflicts for the rest
//! - Unknown aliases are reported as not found on read and delete
//! - Deleted aliases can be reused
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://storage.db"
//! cargo run
//!
//! curl -X POST localhost:8080/url -d '{"url":"https://example.com"}' -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::error::StoreError;
    pub use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlRepository, UrlSaver};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
