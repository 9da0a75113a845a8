//! Application layer services implementing business logic.
//!
//! Services consume the store traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short link creation, resolution and removal

pub mod services;
