//! Core domain entities.
//!
//! - [`UrlMapping`] - An alias mapped to a target URL

pub mod url_mapping;

pub use url_mapping::UrlMapping;
