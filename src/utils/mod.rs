//! Utility functions for alias handling and input checks.
//!
//! - [`alias_generator`] - Random alias generation and custom alias validation
//! - [`target_url`] - Target URL validation

pub mod alias_generator;
pub mod target_url;
