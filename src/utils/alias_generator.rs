//! Alias generation and validation utilities.
//!
//! Generated aliases are random strings over a fixed, URL-safe alphabet.
//! Caller-supplied aliases are checked against the characters the router can
//! carry in a single path segment.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet used for generated aliases (62 symbols, case-sensitive).
pub const ALIAS_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Maximum length accepted for a caller-supplied alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow fixed routes.
const RESERVED_ALIASES: &[&str] = &["url"];

/// Generates a random alias of exactly `length` characters.
///
/// Every character is drawn uniformly from [`ALIAS_ALPHABET`] using the
/// thread-local CSPRNG. Uniqueness is not guaranteed; the store rejects
/// duplicates.
///
/// # Panics
///
/// Panics if the operating system random source cannot seed the generator.
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALIAS_ALPHABET.len());
            ALIAS_ALPHABET[idx] as char
        })
        .collect()
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            "Alias must be 1-64 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
