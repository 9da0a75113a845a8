//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom alias; a random one is generated when absent or empty.
    #[validate(length(max = 64))]
    pub alias: Option<String>,
}

/// Response returned after a short link is created.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_without_alias() {
        let req: SaveRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();

        assert!(req.alias.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let req = SaveRequest {
            url: "not a url".to_string(),
            alias: None,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_long_alias_rejected() {
        let req = SaveRequest {
            url: "https://example.com".to_string(),
            alias: Some("a".repeat(65)),
        };

        assert!(req.validate().is_err());
    }
}
