//! Target URL validation.
//!
//! Targets are stored exactly as submitted; this module only decides whether
//! a string is an acceptable redirect destination.

use url::Url;

/// Errors that can occur while checking a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacters,
}

/// Checks that `target` is an absolute HTTP(S) URL with a host.
///
/// Rejects relative references and schemes such as `javascript:`, `data:` or
/// `file:`. Control characters are rejected before parsing because the parser
/// strips or escapes them, while the stored target must be usable verbatim as
/// a `Location` header value.
pub fn check_target_url(target: &str) -> Result<(), TargetUrlError> {
    if target.trim().is_empty() {
        return Err(TargetUrlError::Empty);
    }

    if target.chars().any(char::is_control) {
        return Err(TargetUrlError::ControlCharacters);
    }

    let url = Url::parse(target).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TargetUrlError::UnsupportedProtocol);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(check_target_url("https://example.com/a").is_ok());
        assert!(check_target_url("http://example.com:8080/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(check_target_url(""), Err(TargetUrlError::Empty)));
        assert!(matches!(check_target_url("   "), Err(TargetUrlError::Empty)));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            check_target_url("/just/a/path"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
        assert!(matches!(
            check_target_url("example.com"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for url in ["javascript:alert(1)", "data:text/html,hi", "file:///etc/passwd"] {
            assert!(matches!(
                check_target_url(url),
                Err(TargetUrlError::UnsupportedProtocol)
            ));
        }
    }

    #[test]
    fn test_rejects_control_characters() {
        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/a\rb",
            "https://example.com/a\u{1}b",
            "https://example.com/a\u{7f}b",
        ] {
            assert!(matches!(
                check_target_url(url),
                Err(TargetUrlError::ControlCharacters)
            ));
        }
    }

    #[test]
    fn test_accepts_non_ascii_path() {
        assert!(check_target_url("https://example.com/caf\u{e9}").is_ok());
    }
}
