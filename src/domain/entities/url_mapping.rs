//! URL mapping entity: one alias pointing at one target URL.

/// A persisted alias → URL mapping.
///
/// All fields are immutable once the store has created the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub target: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let mapping = UrlMapping::new(1, "aB3dE9", "https://example.com/a");

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.alias, "aB3dE9");
        assert_eq!(mapping.target, "https://example.com/a");
    }
}
