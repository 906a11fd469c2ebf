//! Implements MessageCatalog over a flat JSON object.
//!
//! `{"key": "template", ...}` — an alternative catalog source for embedders
//! that already ship JSON configuration.

use crate::domain::{DomainError, MessageTemplate};
use crate::ports::MessageCatalog;
use std::collections::HashMap;
use std::path::Path;

/// Catalog parsed from a JSON object of string templates.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    entries: HashMap<String, MessageTemplate>,
}

impl JsonCatalog {
    /// Load and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Catalog(format!("read {}: {}", path.display(), e)))?;
        Self::from_str(&text)
    }

    /// Parse a JSON object of `key -> template`.
    pub fn from_str(text: &str) -> Result<Self, DomainError> {
        let entries: HashMap<String, MessageTemplate> =
            serde_json::from_str(text).map_err(|e| DomainError::Catalog(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for JsonCatalog {
    fn template(&self, key: &str) -> Result<MessageTemplate, DomainError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::MissingResource { key: key.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_object() {
        let catalog = JsonCatalog::from_str(r#"{"projectService": "Hello, {0}!"}"#).unwrap();
        assert_eq!(
            catalog.template("projectService").unwrap().as_str(),
            "Hello, {0}!"
        );
    }

    #[test]
    fn rejects_non_object_documents() {
        let err = JsonCatalog::from_str(r#"["not", "a", "map"]"#).unwrap_err();
        assert!(matches!(err, DomainError::Catalog(_)));
    }

    #[test]
    fn missing_key_is_missing_resource() {
        let catalog = JsonCatalog::from_str("{}").unwrap();
        let err = catalog.template("projectService").unwrap_err();
        assert!(matches!(err, DomainError::MissingResource { .. }));
    }
}
