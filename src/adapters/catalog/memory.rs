//! Implements MessageCatalog over an in-process map.
//!
//! For tests and embedders that own their message set in code.

use crate::domain::{DomainError, MessageTemplate};
use crate::ports::MessageCatalog;
use std::collections::HashMap;

/// In-memory catalog built from key/template pairs.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    entries: HashMap<String, MessageTemplate>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), MessageTemplate::new(v)))
                .collect(),
        }
    }
}

impl MessageCatalog for MemoryCatalog {
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
    fn resolves_known_key() {
        let catalog = MemoryCatalog::from_iter([("greeting", "Hi, {0}")]);
        let t = catalog.template("greeting").unwrap();
        assert_eq!(t.as_str(), "Hi, {0}");
    }

    #[test]
    fn unknown_key_is_missing_resource() {
        let catalog = MemoryCatalog::new();
        let err = catalog.template("nope").unwrap_err();
        assert!(matches!(err, DomainError::MissingResource { key } if key == "nope"));
    }
}
