//! Implements MessageCatalog over a Java-style `.properties` file.
//!
//! The format the original resource bundle shipped: one `key=value` per line,
//! `#` or `!` comment lines, blank lines ignored. Values are taken verbatim
//! after the first `=` (leading whitespace trimmed); no backslash escapes.

use crate::domain::{DomainError, MessageTemplate};
use crate::ports::MessageCatalog;
use std::collections::HashMap;
use std::path::Path;

/// Catalog parsed from `.properties` text. Immutable after load.
#[derive(Debug, Clone)]
pub struct PropertiesCatalog {
    entries: HashMap<String, MessageTemplate>,
}

impl PropertiesCatalog {
    /// Load and parse a properties file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Catalog(format!("read {}: {}", path.display(), e)))?;
        Self::from_str(&text)
    }

    /// Parse properties text.
    ///
    /// A non-comment line without `=` is malformed and fails the whole load:
    /// a broken bundle is a packaging defect, not something to skip over.
    pub fn from_str(text: &str) -> Result<Self, DomainError> {
        let mut entries = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(DomainError::Catalog(format!(
                    "line {}: expected key=value, got {:?}",
                    lineno + 1,
                    trimmed
                )));
            };
            entries.insert(
                key.trim().to_string(),
                MessageTemplate::new(value.trim_start()),
            );
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for PropertiesCatalog {
    fn template(&self, key: &str) -> Result<MessageTemplate, DomainError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::MissingResource { key: key.into() })
    }
}
