//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// The message catalog has no entry for the requested key.
    ///
    /// A missing bundled message is a packaging defect, not a runtime condition:
    /// construction fails loudly and nothing is emitted.
    #[error("missing message resource: {key}")]
    MissingResource { key: String },

    /// Catalog source could not be loaded or parsed (I/O, malformed file).
    #[error("catalog error: {0}")]
    Catalog(String),
}
