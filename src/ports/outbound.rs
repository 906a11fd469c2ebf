//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, MessageTemplate};

/// Read-only key/value lookup against an externally owned message catalog.
///
/// The catalog is loaded once and treated as immutable for the life of the
/// process; no writer exists, so implementations need no locking.
pub trait MessageCatalog: Send + Sync {
    /// Resolve the template for `key`.
    ///
    /// Returns [`DomainError::MissingResource`] when the key is absent.
    fn template(&self, key: &str) -> Result<MessageTemplate, DomainError>;
}

/// Diagnostic output sink. One string per call, fire-and-forget.
///
/// No acknowledgment and no back-pressure: the contract is a single write,
/// infallible from the caller's point of view.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}
