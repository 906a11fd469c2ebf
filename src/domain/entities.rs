//! Domain entities. Pure data structures for the core business.
//!
//! No host/IO types here — the embedding environment maps into these.

use serde::{Deserialize, Serialize};

/// Handle to the active project, owned and supplied by the hosting environment.
///
/// The greeter only reads the display name; it never mutates or retains the
/// context beyond construction. The name is not validated — an empty string is
/// a legal display name and flows through formatting untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    name: String,
}

impl ProjectContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The project's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
