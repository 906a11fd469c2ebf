//! Implements DiagnosticSink over the tracing facade.
//!
//! For hosts that already route diagnostics through a subscriber.

use crate::ports::DiagnosticSink;
use tracing::info;

/// Forwards each line as an `info` event under the `greeter` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        info!(target: "greeter", "{line}");
    }
}
