//! Capturing sink for tests. Records emitted lines instead of writing them.

use crate::ports::DiagnosticSink;
use std::sync::Mutex;

/// Collects every emitted line behind a mutex.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock").clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.lock().expect("sink lock").push(line.to_string());
    }
}
