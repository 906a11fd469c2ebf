//! Implements DiagnosticSink on standard output.

use crate::ports::DiagnosticSink;

/// Prints each line to stdout, one call per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}
