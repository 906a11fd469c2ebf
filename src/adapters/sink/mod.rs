//! Diagnostic sink adapters. Fire-and-forget string output.

pub mod memory;
pub mod stdout;
pub mod tracing;

pub use memory::MemorySink;
pub use stdout::StdoutSink;
pub use tracing::TracingSink;
