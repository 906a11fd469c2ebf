//! Infrastructure adapters. Implement outbound ports.
//!
//! Catalog loaders and diagnostic sinks. Map errors to DomainError.

pub mod catalog;
pub mod sink;
