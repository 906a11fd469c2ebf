//! Core domain layer. No external I/O dependencies.
//!
//! Entities and message rendering live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod template;

pub use entities::ProjectContext;
pub use errors::DomainError;
pub use template::MessageTemplate;
