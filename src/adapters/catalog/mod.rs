//! Message catalog adapters. Load once, read-only thereafter.

pub mod json;
pub mod memory;
pub mod properties;

pub use json::JsonCatalog;
pub use memory::MemoryCatalog;
pub use properties::PropertiesCatalog;
