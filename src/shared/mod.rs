//! Cross-cutting concerns shared by binary and library.

pub mod config;

pub use config::AppConfig;
