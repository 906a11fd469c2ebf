//! Application use cases. Orchestrate domain logic via ports.

pub mod greeter_service;

pub use greeter_service::{GreeterService, GREETING_KEY};
