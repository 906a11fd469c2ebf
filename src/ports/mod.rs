//! Port traits. API boundaries for the hexagon.
//!
//! All outbound: the greeter calls into the catalog and the sink. Everything is
//! synchronous — construction runs on whatever thread the host chooses, with no
//! suspension points.

pub mod outbound;

pub use outbound::{DiagnosticSink, MessageCatalog};
