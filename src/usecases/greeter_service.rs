//! Greeting on project startup: look up template -> format -> emit once.
//!
//! - One diagnostic line per construction, nothing on failure
//! - The project context is only borrowed for the duration of construction
//! - No retained state, no further methods

use crate::domain::{DomainError, ProjectContext};
use crate::ports::{DiagnosticSink, MessageCatalog};

/// Catalog key for the per-project greeting template.
pub const GREETING_KEY: &str = "projectService";

/// Per-project greeter. The hosting environment constructs exactly one per
/// project context and owns it; there is no ambient registry.
#[derive(Debug)]
pub struct GreeterService;

impl GreeterService {
    /// Construct the service, emitting the greeting as a side effect.
    ///
    /// Resolves [`GREETING_KEY`] from the catalog, substitutes the project's
    /// display name as positional argument 0 and writes the result to the sink.
    /// A missing key fails construction with [`DomainError::MissingResource`]
    /// before anything is emitted.
    pub fn new(
        project: &ProjectContext,
        catalog: &dyn MessageCatalog,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, DomainError> {
        let template = catalog.template(GREETING_KEY)?;
        sink.emit(&template.render(&[project.name()]));
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::MemoryCatalog;
    use crate::adapters::sink::MemorySink;

    fn hello_catalog() -> MemoryCatalog {
        MemoryCatalog::from_iter([(GREETING_KEY, "Hello, {0}!")])
    }

    #[test]
    fn emits_exactly_one_line_containing_the_project_name() {
        let catalog = hello_catalog();
        let sink = MemorySink::new();
        let project = ProjectContext::new("Demo");

        GreeterService::new(&project, &catalog, &sink).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Demo"));
    }

    #[test]
    fn formats_per_catalog_template() {
        let catalog = hello_catalog();
        let sink = MemorySink::new();

        GreeterService::new(&ProjectContext::new("Demo"), &catalog, &sink).unwrap();

        assert_eq!(sink.lines(), vec!["Hello, Demo!"]);
    }

    #[test]
    fn empty_project_name_is_not_rejected() {
        let catalog = hello_catalog();
        let sink = MemorySink::new();

        GreeterService::new(&ProjectContext::new(""), &catalog, &sink).unwrap();

        assert_eq!(sink.lines(), vec!["Hello, !"]);
    }

    #[test]
    fn missing_key_fails_construction_and_emits_nothing() {
        let catalog = MemoryCatalog::from_iter([("otherKey", "unused {0}")]);
        let sink = MemorySink::new();

        let err = GreeterService::new(&ProjectContext::new("Demo"), &catalog, &sink).unwrap_err();

        assert!(matches!(err, DomainError::MissingResource { key } if key == GREETING_KEY));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn two_constructions_emit_independent_lines() {
        let catalog = hello_catalog();
        let sink = MemorySink::new();

        GreeterService::new(&ProjectContext::new("Alpha"), &catalog, &sink).unwrap();
        GreeterService::new(&ProjectContext::new("Beta"), &catalog, &sink).unwrap();

        assert_eq!(sink.lines(), vec!["Hello, Alpha!", "Hello, Beta!"]);
    }
}
