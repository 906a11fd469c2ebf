//! Application configuration. Catalog path, project name, sink choice.

use serde::Deserialize;

/// Catalog file used when nothing is configured.
pub const DEFAULT_CATALOG_PATH: &str = "./messages/greeter.properties";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Path to the message catalog (.properties or .json). Read from GREETER_CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Project display name to greet. Read from GREETER_PROJECT_NAME; CLI arg 1 overrides.
    #[serde(default)]
    pub project_name: Option<String>,

    /// Diagnostic sink: "stdout" (default) or "tracing". Read from GREETER_SINK.
    #[serde(default)]
    pub sink: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("GREETER"));
        if let Ok(path) = std::env::var("GREETER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the catalog path. Defaults to DEFAULT_CATALOG_PATH if unset.
    pub fn catalog_path_or_default(&self) -> String {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
    }

    /// Returns the project name. Defaults to "untitled" if unset.
    pub fn project_name_or_default(&self) -> String {
        self.project_name
            .clone()
            .unwrap_or_else(|| "untitled".to_string())
    }

    /// Returns the sink choice. Defaults to "stdout" if unset.
    pub fn sink_or_default(&self) -> String {
        self.sink.clone().unwrap_or_else(|| "stdout".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.catalog_path_or_default(), DEFAULT_CATALOG_PATH);
        assert_eq!(cfg.project_name_or_default(), "untitled");
        assert_eq!(cfg.sink_or_default(), "stdout");
    }
}
