//! Wiring & DI. Entry point: load catalog, inject into the greeter, run once.
//! No business logic here; the greeting itself lives in GreeterService.

use anyhow::Context;
use dotenv::dotenv;
use project_greeter::adapters::catalog::{JsonCatalog, PropertiesCatalog};
use project_greeter::adapters::sink::{StdoutSink, TracingSink};
use project_greeter::domain::ProjectContext;
use project_greeter::ports::{DiagnosticSink, MessageCatalog};
use project_greeter::shared::AppConfig;
use project_greeter::usecases::GreeterService;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_default();
    let catalog_path = cfg.catalog_path_or_default();
    let catalog = load_catalog(Path::new(&catalog_path))
        .with_context(|| format!("load message catalog from {catalog_path}"))?;
    info!(path = %catalog_path, "message catalog loaded");

    let sink: Arc<dyn DiagnosticSink> = match cfg.sink_or_default().as_str() {
        "tracing" => Arc::new(TracingSink::new()),
        _ => Arc::new(StdoutSink::new()),
    };

    // CLI arg 1 overrides the configured project name.
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| cfg.project_name_or_default());
    let project = ProjectContext::new(name);

    // One instance per project context, owned here, injected explicitly.
    let _greeter = GreeterService::new(&project, &*catalog, &*sink)
        .context("construct greeter service")?;

    Ok(())
}

/// Pick the catalog adapter by file extension. `.json` gets the JSON loader,
/// everything else is treated as a properties file.
fn load_catalog(path: &Path) -> anyhow::Result<Arc<dyn MessageCatalog>> {
    let catalog: Arc<dyn MessageCatalog> =
        if path.extension().is_some_and(|ext| ext == "json") {
            Arc::new(JsonCatalog::load(path)?)
        } else {
            Arc::new(PropertiesCatalog::load(path)?)
        };
    Ok(catalog)
}
