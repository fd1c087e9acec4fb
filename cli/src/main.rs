//! CLI entrypoint for trivia-api
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trivia_infrastructure::{
    CatalogSeed, ConfigLoader, FileConfig, InMemoryCatalogStore, ThreadRngPicker,
};
use trivia_presentation::{Cli, TriviaService, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };
    apply_overrides(&mut config, &cli);

    init_logging(&config, cli.verbose);

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Invalid configuration: {}", issue);
        }
        bail!("Configuration has {} error(s): {}", issues.len(), issues[0]);
    }

    // === Dependency Injection ===
    let store = Arc::new(InMemoryCatalogStore::new());
    if config.catalog.seed_defaults {
        let seed = CatalogSeed::builtin().context("Built-in catalog is invalid")?;
        store.apply_seed(&seed).await?;
    }
    if let Some(path) = &config.catalog.seed_file {
        let seed = CatalogSeed::from_file(path)?;
        store
            .apply_seed(&seed)
            .await
            .with_context(|| format!("Failed to seed catalog from {}", path.display()))?;
    }

    let service = Arc::new(TriviaService::new(store, Arc::new(ThreadRngPicker)));
    let app = build_router(service);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Starting trivia-api on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// CLI flags take priority over every configuration source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(seed) = &cli.seed {
        config.catalog.seed_file = Some(seed.clone());
    }
    if cli.no_default_seed {
        config.catalog.seed_defaults = false;
    }
}

fn init_logging(config: &FileConfig, verbose: u8) {
    // [logging] level, then RUST_LOG, then -v count
    let filter = config
        .logging
        .level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
