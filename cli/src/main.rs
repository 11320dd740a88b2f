//! CLI entrypoint for nakkla-oracle
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the callable endpoint.

use anyhow::{Context, Result};
use clap::Parser;
use nakkla_application::AnalyzeQuizUseCase;
use nakkla_infrastructure::{
    ConfigLoader, FileConfig, GeminiLlmGateway, GeminiSettings, load_env_file, load_persona,
    resolve_api_key,
};
use nakkla_presentation::{CallableServer, Cli, EndpointConfig, serve};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v flags when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting nakkla-oracle");

    if let Err(e) = load_env_file() {
        warn!(error = %e, "Failed to load .env file");
    }

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    config.ensure_valid()?;

    // === Dependency Injection ===
    let api_key = resolve_api_key(&config.gemini).context("Cannot start without a Gemini API key")?;
    let persona = load_persona(config.quiz.persona_path.as_deref())?;

    let gateway = GeminiLlmGateway::new(GeminiSettings::from_config(&config.gemini, api_key))
        .context("Failed to create Gemini client")?;

    let use_case = AnalyzeQuizUseCase::new(Arc::new(gateway), persona)
        .with_params(config.analyzer_params());

    let endpoint = EndpointConfig::default().with_identity_header(&config.server.identity_header);
    let server = CallableServer::new(use_case, &endpoint)
        .with_context(|| format!("Invalid identity header '{}'", endpoint.identity_header))?;

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    serve(listener, server.router(), shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
