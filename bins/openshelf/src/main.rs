//! OpenShelf CLI and server binary
//!
//! This is the main entry point for the OpenShelf application. It provides
//! commands for initializing, validating, and starting the demonstration
//! HTTP API.

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, save_config, validate_config};
use observability::{init_logging, LogFormat};
use server::{HttpServer, ServerConfig, ServerExt};
use shelf::api::shelf_routes;
use shelf::ItemShelf;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Start { config, host, http } => start_server(config, host, http).await,
        Commands::Validate { config } => {
            init_logging("openshelf", LogFormat::Pretty)?;
            validate_command(config).await
        }
        Commands::Init { output } => {
            init_logging("openshelf", LogFormat::Pretty)?;
            init_command(output).await
        }
    }
}

async fn start_server<P: AsRef<Path>>(
    config_path: P,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    // Config is loaded before the subscriber exists so the log format can
    // come from the config file itself.
    let config = load_config(&config_path)?;

    let format = config
        .logging
        .format
        .parse::<LogFormat>()
        .unwrap_or_default();
    init_logging(&config.service.name, format)?;

    info!(path = ?config_path.as_ref(), "Configuration loaded");

    let report = validate_config(&config);

    if !report.warnings.is_empty() {
        warn!("Configuration warnings:");
        for warning in &report.warnings {
            warn!(field = %warning.field, message = %warning.message);
        }
    }

    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start server due to configuration errors");
    }

    // Apply CLI overrides or use the configured listen address
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    info!(
        service = %config.service.name,
        version = %config.service.version,
        host = %host,
        port,
        "Starting HTTP API"
    );

    let shelf = Arc::new(ItemShelf::seeded());
    debug!(items = shelf.len(), "Item shelf seeded");

    let server = HttpServer::new(ServerConfig::new(host, port), shelf_routes(shelf));

    // Run with graceful shutdown (Ctrl+C handling)
    server.run_with_ctrl_c().await?;

    info!("Server stopped");
    Ok(())
}

async fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            anyhow::bail!(e);
        }
    };

    let report = validate_config(&config);

    // Print summary
    println!("\n=== Configuration Validation Report ===\n");

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Version: {}", config.service.version);
    println!("Listen: {}:{}", config.server.host, config.server.port);
    println!("Log format: {}", config.logging.format);

    Ok(())
}

async fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Edit the configuration file to customize settings");
    println!(
        "  2. Run 'openshelf validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  3. Run 'openshelf start --config {:?}' to start the server",
        output_path
    );

    Ok(())
}
