// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lb112x_exporter::{
    AppState, ClientOptions, Config, ExporterRegistry, Lb112xClient, Result, create_router,
    defaults, env_vars, report,
};

/// Utility for working with Netgear LB112x LTE modems
#[derive(Debug, Parser)]
#[command(name = "lb112x-exporter", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Display status of a LB112x device
    #[command(alias = "stat")]
    Status {
        /// URL at which the modem API is found
        #[arg(long, env = env_vars::DEVICE_URL, default_value = defaults::DEVICE_URL)]
        url: String,

        /// Admin password for the modem web API
        #[arg(long, env = env_vars::ADMIN_PASSWORD, hide_env_values = true)]
        password: String,

        /// Skip TLS certificate verification (the modem serves a self-signed certificate)
        #[arg(
            long,
            env = env_vars::INSECURE_SKIP_VERIFY,
            default_value_t = true,
            action = clap::ArgAction::Set
        )]
        insecure_skip_verify: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Human)]
        format: Format,
    },

    /// Export LB112x device metrics to Prometheus. Blocks until killed.
    Export {
        /// Configuration file for the Prometheus exporter
        #[arg(short = 'f', long, env = env_vars::CONFIG)]
        config: PathBuf,

        /// Local ip:port from which to serve Prometheus metrics
        #[arg(short = 'L', long, env = env_vars::LISTEN_ADDR, default_value = defaults::LISTEN_ADDR)]
        listen: String,
    },

    /// Test Prometheus exporter configuration
    Testcfg {
        /// Configuration file for the Prometheus exporter
        #[arg(short = 'f', long, env = env_vars::CONFIG)]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Human,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    setup_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Status {
            url,
            password,
            insecure_skip_verify,
            format,
        } => status(&url, &password, insecure_skip_verify, format).await,
        Command::Export { config, listen } => export(&config, &listen).await,
        Command::Testcfg { config } => testcfg(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn status_client_options(insecure_skip_verify: bool) -> ClientOptions {
    ClientOptions::default().accept_invalid_certs(insecure_skip_verify)
}

async fn status(
    url: &str,
    password: &str,
    insecure_skip_verify: bool,
    format: Format,
) -> Result<()> {
    let client = Lb112xClient::new(url, password, status_client_options(insecure_skip_verify))?;
    client.authenticate().await?;
    let snapshot = client.poll().await?;

    let output = match format {
        Format::Human => report::render_human(&snapshot),
        Format::Json => report::render_json(&snapshot)?,
    };
    print!("{output}");
    if matches!(format, Format::Json) {
        println!();
    }
    Ok(())
}

fn testcfg(path: &Path) -> Result<()> {
    let config = Config::from_file(path)?;
    tracing::debug!("Configuration has {} device(s)", config.devices.len());
    println!("OK");
    Ok(())
}

async fn export(config_path: &Path, listen: &str) -> Result<()> {
    let config = Config::from_file(config_path)?;

    tracing::info!(
        "Loaded configuration for {} device(s)",
        config.devices.len()
    );
    for device in &config.devices {
        tracing::info!(
            "  - Device at {} (timeout {:?})",
            device.url,
            device.effective_timeout(&config.global)
        );
    }

    let exporters = ExporterRegistry::from_config(&config)?;
    let state = Arc::new(AppState::new(exporters));
    let app = create_router(state);

    let addr: SocketAddr = listen.parse().map_err(|e| {
        tracing::error!("Invalid listen address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("LB112x Exporter starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /scrape?target=<url> - Device metrics");
    tracing::info!("  - GET /metrics             - Exporter metrics");
    tracing::info!("  - GET /health              - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
            }
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG when set, "info" otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
