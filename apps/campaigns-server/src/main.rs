mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::Router;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::trace::TraceLayer;
use visual_campaigns::VisualCampaignsModule;

use crate::config::{AppConfig, DatabaseConfig, redact_dsn_password};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Visual Campaigns Server - embeddable markup for partner sites
#[derive(Parser)]
#[command(name = "campaigns-server")]
#[command(about = "Visual Campaigns Server - embeddable markup for partner sites")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:) with migrations applied
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.mock)?;

    if cli.print_config {
        println!("{}", config.to_redacted_json()?);
        return Ok(());
    }

    logging::init(&config.logging, cli.verbose)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
        Commands::Migrate => migrate_only(&config).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.bind_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_redacted_json()?);
    Ok(())
}

async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.dsn.clone());
    // Each pooled connection to an in-memory SQLite DB would see its own database.
    let max_conns = if config.is_in_memory() { 1 } else { config.max_conns };
    opts.max_connections(max_conns).sqlx_logging(false);

    tracing::info!(dsn = %redact_dsn_password(&config.dsn), max_conns, "Connecting to database");
    Database::connect(opts)
        .await
        .context("failed to connect to database")
}

async fn migrate_only(config: &AppConfig) -> Result<()> {
    let db = connect(&config.database).await?;
    visual_campaigns::module::migrate(&db).await?;
    println!("Migrations applied");
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;

    let db = connect(&config.database).await?;
    if config.database.auto_migrate {
        visual_campaigns::module::migrate(&db).await?;
    }

    let module = VisualCampaignsModule::new(db, &config.visual_campaigns);
    let app = module
        .register_rest(Router::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Visual Campaigns Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
