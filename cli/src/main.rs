//! Shop catalog - CLI Server
//!
//! Headless product catalog REST API suitable for deployment as a systemd
//! service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/shop-catalog/config.toml)
//! shop-service
//!
//! # Custom config path
//! shop-service --config /etc/shop-catalog/config.toml
//!
//! # Override the port and reseed on startup
//! shop-service --api-port 8080 --seed
//!
//! # Validate config without starting
//! shop-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use shop_catalog::config::AppConfig;
use shop_catalog::server::{init_tracing, ServerHandle, ServerOptions};

/// Shop catalog - product CRUD REST API with image management.
#[derive(Parser, Debug)]
#[command(
    name = "shop-service",
    version,
    about = "Product catalog REST API",
    long_about = "Shop catalog - REST API server for products, their images \
                  and a sample-data seed endpoint.\n\n\
                  Default config: ~/.config/shop-catalog/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "SHOP_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Wipe and reseed the catalog on startup.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(shop_catalog::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if cli.check {
                eprintln!("Configuration is invalid: {}", e);
                std::process::exit(1);
            }
            eprintln!(
                "Failed to load config from {}: {}. Using default configuration.",
                config_path.display(),
                e
            );
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   API prefix  : {}", config.server.api_prefix);
        println!("   Database    : {}", config.database.driver);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration: {}", config_path.display());
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
    }

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed_on_start: cli.seed,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    };

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
