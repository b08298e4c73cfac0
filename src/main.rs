//! Quizap backend entry point.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use quizap_backend::config::{load_config, validate_config, ConfigError, ServerConfig};
use quizap_backend::observability::init_logging;
use quizap_backend::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "quizap-backend")]
#[command(about = "Hello-world HTTP backend with development CORS", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "QUIZAP_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file and PORT.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    config.apply_env();
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability);

    tracing::info!("quizap-backend v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    tracing::warn!("CORS allows every origin; do not expose this server publicly");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
