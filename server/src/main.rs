// server/src/main.rs

// Entry point for the SmileAgent booking backend. Parses command-line
// arguments, loads configuration, and runs the REST API server until
// ctrl-c.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::sync::oneshot;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rest_api::{load_server_config, start_server};

#[derive(Debug, Parser)]
#[command(name = "smileagent-server", about = "SmileAgent booking backend")]
struct Args {
    /// Path to the YAML server configuration file.
    #[arg(long, env = "SMILEAGENT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured bind host.
    #[arg(long, env = "SMILEAGENT_HOST")]
    host: Option<String>,

    /// Override the configured port.
    #[arg(long, env = "SMILEAGENT_PORT")]
    port: Option<u16>,

    /// Override the clinic reference data file.
    #[arg(long, env = "SMILEAGENT_CLINICS")]
    clinics: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = load_server_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(clinics) = args.clinics {
        config.clinics_file = Some(clinics);
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("ctrl-c received, shutting down");
                let _ = shutdown_tx.send(());
            }
            Err(e) => error!("failed to listen for ctrl-c: {}", e),
        }
    });

    start_server(config, shutdown_rx).await
}
