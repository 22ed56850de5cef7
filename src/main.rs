//! Binary entrypoint: parse arguments, load config, serve.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use kas_server::config::{load_config, AppConfig};
use kas_server::observability::init_logging;
use kas_server::{HttpServer, Shutdown};

#[derive(Parser, Debug)]
#[command(name = "kas-server", version, about = "Spreadsheet-backed check-in/approval backend")]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logging("kas_server=debug,tower_http=debug");

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        users_path = %config.storage.users_path.display(),
        news_path = %config.storage.news_path.display(),
        dashboard_path = %config.storage.dashboard_path.display(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
