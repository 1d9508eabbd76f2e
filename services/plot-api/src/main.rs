//! Polar temperature chart API service.
//!
//! HTTP server rendering NCEP reanalysis air temperature charts for a
//! requested polar region and year.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use plot_api::router;
use plot_api::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "plot-api")]
#[command(about = "Polar reanalysis temperature chart server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Directory containing the reanalysis CSV datasets
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting polar temperature chart server");

    let state = Arc::new(AppState::new(args.data_dir.clone()));
    let app = router(state);

    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, data_dir = %args.data_dir.display(), "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
