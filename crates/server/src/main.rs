use std::error::Error;

use config::{ServerConfig, dotenv_warning};
use env_logger::Env;
use log::{info, warn};
use router::router;
use tokio::net::TcpListener;
use utils::shutdown::shutdown_signal;

mod config;
mod doc;
mod router;
mod routes;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Loaded before the logger so RUST_LOG can come from .env
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Some(warning) = dotenv_warning(&dotenv) {
        warn!("{warning}");
    }

    let config = ServerConfig::from_env()?;
    let listener = TcpListener::bind(config.addr()).await?;
    info!("Running axum on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
