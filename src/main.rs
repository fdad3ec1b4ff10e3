mod config;
mod dom;
mod error;
mod fetcher;
mod models;
mod parser;
mod server;
#[cfg(test)]
mod test_utils;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Cli;
use crate::fetcher::Fetcher;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let fetcher = Fetcher::new(&cli.fetcher)?;
    let app = server::router(fetcher);

    let listener = TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(
        addr = %listener.local_addr()?,
        upstream = %cli.fetcher.base_url,
        "scrapmazon listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
