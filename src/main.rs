use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod classifier;
mod models;
mod pages;
mod repository;
mod synthesizer;

/// Virtual Maven 2 repository serving empty artifacts for version
/// 99.0-does-not-exist
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Host:port on which to listen
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "version99=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Decode the embedded jar stub before accepting traffic.
    info!("Serving a {} byte empty jar", synthesizer::jar_stub().len());

    let app = repository::routes();

    info!("listening on {}", args.addr);
    let listener = TcpListener::bind(args.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
