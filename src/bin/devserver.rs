//! Paradox devserver
//!
//! Fixture REST backend seeded with sample climate data, stories and
//! signatures. Point the UI or the CLI at `http://127.0.0.1:5000/api`.

use clap::Parser;
use std::path::PathBuf;

use paradox::config::Config;
use paradox::devserver::{serve, AppState, Store};

#[derive(Parser)]
#[command(name = "paradox-devserver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "In-memory Climate Paradox REST backend for development")]
struct Args {
    /// Config file (default: ~/.config/paradox/config.toml, then ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Start with no climate data, stories or signatures
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.devserver.port = port;
    }

    paradox::logging::init(&config.logging, "tower_http=debug");

    tracing::info!("Paradox devserver v{}", env!("CARGO_PKG_VERSION"));

    let state = if args.empty {
        AppState::new(Store::new(), config.devserver)
    } else {
        AppState::seeded(config.devserver)
    };

    serve(state).await?;
    Ok(())
}
