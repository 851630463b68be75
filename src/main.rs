// src/main.rs — Stockroom entry point

use clap::Parser;
use std::sync::Arc;

use stockroom::cli::{Cli, Commands};
use stockroom::infra::config::Config;
use stockroom::infra::logger;
use stockroom::session::MemoryStore;
use stockroom::web::{self, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG / STOCKROOM_LOG)
    logger::init_logging("info");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    // Serving is the default and only command; its flags beat the file.
    if let Some(Commands::Serve { port, bind }) = cli.command {
        if let Some(port) = port {
            config.server.port = port;
        }
        if let Some(bind) = bind {
            config.server.bind = bind;
        }
    }

    let state = AppState {
        store: Arc::new(MemoryStore::new(&config.session)),
    };
    web::start_server(&config, state).await?;
    Ok(())
}
