// src/cli/mod.rs — CLI definition (clap derive)

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stockroom", about = "Session-backed inventory tracker", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (the default when no subcommand is given)
    Serve {
        /// Listen port, overriding the config file
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen address, overriding the config file
        #[arg(long)]
        bind: Option<String>,
    },
}
