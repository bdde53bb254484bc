use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tx_seance::models::Language;

#[derive(Parser, Debug)]
#[command(name = "tx-seance", version, about = "Summons ghosts from failed on-chain transactions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Override bind address, e.g. 0.0.0.0:8080
        #[arg(long)]
        addr: Option<String>,
    },
    /// Sample failed transactions and print their ghosts as JSON
    Summon {
        /// Story language (es or en)
        #[arg(long, default_value = "es")]
        lang: Language,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Build a ghost from an explorer txlist row stored in a JSON file
    Generate {
        /// Path to the row, e.g. tx.json
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = "es")]
        lang: Language,
    },
}
