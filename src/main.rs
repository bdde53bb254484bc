mod cli;

use anyhow::Context;
use clap::Parser;

use tx_seance::api::{self, AppState};
use tx_seance::config::Config;
use tx_seance::explorer::{normalize_tx, ExplorerTx};
use tx_seance::generator::generate_ghost;
use tx_seance::summon::{summon, unix_now};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr } => {
            let config = Config::from_env().context("failed to load configuration")?;
            let bind = addr.unwrap_or_else(|| config.http_bind_addr.clone());
            let state = AppState::from_config(&config)?;
            api::run_http_server(&bind, state).await?;
        }
        Commands::Summon { lang, count } => {
            let config = Config::from_env().context("failed to load configuration")?;
            let state = AppState::from_config(&config)?;
            let ghosts = summon(&state.sampler, &state.policy, lang, count).await?;
            println!("{}", serde_json::to_string_pretty(&ghosts)?);
        }
        Commands::Generate { file, lang } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let row: ExplorerTx =
                serde_json::from_str(&raw).context("file is not an explorer txlist row")?;
            let tx = normalize_tx(row);
            if !tx.failed {
                tracing::warn!("transaction {} did not fail, summoning anyway", tx.hash);
            }
            let ghost = generate_ghost(&tx, lang, unix_now())?;
            println!("{}", serde_json::to_string_pretty(&ghost)?);
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
