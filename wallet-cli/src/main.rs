//! # Wallet CLI
//!
//! Binary that wires together all the components:
//! - Load configuration from arguments and environment
//! - Initialize the in-memory repository adapter
//! - Create the ledger service
//! - Run commands from stdin or a script file

mod config;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_hex::LedgerService;
use wallet_repo::InMemoryRepo;

use config::{Config, DEFAULT_LOG_FILTER};
use session::{Session, script_reader};

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::parse();

    // Logs go to stderr so stdout carries only command results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            config
                .log_json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(io::stderr)),
        )
        .with(
            (!config.log_json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr)),
        )
        .init();

    let service = LedgerService::with_config(InMemoryRepo::new(), config.service_config());
    tracing::info!(
        reject_policy = %service.config().reject_policy,
        "Starting wallet session"
    );
    let mut session = Session::new(service);

    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let summary = match &config.script {
        Some(path) => {
            tracing::info!("Running script {}", path.display());
            session.run(script_reader(path)?, &mut out, &mut err, config.fail_fast)?
        }
        None => session.run(io::stdin().lock(), &mut out, &mut err, config.fail_fast)?,
    };

    tracing::info!(
        executed = summary.executed,
        failed = summary.failed,
        accounts = session.service().list_accounts()?.len(),
        "Session finished"
    );

    if config.fail_fast && summary.failed > 0 {
        anyhow::bail!("Stopped after a failing command");
    }

    Ok(())
}
