//! One-shot schema bootstrap
//!
//! Connects once (no retry), ensures the `users` table exists and exits.

use anyhow::{Context, Result};
use clap::Parser;
use userbase_server::db::connect;
use userbase_server::DatabaseConfig;

use super::DatabaseArgs;

/// Arguments for the bootstrap command
#[derive(Parser, Debug)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_bootstrap(args: BootstrapArgs) -> Result<()> {
    let config = DatabaseConfig::from(args.database);

    let pool = connect(&config)
        .await
        .context("Failed to connect and bootstrap schema")?;
    pool.close().await;

    tracing::info!("schema bootstrap complete");
    Ok(())
}
