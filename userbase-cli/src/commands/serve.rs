//! HTTP server command
//!
//! Binds the listener right away and connects to the database in the
//! background.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use userbase_server::config::DEFAULT_PORT;
use userbase_server::{DatabaseConfig, ServerConfig, TlsMode};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: args.cors_permissive,
    };
    let db_config = DatabaseConfig::from(args.database);

    if db_config.tls == TlsMode::Insecure {
        tracing::warn!("database TLS certificate validation is disabled");
    }
    tracing::info!("Starting userbase server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    userbase_server::serve(config, db_config)
        .await
        .context("Server error")?;

    Ok(())
}
