//! userbase CLI - runs the users HTTP service
//!
//! Subcommands:
//! - `serve`: start the HTTP API (database connection retried in the background)
//! - `bootstrap`: ensure the `users` table exists and exit
//!
//! Settings come from flags, then environment, then a `.env` file in the
//! working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::bootstrap::BootstrapArgs;
use commands::serve::ServeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "userbase",
    author,
    version,
    about = "REST service for user records backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Create the users table if it does not exist, then exit
    Bootstrap(BootstrapArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env fallbacks; a missing file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Bootstrap(args) => commands::run_bootstrap(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from([
            "userbase",
            "serve",
            "--database-url",
            "postgres://localhost/users",
        ])
        .unwrap();

        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.database.db_tls, commands::TlsArg::Verify);
        assert_eq!(args.database.db_retry_secs, 5);
        assert!(!args.cors_permissive);
    }

    #[test]
    fn insecure_tls_is_explicit_opt_in() {
        let cli = Cli::try_parse_from([
            "userbase",
            "bootstrap",
            "--database-url",
            "postgres://localhost/users",
            "--db-tls",
            "insecure",
        ])
        .unwrap();

        let Commands::Bootstrap(args) = cli.command else {
            panic!("expected bootstrap");
        };
        let config = userbase_server::DatabaseConfig::from(args.database);
        assert_eq!(config.tls, userbase_server::TlsMode::Insecure);
    }
}
