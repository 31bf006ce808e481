//! Command implementations for the userbase CLI

pub mod bootstrap;
pub mod serve;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use userbase_server::config::{DEFAULT_MAX_CONNECTIONS, DEFAULT_RETRY_DELAY};
use userbase_server::{DatabaseConfig, TlsMode};

pub use bootstrap::run_bootstrap;
pub use serve::run_serve;

/// Transport security for the database connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TlsArg {
    /// TLS with certificate and host name verification
    Verify,
    /// TLS without certificate validation (hosted providers that require it)
    Insecure,
    /// No TLS (local development)
    Disable,
}

impl From<TlsArg> for TlsMode {
    fn from(arg: TlsArg) -> Self {
        match arg {
            TlsArg::Verify => TlsMode::Verify,
            TlsArg::Insecure => TlsMode::Insecure,
            TlsArg::Disable => TlsMode::Disable,
        }
    }
}

/// Connection descriptor flags shared by every command that touches the database
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Transport security mode
    #[arg(long, env = "DATABASE_TLS", value_enum, default_value_t = TlsArg::Verify)]
    pub db_tls: TlsArg,

    /// CA bundle used to verify the database certificate
    #[arg(long, env = "DATABASE_ROOT_CERT")]
    pub db_root_cert: Option<PathBuf>,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub db_max_connections: u32,

    /// Seconds to wait between connection attempts
    #[arg(long, env = "DATABASE_RETRY_SECS", default_value_t = DEFAULT_RETRY_DELAY.as_secs())]
    pub db_retry_secs: u64,
}

impl From<DatabaseArgs> for DatabaseConfig {
    fn from(args: DatabaseArgs) -> Self {
        Self {
            url: args.database_url,
            tls: args.db_tls.into(),
            root_cert: args.db_root_cert,
            max_connections: args.db_max_connections,
            retry_delay: Duration::from_secs(args.db_retry_secs),
        }
    }
}
