//! Server and database configuration
//!
//! Values are assembled by the binary (flags, environment, `.env`) and handed
//! to the library as plain structs.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default delay between connection attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Default maximum connections for the pool.
/// Kept low; the service has a single table and short queries.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            cors_permissive: false,
        }
    }
}

/// Transport security for the database connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS with full certificate chain and host name verification.
    #[default]
    Verify,
    /// TLS without certificate validation. Some hosted providers need this.
    Insecure,
    /// Plain TCP, for local development databases.
    Disable,
}

/// Connection descriptor for the storage backend
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    pub tls: TlsMode,
    /// Extra CA bundle used when verifying the server certificate
    pub root_cert: Option<PathBuf>,
    pub max_connections: u32,
    /// Fixed delay between failed connection attempts
    pub retry_delay: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tls: TlsMode::default(),
            root_cert: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}
