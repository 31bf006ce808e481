//! userbase-server: HTTP service over a single `users` table
//!
//! Layers, leaves first:
//! - [`db`]: connection manager (pool, retry, bootstrap) and repositories
//! - [`models`]: user record and payload validation
//! - [`http`]: handlers, error mapping, router and server loop

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

use std::sync::Arc;

pub use config::{DatabaseConfig, ServerConfig, TlsMode};
pub use db::{Database, PgUserRepo, StoreError, UserStore};
pub use http::{build_router, ServerError};
pub use state::AppState;

/// Start the service.
///
/// The listener comes up immediately; the database connector runs on its
/// own task and retries until it succeeds. Requests that need storage get a
/// 503 until then. On shutdown the connector is stopped and the pool drained.
///
/// # Errors
///
/// Fails on a malformed database URL or if the listener cannot bind.
pub async fn serve(config: ServerConfig, db_config: DatabaseConfig) -> Result<(), ServerError> {
    let options = db::pool::connect_options(&db_config)?;

    let db = Database::new();
    let connector = db::spawn_connector(db.clone(), options, db_config);

    let state = AppState::new(Arc::new(PgUserRepo::new(db.clone())));
    let result = http::run_server(state, config).await;

    connector.abort();
    db.close().await;
    result
}
