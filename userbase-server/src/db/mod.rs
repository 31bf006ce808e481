//! Database layer - connection manager and repositories
//!
//! # Design Principles
//!
//! - One pool for the whole process, passed explicitly; no global handle
//! - Pool is installed once by the connector task; until then every
//!   repository call fails fast with `StoreError::NotReady`
//! - Rely on DB constraints, classify conflicts - no check-then-insert
//! - Backend error codes are interpreted in `error_map` only

pub mod error_map;
pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{connect, spawn_connector, ConnectionError, Database};
pub use repos::*;
