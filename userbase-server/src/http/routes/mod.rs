//! Route handlers organized by resource

pub mod health;
pub mod index;
pub mod users;

use crate::http::error::ApiError;

/// Unknown path, or known path with an unsupported method.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
