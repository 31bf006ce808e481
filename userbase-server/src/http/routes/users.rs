//! User endpoints
//!
//! Each handler runs validate → repository → map outcome. Errors convert to
//! responses through [`ApiError`].

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{UserIdPath, ValidJson};
use crate::http::routes::not_found;
use crate::models::{NewUser, User, UserPayload};
use crate::state::AppState;

/// Delete confirmation
#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub user: User,
}

/// GET /users - all users ordered by id
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users().list().await?;
    Ok(Json(users))
}

/// GET /users/{id} - a single user
async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>, ApiError> {
    let user = state.users().get(id).await?;
    Ok(Json(user))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = NewUser::try_from(payload)?;
    let user = state.users().create(&new_user).await?;

    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id} - replace name, lastname and email
async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let new_user = NewUser::try_from(payload)?;
    let user = state.users().update(id, &new_user).await?;

    tracing::info!(id, "user updated");
    Ok(Json(user))
}

/// DELETE /users/{id} - remove a user
async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    let user = state.users().delete(id).await?;

    tracing::info!(id, "user deleted");
    Ok(Json(DeletedResponse {
        message: "user deleted",
        user,
    }))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).fallback(not_found),
        )
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .fallback(not_found),
        )
}
