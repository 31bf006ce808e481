//! Custom Axum extractors
//!
//! Both reject with [`ApiError`] so that malformed input gets the same JSON
//! error shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::UserId;

/// Extract and validate a user id from path
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidId {
                message: rejection.body_text(),
            })?;

        parse_user_id(&raw).map(Self)
    }
}

/// Any i32 is a well-formed id; whether it exists is for the repository.
pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>().map_err(|_| ApiError::InvalidId {
        message: format!("'{}' is not a valid user id", raw),
    })
}

/// JSON body whose decoding failures become `invalid_body` errors
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody {
                reason: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
