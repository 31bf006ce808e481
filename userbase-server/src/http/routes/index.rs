//! Service index

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::not_found;

/// GET / - what this service exposes
async fn index() -> Json<Value> {
    Json(json!({
        "message": "userbase API is running",
        "endpoints": {
            "GET /users": "list users",
            "GET /users/{id}": "get a user by id",
            "POST /users": "create a user",
            "PUT /users/{id}": "update a user",
            "DELETE /users/{id}": "delete a user"
        }
    }))
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index).fallback(not_found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_all_five_endpoints() {
        let Json(body) = index().await;
        assert_eq!(body["endpoints"].as_object().unwrap().len(), 5);
    }
}
