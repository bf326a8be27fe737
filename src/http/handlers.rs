//! Request handlers for the user API.
//!
//! Each handler enforces its input contract before touching the store, then
//! maps store outcomes to HTTP outcomes. Handlers hold no state of their own;
//! everything flows through [`AppState`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::http::error::{json_response, ApiError};
use crate::http::server::AppState;
use crate::store::User;

/// Update payload. Deliberately has no `id` field: the path identifier is
/// authoritative, and an id embedded in the body is ignored by design.
#[derive(Debug, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(user) = payload.map_err(bad_payload)?;
    if user.id.is_empty() || user.name.is_empty() || user.email.is_empty() {
        return Err(ApiError::BadInput("missing required fields".to_string()));
    }

    let created = state.store.create(user)?;
    tracing::debug!(user_id = %created.id, "User created");
    json_response(StatusCode::CREATED, &created)
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    json_response(StatusCode::OK, &state.store.list())
}

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = require_id(&id)?;
    let user = state.store.get(id)?;
    json_response(StatusCode::OK, &user)
}

/// PUT /user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = require_id(&id)?;
    let Json(update) = payload.map_err(bad_payload)?;
    if update.name.is_empty() || update.email.is_empty() {
        return Err(ApiError::BadInput("missing required fields".to_string()));
    }

    let updated = state.store.update(id, update.name, update.email)?;
    tracing::debug!(user_id = %updated.id, "User updated");
    json_response(StatusCode::OK, &updated)
}

/// DELETE /user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = require_id(&id)?;
    // Misses are a client error here, not a 404: the delete contract treats
    // an unknown id the same as a malformed request.
    state
        .store
        .delete(id)
        .map_err(|e| ApiError::BadInput(e.to_string()))?;
    tracing::debug!(user_id = %id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn require_id(id: &str) -> Result<&str, ApiError> {
    if id.is_empty() {
        return Err(ApiError::BadInput("missing id".to_string()));
    }
    Ok(id)
}

fn bad_payload(rejection: JsonRejection) -> ApiError {
    ApiError::BadInput(rejection.body_text())
}
