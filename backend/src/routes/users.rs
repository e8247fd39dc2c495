//! Collection endpoints used for debugging and test resets.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use registry_common::{MessageResponse, UsersResponse};

use crate::error::Result;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).delete(clear_users))
        .route("/users/:email", delete(delete_user))
}

/// GET /api/users - every stored record, passwords included.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UsersResponse>> {
    let collection = state.registry.list_all().await?;
    Ok(Json(UsersResponse {
        success: true,
        count: collection.len(),
        users: collection.users,
    }))
}

/// DELETE /api/users/:email
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.registry.delete_by_email(&email).await?;
    Ok(Json(MessageResponse::ok("User deleted successfully")))
}

/// DELETE /api/users
async fn clear_users(State(state): State<Arc<AppState>>) -> Result<Json<MessageResponse>> {
    state.registry.clear_all().await?;
    Ok(Json(MessageResponse::ok("All users cleared")))
}
