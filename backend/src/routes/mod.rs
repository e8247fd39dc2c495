//! HTTP routes.

pub mod auth;
pub mod health;
pub mod users;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Json, Router};

use crate::AppState;

/// Build the `/api` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
}

/// Unreadable bodies (missing, not JSON, wrong field types) count as `{}`,
/// so callers get the endpoint's "required" error instead of a rejection.
pub(crate) fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable request body: {}", rejection);
            T::default()
        }
    }
}
