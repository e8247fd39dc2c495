//! Account endpoints: register, login and email checks.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use registry_common::{
    CheckEmailRequest, CheckEmailResponse, LoginRequest, RegisterRequest, UserResponse,
};

use super::body_or_default;
use crate::error::Result;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/check-email", post(check_email))
}

/// POST /api/register
async fn register(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let request = body_or_default(payload);
    let user = state
        .registry
        .register(
            request.username.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// POST /api/login
async fn login(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserResponse>> {
    let request = body_or_default(payload);
    let user = state
        .registry
        .login(
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(UserResponse {
        success: true,
        message: "Login successful".to_string(),
        user,
    }))
}

/// POST /api/check-email
async fn check_email(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CheckEmailRequest>, JsonRejection>,
) -> Result<Json<CheckEmailResponse>> {
    let request = body_or_default(payload);
    let exists = state
        .registry
        .check_email(request.email.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(CheckEmailResponse {
        success: true,
        exists,
    }))
}
