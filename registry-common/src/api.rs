//! Request and response bodies for the `/api` endpoints.
//!
//! Every response carries `success`; failures add a human-readable `message`.

use serde::{Deserialize, Serialize};

use crate::user::{PublicUser, UserRecord};

/// `POST /api/register` body. Absent, `null` and empty fields are all "missing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /api/login` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /api/check-email` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Response for register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub message: String,
    pub user: PublicUser,
}

/// Response for `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserRecord>,
    pub count: usize,
}

/// Response for `POST /api/check-email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEmailResponse {
    pub success: bool,
    pub exists: bool,
}

/// Success response that only carries a message (deletes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
