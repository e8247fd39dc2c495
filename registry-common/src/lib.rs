//! Credential Registry Common Types
//!
//! Shared types used by the registry server and anything that talks to it:
//! stored user records, request bodies and response envelopes.

pub mod api;
pub mod timestamp;
pub mod user;

pub use api::{
    CheckEmailRequest, CheckEmailResponse, ErrorResponse, LoginRequest, MessageResponse,
    RegisterRequest, UserResponse, UsersResponse,
};
pub use user::{PublicUser, UserCollection, UserRecord};
