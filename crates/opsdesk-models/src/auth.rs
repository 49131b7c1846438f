//! Authentication DTOs.
//!
//! Request and response bodies for the login endpoint, shared so the client
//! deserializes exactly what the server serializes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::User;

/// Login request with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login response.
///
/// Carries the signed access token and the authenticated identity. The
/// token is opaque to the client; only the server decodes it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}
