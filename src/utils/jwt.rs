use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use opsdesk_models::users::UserRole;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::{AppError, TokenError};

/// Creates a signed access token for a verified identity.
///
/// The subject id and role are frozen into the token; a later role change on
/// the identity does not affect tokens already in circulation. Expiry is
/// `iat + access_token_expiry` from the process-wide config.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its claims, or the exact failure kind.
///
/// Deterministic: two calls on the same unexpired token yield identical
/// claims. Expiry is exclusive: a token presented at its `exp` timestamp is
/// already expired. `jsonwebtoken` only rejects `exp < now`, so the boundary
/// second is checked explicitly, with leeway disabled.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    if claims.exp <= Utc::now().timestamp() as usize {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
