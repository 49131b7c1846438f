use opsdesk_models::auth::{LoginRequest, LoginResponse};
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::directory::UserDirectory;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

pub struct AuthService;

impl AuthService {
    /// Checks credentials against the directory and issues an access token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    #[instrument(skip(directory, dto, jwt_config), fields(email = %dto.email))]
    pub fn login_user(
        directory: &UserDirectory,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let record = directory
            .find_by_email(&dto.email)
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let is_valid = verify_password(&dto.password, &record.password_hash)?;

        if !is_valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let user = record.user.clone();
        let access_token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResponse { access_token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::directory::sample;
    use crate::utils::jwt::verify_token;
    use opsdesk_models::users::UserRole;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_login_issues_verifiable_token() {
        let directory = UserDirectory::with_sample_users();
        let jwt_config = test_jwt_config();

        let response = AuthService::login_user(
            &directory,
            LoginRequest {
                email: sample::MANAGER_EMAIL.to_string(),
                password: sample::PASSWORD.to_string(),
            },
            &jwt_config,
        )
        .unwrap();

        assert_eq!(response.user.role, UserRole::Manager);

        let claims = verify_token(&response.access_token, &jwt_config).unwrap();
        assert_eq!(claims.sub, response.user.id.to_string());
        assert_eq!(claims.role, UserRole::Manager);
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let directory = UserDirectory::with_sample_users();

        let result = AuthService::login_user(
            &directory,
            LoginRequest {
                email: sample::MANAGER_EMAIL.to_string(),
                password: "wrong-password".to_string(),
            },
            &test_jwt_config(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_login_rejects_unknown_email() {
        let directory = UserDirectory::with_sample_users();

        let result = AuthService::login_user(
            &directory,
            LoginRequest {
                email: "nobody@opsdesk.test".to_string(),
                password: sample::PASSWORD.to_string(),
            },
            &test_jwt_config(),
        );

        assert!(result.is_err());
    }
}
