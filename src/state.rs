use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::users::directory::UserDirectory;

/// Shared application state.
///
/// Everything here is read-only after startup: the signing config is never
/// mutated and the directory is seeded once, so request handling needs no
/// locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        directory: Arc::new(UserDirectory::with_sample_users()),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
