use axum::{Router, routing::get};

use super::controller::get_users;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", get(get_users))
}
