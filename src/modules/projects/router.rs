use axum::{Router, routing::get};

use super::controller::get_projects;
use crate::state::AppState;

pub fn init_projects_router() -> Router<AppState> {
    Router::new().route("/", get(get_projects))
}
