use axum::{Router, routing::get};

use super::controller::get_reports;
use crate::state::AppState;

pub fn init_reports_router() -> Router<AppState> {
    Router::new().route("/", get(get_reports))
}
