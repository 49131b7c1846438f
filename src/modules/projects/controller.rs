use axum::Json;
use tracing::instrument;
use uuid::Uuid;

use super::model::Project;
use crate::modules::auth::controller::ErrorResponse;
use crate::utils::errors::AppError;

/// List dashboard projects (all roles)
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Project snapshot", body = Vec<Project>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not in the allow-list", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Projects"
)]
#[instrument]
pub async fn get_projects() -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(vec![
        Project {
            id: Uuid::from_u128(0x00000000_0000_0000_0000_0000000000a1),
            name: "Warehouse migration".to_string(),
            status: "in_progress".to_string(),
            owner: "Tayo Adeyemi".to_string(),
        },
        Project {
            id: Uuid::from_u128(0x00000000_0000_0000_0000_0000000000a2),
            name: "Billing cutover".to_string(),
            status: "blocked".to_string(),
            owner: "Chidi Okeke".to_string(),
        },
        Project {
            id: Uuid::from_u128(0x00000000_0000_0000_0000_0000000000a3),
            name: "Q3 vendor review".to_string(),
            status: "done".to_string(),
            owner: "Ify Nwosu".to_string(),
        },
    ]))
}
