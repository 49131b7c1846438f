use axum::Json;
use tracing::instrument;

use super::model::ReportSummary;
use crate::modules::auth::controller::ErrorResponse;
use crate::utils::errors::AppError;

/// List operations reports (managers and admins)
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Report snapshot", body = Vec<ReportSummary>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not in the allow-list", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
#[instrument]
pub async fn get_reports() -> Result<Json<Vec<ReportSummary>>, AppError> {
    Ok(Json(vec![
        ReportSummary {
            title: "Incident digest".to_string(),
            period: "2025-W31".to_string(),
            open_incidents: 4,
            resolved_incidents: 17,
        },
        ReportSummary {
            title: "Incident digest".to_string(),
            period: "2025-W30".to_string(),
            open_incidents: 9,
            resolved_incidents: 12,
        },
    ]))
}
