use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use opsdesk_models::auth::{LoginRequest, LoginResponse};
use opsdesk_models::users::{User, UserRole};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::projects::model::Project;
use crate::modules::reports::model::ReportSummary;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::me,
        crate::modules::projects::controller::get_projects,
        crate::modules::reports::controller::get_reports,
        crate::modules::users::controller::get_users,
    ),
    components(
        schemas(
            User,
            UserRole,
            LoginRequest,
            LoginResponse,
            Project,
            ReportSummary,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and identity endpoints"),
        (name = "Projects", description = "Dashboard project snapshots"),
        (name = "Reports", description = "Operations report snapshots"),
        (name = "Users", description = "Identity directory (admin only)")
    ),
    info(
        title = "Opsdesk API",
        version = "0.1.0",
        description = "Role-gated operations dashboard API with JWT-based authentication.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
