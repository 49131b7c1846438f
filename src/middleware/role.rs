//! Role-based authorization layers.
//!
//! Role comparison is **exact set membership**: a route gated on
//! `[Manager, Admin]` admits exactly those two roles, and `Admin` does not
//! satisfy a `[Manager]` gate unless listed. Every protected router declares
//! its own allow-list; there is no inheritance between routes and no
//! hierarchy on the server. (The client's navigation filter uses a display
//! hierarchy, but that is never consulted for access.)

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use opsdesk_models::users::UserRole;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that admits the request only if the verified role is in
/// `allowed_roles`.
///
/// Authentication failures surface as 401 before the role check; a verified
/// token with a role outside the list is a 403. In both cases the wrapped
/// handler never runs.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, &allowed_roles)?;

    // Expose the verified claims to the wrapped handler via Extension.
    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

/// Gate for member-level routes: every role is listed explicitly.
pub async fn require_member(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        vec![UserRole::User, UserRole::Manager, UserRole::Admin],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Gate for reporting routes (managers and admins).
pub async fn require_reports_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        vec![UserRole::Manager, UserRole::Admin],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Gate for admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Checks that the authenticated user's role is one of `allowed_roles`.
///
/// Also usable directly from handler logic when a route needs a check that
/// the router layer doesn't express.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let user_role = auth_user.role();

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles, user_role
        )));
    }

    Ok(())
}
