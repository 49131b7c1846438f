//! Route guards: render / redirect decisions from session state.
//!
//! Guards are pure over a [`Session`] snapshot and re-evaluated on every
//! navigation attempt or session change; a decision is terminal for that
//! attempt (no retry loop). While the session is loading, every guard
//! defers instead of redirecting, so rehydration never causes a
//! redirect-then-correct flicker.

use opsdesk_models::users::UserRole;

use crate::session::Session;

/// Where a guard sends a navigation it refuses to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The login surface.
    Login,
    /// The access-denied surface.
    AccessDenied,
    /// The default landing surface.
    Home,
}

/// Outcome of evaluating a guard for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Rehydration in flight: render a placeholder, decide later.
    Pending,
    /// Render the guarded content.
    Render,
    /// Redirect instead of rendering; terminal for this attempt.
    Redirect(RedirectTarget),
}

/// Requires an authenticated session.
pub struct AuthGuard;

impl AuthGuard {
    pub fn evaluate(session: &Session) -> GuardDecision {
        if session.loading {
            return GuardDecision::Pending;
        }
        if !session.is_authenticated {
            return GuardDecision::Redirect(RedirectTarget::Login);
        }
        GuardDecision::Render
    }
}

/// Requires an authenticated session whose role is in the allow-list.
///
/// Membership is exact, mirroring the server's authorization semantics.
/// This guard is a UX courtesy; the server remains authoritative.
pub struct RoleGuard {
    allowed_roles: Vec<UserRole>,
}

impl RoleGuard {
    pub fn new(allowed_roles: impl IntoIterator<Item = UserRole>) -> Self {
        Self {
            allowed_roles: allowed_roles.into_iter().collect(),
        }
    }

    pub fn evaluate(&self, session: &Session) -> GuardDecision {
        match AuthGuard::evaluate(session) {
            GuardDecision::Render => {}
            other => return other,
        }

        let authorized = session
            .identity
            .as_ref()
            .is_some_and(|identity| self.allowed_roles.contains(&identity.role));

        if authorized {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(RedirectTarget::AccessDenied)
        }
    }
}

/// Public-only pages (login, register): an authenticated session is sent
/// back to the landing surface instead.
pub struct InverseGuard;

impl InverseGuard {
    pub fn evaluate(session: &Session) -> GuardDecision {
        if session.loading {
            return GuardDecision::Pending;
        }
        if session.is_authenticated {
            return GuardDecision::Redirect(RedirectTarget::Home);
        }
        GuardDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdesk_models::users::User;
    use uuid::Uuid;

    fn authenticated_session(role: UserRole) -> Session {
        Session {
            identity: Some(User {
                id: Uuid::from_u128(1),
                name: "Test User".to_string(),
                email: "test@opsdesk.test".to_string(),
                role,
            }),
            loading: false,
            is_authenticated: true,
        }
    }

    fn anonymous_session() -> Session {
        Session::default()
    }

    fn loading_session() -> Session {
        Session {
            identity: None,
            loading: true,
            is_authenticated: false,
        }
    }

    #[test]
    fn test_auth_guard_defers_while_loading() {
        assert_eq!(
            AuthGuard::evaluate(&loading_session()),
            GuardDecision::Pending
        );
    }

    #[test]
    fn test_auth_guard_redirects_anonymous_to_login() {
        assert_eq!(
            AuthGuard::evaluate(&anonymous_session()),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
    }

    #[test]
    fn test_auth_guard_renders_authenticated() {
        assert_eq!(
            AuthGuard::evaluate(&authenticated_session(UserRole::User)),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_role_guard_exact_membership() {
        let guard = RoleGuard::new([UserRole::Manager, UserRole::Admin]);

        assert_eq!(
            guard.evaluate(&authenticated_session(UserRole::Manager)),
            GuardDecision::Render
        );
        assert_eq!(
            guard.evaluate(&authenticated_session(UserRole::Admin)),
            GuardDecision::Render
        );
        assert_eq!(
            guard.evaluate(&authenticated_session(UserRole::User)),
            GuardDecision::Redirect(RedirectTarget::AccessDenied)
        );
    }

    #[test]
    fn test_role_guard_admin_not_implicitly_in_manager_only_list() {
        let guard = RoleGuard::new([UserRole::Manager]);
        assert_eq!(
            guard.evaluate(&authenticated_session(UserRole::Admin)),
            GuardDecision::Redirect(RedirectTarget::AccessDenied)
        );
    }

    #[test]
    fn test_role_guard_checks_authentication_first() {
        let guard = RoleGuard::new([UserRole::Admin]);

        assert_eq!(
            guard.evaluate(&anonymous_session()),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
        assert_eq!(guard.evaluate(&loading_session()), GuardDecision::Pending);
    }

    #[test]
    fn test_inverse_guard_renders_for_anonymous() {
        assert_eq!(
            InverseGuard::evaluate(&anonymous_session()),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_inverse_guard_redirects_authenticated_home() {
        assert_eq!(
            InverseGuard::evaluate(&authenticated_session(UserRole::User)),
            GuardDecision::Redirect(RedirectTarget::Home)
        );
    }

    #[test]
    fn test_inverse_guard_defers_while_loading() {
        assert_eq!(
            InverseGuard::evaluate(&loading_session()),
            GuardDecision::Pending
        );
    }
}
