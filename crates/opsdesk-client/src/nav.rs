//! Navigation visibility: which links to show for the current role.
//!
//! This is display logic, not a security boundary: the server's
//! authorization middleware stays authoritative and uses exact allow-lists.
//! For menu purposes an ordered hierarchy (`user < manager < admin`) reads
//! better than repeating full lists on every link, and a link the UI hides
//! would only ever have produced a 403.

use opsdesk_models::users::UserRole;

/// Display rank of a role. Deliberately private: nothing outside the
/// navigation filter may order roles.
fn rank(role: UserRole) -> u8 {
    match role {
        UserRole::User => 0,
        UserRole::Manager => 1,
        UserRole::Admin => 2,
    }
}

/// True if `role` meets `required_level` in the display hierarchy.
pub fn capability(role: UserRole, required_level: UserRole) -> bool {
    rank(role) >= rank(required_level)
}

/// A navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub min_role: UserRole,
}

/// The standard Opsdesk menu.
pub const DEFAULT_LINKS: &[NavLink] = &[
    NavLink {
        label: "Projects",
        path: "/projects",
        min_role: UserRole::User,
    },
    NavLink {
        label: "Reports",
        path: "/reports",
        min_role: UserRole::Manager,
    },
    NavLink {
        label: "Users",
        path: "/admin/users",
        min_role: UserRole::Admin,
    },
];

/// Filters `links` down to what `role` should see.
pub fn visible_links<'a>(role: UserRole, links: &'a [NavLink]) -> Vec<&'a NavLink> {
    links
        .iter()
        .filter(|link| capability(role, link.min_role))
        .collect()
}
