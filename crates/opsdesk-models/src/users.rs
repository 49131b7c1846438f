//! User identity models and role definitions.
//!
//! The [`User`] struct is the identity consumed by both sides of the system:
//! the server embeds its `id` and `role` into access tokens, the client
//! caches it as the current session identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user known to the identity directory.
///
/// The directory itself (registration, credential storage) lives outside
/// this system; Opsdesk only consumes identities. The `role` carried here is
/// the one frozen into a token at issuance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// The fixed role enumeration.
///
/// Serialized as `"user"` / `"manager"` / `"admin"` both in JSON bodies and
/// inside token claims. Authorization compares roles by **exact membership**
/// in a route's allow-list; there is no implicit hierarchy on the server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Manager,
    Admin,
}

impl UserRole {
    /// Every role, for iteration in tests and seeders.
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Manager, UserRole::Admin];

    /// The wire form of the role, matching its serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
