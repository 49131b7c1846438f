//! # Opsdesk Models
//!
//! Domain models and DTOs shared by the Opsdesk API server and the
//! `opsdesk-client` library.
//!
//! # Modules
//!
//! - [`auth`]: Login request/response DTOs
//! - [`users`]: The [`users::User`] identity and the [`users::UserRole`]
//!   enumeration
//!
//! Keeping these types in one crate guarantees the server and the client
//! agree on the wire representation of identities and roles.

pub mod auth;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse};
pub use users::{User, UserRole};
