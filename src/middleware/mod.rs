//! Middleware and extractors for authentication and authorization.
//!
//! - [`auth`]: the [`auth::AuthUser`] extractor, which validates the bearer
//!   token and exposes the verified claims to handlers
//! - [`role`]: exact-set role checks layered onto protected routers
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token; any failure is a 401 and the
//!    handler never runs
//! 3. A role layer compares the verified role against the route's
//!    allow-list; a miss is a 403 and the handler never runs
//! 4. The handler reads subject id and role from the claims

pub mod auth;
pub mod role;
