//! # Opsdesk API
//!
//! A role-gated operations dashboard API built with Rust and Axum.
//!
//! ## Overview
//!
//! The interesting part of Opsdesk is its authentication and authorization
//! core:
//!
//! - **Token service**: issues signed, time-limited JWTs encoding a subject
//!   id and role; verifies presented tokens into claims or a precise
//!   failure kind (malformed / expired / invalid signature)
//! - **Authorization middleware**: gates each protected router behind an
//!   explicit allow-list of roles, with exact-set membership semantics
//! - **Identity directory**: an in-memory, seeded stand-in for the external
//!   identity store (one sample identity per role)
//!
//! Business endpoints (`/api/projects`, `/api/reports`, `/api/users`) serve
//! static snapshots; they exist to be gated, not to be interesting.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Env-loaded configuration (JWT, CORS)
//! ├── middleware/       # AuthUser extractor and role layers
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login, current-identity lookup
//! │   ├── users/       # Seeded identity directory (admin-gated listing)
//! │   ├── projects/    # Sample member-level data
//! │   └── reports/     # Sample manager/admin data
//! └── utils/           # Errors, JWT, password hashing
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs` for
//! HTTP handlers, `router.rs` for route wiring, `model.rs`/`service.rs`
//! where needed.
//!
//! ## Roles
//!
//! | Role | `/api/projects` | `/api/reports` | `/api/users` |
//! |---------|---|---|---|
//! | user    | ✓ | ✗ | ✗ |
//! | manager | ✓ | ✓ | ✗ |
//! | admin   | ✓ | ✓ | ✓ |
//!
//! Each column is an explicit allow-list; an admin passes the reports gate
//! because `admin` is listed there, not because admin outranks manager.
//!
//! ## Authentication
//!
//! `POST /api/auth/login` exchanges credentials for an access token
//! (default lifetime: 1 hour). The role inside a token is frozen at
//! issuance; a role change takes effect at the next login. Tokens are never
//! revoked individually: expiry is the only termination mechanism.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! CORS_ALLOWED_ORIGINS=http://localhost:5173
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar` while the
//! server is running.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export the shared models crate for convenience
pub use opsdesk_models;
