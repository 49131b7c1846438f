//! # Opsdesk Client
//!
//! Session, route-guard, and navigation layer for Opsdesk frontends.
//!
//! The server decides what a caller may do; this crate decides what a
//! frontend should *show* while staying fail-closed about it:
//!
//! - [`session::SessionStore`]: caches identity + token, rehydrates from
//!   persisted storage at startup, exposes login/logout
//! - [`guards`]: `AuthGuard`, `RoleGuard`, and the public-only
//!   `InverseGuard`: pure render/redirect decisions over session snapshots
//! - [`nav`]: role-based link visibility (display sugar, never access
//!   control)
//!
//! # Wiring
//!
//! ```ignore
//! use opsdesk_client::{FileTokenStorage, HttpAuthApi, SessionStore};
//!
//! let store = SessionStore::new(
//!     HttpAuthApi::new("http://localhost:3000"),
//!     FileTokenStorage::new(data_dir.join("session-token")),
//! );
//!
//! // Startup: resolve the persisted session before the first render.
//! let _ = store.rehydrate().await;
//!
//! // Per navigation attempt:
//! match AuthGuard::evaluate(&store.session()) {
//!     GuardDecision::Render => { /* show the page */ }
//!     GuardDecision::Pending => { /* placeholder */ }
//!     GuardDecision::Redirect(target) => { /* navigate */ }
//! }
//! ```

pub mod api;
pub mod error;
pub mod guards;
pub mod nav;
pub mod session;
pub mod storage;

// Re-export the shared models and commonly used types at crate root
pub use api::{AuthApi, HttpAuthApi};
pub use error::ClientError;
pub use guards::{AuthGuard, GuardDecision, InverseGuard, RedirectTarget, RoleGuard};
pub use nav::{DEFAULT_LINKS, NavLink, capability, visible_links};
pub use opsdesk_models;
pub use session::{Session, SessionStore};
pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage};
