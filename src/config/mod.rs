//! Configuration modules for the Opsdesk API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with development defaults.
//!
//! - [`cors`]: Allowed origins for browser clients
//! - [`jwt`]: Signing secret and token lifetime

pub mod cors;
pub mod jwt;
