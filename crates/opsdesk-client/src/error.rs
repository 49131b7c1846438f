use thiserror::Error;

/// Errors surfaced by the client layer.
///
/// Everything the session store cannot positively verify collapses to the
/// unauthenticated state (fail-closed); these variants exist so callers can
/// tell the user *why*: bad credentials, a dead session, or the server
/// being unreachable.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login rejected the supplied credentials.
    #[error("invalid email or password")]
    CredentialsInvalid,

    /// The presented token was missing, malformed, or expired.
    #[error("not authenticated")]
    Unauthenticated,

    /// The token was valid but the role is not in the operation's allow-list.
    #[error("access denied")]
    Forbidden,

    /// The server could not be reached or returned garbage.
    #[error("network failure: {0}")]
    Network(String),

    /// Persisted token storage could not be read or written.
    #[error("token storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// A status code outside the contract.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),
}
