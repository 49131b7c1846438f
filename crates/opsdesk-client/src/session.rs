//! The client session: current identity, token, and loading state.
//!
//! One [`SessionStore`] exists per client process, owned by the application
//! root and passed by reference to the route guards; there is no ambient
//! global. Guards read immutable [`Session`] snapshots, and all mutation
//! goes through `rehydrate` / `login` / `logout`.

use std::sync::Mutex;

use opsdesk_models::users::User;
use tracing::{debug, warn};

use crate::api::AuthApi;
use crate::error::ClientError;
use crate::storage::TokenStorage;

/// Immutable snapshot handed to route guards.
///
/// `is_authenticated` is true iff a token is present and its last
/// verification against the server succeeded. While `loading` is true the
/// snapshot is provisional and guards defer their decision.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub identity: Option<User>,
    pub loading: bool,
    pub is_authenticated: bool,
}

#[derive(Debug)]
struct SessionState {
    identity: Option<User>,
    token: Option<String>,
    loading: bool,
    is_authenticated: bool,
    /// Bumped by logout/login; an in-flight rehydration whose captured
    /// generation no longer matches is discarded on completion.
    generation: u64,
}

impl SessionState {
    /// A fresh session is "loading" until the first rehydration (or login)
    /// resolves, so guards defer instead of issuing a spurious redirect on
    /// the initial render.
    fn initial() -> Self {
        Self {
            identity: None,
            token: None,
            loading: true,
            is_authenticated: false,
            generation: 0,
        }
    }
}

/// Owns session state and the two collaborators it is built on: the auth
/// API and the persisted token storage.
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    state: Mutex<SessionState>,
}

impl<A: AuthApi, S: TokenStorage> SessionStore<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            state: Mutex::new(SessionState::initial()),
        }
    }

    /// Snapshot of the current session for guard evaluation.
    pub fn session(&self) -> Session {
        let state = self.state.lock().unwrap();
        Session {
            identity: state.identity.clone(),
            loading: state.loading,
            is_authenticated: state.is_authenticated,
        }
    }

    /// The cached token, for attaching to outgoing requests.
    pub fn token(&self) -> Option<String> {
        self.state.lock().unwrap().token.clone()
    }

    /// Restores the session from a persisted token at startup.
    ///
    /// Any failure (unreadable storage, a rejected token, or the server
    /// being unreachable) resolves to the unauthenticated state and clears
    /// the persisted token: never fail-open. Always ends with
    /// `loading == false` (unless a newer generation took over mid-flight).
    pub async fn rehydrate(&self) -> Result<(), ClientError> {
        let (generation, token) = {
            let mut state = self.state.lock().unwrap();
            let token = match self.storage.load() {
                Ok(Some(token)) => token,
                Ok(None) => {
                    state.loading = false;
                    return Ok(());
                }
                Err(err) => {
                    state.loading = false;
                    state.is_authenticated = false;
                    let _ = self.storage.clear();
                    return Err(err);
                }
            };
            state.loading = true;
            (state.generation, token)
        };

        let result = self.api.fetch_identity(&token).await;

        let mut state = self.state.lock().unwrap();
        if state.generation != generation {
            // A logout or fresh login superseded this attempt; its result,
            // success or not, no longer describes the current session.
            debug!("Discarding stale rehydration result");
            return Ok(());
        }
        state.loading = false;

        match result {
            Ok(identity) => {
                debug!(user_id = %identity.id, "Session rehydrated");
                state.identity = Some(identity);
                state.token = Some(token);
                state.is_authenticated = true;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Rehydration failed, clearing session");
                state.identity = None;
                state.token = None;
                state.is_authenticated = false;
                if let Err(clear_err) = self.storage.clear() {
                    warn!(error = %clear_err, "Failed to clear persisted token");
                }
                Err(err)
            }
        }
    }

    /// Logs in through the auth collaborator.
    ///
    /// On success the token is persisted and the session becomes
    /// authenticated; on any failure the session is left untouched and the
    /// error surfaces to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let response = self.api.login(email, password).await?;

        self.storage.save(&response.access_token)?;

        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        state.identity = Some(response.user.clone());
        state.token = Some(response.access_token);
        state.is_authenticated = true;
        state.loading = false;

        Ok(response.user)
    }

    /// Ends the session synchronously: no network step.
    ///
    /// Clears the persisted token and the cached identity; the bumped
    /// generation makes any rehydration still in flight moot.
    pub fn logout(&self) {
        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        state.identity = None;
        state.token = None;
        state.is_authenticated = false;
        state.loading = false;

        if let Err(err) = self.storage.clear() {
            warn!(error = %err, "Failed to clear persisted token on logout");
        }
    }
}
