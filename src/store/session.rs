//! Session state container: authentication lifecycle and token
//! persistence.
//!
//! `login`, `register` and `logout` record failures in the slice *and*
//! re-signal them to the caller, so a form can stay open and react
//! immediately. `fetch_current_user` only records; a failure there means
//! the session is invalid and both `user` and `token` are cleared.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, UserRecord};
use crate::config::TokenCache;
use crate::store::SliceCell;

const LOGIN_FALLBACK: &str = "Unable to sign in";
const REGISTER_FALLBACK: &str = "Unable to create the account";
const LOGOUT_FALLBACK: &str = "Unable to sign out";
const SESSION_FALLBACK: &str = "Your session has expired";

/// The session slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSlice {
    pub user: Option<UserRecord>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionSlice {
    /// True once a user is attached to the session.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// State container for the authenticated session.
#[derive(Clone)]
pub struct SessionStore {
    api: Arc<ApiClient>,
    tokens: TokenCache,
    cell: SliceCell<SessionSlice>,
}

impl SessionStore {
    /// Create a store, rehydrating any persisted token.
    ///
    /// A rehydrated token is installed on the API client but the user
    /// stays unknown until `fetch_current_user` confirms the session.
    pub fn new(api: Arc<ApiClient>, tokens: TokenCache) -> Self {
        let mut slice = SessionSlice::default();
        match tokens.load() {
            Ok(Some(token)) => {
                api.set_token(Some(token.clone()));
                slice.token = Some(token);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "failed to read persisted token"),
        }
        Self {
            api,
            tokens,
            cell: SliceCell::new(slice),
        }
    }

    /// Current slice, for rendering.
    pub fn snapshot(&self) -> SessionSlice {
        self.cell.snapshot()
    }

    /// Drop all session state. Intended for test isolation.
    pub fn reset(&self) {
        self.api.set_token(None);
        self.cell.replace(SessionSlice::default());
    }

    fn begin(&self) -> u64 {
        self.cell.begin(|slice| {
            slice.loading = true;
            slice.error = None;
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let generation = self.begin();
        match self.api.login(email, password).await {
            Ok(auth) => {
                self.install_session(generation, auth.user, auth.token);
                Ok(())
            }
            Err(err) => {
                let message = err.message_or(LOGIN_FALLBACK);
                tracing::warn!(kind = err.kind.as_str(), "login failed");
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.error = Some(message);
                });
                Err(err)
            }
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let generation = self.begin();
        match self.api.register(name, email, password).await {
            Ok(auth) => {
                self.install_session(generation, auth.user, auth.token);
                Ok(())
            }
            Err(err) => {
                let message = err.message_or(REGISTER_FALLBACK);
                tracing::warn!(kind = err.kind.as_str(), "registration failed");
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.error = Some(message);
                });
                Err(err)
            }
        }
    }

    /// Sign out. Local state and the persisted token are cleared only
    /// when the server acknowledges the logout.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let generation = self.begin();
        match self.api.logout().await {
            Ok(()) => {
                self.discard_token();
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.user = None;
                    slice.token = None;
                });
                Ok(())
            }
            Err(err) => {
                let message = err.message_or(LOGOUT_FALLBACK);
                tracing::warn!(kind = err.kind.as_str(), "logout failed");
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.error = Some(message);
                });
                Err(err)
            }
        }
    }

    /// Refresh the authenticated user from the server.
    ///
    /// Failure invalidates the whole session: both `user` and `token`
    /// are cleared and the persisted token is discarded. The error is
    /// recorded in the slice only; callers observe it there.
    pub async fn fetch_current_user(&self) {
        let generation = self.begin();
        match self.api.current_user().await {
            Ok(user) => {
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.user = Some(user);
                });
            }
            Err(err) => {
                let message = err.message_or(SESSION_FALLBACK);
                tracing::warn!(kind = err.kind.as_str(), "session refresh failed");
                self.discard_token();
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.user = None;
                    slice.token = None;
                    slice.error = Some(message);
                });
            }
        }
    }

    fn install_session(&self, generation: u64, user: UserRecord, token: String) {
        if let Err(err) = self.tokens.save(&token) {
            tracing::warn!(error = %err, "failed to persist token");
        }
        self.api.set_token(Some(token.clone()));
        self.cell.settle(generation, |slice| {
            slice.loading = false;
            slice.user = Some(user);
            slice.token = Some(token);
        });
    }

    fn discard_token(&self) {
        if let Err(err) = self.tokens.clear() {
            tracing::warn!(error = %err, "failed to clear persisted token");
        }
        self.api.set_token(None);
    }
}
