//! Session ownership with FSM-based state tracking.
//!
//! `SessionManager` is the one place that creates and destroys sessions. The
//! FSM tracks transient states (restoring, logging in, logging out) that are
//! never persisted, while the token and user live in the [`SessionVault`]. It
//! also serves as the API client's credential source and, once attached, as
//! its unauthorized observer.

use crate::auth_fsm::{AuthMachine, AuthMachineInput, AuthState};
use crate::model::{LoginRequest, LoginResponse, Session, SessionSnapshot, User};
use crate::{SessionError, SessionResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use workforce_client::{ApiClient, CredentialSource, RequestOptions};
use workforce_storage::SessionVault;

/// Path of the login endpoint, relative to the API base address.
pub const LOGIN_PATH: &str = "/auth/login";

/// Callback type for session state change notifications.
pub type AuthStateCallback = Box<dyn Fn(AuthState) + Send + Sync>;

struct Inner {
    fsm: AuthMachine,
    token: Option<String>,
    user: Option<User>,
}

/// Owner of the authenticated session.
pub struct SessionManager {
    vault: SessionVault,
    inner: Mutex<Inner>,
    state_callback: Mutex<Option<AuthStateCallback>>,
}

impl SessionManager {
    /// Create a session manager over the given vault. Starts logged out; call
    /// [`restore`](Self::restore) to pick up a persisted session.
    pub fn new(vault: SessionVault) -> Self {
        Self {
            vault,
            inner: Mutex::new(Inner {
                fsm: AuthMachine::new(),
                token: None,
                user: None,
            }),
            state_callback: Mutex::new(None),
        }
    }

    /// Set a callback to be notified of state changes.
    pub fn set_state_callback(&self, callback: AuthStateCallback) {
        *self.state_callback.lock() = Some(callback);
    }

    /// Register this manager as `client`'s unauthorized observer.
    ///
    /// The observer holds a weak reference, so the client never keeps the
    /// manager alive.
    pub fn attach(self: &Arc<Self>, client: &ApiClient) {
        let manager = Arc::downgrade(self);
        client.set_unauthorized_observer(move || {
            if let Some(manager) = manager.upgrade() {
                manager.handle_unauthorized();
            }
        });
    }

    /// Get the current FSM state.
    pub fn state(&self) -> AuthState {
        AuthState::from(self.inner.lock().fsm.state())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock();
        SessionSnapshot {
            state: AuthState::from(inner.fsm.state()),
            token: inner.token.clone(),
            user: inner.user.clone(),
        }
    }

    /// True iff both a token and a user are held.
    pub fn is_authenticated(&self) -> bool {
        let inner = self.inner.lock();
        inner.token.is_some() && inner.user.is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.lock().user.clone()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.snapshot().session()
    }

    /// Transition the FSM and notify the callback if the state changed.
    fn transition(&self, input: &AuthMachineInput) -> SessionResult<AuthState> {
        let mut inner = self.inner.lock();
        let old_state = AuthState::from(inner.fsm.state());

        inner.fsm.consume(input).map_err(|_| {
            SessionError::InvalidStateTransition(format!(
                "Cannot apply {:?} in state {:?}",
                input, old_state
            ))
        })?;

        let new_state = AuthState::from(inner.fsm.state());
        drop(inner);

        if old_state != new_state {
            debug!(
                old_state = ?old_state,
                new_state = ?new_state,
                "Session state transition"
            );
            self.notify_state_change(new_state);
        }

        Ok(new_state)
    }

    fn notify_state_change(&self, state: AuthState) {
        if let Some(callback) = self.state_callback.lock().as_ref() {
            callback(state);
        }
    }

    fn set_session(&self, token: Option<String>, user: Option<User>) {
        let mut inner = self.inner.lock();
        inner.token = token;
        inner.user = user;
    }

    fn clear_vault_logged(&self) {
        if let Err(e) = self.vault.clear() {
            error!(error = %e, "Failed to clear persisted session");
        }
    }

    /// Restore a persisted session.
    ///
    /// - NotLoggedIn -> Restoring -> SessionFound -> LoggedIn
    /// - NotLoggedIn -> Restoring -> NoSession -> NotLoggedIn
    ///
    /// A partial session (token without user or the reverse, or an unreadable
    /// user record) is cleared. Returns whether a session is now active.
    pub fn restore(&self) -> SessionResult<bool> {
        if self.state().is_logged_in() {
            return Ok(true);
        }

        self.transition(&AuthMachineInput::RestoreAttempt)?;

        let token = match self.vault.token() {
            Ok(token) => token,
            Err(e) => {
                self.transition(&AuthMachineInput::NoSession)?;
                return Err(e.into());
            }
        };
        let user = match self.vault.user::<User>() {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Stored user record is unreadable");
                None
            }
        };

        match (token, user) {
            (Some(token), Some(user)) => {
                info!(user_id = %user.id, "Restored persisted session");
                self.set_session(Some(token), Some(user));
                self.transition(&AuthMachineInput::SessionFound)?;
                Ok(true)
            }
            (token, user) => {
                if token.is_some() || user.is_some() {
                    info!("Persisted session is incomplete, clearing it");
                } else {
                    info!("No persisted session found");
                }
                let cleared = self.vault.clear();
                self.transition(&AuthMachineInput::NoSession)?;
                cleared?;
                Ok(false)
            }
        }
    }

    /// Log in with email and password.
    ///
    /// - NotLoggedIn -> LoggingIn -> LoginSuccess -> LoggedIn
    /// - NotLoggedIn -> LoggingIn -> LoginFailed -> NotLoggedIn
    pub async fn login(
        &self,
        client: &ApiClient,
        email: &str,
        password: &str,
    ) -> SessionResult<User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SessionError::InvalidCredentials(
                "email is required".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(SessionError::InvalidCredentials(
                "password is required".to_string(),
            ));
        }
        if self.state().is_logged_in() {
            return Err(SessionError::AlreadyLoggedIn);
        }

        self.transition(&AuthMachineInput::LoginAttempt)?;

        let session = match request_session(client, email, password).await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.transition(&AuthMachineInput::LoginFailed)?;
                return Err(e);
            }
        };

        if let Err(e) = self.persist(&session) {
            error!(error = %e, "Failed to persist session after login");
            self.clear_vault_logged();
            self.transition(&AuthMachineInput::LoginFailed)?;
            return Err(e);
        }

        let user = session.user.clone();
        self.set_session(Some(session.token), Some(session.user));
        self.transition(&AuthMachineInput::LoginSuccess)?;
        info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    fn persist(&self, session: &Session) -> SessionResult<()> {
        self.vault.set_token(&session.token)?;
        self.vault.set_user(&session.user)?;
        Ok(())
    }

    /// Log out and clear the session. Logging out while logged out is a no-op
    /// apart from clearing whatever is left in storage.
    pub fn logout(&self) -> SessionResult<()> {
        let was_logged_in = self.state().is_logged_in();
        if was_logged_in {
            self.transition(&AuthMachineInput::LogoutRequested)?;
        }

        let cleared = self.vault.clear();
        self.set_session(None, None);

        if was_logged_in {
            self.transition(&AuthMachineInput::LogoutComplete)?;
            info!("Logged out");
        }
        cleared?;
        Ok(())
    }

    /// React to the server rejecting the credential: destroy the session.
    pub fn handle_unauthorized(&self) {
        warn!("Server rejected the session credential, clearing session");
        self.clear_vault_logged();
        self.set_session(None, None);

        if self.state().is_logged_in() {
            if let Err(e) = self.transition(&AuthMachineInput::CredentialRejected) {
                warn!(error = %e, "Could not record credential rejection");
            }
        }
    }
}

async fn request_session(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> SessionResult<Session> {
    let response: LoginResponse = client
        .post(
            LOGIN_PATH,
            Some(&LoginRequest { email, password }),
            RequestOptions::default(),
        )
        .await?;

    if response.token.trim().is_empty() {
        return Err(SessionError::InvalidResponse(
            "empty token".to_string(),
        ));
    }

    Ok(Session {
        token: response.token,
        user: response.user,
    })
}

#[async_trait]
impl CredentialSource for SessionManager {
    /// Reads the secure store on every lookup.
    ///
    /// The read is a small synchronous file access performed inline on the
    /// calling task, once per request.
    async fn credential(&self) -> Option<String> {
        match self.vault.token() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read credential, sending request unauthenticated");
                None
            }
        }
    }
}
