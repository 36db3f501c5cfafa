//! Session state machine using rust-fsm.
//!
//! ## State Diagram
//!
//! ```text
//!                 ┌─────────────────┐
//!   ┌───────────► │   NotLoggedIn   │ (initial) ◄───────────────┐
//!   │             └──┬───────────┬──┘                           │
//!   │ NoSession      │           │ LoginAttempt                 │
//!   │  RestoreAttempt│           ▼                              │
//! ┌─┴───────────┐ ◄──┘    ┌─────────────┐  LoginFailed          │
//! │  Restoring  │         │  LoggingIn  │ ──────────────────────┤
//! └─┬───────────┘         └──────┬──────┘                       │
//!   │ SessionFound               │ LoginSuccess                 │
//!   │                            ▼                              │
//!   │                     ┌─────────────┐  CredentialRejected   │
//!   └───────────────────► │  LoggedIn   │ ──────────────────────┤
//!                         └──────┬──────┘                       │
//!                                │ LogoutRequested              │
//!                                ▼                              │
//!                         ┌─────────────┐  LogoutComplete       │
//!                         │ LoggingOut  │ ──────────────────────┘
//!                         └─────────────┘
//! ```

use rust_fsm::*;
use serde::{Deserialize, Serialize};

state_machine! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub auth_machine(NotLoggedIn)

    NotLoggedIn => {
        RestoreAttempt => Restoring,
        LoginAttempt => LoggingIn
    },
    Restoring => {
        SessionFound => LoggedIn,
        NoSession => NotLoggedIn
    },
    LoggingIn => {
        LoginSuccess => LoggedIn,
        LoginFailed => NotLoggedIn
    },
    LoggedIn => {
        // Server answered 401 for the current credential
        CredentialRejected => NotLoggedIn,
        LogoutRequested => LoggingOut
    },
    LoggingOut => {
        LogoutComplete => NotLoggedIn
    }
}

pub use auth_machine::Input as AuthMachineInput;
pub use auth_machine::State as AuthMachineState;
pub use auth_machine::StateMachine as AuthMachine;

/// Externally visible session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    NotLoggedIn,
    /// Reading a persisted session.
    Restoring,
    LoggingIn,
    LoggedIn,
    LoggingOut,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthState::LoggedIn)
    }

    /// Returns true if the state is a transient/in-progress state.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AuthState::Restoring | AuthState::LoggingIn | AuthState::LoggingOut
        )
    }
}

impl From<&AuthMachineState> for AuthState {
    fn from(state: &AuthMachineState) -> Self {
        match state {
            AuthMachineState::NotLoggedIn => AuthState::NotLoggedIn,
            AuthMachineState::Restoring => AuthState::Restoring,
            AuthMachineState::LoggingIn => AuthState::LoggingIn,
            AuthMachineState::LoggedIn => AuthState::LoggedIn,
            AuthMachineState::LoggingOut => AuthState::LoggingOut,
        }
    }
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AuthState::NotLoggedIn => "not logged in",
            AuthState::Restoring => "restoring",
            AuthState::LoggingIn => "logging in",
            AuthState::LoggedIn => "logged in",
            AuthState::LoggingOut => "logging out",
        };
        f.write_str(label)
    }
}
