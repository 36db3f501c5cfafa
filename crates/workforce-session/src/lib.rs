//! Session ownership for the workforce client.
//!
//! This crate provides:
//! - Login against the backend and persistence of the resulting session
//! - Restore of a persisted session at startup
//! - Logout, and session teardown when the server rejects the credential
//! - Explicit FSM-based session state
//! - The credential source the API client reads before every request

mod auth_fsm;
mod error;
mod model;
mod session;

pub use auth_fsm::auth_machine;
pub use auth_fsm::{AuthMachine, AuthMachineInput, AuthMachineState, AuthState};
pub use error::{SessionError, SessionResult};
pub use model::{Session, SessionSnapshot, User};
pub use session::{AuthStateCallback, SessionManager, LOGIN_PATH};
