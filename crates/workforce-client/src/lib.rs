//! Authenticated HTTP client for the workforce backend.
//!
//! This crate provides:
//! - [`ApiClient`]: GET/POST/PUT/DELETE against a configured base address with
//!   bearer credential attachment and a uniform timeout
//! - [`CredentialSource`]: the asynchronous token lookup consulted per request
//! - [`ApiError`]: one normalized error shape (server / network / client / decode)
//! - a single unauthorized-observer slot for reacting to credential expiry
//! - [`RecordId`]: identifiers that arrive as either strings or integers

mod client;
mod credentials;
mod error;
mod request;
mod wire;

pub use client::{ApiClient, UnauthorizedObserver, NO_BODY};
pub use credentials::{CredentialSource, StaticCredential};
pub use error::{
    ApiError, ApiErrorKind, ApiResult, CLIENT_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
    SERVER_ERROR_MESSAGE, UNAUTHORIZED_STATUS,
};
pub use request::{OutboundRequest, RequestOptions};
pub use wire::RecordId;

/// Re-export the HTTP method type used by [`OutboundRequest::new`].
pub use reqwest::Method;
