//! Authenticated HTTP client for the workforce REST API.
//!
//! Every call reads the current bearer credential from a [`CredentialSource`],
//! dispatches exactly once with the configured timeout, and either decodes the
//! JSON body or fails with a normalized [`ApiError`]. A 401 response also fires
//! the registered unauthorized observer before the error reaches the caller.

use crate::credentials::CredentialSource;
use crate::error::{ApiError, ApiResult};
use crate::request::{join_url, OutboundRequest, RequestOptions};
use parking_lot::Mutex;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

/// Callback fired when the server rejects the credential.
pub type UnauthorizedObserver = Arc<dyn Fn() + Send + Sync>;

/// Placeholder for body-less `post`/`put` calls.
pub const NO_BODY: Option<&()> = None;

fn summarize_response_body(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("len={},digest={:016x}", body.len(), hasher.finish())
}

/// Pull the `message` string out of an error body, if there is one.
fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    // 204 and other empty successes decode as JSON null.
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };
    serde_json::from_slice(body).map_err(ApiError::decode)
}

/// Authenticated REST client.
///
/// Cheap to clone; clones share the HTTP connection pool and the observer slot.
#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    credentials: Arc<dyn CredentialSource>,
    observer: Arc<Mutex<Option<UnauthorizedObserver>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_observer", &self.has_unauthorized_observer())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` with a uniform per-call timeout.
    ///
    /// # Errors
    /// Returns a client-kind `ApiError` if the base address is not an
    /// absolute http(s) URL or the HTTP stack cannot be initialized.
    pub fn new(
        base_url: &str,
        timeout_ms: u64,
        credentials: Arc<dyn CredentialSource>,
    ) -> ApiResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::client(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::client(format!(
                "Unsupported URL scheme '{}' in base URL",
                parsed.scheme()
            )));
        }

        let timeout = Duration::from_millis(timeout_ms);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::client(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            credentials,
            observer: Arc::new(Mutex::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Register the callback fired on 401 responses, replacing any previous one.
    pub fn set_unauthorized_observer<F>(&self, observer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.observer.lock() = Some(Arc::new(observer));
    }

    /// Remove the unauthorized observer.
    pub fn clear_unauthorized_observer(&self) {
        *self.observer.lock() = None;
    }

    pub fn has_unauthorized_observer(&self) -> bool {
        self.observer.lock().is_some()
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.send(OutboundRequest::get(path).with_options(options))
            .await
    }

    /// POST with an optional JSON body; pass [`NO_BODY`] for none.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = OutboundRequest::post(path).with_options(options);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.send(request).await
    }

    /// PUT with an optional JSON body; pass [`NO_BODY`] for none.
    pub async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = OutboundRequest::put(path).with_options(options);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.send(OutboundRequest::delete(path).with_options(options))
            .await
    }

    /// Execute one request descriptor. Single attempt, no retry.
    pub async fn send<T: DeserializeOwned>(&self, request: OutboundRequest) -> ApiResult<T> {
        let OutboundRequest {
            method,
            path,
            body,
            options,
        } = request;
        let url = join_url(&self.base_url, &path);

        let mut builder = self
            .http_client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");

        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }

        let credential = self.credentials.credential().await;
        let authenticated = credential.is_some();
        if let Some(token) = credential {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        debug!(method = %method, path = %path, authenticated, "Dispatching API request");

        let response = builder.send().await.map_err(|e| {
            let err = ApiError::from(e);
            warn!(method = %method, path = %path, error = %err, "API request failed without response");
            err
        })?;

        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::network)?;
            debug!(method = %method, path = %path, status = status.as_u16(), "API request succeeded");
            return decode_body(&bytes);
        }

        // A status line arrived, so an unreadable error body still counts as a server error.
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(method = %method, path = %path, status = status.as_u16(), error = %e, "Error response body unreadable");
                Default::default()
            }
        };

        let err = ApiError::server(status.as_u16(), extract_error_message(&bytes));
        let body_summary = summarize_response_body(&bytes);

        if status == StatusCode::UNAUTHORIZED {
            warn!(method = %method, path = %path, body_summary = %body_summary, "Credential rejected by server");
            self.notify_unauthorized();
        } else {
            error!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                body_summary = %body_summary,
                "API request returned an error status"
            );
        }

        Err(err)
    }

    fn notify_unauthorized(&self) {
        // Clone out of the slot so the observer may re-register without deadlocking.
        let observer = self.observer.lock().clone();
        match observer {
            Some(observer) => observer(),
            None => debug!("No unauthorized observer registered"),
        }
    }
}
