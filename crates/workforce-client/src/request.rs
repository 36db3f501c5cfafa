//! Outbound request descriptors.

use crate::error::{ApiError, ApiResult};
use reqwest::Method;
use serde::Serialize;

/// Per-call options: extra headers and query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// A single outbound call: method, path, optional JSON body and options.
///
/// Built per call and consumed by [`crate::ApiClient::send`].
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) options: RequestOptions,
}

impl OutboundRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body. Serialization failures are local client errors.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            ApiError::client(format!("Failed to serialize request body: {}", e))
        })?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Join a base address and a request path with exactly one slash between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("https://hr.example.com/api/", "/leave-requests"),
            "https://hr.example.com/api/leave-requests"
        );
        assert_eq!(
            join_url("https://hr.example.com/api", "profile"),
            "https://hr.example.com/api/profile"
        );
        assert_eq!(join_url("https://hr.example.com/api", ""), "https://hr.example.com/api");
    }

    #[test]
    fn options_accumulate_in_order() {
        let options = RequestOptions::new()
            .header("X-Request-Source", "cli")
            .query("status", "pending")
            .query("page", "2");
        assert_eq!(options.headers.len(), 1);
        assert_eq!(options.query[1], ("page".to_string(), "2".to_string()));
    }

    #[test]
    fn json_body_is_serialized_eagerly() {
        let mut body = HashMap::new();
        body.insert("reason", "Family event");
        let request = OutboundRequest::post("/leave-requests").json(&body).unwrap();
        assert!(request.has_body());
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.path(), "/leave-requests");
    }

    #[test]
    fn unserializable_body_is_a_client_error() {
        // Maps with non-string keys cannot be represented as JSON objects.
        let mut body = HashMap::new();
        body.insert(vec![1u8], "x");
        let err = OutboundRequest::post("/x").json(&body).unwrap_err();
        assert_eq!(err.kind(), crate::ApiErrorKind::Client);
    }
}
