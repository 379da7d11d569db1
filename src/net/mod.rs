//! Network boundary for the dashboard client.
//!
//! ARCHITECTURE
//! ============
//! Every outbound API call goes through the [`ApiTransport`] trait. In the
//! default configuration the transport is [`mock::MockNetwork`], which
//! resolves requests against in-memory fixtures; [`http::HttpTransport`]
//! speaks to a real backend over the same seam, so the session layer never
//! knows which one it is talking to.

pub mod api;
pub mod fixtures;
pub mod http;
pub mod mock;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

/// HTTP method subset used by the dashboard endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// An outbound API request: method, site-relative path, optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }
}

/// An API response: status code plus optional JSON body.
///
/// Failure responses from the auth endpoints carry no body at all, so the
/// body stays an `Option` instead of defaulting to `null`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    /// 200 with a JSON body.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body: Some(body) }
    }

    /// Bodyless response with the given status.
    #[must_use]
    pub fn status_only(status: u16) -> Self {
        Self { status, body: None }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("no handler for {method} {path} and no upstream transport configured")]
    NoUpstream { method: Method, path: String },
    #[error("http request failed: {0}")]
    Http(String),
    #[error("invalid response payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// The seam between the client and whatever answers its API calls.
///
/// Implementations must be usable behind `Arc<dyn ApiTransport>` from the
/// session layer and the views alike.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
