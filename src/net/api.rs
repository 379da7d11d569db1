//! Typed API calls over an [`ApiTransport`].
//!
//! ERROR HANDLING
//! ==============
//! Auth calls return `Ok(None)` for a clean rejection (401/400, no body) and
//! reserve `Err` for transport-level failures, so the session layer can tell
//! "wrong password" apart from "backend unreachable" before collapsing both
//! into its own error taxonomy.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ApiRequest, ApiResponse, ApiTransport, TransportError};

/// The authenticated actor as returned by the auth endpoints and persisted
/// by the client store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u64,
    pub email: String,
    pub name: String,
}

/// Headline metric tiles for the dashboard overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_users: u64,
    pub active_sessions: u64,
    pub sales_revenue: u64,
}

/// Labeled series payload shared by the chart endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

/// Which of the read-only series endpoints to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Sales,
    Users,
    Categories,
}

impl SeriesKind {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Sales => "/api/dashboard/sales",
            Self::Users => "/api/dashboard/users",
            Self::Categories => "/api/dashboard/categories",
        }
    }
}

/// `POST /api/auth/login`. `Ok(None)` means the credentials were rejected.
pub async fn login(
    transport: &dyn ApiTransport,
    email: &str,
    password: &str,
) -> Result<Option<AuthUser>, TransportError> {
    let request = ApiRequest::post("/api/auth/login", json!({ "email": email, "password": password }));
    auth_response(transport.dispatch(request).await?)
}

/// `POST /api/auth/register`. `Ok(None)` means the request was rejected
/// (typically a duplicate email).
pub async fn register(
    transport: &dyn ApiTransport,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Option<AuthUser>, TransportError> {
    let request = ApiRequest::post(
        "/api/auth/register",
        json!({ "name": name, "email": email, "password": password }),
    );
    auth_response(transport.dispatch(request).await?)
}

fn auth_response(response: ApiResponse) -> Result<Option<AuthUser>, TransportError> {
    if !response.is_success() {
        return Ok(None);
    }
    let Some(body) = response.body else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_value(body)?))
}

/// `GET /api/dashboard/metrics`.
pub async fn fetch_metrics(transport: &dyn ApiTransport) -> Result<Metrics, TransportError> {
    let response = transport.dispatch(ApiRequest::get("/api/dashboard/metrics")).await?;
    decode_body(response)
}

/// `GET` one of the series endpoints.
pub async fn fetch_series(transport: &dyn ApiTransport, kind: SeriesKind) -> Result<Series, TransportError> {
    let response = transport.dispatch(ApiRequest::get(kind.path())).await?;
    decode_body(response)
}

fn decode_body<T: serde::de::DeserializeOwned>(response: ApiResponse) -> Result<T, TransportError> {
    let body = response.body.unwrap_or(serde_json::Value::Null);
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
