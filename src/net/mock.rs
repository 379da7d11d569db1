//! Mock network service — the in-process stand-in for a real backend.
//!
//! DESIGN
//! ======
//! Requests are matched against a fixed endpoint table; anything unmatched
//! bypasses to the optional upstream transport rather than being answered
//! with a fabricated status. Auth endpoints consult the [`UserStore`]
//! capability, read-only dashboard endpoints return canned payloads.
//!
//! ERROR HANDLING
//! ==============
//! Handled endpoints never produce a `TransportError`; rejections are
//! expressed as bodyless 401/400 responses exactly like the backend they
//! emulate. Only an unmatched request with no upstream errors out.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use super::fixtures::{self, UserStore};
use super::{ApiRequest, ApiResponse, ApiTransport, Method, TransportError};

pub struct MockNetwork {
    users: Arc<dyn UserStore>,
    upstream: Option<Arc<dyn ApiTransport>>,
}

impl MockNetwork {
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users, upstream: None }
    }

    /// Forward unmatched requests to `upstream` instead of failing them.
    #[must_use]
    pub fn with_upstream(mut self, upstream: Arc<dyn ApiTransport>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    fn login(&self, body: Option<&Value>) -> ApiResponse {
        let Some((email, password)) = body.and_then(credentials_from) else {
            return ApiResponse::status_only(401);
        };

        match self.users.find_by_credentials(&email, &password) {
            Some(user) => {
                debug!(email = %user.email, "mock login matched fixture user");
                ApiResponse::ok(json!({ "id": user.id, "email": user.email, "name": user.name }))
            }
            None => {
                debug!(%email, "mock login rejected");
                ApiResponse::status_only(401)
            }
        }
    }

    fn register(&self, body: Option<&Value>) -> ApiResponse {
        let Some((name, email, password)) = body.and_then(registration_from) else {
            return ApiResponse::status_only(400);
        };

        if self.users.find_by_email(&email).is_some() {
            debug!(%email, "mock register rejected duplicate email");
            return ApiResponse::status_only(400);
        }

        let user = self.users.insert(&name, &email, &password);
        debug!(id = user.id, email = %user.email, "mock register created fixture user");
        ApiResponse::ok(json!({ "id": user.id, "email": user.email, "name": user.name }))
    }
}

fn credentials_from(body: &Value) -> Option<(String, String)> {
    let email = body.get("email")?.as_str()?.to_owned();
    let password = body.get("password")?.as_str()?.to_owned();
    Some((email, password))
}

fn registration_from(body: &Value) -> Option<(String, String, String)> {
    let name = body.get("name")?.as_str()?.to_owned();
    let (email, password) = credentials_from(body)?;
    Some((name, email, password))
}

#[async_trait]
impl ApiTransport for MockNetwork {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let handled = match (request.method, request.path.as_str()) {
            (Method::Post, "/api/auth/login") => Some(self.login(request.body.as_ref())),
            (Method::Post, "/api/auth/register") => Some(self.register(request.body.as_ref())),
            (Method::Get, "/api/dashboard/metrics") => Some(ApiResponse::ok(fixtures::metrics_payload())),
            (Method::Get, "/api/dashboard/sales") => Some(ApiResponse::ok(fixtures::sales_series())),
            (Method::Get, "/api/dashboard/users") => Some(ApiResponse::ok(fixtures::users_series())),
            (Method::Get, "/api/dashboard/categories") => Some(ApiResponse::ok(fixtures::categories_series())),
            _ => None,
        };

        match handled {
            Some(response) => Ok(response),
            None => match &self.upstream {
                Some(upstream) => {
                    debug!(method = %request.method, path = %request.path, "bypassing to upstream");
                    upstream.dispatch(request).await
                }
                None => Err(TransportError::NoUpstream { method: request.method, path: request.path }),
            },
        }
    }
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
