//! HTTP transport for a real backend.
//!
//! The session layer and views only ever see [`ApiTransport`], so pointing
//! the app at a live server is a construction-time swap (see `AppState`).

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, ApiTransport, Method, TransportError};

pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, client: reqwest::Client::new() }
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let body = if bytes.is_empty() { None } else { Some(serde_json::from_slice(&bytes)?) };
        Ok(ApiResponse { status, body })
    }
}
