//! HTTP transport used by the gateway client.
//!
//! The client only needs two capabilities from the network: a GET and a POST
//! that return the status and raw body. Keeping them behind [`Transport`]
//! lets tests substitute a recording double for the real `reqwest` stack.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::HttpConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::models::RequestParams;

/// Header name/value pairs attached to a request.
pub type Headers = [(&'static str, &'static str)];

/// Status and body of an HTTP answer, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a GET request with `params` in the query string.
    async fn get(
        &self,
        url: &str,
        headers: &Headers,
        params: &RequestParams,
    ) -> GatewayResult<TransportResponse>;

    /// Sends a POST request with `params` in the query string.
    async fn post(
        &self,
        url: &str,
        headers: &Headers,
        params: &RequestParams,
    ) -> GatewayResult<TransportResponse>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpConfig) -> GatewayResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self { http_client })
    }

    /// Wraps an existing client, keeping whatever settings it was built with.
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> GatewayResult<TransportResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();

        // Status is known from here on; body failures are bad responses.
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read gateway response body: {} - Status: {}", e, status);
            GatewayError::BadResponse {
                status,
                reason: e.to_string(),
            }
        })?;

        Ok(TransportResponse { status, body })
    }
}

fn apply_headers(mut request: reqwest::RequestBuilder, headers: &Headers) -> reqwest::RequestBuilder {
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    request
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &Headers,
        params: &RequestParams,
    ) -> GatewayResult<TransportResponse> {
        let request = apply_headers(self.http_client.get(url), headers).query(params);
        self.execute(request).await
    }

    async fn post(
        &self,
        url: &str,
        headers: &Headers,
        params: &RequestParams,
    ) -> GatewayResult<TransportResponse> {
        let request = apply_headers(self.http_client.post(url), headers).query(params);
        self.execute(request).await
    }
}
