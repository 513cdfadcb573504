use serde::de::DeserializeOwned;

use super::request::{Endpoint, GatewayRequest};
use super::transport::{Headers, ReqwestTransport, Transport, TransportResponse};
use super::ApiResult;
use crate::config::{Config, HttpConfig, TEST_BASE_URL};
use crate::error::{GatewayError, GatewayResult};
use crate::models::{Credential, RequestParams};

/// Headers sent with every gateway request.
pub const DEFAULT_HEADERS: &Headers = &[
    ("Accept", "application/json"),
    ("Accept-Encoding", "gzip,deflate,sdch"),
    ("Cache-Control", "no-cache"),
    ("Content-Type", "application/json"),
];

/// Client for the acquiring gateway REST API.
///
/// Holds the merchant credential and attaches it to every request. Nothing
/// changes after construction, so one client can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct GatewayClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    credential: Credential,
    credential_params: RequestParams,
}

impl GatewayClient<ReqwestTransport> {
    /// Creates a client for the test gateway.
    ///
    /// Exactly one of `username` + `password` or `token` must be given.
    pub fn new(
        username: Option<&str>,
        password: Option<&str>,
        token: Option<&str>,
    ) -> GatewayResult<Self> {
        let credential = Credential::resolve(username, password, token)?;
        let transport = ReqwestTransport::new(&HttpConfig::default())?;

        Ok(Self::with_transport(credential, TEST_BASE_URL, transport))
    }

    pub fn from_config(config: &Config) -> GatewayResult<Self> {
        let gateway = &config.gateway;
        let credential = Credential::resolve(
            gateway.username.as_deref(),
            gateway.password.as_deref(),
            gateway.token.as_deref(),
        )?;
        let transport = ReqwestTransport::new(&config.http)?;

        Ok(Self::with_transport(credential, gateway.base_url.as_str(), transport))
    }
}

impl<T: Transport> GatewayClient<T> {
    pub fn with_transport(credential: Credential, base_url: impl Into<String>, transport: T) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let credential_params = credential.to_params();

        Self {
            transport,
            base_url,
            credential,
            credential_params,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Parameters merged under every operation's own fields.
    pub fn credential_params(&self) -> &RequestParams {
        &self.credential_params
    }

    pub fn default_headers(&self) -> &'static Headers {
        DEFAULT_HEADERS
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Sends an operation: its fields over the credential params, POSTed to
    /// the operation's endpoint.
    pub async fn execute<R: GatewayRequest>(&self, request: &R) -> GatewayResult<ApiResult> {
        let url = self.url_for(R::ENDPOINT);
        let params = RequestParams::merge(&self.credential_params, &request.to_params());

        self.post(&url, &params).await
    }

    pub async fn get<D: DeserializeOwned>(
        &self,
        url: &str,
        params: &RequestParams,
    ) -> GatewayResult<D> {
        tracing::debug!(method = "GET", url = %url, "Sending gateway request");

        let response = self.transport.get(url, DEFAULT_HEADERS, params).await?;

        handle_response(url, response)
    }

    pub async fn post<D: DeserializeOwned>(
        &self,
        url: &str,
        params: &RequestParams,
    ) -> GatewayResult<D> {
        tracing::debug!(method = "POST", url = %url, "Sending gateway request");

        let response = self.transport.post(url, DEFAULT_HEADERS, params).await?;

        handle_response(url, response)
    }
}

fn handle_response<D: DeserializeOwned>(url: &str, response: TransportResponse) -> GatewayResult<D> {
    if !response.is_success() {
        tracing::error!("Gateway API error: {} {} - {}", response.status, url, response.body);

        return Err(GatewayError::Api {
            status: response.status,
            body: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| {
        tracing::error!(
            "Failed to parse gateway response: {} - Body: {}",
            e,
            response.body
        );
        GatewayError::BadResponse {
            status: response.status,
            reason: e.to_string(),
        }
    })
}
