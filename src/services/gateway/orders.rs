use super::request::{Endpoint, GatewayRequest};
use super::{ApiResult, GatewayClient, Transport};
use crate::error::GatewayResult;
use crate::models::{ParamValue, RequestParams};

/// Order registration (`register.do`).
///
/// `amount` is in minor currency units (kopecks, cents).
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterOrderRequest {
    pub order_number: String,
    pub amount: i64,
    pub return_url: String,
    /// Additional gateway parameters, e.g. `failUrl` or `language`.
    pub extra: RequestParams,
}

impl RegisterOrderRequest {
    pub fn new(order_number: impl Into<String>, amount: i64, return_url: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            amount,
            return_url: return_url.into(),
            extra: RequestParams::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.insert(key, value);
        self
    }
}

impl GatewayRequest for RegisterOrderRequest {
    const ENDPOINT: Endpoint = Endpoint::Register;

    fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new()
            .with("orderNumber", &self.order_number)
            .with("amount", self.amount)
            .with("returnUrl", &self.return_url);
        params.overlay(&self.extra);
        params
    }
}

/// Order registration with a pre-authorization hold (`registerPreAuth.do`).
///
/// Funds are held, not charged, until a deposit captures them.
#[derive(Debug, Clone, PartialEq)]
pub struct PreAuthOrderRequest {
    pub order_number: String,
    pub amount: i64,
    pub return_url: String,
    pub description: Option<String>,
    pub extra: RequestParams,
}

impl PreAuthOrderRequest {
    pub fn new(order_number: impl Into<String>, amount: i64, return_url: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            amount,
            return_url: return_url.into(),
            description: None,
            extra: RequestParams::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.insert(key, value);
        self
    }
}

impl GatewayRequest for PreAuthOrderRequest {
    const ENDPOINT: Endpoint = Endpoint::RegisterPreAuth;

    fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new()
            .with("orderNumber", &self.order_number)
            .with("amount", self.amount)
            .with("returnUrl", &self.return_url);
        params.insert_opt("description", self.description.as_deref());
        params.overlay(&self.extra);
        params
    }
}

/// Extended order status query (`getOrderStatusExtended.do`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusRequest {
    pub order_id: String,
}

impl OrderStatusRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }
}

impl GatewayRequest for OrderStatusRequest {
    const ENDPOINT: Endpoint = Endpoint::OrderStatusExtended;

    fn to_params(&self) -> RequestParams {
        RequestParams::new().with("orderId", &self.order_id)
    }
}

impl<T: Transport> GatewayClient<T> {
    pub async fn register_order(
        &self,
        order_number: &str,
        amount: i64,
        return_url: &str,
    ) -> GatewayResult<ApiResult> {
        self.execute(&RegisterOrderRequest::new(order_number, amount, return_url))
            .await
    }

    pub async fn register_order_pre_auth(
        &self,
        order_number: &str,
        amount: i64,
        return_url: &str,
        description: Option<&str>,
    ) -> GatewayResult<ApiResult> {
        let mut request = PreAuthOrderRequest::new(order_number, amount, return_url);
        request.description = description.map(str::to_string);

        self.execute(&request).await
    }

    pub async fn get_order_status(&self, order_id: &str) -> GatewayResult<ApiResult> {
        self.execute(&OrderStatusRequest::new(order_id)).await
    }
}
