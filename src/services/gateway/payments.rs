use super::request::{Endpoint, GatewayRequest};
use super::{ApiResult, GatewayClient, Transport};
use crate::error::GatewayResult;
use crate::models::{ParamValue, RequestParams};

/// Completion of a pre-authorized order (`deposit.do`).
///
/// An amount of `0` captures the whole pre-authorized sum. The field is
/// always sent, zero included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    pub order_id: String,
    pub amount: i64,
}

impl DepositRequest {
    pub fn new(order_id: impl Into<String>, amount: i64) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
        }
    }

    pub fn full(order_id: impl Into<String>) -> Self {
        Self::new(order_id, 0)
    }
}

impl GatewayRequest for DepositRequest {
    const ENDPOINT: Endpoint = Endpoint::Deposit;

    fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with("orderId", &self.order_id)
            .with("amount", self.amount)
    }
}

/// Cancellation of a payment (`reverse.do`).
///
/// Without an amount the whole payment is cancelled. A reversal can only be
/// attempted once; the gateway rejects a second attempt after a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseRequest {
    pub order_id: String,
    pub amount: Option<i64>,
    pub extra: RequestParams,
}

impl ReverseRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            amount: None,
            extra: RequestParams::new(),
        }
    }

    pub fn partial(order_id: impl Into<String>, amount: i64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::new(order_id)
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.insert(key, value);
        self
    }
}

impl GatewayRequest for ReverseRequest {
    const ENDPOINT: Endpoint = Endpoint::Reverse;

    fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new().with("orderId", &self.order_id);
        params.insert_opt("amount", self.amount);
        params.overlay(&self.extra);
        params
    }
}

/// Return of captured funds (`refund.do`).
///
/// An amount of `0` refunds the whole order. Several partial refunds are
/// allowed as long as their sum stays within the original charge; the gateway
/// enforces that limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundRequest {
    pub order_id: String,
    pub amount: i64,
}

impl RefundRequest {
    pub fn new(order_id: impl Into<String>, amount: i64) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
        }
    }

    pub fn full(order_id: impl Into<String>) -> Self {
        Self::new(order_id, 0)
    }
}

impl GatewayRequest for RefundRequest {
    const ENDPOINT: Endpoint = Endpoint::Refund;

    fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with("orderId", &self.order_id)
            .with("amount", self.amount)
    }
}

impl<T: Transport> GatewayClient<T> {
    pub async fn deposit(&self, order_id: &str, amount: i64) -> GatewayResult<ApiResult> {
        self.execute(&DepositRequest::new(order_id, amount)).await
    }

    pub async fn reverse(&self, order_id: &str, amount: Option<i64>) -> GatewayResult<ApiResult> {
        let request = match amount {
            Some(amount) => ReverseRequest::partial(order_id, amount),
            None => ReverseRequest::new(order_id),
        };

        self.execute(&request).await
    }

    pub async fn refund(&self, order_id: &str, amount: i64) -> GatewayResult<ApiResult> {
        self.execute(&RefundRequest::new(order_id, amount)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deposit_sends_zero_amount() {
        let params = DepositRequest::full("order-1").to_params();
        assert_eq!(params.get("amount").and_then(|v| v.as_i64()), Some(0));
        assert_eq!(params.get("orderId").and_then(|v| v.as_str()), Some("order-1"));
    }

    #[test]
    fn test_full_refund_sends_zero_amount() {
        let params = RefundRequest::full("order-1").to_params();
        assert_eq!(params.get("amount").and_then(|v| v.as_i64()), Some(0));
    }

    #[test]
    fn test_reverse_omits_amount_when_absent() {
        let params = ReverseRequest::new("order-1").to_params();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["orderId"]);

        let params = ReverseRequest::partial("order-1", 250).to_params();
        assert_eq!(params.get("amount").and_then(|v| v.as_i64()), Some(250));
    }

    #[test]
    fn test_reverse_extra_params() {
        let params = ReverseRequest::new("order-1")
            .param("language", "en")
            .to_params();
        assert_eq!(params.get("language").and_then(|v| v.as_str()), Some("en"));
    }
}
