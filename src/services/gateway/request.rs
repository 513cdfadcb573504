use crate::models::RequestParams;

/// Gateway REST methods, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Register,
    RegisterPreAuth,
    Deposit,
    Reverse,
    Refund,
    OrderStatusExtended,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Register => "register.do",
            Endpoint::RegisterPreAuth => "registerPreAuth.do",
            Endpoint::Deposit => "deposit.do",
            Endpoint::Reverse => "reverse.do",
            Endpoint::Refund => "refund.do",
            Endpoint::OrderStatusExtended => "getOrderStatusExtended.do",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// An operation that can be sent to the gateway.
///
/// Implementors only describe their own fields; credentials are merged in by
/// the client.
pub trait GatewayRequest {
    const ENDPOINT: Endpoint;

    fn to_params(&self) -> RequestParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Register.path(), "register.do");
        assert_eq!(Endpoint::RegisterPreAuth.path(), "registerPreAuth.do");
        assert_eq!(Endpoint::Deposit.path(), "deposit.do");
        assert_eq!(Endpoint::Reverse.path(), "reverse.do");
        assert_eq!(Endpoint::Refund.path(), "refund.do");
        assert_eq!(
            Endpoint::OrderStatusExtended.to_string(),
            "getOrderStatusExtended.do"
        );
    }
}
