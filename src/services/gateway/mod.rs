mod client;
mod orders;
mod payments;
mod request;
mod transport;

pub use client::{GatewayClient, DEFAULT_HEADERS};
pub use orders::*;
pub use payments::*;
pub use request::{Endpoint, GatewayRequest};
pub use transport::{Headers, ReqwestTransport, Transport, TransportResponse};

/// Decoded JSON body of a gateway answer.
///
/// Gateway-level failures may still be reported inside a successful body
/// (`errorCode` / `errorMessage`); those are left for the caller to inspect.
pub type ApiResult = serde_json::Value;
