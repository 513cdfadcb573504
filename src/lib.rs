//! Client for the SBER acquiring gateway REST API.
//!
//! Every operation is a single authenticated POST to the gateway, answered
//! with the decoded JSON body:
//!
//! ```rust,no_run
//! use sber_payments::GatewayClient;
//!
//! # async fn example() -> sber_payments::error::GatewayResult<()> {
//! let client = GatewayClient::new(Some("shop-api"), Some("secret"), None)?;
//!
//! let registered = client
//!     .register_order("ORD-1001", 150_00, "https://shop.example/paid")
//!     .await?;
//! println!("{}", registered["formUrl"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{GatewayError, GatewayResult};
pub use models::{Credential, ParamValue, RequestParams};
pub use services::gateway::{ApiResult, Endpoint, GatewayClient, GatewayRequest, Transport};
