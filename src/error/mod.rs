use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    // Construction errors
    #[error("Bad credentials: {0}")]
    BadCredentials(String),

    // The gateway answered, but not with a success status
    #[error("Gateway API error ({status}): {body}")]
    Api { status: u16, body: String },

    // The gateway answered with a success status and an undecodable body
    #[error("Bad gateway response ({status}): {reason}")]
    BadResponse { status: u16, reason: String },

    // The gateway could not be reached
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GatewayError {
    /// Numeric code attached to the error: the HTTP status for errors the
    /// gateway answered with, `None` otherwise.
    pub fn code(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } | GatewayError::BadResponse { status, .. } => {
                Some(*status)
            }
            GatewayError::Network(e) => e.status().map(|s| s.as_u16()),
            GatewayError::BadCredentials(_) | GatewayError::Config(_) => None,
        }
    }

    /// True when the failure happened before the gateway produced an answer.
    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
