use std::fmt;

use crate::error::{GatewayError, GatewayResult};
use crate::models::RequestParams;

/// Merchant credentials accepted by the gateway.
///
/// The gateway authenticates a merchant either with the login/password of a
/// service account or with a token. Exactly one form is sent with every
/// request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    UsernamePassword { username: String, password: String },
    Token { token: String },
}

impl Credential {
    pub fn username_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::UsernamePassword {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        Credential::Token {
            token: token.into(),
        }
    }

    /// Picks the credential form from optional inputs.
    ///
    /// Empty strings count as absent. Succeeds only when exactly one form is
    /// complete and nothing from the other form is supplied.
    pub fn resolve(
        username: Option<&str>,
        password: Option<&str>,
        token: Option<&str>,
    ) -> GatewayResult<Self> {
        let username = username.filter(|s| !s.is_empty());
        let password = password.filter(|s| !s.is_empty());
        let token = token.filter(|s| !s.is_empty());

        match (username, password, token) {
            (Some(username), Some(password), None) => {
                Ok(Credential::username_password(username, password))
            }
            (None, None, Some(token)) => Ok(Credential::token(token)),
            (None, None, None) => Err(GatewayError::BadCredentials(
                "either username/password or token must be provided".to_string(),
            )),
            (_, _, Some(_)) => Err(GatewayError::BadCredentials(
                "use username/password or token, not both".to_string(),
            )),
            (_, _, None) => Err(GatewayError::BadCredentials(
                "username and password must be provided together".to_string(),
            )),
        }
    }

    /// The parameters this credential contributes to every request.
    pub fn to_params(&self) -> RequestParams {
        match self {
            Credential::UsernamePassword { username, password } => RequestParams::new()
                .with("userName", username)
                .with("password", password),
            Credential::Token { token } => RequestParams::new().with("token", token),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Credential::UsernamePassword { .. } => "username_password",
            Credential::Token { .. } => "token",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::UsernamePassword { username, .. } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credential::Token { .. } => f
                .debug_struct("Token")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
