use serde::Deserialize;
use std::time::Duration;

/// Test environment of the gateway.
pub const TEST_BASE_URL: &str = "https://3dsec.sberbank.ru/payment/rest/";

/// Production environment of the gateway.
pub const PRODUCTION_BASE_URL: &str = "https://securepayments.sberbank.ru/payment/rest/";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub http: HttpConfig,
}

/// Gateway location and merchant credentials.
///
/// Credentials are kept as loaded; which form is used is decided when the
/// client is built.
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: TEST_BASE_URL.to_string(),
            username: None,
            password: None,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::default())
    }

    /// Values stay strings here: credentials such as `007` must reach the
    /// gateway unchanged. Integer keys are parsed by `read_u64`.
    fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(environment.separator("_"))
            .build()?;

        Self::from_source(&config)
    }

    /// Maps an already built configuration source.
    ///
    /// Keys follow the environment naming, e.g. `SBER_BASE_URL` becomes
    /// `sber.base.url`.
    pub fn from_source(config: &config::Config) -> Result<Self, config::ConfigError> {
        let defaults = HttpConfig::default();

        Ok(Config {
            gateway: GatewayConfig {
                base_url: config
                    .get_string("sber.base.url")
                    .unwrap_or_else(|_| TEST_BASE_URL.to_string()),
                username: config.get_string("sber.username").ok(),
                password: config.get_string("sber.password").ok(),
                token: config.get_string("sber.token").ok(),
            },
            http: HttpConfig {
                timeout_secs: read_u64(config, "http.timeout.secs", defaults.timeout_secs)?,
                connect_timeout_secs: read_u64(
                    config,
                    "http.connect.timeout.secs",
                    defaults.connect_timeout_secs,
                )?,
            },
        })
    }
}

/// Reads an optional non-negative integer, rejecting values that are present
/// but malformed.
fn read_u64(config: &config::Config, key: &str, default: u64) -> Result<u64, config::ConfigError> {
    match config.get_int(key) {
        Ok(value) => u64::try_from(value)
            .map_err(|_| config::ConfigError::Message(format!("{} must not be negative", key))),
        Err(config::ConfigError::NotFound(_)) => Ok(default),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> config::Config {
        let mut builder = config::Config::builder();
        for (key, value) in pairs {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_source(&source(&[("sber.token", "tok-123")])).unwrap();

        assert_eq!(config.gateway.base_url, TEST_BASE_URL);
        assert_eq!(config.gateway.token.as_deref(), Some("tok-123"));
        assert!(config.gateway.username.is_none());
        assert_eq!(config.http.timeout(), Duration::from_secs(30));
        assert_eq!(config.http.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_source(&source(&[
            ("sber.base.url", PRODUCTION_BASE_URL),
            ("sber.username", "shop-api"),
            ("sber.password", "secret"),
            ("http.timeout.secs", "5"),
            ("http.connect.timeout.secs", "2"),
        ]))
        .unwrap();

        assert_eq!(config.gateway.base_url, PRODUCTION_BASE_URL);
        assert_eq!(config.gateway.username.as_deref(), Some("shop-api"));
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 2);
    }

    #[test]
    fn test_environment_keeps_credentials_verbatim() {
        let mut vars = config::Map::new();
        vars.insert("SBER_USERNAME".to_string(), "true".to_string());
        vars.insert("SBER_PASSWORD".to_string(), "007".to_string());
        vars.insert("SBER_TOKEN".to_string(), "1e3".to_string());
        vars.insert("HTTP_TIMEOUT_SECS".to_string(), "15".to_string());

        let config =
            Config::from_environment(config::Environment::default().source(Some(vars))).unwrap();

        assert_eq!(config.gateway.username.as_deref(), Some("true"));
        assert_eq!(config.gateway.password.as_deref(), Some("007"));
        assert_eq!(config.gateway.token.as_deref(), Some("1e3"));
        assert_eq!(config.http.timeout_secs, 15);
        assert_eq!(config.http.connect_timeout_secs, 10);
    }

    #[test]
    fn test_malformed_timeout_is_an_error() {
        let result = Config::from_source(&source(&[("http.timeout.secs", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = GatewayConfig {
            password: Some("secret".to_string()),
            token: Some("tok-123".to_string()),
            ..GatewayConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(!rendered.contains("tok-123"));
    }
}
