//! Client configuration.
//!
//! Credentials, merchant routing values, the endpoint table and HTTP settings are loaded once
//! and stay immutable for the life of a [`PaycellClient`](crate::PaycellClient).

use std::path::Path;

use serde::Deserialize;

use crate::{
    endpoint::{EndpointConfig, Mode},
    error::{PaycellError, Result},
    secret::Secret,
    transport::HttpConfig,
};

/// Environment variable overriding [`Credentials::application_name`].
pub const ENV_APPLICATION_NAME: &str = "PAYCELL_APPLICATION_NAME";
/// Environment variable overriding [`Credentials::application_password`].
pub const ENV_APPLICATION_PASSWORD: &str = "PAYCELL_APPLICATION_PASSWORD";
/// Environment variable overriding [`Credentials::store_key`].
pub const ENV_STORE_KEY: &str = "PAYCELL_STORE_KEY";
/// Environment variable overriding [`MerchantSettings::merchant_code`].
pub const ENV_MERCHANT_CODE: &str = "PAYCELL_MERCHANT_CODE";

/// Root client configuration.
///
/// # Examples
///
/// ```
/// use paycell::{PaycellConfig, endpoint::Mode};
///
/// let toml = r#"
///     mode = "prod"
///
///     [credentials]
///     application_name = "MYSHOP"
///     application_password = "secret"
///     store_key = "KEY123"
///
///     [merchant]
///     merchant_code = "1234"
/// "#;
///
/// let config = PaycellConfig::from_toml(toml).unwrap();
/// assert_eq!(config.mode, Mode::Prod);
/// assert_eq!(config.merchant.reference_prefix, "666");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PaycellConfig {
    /// Mode a new client starts in.
    #[serde(default)]
    pub mode: Mode,

    /// Application identity and shared secrets.
    pub credentials: Credentials,

    /// Merchant routing values.
    pub merchant: MerchantSettings,

    /// Endpoint table.
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Application identity and shared secrets issued by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Application name sent in every request header.
    pub application_name: String,
    /// Application password sent in provisioning request headers.
    pub application_password: Secret,
    /// Store key mixed into authenticity hashes.
    pub store_key: Secret,
}

/// Merchant routing values.
#[derive(Debug, Clone, Deserialize)]
pub struct MerchantSettings {
    /// Merchant code assigned by the gateway.
    pub merchant_code: String,

    /// Numeric prefix of generated reference numbers.
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,

    /// Mobile-payment agreement id offered to subscribers.
    #[serde(default = "default_eula_id")]
    pub eula_id: String,
}

fn default_reference_prefix() -> String {
    "666".to_owned()
}

fn default_eula_id() -> String {
    "17".to_owned()
}

impl PaycellConfig {
    /// Configuration for the public test gateway.
    ///
    /// Uses the sandbox application `PAYCELLTEST` and merchant `9998`.
    #[must_use]
    pub fn sandbox() -> Self {
        Self {
            mode: Mode::Test,
            credentials: Credentials {
                application_name: "PAYCELLTEST".to_owned(),
                application_password: Secret::new("PaycellTestPassword"),
                store_key: Secret::new("PAYCELL12345"),
            },
            merchant: MerchantSettings {
                merchant_code: "9998".to_owned(),
                reference_prefix: default_reference_prefix(),
                eula_id: default_eula_id(),
            },
            endpoints: EndpointConfig::default(),
            http: HttpConfig::default(),
        }
    }

    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing fails or configuration validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| PaycellError::ConfigError(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PaycellError::ConfigError(format!("cannot read config file: {e}")))?;
        Self::from_toml(&content)
    }

    /// Replaces credentials with values from `lookup`.
    ///
    /// `lookup` receives the `PAYCELL_*` variable names; keys it returns `None` for keep
    /// their current value.
    ///
    /// # Examples
    ///
    /// ```
    /// use paycell::PaycellConfig;
    ///
    /// let config = PaycellConfig::sandbox().apply_env_overrides(|key| {
    ///     (key == "PAYCELL_MERCHANT_CODE").then(|| "4321".to_owned())
    /// });
    /// assert_eq!(config.merchant.merchant_code, "4321");
    /// ```
    #[must_use]
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_APPLICATION_NAME) {
            self.credentials.application_name = name;
        }
        if let Some(password) = lookup(ENV_APPLICATION_PASSWORD) {
            self.credentials.application_password = Secret::new(password);
        }
        if let Some(store_key) = lookup(ENV_STORE_KEY) {
            self.credentials.store_key = Secret::new(store_key);
        }
        if let Some(code) = lookup(ENV_MERCHANT_CODE) {
            self.merchant.merchant_code = code;
        }
        self
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.apply_env_overrides(|key| std::env::var(key).ok())
    }

    /// Validates the configuration.
    ///
    /// Checks that:
    /// - credentials and merchant code are not blank
    /// - the reference prefix is numeric
    /// - every endpoint is an HTTPS URL on a non-loopback host (unless `http.allow_insecure`)
    /// - HTTP timeouts are within bounds
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::ConfigError` if any check fails.
    pub fn validate(&self) -> Result<()> {
        if self.credentials.application_name.trim().is_empty() {
            return Err(PaycellError::ConfigError(
                "credentials.application_name must not be empty".to_owned(),
            ));
        }
        if self.credentials.application_password.is_blank() {
            return Err(PaycellError::ConfigError(
                "credentials.application_password must not be empty".to_owned(),
            ));
        }
        if self.credentials.store_key.is_blank() {
            return Err(PaycellError::ConfigError(
                "credentials.store_key must not be empty".to_owned(),
            ));
        }
        if self.merchant.merchant_code.trim().is_empty() {
            return Err(PaycellError::ConfigError(
                "merchant.merchant_code must not be empty".to_owned(),
            ));
        }
        if !self.merchant.reference_prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaycellError::ConfigError(format!(
                "merchant.reference_prefix must be numeric, got '{}'",
                self.merchant.reference_prefix
            )));
        }

        self.endpoints.validate(self.http.allow_insecure)?;
        self.http.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [credentials]
        application_name = "SHOP"
        application_password = "pwd"
        store_key = "key"

        [merchant]
        merchant_code = "1001"
    "#;

    #[test]
    fn test_sandbox_is_valid() {
        let config = PaycellConfig::sandbox();
        assert!(config.validate().is_ok());
        assert_eq!(config.credentials.application_name, "PAYCELLTEST");
        assert_eq!(config.credentials.application_password.expose(), "PaycellTestPassword");
        assert_eq!(config.credentials.store_key.expose(), "PAYCELL12345");
        assert_eq!(config.merchant.merchant_code, "9998");
        assert_eq!(config.merchant.eula_id, "17");
        assert_eq!(config.merchant.reference_prefix, "666");
    }

    #[test]
    fn test_minimal_toml_applies_defaults() {
        let config = PaycellConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.mode, Mode::Test);
        assert_eq!(config.merchant.reference_prefix, "666");
        assert_eq!(config.merchant.eula_id, "17");
        assert_eq!(config.endpoints, EndpointConfig::default());
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let toml = r#"
            [merchant]
            merchant_code = "1001"
        "#;
        let result = PaycellConfig::from_toml(toml);
        assert!(matches!(result.unwrap_err(), PaycellError::ConfigError(_)));
    }

    #[test]
    fn test_blank_password_rejected() {
        let mut config = PaycellConfig::sandbox();
        config.credentials.application_password = Secret::new(" ");
        assert!(matches!(config.validate().unwrap_err(), PaycellError::ConfigError(_)));
    }

    #[test]
    fn test_blank_merchant_code_rejected() {
        let mut config = PaycellConfig::sandbox();
        config.merchant.merchant_code = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_numeric_prefix_rejected() {
        let mut config = PaycellConfig::sandbox();
        config.merchant.reference_prefix = "A66".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reference_prefix"));
    }

    #[test]
    fn test_insecure_endpoint_requires_flag() {
        let toml = format!(
            "{MINIMAL}
            [endpoints.test]
            provision = \"http://127.0.0.1:9000/paycell\"
            token = \"http://127.0.0.1:9000/token\"
            three_d_form = \"http://127.0.0.1:9000/form\"
            "
        );
        assert!(PaycellConfig::from_toml(&toml).is_err());

        let toml = format!("{toml}\n[http]\nallow_insecure = true\n");
        let config = PaycellConfig::from_toml(&toml).unwrap();
        assert!(config.http.allow_insecure);
    }

    #[test]
    fn test_http_bounds_enforced() {
        let toml = format!("{MINIMAL}\n[http]\ntimeout_secs = 0\n");
        assert!(PaycellConfig::from_toml(&toml).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = PaycellConfig::sandbox().apply_env_overrides(|key| match key {
            ENV_APPLICATION_NAME => Some("LIVEAPP".to_owned()),
            ENV_APPLICATION_PASSWORD => Some("livepwd".to_owned()),
            ENV_STORE_KEY => Some("LIVEKEY".to_owned()),
            _ => None,
        });

        assert_eq!(config.credentials.application_name, "LIVEAPP");
        assert_eq!(config.credentials.application_password.expose(), "livepwd");
        assert_eq!(config.credentials.store_key.expose(), "LIVEKEY");
        assert_eq!(config.merchant.merchant_code, "9998");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug_str = format!("{:?}", PaycellConfig::sandbox());
        assert!(!debug_str.contains("PaycellTestPassword"));
        assert!(!debug_str.contains("PAYCELL12345"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = PaycellConfig::from_file("/nonexistent/paycell.toml");
        assert!(matches!(result.unwrap_err(), PaycellError::ConfigError(_)));
    }
}
