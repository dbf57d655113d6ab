//! HTTP transport implementation.
//!
//! This module provides the reqwest-backed transport used for every gateway call.

use reqwest::{Client, header};
use tracing::{debug, instrument};
use url::Url;

use super::config::HttpConfig;
use crate::{
    error::{PaycellError, Result},
    transport::{Transport, TransportResponse, sealed},
};

/// Longest error body kept in [`PaycellError::GatewayStatus`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Validates URL for security constraints.
///
/// Ensures the URL uses HTTPS and does not point to a loopback host unless
/// `allow_insecure` is set.
pub(crate) fn validate_url(url: &Url, allow_insecure: bool) -> Result<()> {
    match url.scheme() {
        "https" => {}
        "http" if allow_insecure => {}
        scheme => {
            return Err(PaycellError::InvalidEndpoint(format!(
                "only HTTPS URLs are allowed, got {scheme}: {url}"
            )));
        }
    }

    let Some(host) = url.host_str() else {
        return Err(PaycellError::InvalidEndpoint(format!("URL missing host: {url}")));
    };

    if !allow_insecure && is_loopback(host) {
        return Err(PaycellError::InvalidEndpoint(format!(
            "loopback URLs are not allowed: {url}"
        )));
    }

    Ok(())
}

fn is_loopback(host: &str) -> bool {
    let host = host.to_lowercase();
    host == "localhost" || host.starts_with("127.") || host == "::1" || host == "[::1]"
}

/// Truncates an error body on a character boundary.
fn truncate_body(body: &[u8]) -> String {
    String::from_utf8_lossy(body).chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// JSON-over-HTTP transport using reqwest.
///
/// # Examples
///
/// ```
/// use paycell::transport::{HttpConfig, HttpTransport, Transport};
///
/// let config = HttpConfig { timeout_secs: 60, ..Default::default() };
/// let transport = HttpTransport::with_config(&config).unwrap();
/// assert_eq!(transport.protocol_name(), "http");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    allow_insecure: bool,
}

impl sealed::private::Sealed for HttpTransport {}

impl HttpTransport {
    /// Creates a new HTTP transport with default settings.
    ///
    /// Default configuration:
    /// - Pool max idle per host: 10
    /// - Timeout: 30 seconds
    /// - Connect timeout: 10 seconds
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Creates HTTP transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PaycellError::HttpError)?;

        Ok(Self { client, allow_insecure: config.allow_insecure })
    }

    #[instrument(skip(self, body), fields(url = %url, body_len = body.len()))]
    async fn execute_post(&self, url: &Url, body: Vec<u8>) -> Result<TransportResponse> {
        validate_url(url, self.allow_insecure)?;

        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "gateway responded");

        let response_body = response.bytes().await.map_err(PaycellError::HttpError)?.to_vec();

        if !status.is_success() {
            return Err(PaycellError::GatewayStatus {
                status: status.as_u16(),
                body: truncate_body(&response_body),
            });
        }

        Ok(TransportResponse { status: status.as_u16(), body: response_body })
    }
}

impl Transport for HttpTransport {
    async fn post_json<'a>(&'a self, url: &'a Url, body: Vec<u8>) -> Result<TransportResponse> {
        self.execute_post(url, body).await
    }

    fn protocol_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_new() {
        assert!(HttpTransport::new().is_ok());
    }

    #[test]
    fn test_http_transport_with_config() {
        let config = HttpConfig {
            pool_max_idle_per_host: 0,
            timeout_secs: 60,
            connect_timeout_secs: 15,
            allow_insecure: true,
        };

        let transport = HttpTransport::with_config(&config).unwrap();
        assert!(transport.allow_insecure);
        assert_eq!(transport.protocol_name(), "http");
    }

    #[test]
    fn test_http_transport_debug_format() {
        let transport = HttpTransport::new().unwrap();
        let debug_str = format!("{transport:?}");
        assert!(debug_str.contains("HttpTransport"));
    }

    #[test]
    fn test_validate_url_https_required() {
        let https_url = Url::parse("https://tpay.turkcell.com.tr/x").unwrap();
        assert!(validate_url(&https_url, false).is_ok());

        let http_url = Url::parse("http://tpay.turkcell.com.tr/x").unwrap();
        let result = validate_url(&http_url, false);
        assert!(matches!(result.unwrap_err(), PaycellError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_validate_url_loopback_blocked() {
        for raw in ["https://localhost/api", "https://127.0.0.1/api", "https://[::1]/api"] {
            let url = Url::parse(raw).unwrap();
            assert!(validate_url(&url, false).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_validate_url_insecure_allowed() {
        let url = Url::parse("http://127.0.0.1:8080/paycell").unwrap();
        assert!(validate_url(&url, true).is_ok());
    }

    #[test]
    fn test_validate_url_other_schemes_rejected() {
        let url = Url::parse("file:///etc/passwd").unwrap();
        assert!(validate_url(&url, true).is_err());

        let url = Url::parse("ftp://example.com/x").unwrap();
        assert!(validate_url(&url, true).is_err());
    }

    #[test]
    fn test_truncate_body() {
        let long = vec![b'a'; MAX_ERROR_BODY_CHARS * 2];
        assert_eq!(truncate_body(&long).len(), MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_body(b"short"), "short");
    }

    #[tokio::test]
    async fn test_post_json_rejects_plain_http() {
        let transport = HttpTransport::new().unwrap();
        let url = Url::parse("http://tpay.turkcell.com.tr/x").unwrap();

        let result = transport.post_json(&url, b"{}".to_vec()).await;
        assert!(matches!(result.unwrap_err(), PaycellError::InvalidEndpoint(_)));
    }
}
