//! Error types for the Paycell client.
//!
//! All errors implement the standard [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Transport Errors** ([`PaycellError::HttpError`], [`PaycellError::GatewayStatus`]):
//!   the request never produced a usable gateway answer
//! - **Codec Errors** ([`PaycellError::EncodeError`], [`PaycellError::DecodeError`]):
//!   JSON serialization of the request or parsing of the response failed
//! - **Configuration Errors** ([`PaycellError::ConfigError`], [`PaycellError::InvalidEndpoint`])
//! - **Input Errors** ([`PaycellError::InvalidInput`]): caller-supplied values were rejected
//!   before anything was sent
//!
//! A gateway that answers with a non-zero result code is *not* an error here: the operation
//! returns [`Outcome::Declined`](crate::Outcome::Declined). [`PaycellError::Declined`] only
//! appears when a caller opts into [`Outcome::into_approved`](crate::Outcome::into_approved).
//!
//! # Examples
//!
//! ```
//! use paycell::error::{PaycellError, Result};
//!
//! fn require_msisdn(msisdn: &str) -> Result<&str> {
//!     if msisdn.is_empty() {
//!         return Err(PaycellError::InvalidInput("msisdn must not be empty".to_owned()));
//!     }
//!     Ok(msisdn)
//! }
//!
//! assert!(require_msisdn("").is_err());
//! ```

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, PaycellError>;

/// Errors that can occur while talking to the gateway.
///
/// # Error Recovery
///
/// - **Transient errors** ([`HttpError`](Self::HttpError),
///   [`GatewayStatus`](Self::GatewayStatus) with a 5xx status): the caller may resend with a
///   fresh request; the client never retries on its own
/// - **Input and configuration errors**: fix the value and call again
/// - **Decode errors**: usually a gateway contract change or a wrong endpoint URL
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum PaycellError {
    /// HTTP request failed.
    ///
    /// Wraps [`reqwest::Error`]: DNS failures, refused connections, TLS errors and timeouts.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The gateway answered with a non-success HTTP status.
    #[error("gateway returned HTTP {status}: {body}")]
    GatewayStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The request payload could not be serialized.
    #[error("request encoding failed: {0}")]
    EncodeError(String),

    /// The response body is not the JSON shape expected for the operation.
    #[error("response decoding failed: {0}")]
    DecodeError(String),

    /// An endpoint URL is malformed or not allowed.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration is invalid.
    ///
    /// Raised while loading or validating [`PaycellConfig`](crate::PaycellConfig): unparsable
    /// TOML, empty credentials, out-of-range timeouts, or plain-HTTP endpoints without
    /// `allow_insecure`.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Caller input was rejected before sending.
    ///
    /// # Examples
    ///
    /// ```
    /// use paycell::error::PaycellError;
    ///
    /// let err = PaycellError::InvalidInput("amount has more than two decimals".to_owned());
    /// assert!(err.to_string().contains("Invalid input"));
    /// ```
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The gateway declined the operation.
    #[error("gateway declined with code {code}: {description}")]
    Declined {
        /// Gateway result code.
        code: String,
        /// Gateway result description.
        description: String,
    },
}

impl PaycellError {
    /// Returns `true` when resending the same operation may succeed.
    ///
    /// Network failures and 5xx answers are transient; everything else needs a change on
    /// the caller's side first.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::GatewayStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
