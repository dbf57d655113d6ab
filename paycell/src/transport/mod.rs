//! Transport abstraction layer.
//!
//! The transport carries an already-serialized JSON body to one gateway URL and hands back
//! the raw answer. It knows nothing about Paycell payloads; the client owns encoding,
//! decoding and result-code interpretation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use paycell::transport::{HttpTransport, Transport};
//! use url::Url;
//!
//! # async fn example() -> paycell::error::Result<()> {
//! let transport = HttpTransport::new()?;
//! let url = Url::parse("https://tpay-test.turkcell.com.tr/tpay/provision/services/restful/getCardToken/getPaymentMethods/").unwrap();
//!
//! let response = transport.post_json(&url, br#"{"msisdn":"5305289290"}"#.to_vec()).await?;
//! println!("Status: {}", response.status);
//! # Ok(())
//! # }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use url::Url;

use crate::error::Result;

pub mod config;
pub mod http;
mod sealed;

pub use config::HttpConfig;
pub use http::HttpTransport;

/// Response from transport operations.
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

/// Transport protocol abstraction.
///
/// This trait is sealed; only implementations within this crate are allowed.
///
/// # Security
///
/// All transport implementations:
/// - Refuse plain-HTTP and loopback URLs unless the configuration explicitly allows them
/// - Send `Content-Type: application/json`
/// - Apply the configured request and connect timeouts
pub trait Transport: sealed::private::Sealed + Send + Sync {
    /// Executes a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is rejected, the request fails, or the gateway answers with
    /// a non-success status.
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Returns the protocol name for logging.
    fn protocol_name(&self) -> &'static str;
}
