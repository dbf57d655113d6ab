//! Paycell: a typed client for the Turkcell Paycell payment gateway.
//!
//! The gateway is a JSON-over-HTTPS API for card tokenization, authorization, 3-D Secure,
//! one-time-password checks and carrier (mobile) billing. This crate builds signed
//! requests for it, sends them and decodes the answers into typed responses.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ PaycellClient                                │
//! │  config (immutable)   call context (&mut)    │
//! │        │                     │               │
//! │  ┌─────▼──────────┐   ┌──────▼─────────┐     │
//! │  │ RequestBuilder │───│  HashSigner    │     │
//! │  └─────┬──────────┘   └────────────────┘     │
//! │        │ JSON                                │
//! │  ┌─────▼──────────┐   ┌────────────────┐     │
//! │  │ HttpTransport  │◄──│EndpointResolver│     │
//! │  └─────┬──────────┘   └────────────────┘     │
//! └────────┼─────────────────────────────────────┘
//!          │ HTTPS POST
//! ┌────────▼────────┐
//! │ Paycell gateway │  test or production
//! └─────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paycell::{Outcome, PaycellClient, PaycellConfig, builder::ProvisionOptions};
//!
//! # async fn example() -> paycell::Result<()> {
//! let mut client = PaycellClient::new(PaycellConfig::sandbox(), "5305289290")?;
//! client.set_ip_address("10.0.0.1");
//! client.set_amount("10.50", "TRY")?;
//!
//! match client.auth(&ProvisionOptions::default()).await? {
//!     Outcome::Approved(response) => println!("order {:?}", response.order_id),
//!     Outcome::Declined { code, description, .. } => println!("declined {code}: {description}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Failures to reach the gateway or to understand its answer are [`PaycellError`]s. A
//! gateway that answers with a non-zero result code is a normal [`Outcome::Declined`].
//!
//! # Module Organization
//!
//! - [`client`]: the client and its operations
//! - [`builder`]: request construction, amounts, card data
//! - [`signing`]: authenticity hashes
//! - [`models`]: request and response wire types
//! - [`endpoint`]: environments and URL dispatch
//! - [`config`]: TOML configuration and environment overrides
//! - [`transport`]: HTTP transport
//! - [`form`]: the 3-D Secure browser form

#![warn(missing_docs)]

pub mod builder;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod models;
pub mod outcome;
pub mod secret;
pub mod signing;
pub mod transport;

pub use client::PaycellClient;
pub use config::PaycellConfig;
pub use endpoint::{Mode, Operation};
pub use error::{PaycellError, Result};
pub use outcome::Outcome;
