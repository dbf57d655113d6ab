//! Authenticity hashes shared with the gateway.
//!
//! The gateway authenticates tokenization traffic with a keyed double SHA-256:
//!
//! ```text
//! security_data = B64(SHA256(UPPER(password + application_name)))
//! hash          = B64(SHA256(UPPER(application_name + transaction_id + timestamp
//!                                  + [result_code] + [card_token]
//!                                  + store_key + security_data)))
//! ```
//!
//! Requests are signed without a result code or token; card-token responses are verified
//! with both.

mod hasher;


pub use hasher::{HashInput, HashSigner, sha256_base64};
