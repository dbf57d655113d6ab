use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

use crate::{config::Credentials, models::ResponseHeader, secret::Secret};

/// Base64 (standard alphabet, padded) of the SHA-256 digest of `data`.
///
/// # Examples
///
/// ```
/// use paycell::signing::sha256_base64;
///
/// assert_eq!(sha256_base64(""), "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
/// ```
#[must_use]
pub fn sha256_base64(data: &str) -> String {
    STANDARD.encode(Sha256::digest(data.as_bytes()))
}

/// Per-character uppercase mapping.
///
/// Characters whose uppercase form expands to several characters (`ß` to `SS`)
/// are kept unchanged so digests agree with the gateway's hashing side.
fn fold_upper(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// Per-message values mixed into the outer digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashInput<'a> {
    /// Transaction id of the message.
    pub transaction_id: &'a str,
    /// Request or response timestamp.
    pub timestamp: &'a str,
    /// Gateway result code, for responses.
    pub result_code: Option<&'a str>,
    /// Card token, for card-token responses.
    pub card_token: Option<&'a str>,
}

/// Computes request and response hashes for one application.
///
/// # Examples
///
/// ```
/// use paycell::{PaycellConfig, signing::{HashInput, HashSigner}};
///
/// let signer = HashSigner::new(&PaycellConfig::sandbox().credentials);
/// let input = HashInput {
///     transaction_id: "12345678901234567890",
///     timestamp: "20240101120000000",
///     ..HashInput::default()
/// };
///
/// assert_eq!(signer.hash(&input), signer.hash(&input));
/// ```
#[derive(Clone)]
pub struct HashSigner {
    application_name: String,
    store_key: Secret,
    security_data: Secret,
}

impl std::fmt::Debug for HashSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashSigner")
            .field("application_name", &self.application_name)
            .finish_non_exhaustive()
    }
}

impl HashSigner {
    /// Creates a signer from application credentials.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        let security_data = Self::security_data(
            credentials.application_password.expose(),
            &credentials.application_name,
        );
        Self {
            application_name: credentials.application_name.clone(),
            store_key: credentials.store_key.clone(),
            security_data: Secret::new(security_data),
        }
    }

    /// Inner digest proving knowledge of the application password.
    #[must_use]
    pub fn security_data(password: &str, application_name: &str) -> String {
        sha256_base64(&fold_upper(&format!("{password}{application_name}")))
    }

    /// Outer digest over one message.
    #[must_use]
    pub fn hash(&self, input: &HashInput<'_>) -> String {
        let plain = format!(
            "{}{}{}{}{}{}{}",
            self.application_name,
            input.transaction_id,
            input.timestamp,
            input.result_code.unwrap_or_default(),
            input.card_token.unwrap_or_default(),
            self.store_key.expose(),
            self.security_data.expose(),
        );
        sha256_base64(&fold_upper(&plain))
    }

    /// Hash sent with a card-token request.
    #[must_use]
    pub fn sign_request(&self, transaction_id: &str, timestamp: &str) -> String {
        self.hash(&HashInput { transaction_id, timestamp, ..HashInput::default() })
    }

    /// Hash the gateway is expected to return with a card-token response.
    #[must_use]
    pub fn sign_response(&self, header: &ResponseHeader, card_token: Option<&str>) -> String {
        self.hash(&HashInput {
            transaction_id: &header.transaction_id,
            timestamp: &header.response_date_time,
            result_code: Some(&header.response_code),
            card_token,
        })
    }

    /// Checks a gateway-supplied response hash.
    #[must_use]
    pub fn verify_response(
        &self,
        header: &ResponseHeader,
        card_token: Option<&str>,
        hash_data: &str,
    ) -> bool {
        let expected = self.sign_response(header, card_token);
        constant_time_eq(expected.as_bytes(), hash_data.as_bytes())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
