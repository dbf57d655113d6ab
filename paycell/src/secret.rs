//! Handling of sensitive values.
//!
//! Credentials and card data are wrapped so they never reach logs through `Debug` and are
//! wiped from memory when dropped.

use std::fmt;

use serde::{Deserialize, Deserializer};
use zeroize::Zeroize;

/// A string that must not be logged.
///
/// `Debug` and `Display` print `[REDACTED]`; the inner value is zeroized on drop.
///
/// # Examples
///
/// ```
/// use paycell::secret::Secret;
///
/// let password = Secret::new("PaycellTestPassword");
/// assert_eq!(format!("{password:?}"), "[REDACTED]");
/// assert_eq!(password.expose(), "PaycellTestPassword");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wraps a sensitive value.
    #[must_use]
    #[allow(
        clippy::impl_trait_in_params,
        reason = "impl Into<String> is idiomatic for constructors"
    )]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the wrapped value is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

/// Masks a subscriber number for logging, keeping the last four digits.
///
/// # Examples
///
/// ```
/// use paycell::secret::redact_msisdn;
///
/// assert_eq!(redact_msisdn("905305289290"), "********9290");
/// assert_eq!(redact_msisdn("123"), "***");
/// ```
#[must_use]
pub fn redact_msisdn(msisdn: &str) -> String {
    let len = msisdn.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let visible: String = msisdn.chars().skip(len - 4).collect();
    format!("{}{visible}", "*".repeat(len - 4))
}
