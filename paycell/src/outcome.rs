//! Approved or declined: the business result of a call that reached the gateway.

use crate::error::{PaycellError, Result};

/// Business result of one gateway call.
///
/// Transport and decoding failures never produce an `Outcome`; they are returned as
/// [`PaycellError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The gateway returned result code `"0"`.
    Approved(T),
    /// The gateway returned any other result code.
    Declined {
        /// Gateway result code.
        code: String,
        /// Gateway description.
        description: String,
        /// Full decoded response.
        response: T,
    },
}

impl<T> Outcome<T> {
    /// Whether the gateway approved the call.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved(_))
    }

    /// Decoded response, approved or not.
    #[must_use]
    pub fn response(&self) -> &T {
        match self {
            Self::Approved(response) | Self::Declined { response, .. } => response,
        }
    }

    /// Consumes the outcome, returning the decoded response.
    #[must_use]
    pub fn into_response(self) -> T {
        match self {
            Self::Approved(response) | Self::Declined { response, .. } => response,
        }
    }

    /// Returns the approved response.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::Declined` if the gateway declined.
    pub fn into_approved(self) -> Result<T> {
        match self {
            Self::Approved(response) => Ok(response),
            Self::Declined { code, description, .. } => {
                Err(PaycellError::Declined { code, description })
            }
        }
    }
}
