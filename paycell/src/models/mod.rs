//! Wire models for the gateway's JSON API.
//!
//! Field names follow the gateway's camel-case JSON; unset request fields are omitted
//! and missing response fields decode to their defaults.

mod header;
mod lossless;
mod request;
mod response;

pub use header::{RequestHeader, ResponseHeader};
pub use request::{
    CardTokenRequest, MobilePaymentRequest, OtpRequest, PaymentMethodsRequest, PaymentType,
    ProvisionRequest, RefundRequest, ReverseRequest, ThreeDResultRequest, ThreeDSessionRequest,
};
pub use response::{
    CardTokenResponse, MobilePayment, MobilePaymentResponse, OtpResponse,
    PaymentMethodsResponse, ProvisionResponse, StoredCard, ThreeDOperationResult,
    ThreeDResultResponse, ThreeDSessionResponse,
};

/// Result code the gateway uses for success.
pub const APPROVED_CODE: &str = "0";

/// A decoded response that carries a gateway result code.
pub trait GatewayReply {
    /// The result code, or `None` if the body carried none.
    fn result_code(&self) -> Option<&str>;

    /// Human-readable description of the result.
    fn result_description(&self) -> &str;

    /// Whether the gateway approved the request.
    fn is_approved(&self) -> bool {
        self.result_code() == Some(APPROVED_CODE)
    }
}

macro_rules! header_reply {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl GatewayReply for $ty {
                fn result_code(&self) -> Option<&str> {
                    let header = &self.response_header;
                    header.has_code().then(|| header.response_code.trim())
                }

                fn result_description(&self) -> &str {
                    &self.response_header.response_description
                }
            }
        )+
    };
}

header_reply!(
    ProvisionResponse,
    ThreeDSessionResponse,
    CardTokenResponse,
    PaymentMethodsResponse,
    MobilePaymentResponse,
    OtpResponse,
);

impl GatewayReply for ThreeDResultResponse {
    fn result_code(&self) -> Option<&str> {
        if self.response_header.has_code() {
            return Some(self.response_header.response_code.trim());
        }
        self.three_d_operation_result
            .as_ref()
            .and_then(|r| r.three_d_result.as_deref())
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    fn result_description(&self) -> &str {
        if self.response_header.has_code() {
            return &self.response_header.response_description;
        }
        self.three_d_operation_result
            .as_ref()
            .and_then(|r| r.three_d_result_description.as_deref())
            .unwrap_or_default()
    }
}
