//! Request bodies, one per gateway operation.
//!
//! Every operation field is optional and left out of the JSON when unset.

use serde::Serialize;
use zeroize::Zeroize;

use super::header::RequestHeader;

/// Provision transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentType {
    /// Authorize and capture.
    #[serde(rename = "SALE")]
    Sale,
    /// Authorize only.
    #[serde(rename = "PREAUTH")]
    PreAuth,
    /// Capture a previous pre-authorization.
    #[serde(rename = "POSTAUTH")]
    PostAuth,
}

impl PaymentType {
    /// Wire name of the payment type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::PreAuth => "PREAUTH",
            Self::PostAuth => "POSTAUTH",
        }
    }
}

/// Body of `provision` (Auth, PreAuth, PostAuth).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    /// Merchant code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    /// Stored card id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    /// One-time card token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_token: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Reference number of the pre-authorization being captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_reference_number: Option<String>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Loyalty point amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_amount: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Installment count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    /// Transaction kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// Acquirer bank code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquirer_bank_code: Option<String>,
    /// Completed 3-D session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_d_session_id: Option<String>,
    /// Subscriber PIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

/// Body of `refund`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    /// Merchant code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    /// Reference number of this refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Reference number of the refunded provision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_reference_number: Option<String>,
    /// Refunded amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Body of `reverse`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    /// Merchant code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    /// Reference number of this reversal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Reference number of the reversed provision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_reference_number: Option<String>,
}

/// Body of `getThreeDSession`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSessionRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    /// Merchant code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    /// Stored card id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    /// One-time card token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_token: Option<String>,
    /// Installment count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Authentication target, e.g. `MERCHANT` or `TURKCELL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Transaction the session authenticates, e.g. `AUTH`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
}

/// Body of `getThreeDSessionResult`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDResultRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    /// Merchant code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Session being queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_d_session_id: Option<String>,
}

/// Body of the card tokenization call.
///
/// Card fields are wiped on drop and never printed.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTokenRequest {
    /// Common header, without application password.
    pub request_header: RequestHeader,
    /// Primary account number.
    #[serde(rename = "creditCardNo")]
    pub credit_card_no: String,
    /// Two-digit expiry month.
    pub expire_date_month: String,
    /// Two-digit expiry year.
    pub expire_date_year: String,
    /// Card security code.
    pub cvc_no: String,
    /// Request authenticity hash.
    pub hash_data: String,
}

impl std::fmt::Debug for CardTokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardTokenRequest")
            .field("request_header", &self.request_header)
            .field("credit_card_no", &"[REDACTED]")
            .field("cvc_no", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Drop for CardTokenRequest {
    fn drop(&mut self) {
        self.credit_card_no.zeroize();
        self.expire_date_month.zeroize();
        self.expire_date_year.zeroize();
        self.cvc_no.zeroize();
    }
}

/// Body of `getPaymentMethods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
}

/// Body of `openMobilePayment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobilePaymentRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    /// Agreement the subscriber accepted.
    #[serde(rename = "eulaID", skip_serializing_if = "Option::is_none")]
    pub eula_id: Option<String>,
}

/// Body of `sendOTP` and `validateOTP`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRequest {
    /// Common header.
    pub request_header: RequestHeader,
    /// Subscriber MSISDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Random reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Code the subscriber received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
    /// Token returned by `sendOTP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
