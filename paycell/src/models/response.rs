//! Response bodies, one per gateway operation.
//!
//! Every field defaults when missing, so a partial body still decodes; whether the call
//! succeeded is decided from the result code alone.

use serde::Deserialize;

use super::{header::ResponseHeader, lossless};

/// Response of `provision`, `refund` and `reverse`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvisionResponse {
    /// Common header.
    pub response_header: ResponseHeader,
    /// Gateway order id.
    #[serde(deserialize_with = "lossless::optional")]
    pub order_id: Option<String>,
    /// Settlement date.
    #[serde(deserialize_with = "lossless::optional")]
    pub reconciliation_date: Option<String>,
    /// Issuer approval code.
    #[serde(alias = "approvalCodeo", deserialize_with = "lossless::optional")]
    pub approval_code: Option<String>,
    /// Acquirer bank code.
    #[serde(deserialize_with = "lossless::optional")]
    pub acquirer_bank_code: Option<String>,
    /// Issuer bank code.
    #[serde(deserialize_with = "lossless::optional")]
    pub issuer_bank_code: Option<String>,
}

/// Response of `getThreeDSession`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreeDSessionResponse {
    /// Common header.
    pub response_header: ResponseHeader,
    /// Session to hand to the 3-D Secure form.
    #[serde(deserialize_with = "lossless::optional")]
    pub three_d_session_id: Option<String>,
}

/// Outcome of the issuer authentication step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreeDOperationResult {
    /// Result code; `"0"` means authenticated.
    #[serde(deserialize_with = "lossless::optional")]
    pub three_d_result: Option<String>,
    /// Human-readable result.
    #[serde(deserialize_with = "lossless::optional")]
    pub three_d_result_description: Option<String>,
}

/// Response of `getThreeDSessionResult`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreeDResultResponse {
    /// Common header; some gateway versions omit it.
    pub response_header: ResponseHeader,
    /// Step the session is at.
    #[serde(deserialize_with = "lossless::optional")]
    pub current_step: Option<String>,
    /// Message from the issuer's access control server.
    #[serde(deserialize_with = "lossless::optional")]
    pub md_error_message: Option<String>,
    /// Authentication status reported by the issuer.
    #[serde(deserialize_with = "lossless::optional")]
    pub md_status: Option<String>,
    /// Authentication result.
    pub three_d_operation_result: Option<ThreeDOperationResult>,
}

/// Response of the card tokenization call.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardTokenResponse {
    /// Common header.
    pub response_header: ResponseHeader,
    /// Single-use token standing in for the card.
    #[serde(deserialize_with = "lossless::optional")]
    pub card_token: Option<String>,
    /// Response authenticity hash.
    #[serde(deserialize_with = "lossless::optional")]
    pub hash_data: Option<String>,
}

impl std::fmt::Debug for CardTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardTokenResponse")
            .field("response_header", &self.response_header)
            .field("card_token", &self.card_token.as_ref().map(|_| "[REDACTED]"))
            .field("hash_data", &self.hash_data)
            .finish()
    }
}

/// Card registered to the subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredCard {
    /// Brand, e.g. `VISA`.
    #[serde(deserialize_with = "lossless::optional")]
    pub card_brand: Option<String>,
    /// Id usable as `cardId` in provision calls.
    #[serde(deserialize_with = "lossless::optional")]
    pub card_id: Option<String>,
    /// `CREDIT` or `DEBIT`.
    #[serde(deserialize_with = "lossless::optional")]
    pub card_type: Option<String>,
    /// PAN with the middle digits masked.
    #[serde(deserialize_with = "lossless::optional")]
    pub masked_card_no: Option<String>,
    /// Subscriber-chosen name.
    #[serde(deserialize_with = "lossless::optional")]
    pub alias: Option<String>,
    /// Registration date.
    #[serde(deserialize_with = "lossless::optional")]
    pub activation_date: Option<String>,
    /// Default payment card.
    #[serde(deserialize_with = "lossless::flag")]
    pub is_default: bool,
    /// Card has expired.
    #[serde(deserialize_with = "lossless::flag")]
    pub is_expired: bool,
    /// The subscriber must be shown the agreement before using this card.
    #[serde(deserialize_with = "lossless::flag")]
    pub show_eula_id: bool,
    /// Card passed 3-D Secure.
    #[serde(rename = "isThreeDValidated", deserialize_with = "lossless::flag")]
    pub is_three_d_validated: bool,
    /// Card passed OTP validation.
    #[serde(rename = "isOTPValidated", deserialize_with = "lossless::flag")]
    pub is_otp_validated: bool,
}

/// Mobile-billing account state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobilePayment {
    /// Current agreement.
    #[serde(deserialize_with = "lossless::optional")]
    pub eula_id: Option<String>,
    /// Where the agreement text is published.
    #[serde(deserialize_with = "lossless::optional")]
    pub eula_url: Option<String>,
    /// Agreement the subscriber signed.
    #[serde(deserialize_with = "lossless::optional")]
    pub signed_eula_id: Option<String>,
    /// Billing statement date.
    #[serde(deserialize_with = "lossless::optional")]
    pub statement_date: Option<String>,
    /// Current limit.
    #[serde(deserialize_with = "lossless::optional")]
    pub limit: Option<String>,
    /// Highest limit the subscriber may raise to.
    #[serde(deserialize_with = "lossless::optional")]
    pub max_limit: Option<String>,
    /// Limit left in this period.
    #[serde(deserialize_with = "lossless::optional")]
    pub remaining_limit: Option<String>,
    /// Mobile billing is enabled.
    #[serde(deserialize_with = "lossless::flag")]
    pub is_dcb_open: bool,
    /// The signed agreement has been superseded.
    #[serde(deserialize_with = "lossless::flag")]
    pub is_eula_expired: bool,
}

/// Response of `getPaymentMethods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethodsResponse {
    /// Common header.
    pub response_header: ResponseHeader,
    /// Agreement offered for card storage.
    #[serde(rename = "eulaID", alias = "eulaId", deserialize_with = "lossless::optional")]
    pub eula_id: Option<String>,
    /// Registered cards.
    #[serde(deserialize_with = "null_as_empty")]
    pub card_list: Vec<StoredCard>,
    /// Mobile-billing account, if any.
    pub mobile_payment: Option<MobilePayment>,
}

/// Response of `openMobilePayment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobilePaymentResponse {
    /// Common header.
    pub response_header: ResponseHeader,
}

/// Response of `sendOTP` and `validateOTP`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtpResponse {
    /// Common header.
    pub response_header: ResponseHeader,
    /// Token to echo back in `validateOTP`.
    #[serde(deserialize_with = "lossless::optional")]
    pub token: Option<String>,
    /// When the code expires.
    #[serde(deserialize_with = "lossless::optional")]
    pub expire_date: Option<String>,
    /// Attempts left.
    #[serde(deserialize_with = "lossless::optional")]
    pub remaining_retry_count: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_response_decodes() {
        let response: ProvisionResponse = serde_json::from_str(
            r#"{
                "responseHeader": {"responseCode": "0", "responseDescription": "Success",
                                   "responseDateTime": "20240101120001000",
                                   "transactionId": "12345678901234567890"},
                "orderId": 155330130000000000001,
                "reconciliationDate": "20240101",
                "approvalCode": "123456",
                "acquirerBankCode": 111,
                "issuerBankCode": "046"
            }"#,
        )
        .unwrap();

        assert_eq!(response.response_header.response_code, "0");
        assert_eq!(response.order_id.as_deref(), Some("155330130000000000001"));
        assert_eq!(response.approval_code.as_deref(), Some("123456"));
        assert_eq!(response.acquirer_bank_code.as_deref(), Some("111"));
        assert_eq!(response.issuer_bank_code.as_deref(), Some("046"));
    }

    #[test]
    fn test_approval_code_legacy_spelling() {
        let response: ProvisionResponse =
            serde_json::from_str(r#"{"approvalCodeo": "654321"}"#).unwrap();
        assert_eq!(response.approval_code.as_deref(), Some("654321"));
    }

    #[test]
    fn test_three_d_result_decodes() {
        let response: ThreeDResultResponse = serde_json::from_str(
            r#"{
                "currentStep": "RESULT",
                "mdStatus": 1,
                "threeDOperationResult": {"threeDResult": "0",
                                          "threeDResultDescription": "3D ONAY"}
            }"#,
        )
        .unwrap();

        assert_eq!(response.md_status.as_deref(), Some("1"));
        let result = response.three_d_operation_result.unwrap();
        assert_eq!(result.three_d_result.as_deref(), Some("0"));
        assert_eq!(result.three_d_result_description.as_deref(), Some("3D ONAY"));
    }

    #[test]
    fn test_payment_methods_decodes() {
        let response: PaymentMethodsResponse = serde_json::from_str(
            r#"{
                "responseHeader": {"responseCode": "0"},
                "eulaID": 17,
                "cardList": [{
                    "cardBrand": "VISA", "cardId": "c-1", "cardType": "CREDIT",
                    "maskedCardNo": "435508******4358", "alias": "work",
                    "isDefault": true, "isExpired": false, "showEulaId": false,
                    "isThreeDValidated": "true", "isOTPValidated": false
                }],
                "mobilePayment": {"eulaId": "17", "limit": 1000.00, "remainingLimit": "250",
                                  "isDcbOpen": true, "isEulaExpired": false}
            }"#,
        )
        .unwrap();

        assert_eq!(response.eula_id.as_deref(), Some("17"));
        assert_eq!(response.card_list.len(), 1);
        let card = &response.card_list[0];
        assert_eq!(card.card_id.as_deref(), Some("c-1"));
        assert!(card.is_default);
        assert!(card.is_three_d_validated);
        assert!(!card.is_otp_validated);

        let mobile = response.mobile_payment.unwrap();
        assert_eq!(mobile.limit.as_deref(), Some("1000.00"));
        assert_eq!(mobile.remaining_limit.as_deref(), Some("250"));
        assert!(mobile.is_dcb_open);
    }

    #[test]
    fn test_null_card_list() {
        let response: PaymentMethodsResponse =
            serde_json::from_str(r#"{"cardList": null}"#).unwrap();
        assert!(response.card_list.is_empty());
    }

    #[test]
    fn test_otp_response_decodes() {
        let response: OtpResponse = serde_json::from_str(
            r#"{"responseHeader": {"responseCode": "0"}, "token": "otp-token",
                "expireDate": "20240101121000000", "remainingRetryCount": 3}"#,
        )
        .unwrap();

        assert_eq!(response.token.as_deref(), Some("otp-token"));
        assert_eq!(response.remaining_retry_count.as_deref(), Some("3"));
    }

    #[test]
    fn test_card_token_response_debug_redacts_token() {
        let response = CardTokenResponse {
            card_token: Some("secret-token".to_owned()),
            ..Default::default()
        };
        assert!(!format!("{response:?}").contains("secret-token"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let response: MobilePaymentResponse = serde_json::from_str(
            r#"{"responseHeader": {"responseCode": "0"}, "extra": {"nested": [1, 2]}}"#,
        )
        .unwrap();
        assert_eq!(response.response_header.response_code, "0");
    }
}
