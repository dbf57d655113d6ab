//! Envelope headers shared by every request and response.

use serde::{Deserialize, Serialize};

use super::lossless;

/// Header sent with every request.
///
/// `application_pwd` is left `None` for card-token requests, which authenticate with
/// `hashData` instead.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    /// Application name.
    pub application_name: String,
    /// Application password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_pwd: Option<String>,
    /// Subscriber's IP address.
    #[serde(rename = "clientIPAddress", skip_serializing_if = "String::is_empty")]
    pub client_ip_address: String,
    /// Send time, `YYYYMMDDhhmmssSSS`.
    pub transaction_date_time: String,
    /// Random 20-digit transaction id.
    pub transaction_id: String,
}

impl std::fmt::Debug for RequestHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHeader")
            .field("application_name", &self.application_name)
            .field("application_pwd", &self.application_pwd.as_ref().map(|_| "[REDACTED]"))
            .field("client_ip_address", &self.client_ip_address)
            .field("transaction_date_time", &self.transaction_date_time)
            .field("transaction_id", &self.transaction_id)
            .finish()
    }
}

/// Header returned with every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    /// Gateway result code; `"0"` means success.
    #[serde(default, deserialize_with = "lossless::text")]
    pub response_code: String,
    /// Human-readable result.
    #[serde(default, deserialize_with = "lossless::text")]
    pub response_description: String,
    /// Gateway time of the response.
    #[serde(default, deserialize_with = "lossless::text")]
    pub response_date_time: String,
    /// Echo of the request's transaction id.
    #[serde(default, deserialize_with = "lossless::text")]
    pub transaction_id: String,
}

impl ResponseHeader {
    /// Whether the header carries a result code at all.
    #[must_use]
    pub fn has_code(&self) -> bool {
        !self.response_code.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_header_field_names() {
        let header = RequestHeader {
            application_name: "PAYCELLTEST".to_owned(),
            application_pwd: Some("pwd".to_owned()),
            client_ip_address: "10.0.0.1".to_owned(),
            transaction_date_time: "20240101120000000".to_owned(),
            transaction_id: "12345678901234567890".to_owned(),
        };
        let json = serde_json::to_value(&header).unwrap();

        assert_eq!(json["applicationName"], "PAYCELLTEST");
        assert_eq!(json["applicationPwd"], "pwd");
        assert_eq!(json["clientIPAddress"], "10.0.0.1");
        assert_eq!(json["transactionDateTime"], "20240101120000000");
        assert_eq!(json["transactionId"], "12345678901234567890");
    }

    #[test]
    fn test_request_header_omits_unset() {
        let json = serde_json::to_value(RequestHeader::default()).unwrap();
        assert!(json.get("applicationPwd").is_none());
        assert!(json.get("clientIPAddress").is_none());
    }

    #[test]
    fn test_request_header_debug_redacts_password() {
        let header =
            RequestHeader { application_pwd: Some("hunter2".to_owned()), ..Default::default() };
        assert!(!format!("{header:?}").contains("hunter2"));
    }

    #[test]
    fn test_response_header_decodes() {
        let header: ResponseHeader = serde_json::from_str(
            r#"{"responseCode": "0", "responseDescription": "Success",
                "responseDateTime": "20240101120001000", "transactionId": "1"}"#,
        )
        .unwrap();
        assert_eq!(header.response_code, "0");
        assert_eq!(header.response_description, "Success");
        assert!(header.has_code());
    }

    #[test]
    fn test_response_header_numeric_code() {
        let header: ResponseHeader = serde_json::from_str(r#"{"responseCode": 4017}"#).unwrap();
        assert_eq!(header.response_code, "4017");
    }

    #[test]
    fn test_empty_response_header() {
        let header: ResponseHeader = serde_json::from_str("{}").unwrap();
        assert!(!header.has_code());
    }
}
