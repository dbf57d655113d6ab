//! Request construction.
//!
//! [`RequestBuilder`] fills the common header (application identity, send time, fresh
//! transaction id) and the operation fields of one request from the configuration and
//! the caller's [`CallContext`].

use std::str::FromStr;

use chrono::Local;
use rand::Rng;
use rust_decimal::Decimal;
use zeroize::Zeroize;

use crate::{
    config::PaycellConfig,
    endpoint::Mode,
    error::{PaycellError, Result},
    models::{
        CardTokenRequest, MobilePaymentRequest, OtpRequest, PaymentMethodsRequest, PaymentType,
        ProvisionRequest, RefundRequest, RequestHeader, ReverseRequest, ThreeDResultRequest,
        ThreeDSessionRequest,
    },
    signing::HashSigner,
};

/// Length of generated transaction ids and OTP reference numbers.
pub const TRANSACTION_ID_LEN: usize = 20;

/// Length of a formatted send time.
pub const TIMESTAMP_LEN: usize = 17;

/// Returns `len` random decimal digits.
///
/// Drawn from the thread-local CSPRNG.
///
/// # Examples
///
/// ```
/// let id = paycell::builder::random_digits(20);
/// assert_eq!(id.len(), 20);
/// assert!(id.bytes().all(|b| b.is_ascii_digit()));
/// ```
#[must_use]
pub fn random_digits(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).map(|_| char::from(b'0' + rng.random_range(0..10u8))).collect()
}

/// Current local time as `YYYYMMDDhhmmssSSS`.
#[must_use]
pub fn transaction_timestamp() -> String {
    Local::now().format("%Y%m%d%H%M%S%3f").to_string()
}

/// Converts a decimal amount to the gateway's minor-unit digit string.
///
/// # Errors
///
/// Returns `PaycellError::InvalidInput` if `total` is not a non-negative decimal with at
/// most two fractional digits.
///
/// # Examples
///
/// ```
/// use paycell::builder::minor_units;
///
/// assert_eq!(minor_units("10.50").unwrap(), "1050");
/// assert_eq!(minor_units("12").unwrap(), "1200");
/// assert!(minor_units("1.005").is_err());
/// ```
pub fn minor_units(total: &str) -> Result<String> {
    let amount = Decimal::from_str(total.trim())
        .map_err(|e| PaycellError::InvalidInput(format!("amount '{total}' is not a decimal: {e}")))?
        .normalize();

    if amount.is_sign_negative() {
        return Err(PaycellError::InvalidInput(format!("amount '{total}' is negative")));
    }
    if amount.scale() > 2 {
        return Err(PaycellError::InvalidInput(format!(
            "amount '{total}' has more than two fractional digits"
        )));
    }

    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| PaycellError::InvalidInput(format!("amount '{total}' is too large")))?;
    Ok(minor.trunc().normalize().to_string())
}

fn validate_currency(currency: &str) -> Result<String> {
    let currency = currency.trim();
    if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(PaycellError::InvalidInput(format!(
            "currency must be a three-letter code, got '{currency}'"
        )));
    }
    Ok(currency.to_ascii_uppercase())
}

/// Checks that an MSISDN is non-empty and numeric.
///
/// # Errors
///
/// Returns `PaycellError::InvalidInput` otherwise.
pub fn validate_msisdn(msisdn: &str) -> Result<()> {
    if msisdn.is_empty() || !msisdn.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PaycellError::InvalidInput("msisdn must be a non-empty digit string".into()));
    }
    Ok(())
}

/// Mutable per-call state: mode, subscriber, client address and amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    mode: Mode,
    msisdn: String,
    client_ip: String,
    amount: Option<String>,
    currency: Option<String>,
}

impl CallContext {
    /// Creates a context for `msisdn` in `mode`.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if `msisdn` is not a digit string.
    pub fn new(mode: Mode, msisdn: impl Into<String>) -> Result<Self> {
        let msisdn = msisdn.into();
        validate_msisdn(&msisdn)?;
        Ok(Self { mode, msisdn, client_ip: String::new(), amount: None, currency: None })
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Subscriber MSISDN.
    #[must_use]
    pub fn msisdn(&self) -> &str {
        &self.msisdn
    }

    /// Client IP sent in request headers.
    #[must_use]
    pub fn client_ip(&self) -> &str {
        &self.client_ip
    }

    /// Amount in minor units, if set.
    #[must_use]
    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    /// Currency code, if set.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Switches mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Replaces the subscriber.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if `msisdn` is not a digit string.
    pub fn set_msisdn(&mut self, msisdn: impl Into<String>) -> Result<()> {
        let msisdn = msisdn.into();
        validate_msisdn(&msisdn)?;
        self.msisdn = msisdn;
        Ok(())
    }

    /// Sets the client IP.
    pub fn set_ip_address(&mut self, ip: impl Into<String>) {
        self.client_ip = ip.into();
    }

    /// Sets amount and currency; `total` is a decimal such as `"10.50"`.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` for a malformed amount or currency. The
    /// context is left unchanged.
    pub fn set_amount(&mut self, total: &str, currency: &str) -> Result<()> {
        let amount = minor_units(total)?;
        let currency = validate_currency(currency)?;
        self.amount = Some(amount);
        self.currency = Some(currency);
        Ok(())
    }

    fn require_amount(&self) -> Result<(String, String)> {
        match (&self.amount, &self.currency) {
            (Some(amount), Some(currency)) => Ok((amount.clone(), currency.clone())),
            _ => Err(PaycellError::InvalidInput(
                "amount is not set; call set_amount first".to_owned(),
            )),
        }
    }
}

/// Card data for tokenization.
///
/// Wiped on drop; `Debug` shows only the last four digits.
#[derive(Clone, PartialEq, Eq)]
pub struct CardDetails {
    number: String,
    expiry_month: String,
    expiry_year: String,
    cvc: String,
}

impl CardDetails {
    /// Validates and normalizes card data.
    ///
    /// Spaces and dashes in `number` are ignored, a one-digit month is zero-padded and a
    /// four-digit year is shortened to two digits.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if a field is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use paycell::builder::CardDetails;
    ///
    /// let card = CardDetails::new("4355 0843 5508 4358", "1", "2026", "000").unwrap();
    /// assert_eq!(card.expiry_month(), "01");
    /// assert_eq!(card.expiry_year(), "26");
    /// assert!(format!("{card:?}").contains("4358"));
    /// ```
    pub fn new(number: &str, month: &str, year: &str, cvc: &str) -> Result<Self> {
        let number: String = number.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
        if !(12..=19).contains(&number.len()) || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaycellError::InvalidInput("card number must be 12-19 digits".into()));
        }

        let month_value: u8 = month
            .trim()
            .parse()
            .map_err(|_| PaycellError::InvalidInput("expiry month must be numeric".into()))?;
        if !(1..=12).contains(&month_value) {
            return Err(PaycellError::InvalidInput("expiry month must be 1-12".into()));
        }

        let year = year.trim();
        let expiry_year = match year.len() {
            2 | 4 if year.bytes().all(|b| b.is_ascii_digit()) => year[year.len() - 2..].to_owned(),
            _ => return Err(PaycellError::InvalidInput("expiry year must be YY or YYYY".into())),
        };

        let cvc = cvc.trim();
        if !(3..=4).contains(&cvc.len()) || !cvc.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaycellError::InvalidInput("cvc must be 3 or 4 digits".into()));
        }

        Ok(Self {
            number,
            expiry_month: format!("{month_value:02}"),
            expiry_year,
            cvc: cvc.to_owned(),
        })
    }

    /// Two-digit expiry month.
    #[must_use]
    pub fn expiry_month(&self) -> &str {
        &self.expiry_month
    }

    /// Two-digit expiry year.
    #[must_use]
    pub fn expiry_year(&self) -> &str {
        &self.expiry_year
    }

    /// Last four digits of the card number.
    #[must_use]
    pub fn last4(&self) -> &str {
        &self.number[self.number.len() - 4..]
    }
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &format!("****{}", self.last4()))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .finish_non_exhaustive()
    }
}

impl Drop for CardDetails {
    fn drop(&mut self) {
        self.number.zeroize();
        self.cvc.zeroize();
    }
}

/// Optional provision fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionOptions {
    /// Stored card to charge.
    pub card_id: Option<String>,
    /// One-time card token to charge.
    pub card_token: Option<String>,
    /// Installment count.
    pub installment_count: Option<u32>,
    /// Loyalty points to spend, in minor units.
    pub point_amount: Option<String>,
    /// Acquirer bank code.
    pub acquirer_bank_code: Option<String>,
    /// Completed 3-D session.
    pub three_d_session_id: Option<String>,
    /// Subscriber PIN.
    pub pin: Option<String>,
    /// Reference number of the pre-authorization to capture (PostAuth).
    pub original_reference_number: Option<String>,
}

/// Optional 3-D session fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreeDSessionOptions {
    /// Stored card being authenticated.
    pub card_id: Option<String>,
    /// One-time card token being authenticated.
    pub card_token: Option<String>,
    /// Installment count.
    pub installment_count: Option<u32>,
    /// Authentication target, e.g. `MERCHANT`.
    pub target: Option<String>,
    /// Transaction the session authenticates, e.g. `AUTH`.
    pub transaction_type: Option<String>,
}

/// Builds requests for one call.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    config: &'a PaycellConfig,
    signer: &'a HashSigner,
    context: &'a CallContext,
}

impl<'a> RequestBuilder<'a> {
    /// Creates a builder over a configuration, signer and call context.
    #[must_use]
    pub const fn new(
        config: &'a PaycellConfig,
        signer: &'a HashSigner,
        context: &'a CallContext,
    ) -> Self {
        Self { config, signer, context }
    }

    /// Fresh header with a new transaction id and send time.
    #[must_use]
    pub fn header(&self) -> RequestHeader {
        RequestHeader {
            application_name: self.config.credentials.application_name.clone(),
            application_pwd: Some(self.config.credentials.application_password.expose().to_owned()),
            client_ip_address: self.context.client_ip().to_owned(),
            transaction_date_time: transaction_timestamp(),
            transaction_id: random_digits(TRANSACTION_ID_LEN),
        }
    }

    fn reference_number(&self, header: &RequestHeader) -> String {
        format!("{}{}", self.config.merchant.reference_prefix, header.transaction_date_time)
    }

    fn msisdn(&self) -> Option<String> {
        Some(self.context.msisdn().to_owned())
    }

    fn merchant_code(&self) -> Option<String> {
        Some(self.config.merchant.merchant_code.clone())
    }

    /// Auth, PreAuth or PostAuth request.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if no amount is set.
    pub fn provision(
        &self,
        payment_type: PaymentType,
        options: &ProvisionOptions,
    ) -> Result<ProvisionRequest> {
        let (amount, currency) = self.context.require_amount()?;
        let request_header = self.header();
        Ok(ProvisionRequest {
            msisdn: self.msisdn(),
            merchant_code: self.merchant_code(),
            card_id: options.card_id.clone(),
            card_token: options.card_token.clone(),
            reference_number: Some(self.reference_number(&request_header)),
            original_reference_number: options.original_reference_number.clone(),
            amount: Some(amount),
            point_amount: options.point_amount.clone(),
            currency: Some(currency),
            installment_count: options.installment_count,
            payment_type: Some(payment_type),
            acquirer_bank_code: options.acquirer_bank_code.clone(),
            three_d_session_id: options.three_d_session_id.clone(),
            pin: options.pin.clone(),
            request_header,
        })
    }

    /// Refund of `original_reference_number` for the context amount.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if no amount is set or the reference is blank.
    pub fn refund(&self, original_reference_number: &str) -> Result<RefundRequest> {
        let original = require_reference(original_reference_number)?;
        let (amount, currency) = self.context.require_amount()?;
        let request_header = self.header();
        Ok(RefundRequest {
            msisdn: self.msisdn(),
            merchant_code: self.merchant_code(),
            reference_number: Some(self.reference_number(&request_header)),
            original_reference_number: Some(original),
            amount: Some(amount),
            currency: Some(currency),
            request_header,
        })
    }

    /// Reversal of `original_reference_number`.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if the reference is blank.
    pub fn reverse(&self, original_reference_number: &str) -> Result<ReverseRequest> {
        let original = require_reference(original_reference_number)?;
        let request_header = self.header();
        Ok(ReverseRequest {
            msisdn: self.msisdn(),
            merchant_code: self.merchant_code(),
            reference_number: Some(self.reference_number(&request_header)),
            original_reference_number: Some(original),
            request_header,
        })
    }

    /// 3-D session request for the context amount.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if no amount is set.
    pub fn three_d_session(&self, options: &ThreeDSessionOptions) -> Result<ThreeDSessionRequest> {
        let (amount, currency) = self.context.require_amount()?;
        let request_header = self.header();
        Ok(ThreeDSessionRequest {
            msisdn: self.msisdn(),
            merchant_code: self.merchant_code(),
            card_id: options.card_id.clone(),
            card_token: options.card_token.clone(),
            installment_count: options.installment_count,
            amount: Some(amount),
            currency: Some(currency),
            reference_number: Some(self.reference_number(&request_header)),
            target: options.target.clone(),
            transaction_type: options.transaction_type.clone(),
            request_header,
        })
    }

    /// 3-D session result query.
    #[must_use]
    pub fn three_d_result(&self, three_d_session_id: Option<&str>) -> ThreeDResultRequest {
        let request_header = self.header();
        ThreeDResultRequest {
            msisdn: self.msisdn(),
            merchant_code: self.merchant_code(),
            reference_number: Some(self.reference_number(&request_header)),
            three_d_session_id: three_d_session_id.map(str::to_owned),
            request_header,
        }
    }

    /// Signed card tokenization request.
    ///
    /// The header carries no application password; `hashData` is computed from the
    /// header's transaction id and send time.
    #[must_use]
    pub fn card_token(&self, card: &CardDetails) -> CardTokenRequest {
        let mut request_header = self.header();
        request_header.application_pwd = None;
        let hash_data = self
            .signer
            .sign_request(&request_header.transaction_id, &request_header.transaction_date_time);

        CardTokenRequest {
            request_header,
            credit_card_no: card.number.clone(),
            expire_date_month: card.expiry_month.clone(),
            expire_date_year: card.expiry_year.clone(),
            cvc_no: card.cvc.clone(),
            hash_data,
        }
    }

    /// Payment methods query.
    #[must_use]
    pub fn payment_methods(&self) -> PaymentMethodsRequest {
        PaymentMethodsRequest { request_header: self.header(), msisdn: self.msisdn() }
    }

    /// Mobile-payment opening request; `eula_id` is sent only when given.
    #[must_use]
    pub fn open_mobile_payment(&self, eula_id: Option<&str>) -> MobilePaymentRequest {
        MobilePaymentRequest {
            request_header: self.header(),
            msisdn: self.msisdn(),
            eula_id: eula_id.map(str::to_owned),
        }
    }

    /// OTP send request with a random reference number.
    #[must_use]
    pub fn send_otp(&self) -> OtpRequest {
        OtpRequest {
            request_header: self.header(),
            msisdn: self.msisdn(),
            amount: self.context.amount().map(str::to_owned),
            currency: None,
            reference_number: Some(random_digits(TRANSACTION_ID_LEN)),
            otp: None,
            token: None,
        }
    }

    /// OTP validation request with a random reference number.
    #[must_use]
    pub fn validate_otp(&self, token: Option<&str>, otp: Option<&str>) -> OtpRequest {
        OtpRequest {
            token: token.map(str::to_owned),
            otp: otp.map(str::to_owned),
            ..self.send_otp()
        }
    }
}

fn require_reference(reference: &str) -> Result<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(PaycellError::InvalidInput("original reference number is empty".into()));
    }
    Ok(reference.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> CallContext {
        let mut context = CallContext::new(Mode::Test, "5305289290").unwrap();
        context.set_ip_address("10.0.0.1");
        context.set_amount("10.50", "TRY").unwrap();
        context
    }

    fn with_builder<T>(context: &CallContext, f: impl FnOnce(RequestBuilder<'_>) -> T) -> T {
        let config = PaycellConfig::sandbox();
        let signer = HashSigner::new(&config.credentials);
        f(RequestBuilder::new(&config, &signer, context))
    }

    #[test]
    fn test_random_digits_shape() {
        for len in [0, 1, 17, 20, 64] {
            let digits = random_digits(len);
            assert_eq!(digits.len(), len);
            assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_random_digits_not_reused() {
        assert_ne!(random_digits(TRANSACTION_ID_LEN), random_digits(TRANSACTION_ID_LEN));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = transaction_timestamp();
        assert_eq!(ts.len(), TIMESTAMP_LEN);
        assert!(ts.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(minor_units("10.50").unwrap(), "1050");
        assert_eq!(minor_units("10.5").unwrap(), "1050");
        assert_eq!(minor_units("12").unwrap(), "1200");
        assert_eq!(minor_units("0.01").unwrap(), "1");
        assert_eq!(minor_units(" 7.00 ").unwrap(), "700");
        assert_eq!(minor_units("0").unwrap(), "0");
        assert_eq!(minor_units("10.500").unwrap(), "1050");
    }

    #[test]
    fn test_minor_units_rejects_bad_amounts() {
        for bad in ["", "abc", "-1", "-0.01", "1.005", "1,50"] {
            let result = minor_units(bad);
            assert!(
                matches!(result, Err(PaycellError::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_set_amount_keeps_context_on_error() {
        let mut context = context();
        assert!(context.set_amount("1.234", "TRY").is_err());
        assert!(context.set_amount("5", "TL").is_err());
        assert_eq!(context.amount(), Some("1050"));
        assert_eq!(context.currency(), Some("TRY"));
    }

    #[test]
    fn test_currency_uppercased() {
        let mut context = context();
        context.set_amount("1", "try").unwrap();
        assert_eq!(context.currency(), Some("TRY"));
    }

    #[test]
    fn test_msisdn_validation() {
        assert!(CallContext::new(Mode::Test, "").is_err());
        assert!(CallContext::new(Mode::Test, "+90530").is_err());

        let mut context = context();
        assert!(context.set_msisdn("abc").is_err());
        assert_eq!(context.msisdn(), "5305289290");
        context.set_msisdn("5000000000").unwrap();
        assert_eq!(context.msisdn(), "5000000000");
    }

    #[test]
    fn test_header_fields() {
        let context = context();
        let header = with_builder(&context, |b| b.header());

        assert_eq!(header.application_name, "PAYCELLTEST");
        assert_eq!(header.application_pwd.as_deref(), Some("PaycellTestPassword"));
        assert_eq!(header.client_ip_address, "10.0.0.1");
        assert_eq!(header.transaction_date_time.len(), TIMESTAMP_LEN);
        assert_eq!(header.transaction_id.len(), TRANSACTION_ID_LEN);
    }

    #[test]
    fn test_provision_request() {
        let context = context();
        let options = ProvisionOptions { card_id: Some("card-1".into()), ..Default::default() };
        let request = with_builder(&context, |b| b.provision(PaymentType::PreAuth, &options))
            .unwrap();

        assert_eq!(request.msisdn.as_deref(), Some("5305289290"));
        assert_eq!(request.merchant_code.as_deref(), Some("9998"));
        assert_eq!(request.amount.as_deref(), Some("1050"));
        assert_eq!(request.currency.as_deref(), Some("TRY"));
        assert_eq!(request.payment_type, Some(PaymentType::PreAuth));
        assert_eq!(request.card_id.as_deref(), Some("card-1"));
        assert_eq!(request.card_token, None);

        let expected_ref = format!("666{}", request.request_header.transaction_date_time);
        assert_eq!(request.reference_number.as_deref(), Some(expected_ref.as_str()));
    }

    #[test]
    fn test_provision_requires_amount() {
        let context = CallContext::new(Mode::Test, "5305289290").unwrap();
        let result =
            with_builder(&context, |b| b.provision(PaymentType::Sale, &ProvisionOptions::default()));
        assert!(matches!(result.unwrap_err(), PaycellError::InvalidInput(_)));
    }

    #[test]
    fn test_refund_and_reverse() {
        let context = context();
        let refund = with_builder(&context, |b| b.refund("66620240101120000000")).unwrap();
        assert_eq!(refund.original_reference_number.as_deref(), Some("66620240101120000000"));
        assert_eq!(refund.amount.as_deref(), Some("1050"));

        let reverse = with_builder(&context, |b| b.reverse("66620240101120000000")).unwrap();
        assert_eq!(reverse.original_reference_number.as_deref(), Some("66620240101120000000"));

        assert!(with_builder(&context, |b| b.reverse("  ")).is_err());
    }

    #[test]
    fn test_three_d_result_optional_session() {
        let context = context();
        let without = with_builder(&context, |b| b.three_d_result(None));
        assert_eq!(without.three_d_session_id, None);

        let with = with_builder(&context, |b| b.three_d_result(Some("sess-1")));
        assert_eq!(with.three_d_session_id.as_deref(), Some("sess-1"));
    }

    #[test]
    fn test_card_token_request_is_signed_without_password() {
        let context = context();
        let card = CardDetails::new("4355084355084358", "12", "26", "000").unwrap();
        let config = PaycellConfig::sandbox();
        let signer = HashSigner::new(&config.credentials);
        let request = RequestBuilder::new(&config, &signer, &context).card_token(&card);

        assert_eq!(request.request_header.application_pwd, None);
        assert_eq!(request.credit_card_no, "4355084355084358");
        assert_eq!(
            request.hash_data,
            signer.sign_request(
                &request.request_header.transaction_id,
                &request.request_header.transaction_date_time
            )
        );
    }

    #[test]
    fn test_otp_requests_use_random_reference() {
        let context = context();
        let request = with_builder(&context, |b| b.send_otp());
        let reference = request.reference_number.unwrap();
        assert_eq!(reference.len(), TRANSACTION_ID_LEN);
        assert!(reference.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(request.amount.as_deref(), Some("1050"));
        assert_eq!(request.currency, None);

        let validate = with_builder(&context, |b| b.validate_otp(Some("tok"), None));
        assert_eq!(validate.token.as_deref(), Some("tok"));
        assert_eq!(validate.otp, None);
    }

    #[test]
    fn test_card_details_validation() {
        assert!(CardDetails::new("4355", "12", "26", "000").is_err());
        assert!(CardDetails::new("4355084355084358", "13", "26", "000").is_err());
        assert!(CardDetails::new("4355084355084358", "0", "26", "000").is_err());
        assert!(CardDetails::new("4355084355084358", "12", "2", "000").is_err());
        assert!(CardDetails::new("4355084355084358", "12", "26", "00").is_err());
        assert!(CardDetails::new("4355-0843-5508-4358", "12", "26", "0000").is_ok());
    }

    #[test]
    fn test_card_details_debug_masks_number() {
        let card = CardDetails::new("4355084355084358", "12", "26", "987").unwrap();
        let debug_str = format!("{card:?}");
        assert!(debug_str.contains("****4358"));
        assert!(!debug_str.contains("43550843"));
        assert!(!debug_str.contains("987"));
        assert_eq!(card.last4(), "4358");
    }
}
