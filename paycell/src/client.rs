//! The gateway client.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument, warn};

use crate::{
    builder::{
        CallContext, CardDetails, ProvisionOptions, RequestBuilder, ThreeDSessionOptions,
    },
    config::PaycellConfig,
    endpoint::{EndpointResolver, Mode, Operation},
    error::{PaycellError, Result},
    form::{ThreeDForm, ThreeDFormOptions},
    models::{
        CardTokenResponse, GatewayReply, MobilePaymentResponse, OtpResponse, PaymentMethodsResponse,
        PaymentType, ProvisionResponse, ThreeDResultResponse, ThreeDSessionResponse,
    },
    outcome::Outcome,
    secret::redact_msisdn,
    signing::HashSigner,
    transport::{HttpTransport, Transport},
};

/// Client for one subscriber.
///
/// Configuration and signer are fixed at construction. The call context (mode, MSISDN,
/// client IP, amount) is changed through `&mut self` setters; operations take `&self` and
/// send exactly one request each.
///
/// # Examples
///
/// ```no_run
/// use paycell::{PaycellClient, PaycellConfig, builder::ProvisionOptions};
///
/// # async fn example() -> paycell::Result<()> {
/// let mut client = PaycellClient::new(PaycellConfig::sandbox(), "5305289290")?;
/// client.set_ip_address("10.0.0.1");
/// client.set_amount("10.50", "TRY")?;
///
/// let response = client.auth(&ProvisionOptions::default()).await?.into_approved()?;
/// println!("order {:?}", response.order_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaycellClient {
    config: PaycellConfig,
    signer: HashSigner,
    resolver: EndpointResolver,
    transport: HttpTransport,
    context: CallContext,
}

impl PaycellClient {
    /// Creates a client for `msisdn`, starting in the configured mode.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::ConfigError` if the configuration is invalid,
    /// `PaycellError::InvalidInput` if `msisdn` is not a digit string, or
    /// `PaycellError::HttpError` if the HTTP client cannot be built.
    pub fn new(config: PaycellConfig, msisdn: impl Into<String>) -> Result<Self> {
        config.validate()?;
        let context = CallContext::new(config.mode, msisdn)?;
        let transport = HttpTransport::with_config(&config.http)?;
        Ok(Self {
            signer: HashSigner::new(&config.credentials),
            resolver: EndpointResolver::new(&config.endpoints),
            transport,
            context,
            config,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PaycellConfig {
        &self.config
    }

    /// Current call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.context
    }

    /// Hash signer for this application.
    #[must_use]
    pub const fn signer(&self) -> &HashSigner {
        &self.signer
    }

    /// Switches between production and test.
    pub fn set_mode(&mut self, mode: Mode) {
        self.context.set_mode(mode);
    }

    /// Sets the subscriber IP sent in request headers.
    pub fn set_ip_address(&mut self, ip: impl Into<String>) {
        self.context.set_ip_address(ip);
    }

    /// Sets amount and currency for the following calls.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` for a malformed amount or currency.
    pub fn set_amount(&mut self, total: &str, currency: &str) -> Result<()> {
        self.context.set_amount(total, currency)
    }

    /// Replaces the subscriber.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidInput` if `msisdn` is not a digit string.
    pub fn set_msisdn(&mut self, msisdn: impl Into<String>) -> Result<()> {
        self.context.set_msisdn(msisdn)
    }

    fn builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.config, &self.signer, &self.context)
    }

    /// Sale: authorize and capture the current amount.
    ///
    /// # Errors
    ///
    /// Returns error if no amount is set, the request cannot be sent, or the response
    /// cannot be decoded.
    #[instrument(skip(self, options), fields(operation = "auth", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn auth(&self, options: &ProvisionOptions) -> Result<Outcome<ProvisionResponse>> {
        let request = self.builder().provision(PaymentType::Sale, options)?;
        self.dispatch(Operation::Provision, &request).await
    }

    /// Pre-authorization of the current amount.
    ///
    /// # Errors
    ///
    /// Same as [`auth`](Self::auth).
    #[instrument(skip(self, options), fields(operation = "pre_auth", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn pre_auth(&self, options: &ProvisionOptions) -> Result<Outcome<ProvisionResponse>> {
        let request = self.builder().provision(PaymentType::PreAuth, options)?;
        self.dispatch(Operation::Provision, &request).await
    }

    /// Capture of a pre-authorization.
    ///
    /// Set `options.original_reference_number` to the pre-authorization's reference.
    ///
    /// # Errors
    ///
    /// Same as [`auth`](Self::auth).
    #[instrument(skip(self, options), fields(operation = "post_auth", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn post_auth(&self, options: &ProvisionOptions) -> Result<Outcome<ProvisionResponse>> {
        let request = self.builder().provision(PaymentType::PostAuth, options)?;
        self.dispatch(Operation::Provision, &request).await
    }

    /// Refund of the current amount against `original_reference_number`.
    ///
    /// # Errors
    ///
    /// Returns error if no amount is set, the reference is blank, or the call fails.
    #[instrument(skip(self), fields(operation = "refund", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn refund(&self, original_reference_number: &str) -> Result<Outcome<ProvisionResponse>> {
        let request = self.builder().refund(original_reference_number)?;
        self.dispatch(Operation::Refund, &request).await
    }

    /// Reversal of `original_reference_number`.
    ///
    /// # Errors
    ///
    /// Returns error if the reference is blank or the call fails.
    #[instrument(skip(self), fields(operation = "reverse", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn reverse(&self, original_reference_number: &str) -> Result<Outcome<ProvisionResponse>> {
        let request = self.builder().reverse(original_reference_number)?;
        self.dispatch(Operation::Reverse, &request).await
    }

    /// Opens a 3-D Secure session for the current amount.
    ///
    /// # Errors
    ///
    /// Returns error if no amount is set or the call fails.
    #[instrument(skip(self, options), fields(operation = "three_d_session", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn three_d_session(
        &self,
        options: &ThreeDSessionOptions,
    ) -> Result<Outcome<ThreeDSessionResponse>> {
        let request = self.builder().three_d_session(options)?;
        self.dispatch(Operation::ThreeDSession, &request).await
    }

    /// Queries the result of a 3-D Secure session.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    #[instrument(skip(self, three_d_session_id), fields(operation = "three_d_result", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn three_d_result(
        &self,
        three_d_session_id: Option<&str>,
    ) -> Result<Outcome<ThreeDResultResponse>> {
        let request = self.builder().three_d_result(three_d_session_id);
        self.dispatch(Operation::ThreeDResult, &request).await
    }

    /// Exchanges card data for a single-use card token.
    ///
    /// The response is returned as decoded; check it with
    /// [`verify_card_token_response`](Self::verify_card_token_response) before use.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    #[instrument(skip(self, card), fields(operation = "card_token", mode = %self.context.mode(), card_last4 = card.last4()))]
    pub async fn card_token(&self, card: &CardDetails) -> Result<Outcome<CardTokenResponse>> {
        let request = self.builder().card_token(card);
        self.dispatch(Operation::CardToken, &request).await
    }

    /// Whether a card-token response carries the hash this application expects.
    #[must_use]
    pub fn verify_card_token_response(&self, response: &CardTokenResponse) -> bool {
        let Some(hash_data) = response.hash_data.as_deref() else {
            warn!("card token response carries no hash");
            return false;
        };
        let verified = self.signer.verify_response(
            &response.response_header,
            response.card_token.as_deref(),
            hash_data,
        );
        if !verified {
            warn!(
                transaction_id = %response.response_header.transaction_id,
                "card token response hash mismatch"
            );
        }
        verified
    }

    /// Lists the subscriber's cards and mobile-payment status.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    #[instrument(skip(self), fields(operation = "payment_methods", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn get_payment_methods(&self) -> Result<Outcome<PaymentMethodsResponse>> {
        let request = self.builder().payment_methods();
        self.dispatch(Operation::PaymentMethods, &request).await
    }

    /// Enables mobile billing; `eula_id` is sent only when given.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    #[instrument(skip(self), fields(operation = "open_mobile_payment", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn open_mobile_payment(
        &self,
        eula_id: Option<&str>,
    ) -> Result<Outcome<MobilePaymentResponse>> {
        let request = self.builder().open_mobile_payment(eula_id);
        self.dispatch(Operation::OpenMobilePayment, &request).await
    }

    /// Enables mobile billing under the configured agreement, `merchant.eula_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    #[instrument(skip(self), fields(operation = "open_mobile_payment", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn open_mobile_payment_default_eula(&self) -> Result<Outcome<MobilePaymentResponse>> {
        let request = self.builder().open_mobile_payment(Some(&self.config.merchant.eula_id));
        self.dispatch(Operation::OpenMobilePayment, &request).await
    }

    /// Sends a one-time password to the subscriber.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    #[instrument(skip(self), fields(operation = "send_otp", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn send_otp(&self) -> Result<Outcome<OtpResponse>> {
        let request = self.builder().send_otp();
        self.dispatch(Operation::SendOtp, &request).await
    }

    /// Checks a one-time password; `token` and `otp` are sent only when given.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    #[instrument(skip(self, token, otp), fields(operation = "validate_otp", mode = %self.context.mode(), msisdn = %redact_msisdn(self.context.msisdn())))]
    pub async fn validate_otp(
        &self,
        token: Option<&str>,
        otp: Option<&str>,
    ) -> Result<Outcome<OtpResponse>> {
        let request = self.builder().validate_otp(token, otp);
        self.dispatch(Operation::ValidateOtp, &request).await
    }

    /// Browser form for the 3-D Secure page of the current mode.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidEndpoint` if the configured form URL is malformed.
    pub fn three_d_form(
        &self,
        three_d_session_id: &str,
        options: &ThreeDFormOptions,
    ) -> Result<ThreeDForm> {
        let action = self.resolver.resolve(self.context.mode(), Operation::ThreeDForm)?;
        Ok(ThreeDForm::new(action, three_d_session_id, options))
    }

    async fn dispatch<Req, Resp>(&self, operation: Operation, request: &Req) -> Result<Outcome<Resp>>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned + GatewayReply,
    {
        let url = self.resolver.resolve(self.context.mode(), operation)?;
        let body = serde_json::to_vec(request)
            .map_err(|e| PaycellError::EncodeError(format!("{}: {e}", operation.name())))?;

        debug!(protocol = self.transport.protocol_name(), path = url.path(), "dispatching request");
        let response = self.transport.post_json(&url, body).await?;
        let decoded: Resp = serde_json::from_slice(&response.body)
            .map_err(|e| PaycellError::DecodeError(format!("{}: {e}", operation.name())))?;

        classify(operation, decoded)
    }
}

fn classify<Resp: GatewayReply>(operation: Operation, response: Resp) -> Result<Outcome<Resp>> {
    let Some(code) = response.result_code().map(str::to_owned) else {
        return Err(PaycellError::DecodeError(format!(
            "{}: response carries no result code",
            operation.name()
        )));
    };

    if response.is_approved() {
        info!(operation = operation.name(), "gateway approved");
        return Ok(Outcome::Approved(response));
    }

    let description = response.result_description().to_owned();
    warn!(operation = operation.name(), code = %code, description = %description, "gateway declined");
    Ok(Outcome::Declined { code, description, response })
}
