//! Endpoint table and dispatch.
//!
//! The gateway exposes one provisioning base URL per environment, under which every
//! operation lives at `<base>/<operation>/`, plus two auxiliary hosts per environment: the
//! card tokenization service and the 3-D Secure form page.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use url::Url;

use crate::{
    error::{PaycellError, Result},
    transport::http::validate_url,
};

/// Gateway environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Production gateway.
    Prod,
    /// Test (sandbox) gateway.
    #[default]
    Test,
}

impl Mode {
    /// Returns the gateway's name for this environment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prod => "PROD",
            Self::Test => "TEST",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PaycellError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROD" | "PRODUCTION" => Ok(Self::Prod),
            "TEST" | "SANDBOX" => Ok(Self::Test),
            other => Err(PaycellError::InvalidInput(format!("unknown mode: {other}"))),
        }
    }
}

/// A remote gateway operation.
///
/// Authorization, pre-authorization and post-authorization share
/// [`Provision`](Self::Provision); they differ only in the payment type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sale, pre-authorization or capture.
    Provision,
    /// Refund of a captured provision.
    Refund,
    /// Reversal (void) of a provision.
    Reverse,
    /// Start of a 3-D Secure session.
    ThreeDSession,
    /// Result of a 3-D Secure session.
    ThreeDResult,
    /// Card tokenization.
    CardToken,
    /// Cards and mobile-payment status of a subscriber.
    PaymentMethods,
    /// Activation of mobile (carrier) billing.
    OpenMobilePayment,
    /// One-time password delivery.
    SendOtp,
    /// One-time password check.
    ValidateOtp,
    /// Browser redirect to the 3-D Secure page.
    ThreeDForm,
}

impl Operation {
    /// Path segment under the provisioning base URL.
    ///
    /// `None` for operations served by an auxiliary host.
    #[must_use]
    pub const fn path(&self) -> Option<&'static str> {
        match self {
            Self::Provision => Some("provision"),
            Self::Refund => Some("refund"),
            Self::Reverse => Some("reverse"),
            Self::ThreeDSession => Some("getThreeDSession"),
            Self::ThreeDResult => Some("getThreeDSessionResult"),
            Self::PaymentMethods => Some("getPaymentMethods"),
            Self::OpenMobilePayment => Some("openMobilePayment"),
            Self::SendOtp => Some("sendOTP"),
            Self::ValidateOtp => Some("validateOTP"),
            Self::CardToken | Self::ThreeDForm => None,
        }
    }

    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Provision => "provision",
            Self::Refund => "refund",
            Self::Reverse => "reverse",
            Self::ThreeDSession => "three_d_session",
            Self::ThreeDResult => "three_d_result",
            Self::CardToken => "card_token",
            Self::PaymentMethods => "payment_methods",
            Self::OpenMobilePayment => "open_mobile_payment",
            Self::SendOtp => "send_otp",
            Self::ValidateOtp => "validate_otp",
            Self::ThreeDForm => "three_d_form",
        }
    }
}

/// Base URLs of one environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModeEndpoints {
    /// Provisioning base URL; operation paths are appended to it.
    pub provision: String,
    /// Card tokenization URL.
    pub token: String,
    /// 3-D Secure form URL.
    pub three_d_form: String,
}

impl ModeEndpoints {
    fn validate(&self, mode: Mode, allow_insecure: bool) -> Result<()> {
        let mode = mode.as_str().to_ascii_lowercase();
        for (name, raw) in [
            ("provision", &self.provision),
            ("token", &self.token),
            ("three_d_form", &self.three_d_form),
        ] {
            let url = Url::parse(raw).map_err(|e| {
                PaycellError::ConfigError(format!("endpoints.{mode}.{name} '{raw}': {e}"))
            })?;
            validate_url(&url, allow_insecure).map_err(|e| {
                PaycellError::ConfigError(format!("endpoints.{mode}.{name}: {e}"))
            })?;
        }
        Ok(())
    }
}

/// Endpoint table for both environments.
///
/// Defaults to the published Paycell hosts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    /// Production endpoints.
    #[serde(default = "default_prod_endpoints")]
    pub prod: ModeEndpoints,
    /// Test endpoints.
    #[serde(default = "default_test_endpoints")]
    pub test: ModeEndpoints,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { prod: default_prod_endpoints(), test: default_test_endpoints() }
    }
}

impl EndpointConfig {
    /// Endpoints for one environment.
    #[must_use]
    pub fn for_mode(&self, mode: Mode) -> &ModeEndpoints {
        match mode {
            Mode::Prod => &self.prod,
            Mode::Test => &self.test,
        }
    }

    /// Validates every configured URL.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::ConfigError` if a URL does not parse, is not HTTPS, or points
    /// to a loopback host while `allow_insecure` is off.
    pub fn validate(&self, allow_insecure: bool) -> Result<()> {
        self.prod.validate(Mode::Prod, allow_insecure)?;
        self.test.validate(Mode::Test, allow_insecure)
    }
}

fn default_prod_endpoints() -> ModeEndpoints {
    ModeEndpoints {
        provision: "https://tpay.turkcell.com.tr/tpay/provision/services/restful/getCardToken"
            .to_owned(),
        token: "https://epayment.turkcell.com.tr/paymentmanagement/rest/getCardTokenSecure"
            .to_owned(),
        three_d_form: "https://epayment.turkcell.com.tr/paymentmanagement/rest/threeDSecure"
            .to_owned(),
    }
}

fn default_test_endpoints() -> ModeEndpoints {
    ModeEndpoints {
        provision:
            "https://tpay-test.turkcell.com.tr/tpay/provision/services/restful/getCardToken"
                .to_owned(),
        token: "https://omccstb.turkcell.com.tr/paymentmanagement/rest/getCardTokenSecure"
            .to_owned(),
        three_d_form: "https://omccstb.turkcell.com.tr/paymentmanagement/rest/threeDSecure"
            .to_owned(),
    }
}

/// Resolves the dispatch URL of an operation.
///
/// # Examples
///
/// ```
/// use paycell::endpoint::{EndpointConfig, EndpointResolver, Mode, Operation};
///
/// let resolver = EndpointResolver::new(&EndpointConfig::default());
/// let url = resolver.resolve(Mode::Test, Operation::SendOtp).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://tpay-test.turkcell.com.tr/tpay/provision/services/restful/getCardToken/sendOTP/"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    config: EndpointConfig,
}

impl EndpointResolver {
    /// Creates a resolver over an endpoint table.
    #[must_use]
    pub fn new(config: &EndpointConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Returns the URL for `operation` in `mode`.
    ///
    /// # Errors
    ///
    /// Returns `PaycellError::InvalidEndpoint` if the configured base does not form a valid
    /// URL.
    pub fn resolve(&self, mode: Mode, operation: Operation) -> Result<Url> {
        let endpoints = self.config.for_mode(mode);
        let raw = match operation {
            Operation::CardToken => endpoints.token.clone(),
            Operation::ThreeDForm => endpoints.three_d_form.clone(),
            _ => {
                let base = endpoints.provision.trim_end_matches('/');
                let path = operation.path().unwrap_or_default();
                format!("{base}/{path}/")
            }
        };

        Url::parse(&raw)
            .map_err(|e| PaycellError::InvalidEndpoint(format!("{} '{raw}': {e}", operation.name())))
    }
}
