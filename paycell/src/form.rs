//! The browser form that hands a subscriber to the gateway's 3-D Secure page.
//!
//! Nothing is sent from here: the merchant renders the form and the subscriber's
//! browser posts it.

use url::{Url, form_urlencoded};

/// Optional 3-D form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreeDFormOptions {
    /// Where the gateway redirects the subscriber afterwards.
    pub callback_url: Option<String>,
    /// Whether loyalty points are offered.
    pub is_point: Option<bool>,
    /// Whether the gateway posts the 3-D result to the callback.
    pub is_post_3d_result: Option<bool>,
}

/// Auto-post form for the 3-D Secure page.
///
/// # Examples
///
/// ```
/// use paycell::form::{ThreeDForm, ThreeDFormOptions};
/// use url::Url;
///
/// let action = Url::parse("https://omccstb.turkcell.com.tr/paymentmanagement/rest/threeDSecure")
///     .unwrap();
/// let options = ThreeDFormOptions {
///     callback_url: Some("https://shop.example/3d".to_owned()),
///     ..Default::default()
/// };
/// let form = ThreeDForm::new(action, "sess-1", &options);
///
/// assert_eq!(form.fields()[0], ("threeDSessionId", "sess-1".to_owned()));
/// assert!(form.to_urlencoded().contains("callbackurl=https%3A%2F%2Fshop.example%2F3d"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeDForm {
    action: Url,
    fields: Vec<(&'static str, String)>,
}

impl ThreeDForm {
    /// Builds the form for `three_d_session_id`; unset options are left out.
    #[must_use]
    pub fn new(action: Url, three_d_session_id: &str, options: &ThreeDFormOptions) -> Self {
        let mut fields = vec![("threeDSessionId", three_d_session_id.to_owned())];
        if let Some(callback) = &options.callback_url {
            fields.push(("callbackurl", callback.clone()));
        }
        if let Some(is_point) = options.is_point {
            fields.push(("isPoint", is_point.to_string()));
        }
        if let Some(post_result) = options.is_post_3d_result {
            fields.push(("isPost3DResult", post_result.to_string()));
        }
        Self { action, fields }
    }

    /// URL the form posts to.
    #[must_use]
    pub const fn action(&self) -> &Url {
        &self.action
    }

    /// Field names and values in submission order.
    #[must_use]
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn to_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// HTML page that submits the form on load.
    #[must_use]
    pub fn to_html(&self) -> String {
        let inputs: String = self
            .fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "<input type=\"hidden\" name=\"{}\" value=\"{}\"/>",
                    escape_html(name),
                    escape_html(value)
                )
            })
            .collect();
        format!(
            "<html><body onload=\"document.forms[0].submit()\">\
             <form method=\"post\" action=\"{}\">{inputs}</form></body></html>",
            escape_html(self.action.as_str())
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action() -> Url {
        Url::parse("https://omccstb.turkcell.com.tr/paymentmanagement/rest/threeDSecure").unwrap()
    }

    #[test]
    fn test_minimal_form() {
        let form = ThreeDForm::new(action(), "sess-1", &ThreeDFormOptions::default());
        assert_eq!(form.fields().len(), 1);
        assert_eq!(form.to_urlencoded(), "threeDSessionId=sess-1");
    }

    #[test]
    fn test_full_form_field_order() {
        let options = ThreeDFormOptions {
            callback_url: Some("https://shop.example/cb?a=1&b=2".to_owned()),
            is_point: Some(false),
            is_post_3d_result: Some(true),
        };
        let form = ThreeDForm::new(action(), "sess-1", &options);
        let names: Vec<_> = form.fields().iter().map(|(k, _)| *k).collect();

        assert_eq!(names, ["threeDSessionId", "callbackurl", "isPoint", "isPost3DResult"]);
        assert_eq!(
            form.to_urlencoded(),
            "threeDSessionId=sess-1&callbackurl=https%3A%2F%2Fshop.example%2Fcb%3Fa%3D1%26b%3D2\
             &isPoint=false&isPost3DResult=true"
        );
    }

    #[test]
    fn test_html_escapes_values() {
        let options = ThreeDFormOptions {
            callback_url: Some("https://shop.example/\"><script>".to_owned()),
            ..Default::default()
        };
        let html = ThreeDForm::new(action(), "sess-1", &options).to_html();

        assert!(html.contains("action=\"https://omccstb.turkcell.com.tr/"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
