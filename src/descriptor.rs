//! Provider descriptors and the deep-link build algorithm.
//!
//! Every supported mail client is a [`ProviderDescriptor`] value. There is one
//! build algorithm; clients differ only in the data it reads:
//!
//! 1. `<recipient_param>=<recipient>` comes first.
//! 2. Each normalized header whose name is in `supported_headers` is emitted
//!    as `<name>=<value>`.
//! 3. Independently, a `body` header is also emitted as `<body_alias>=<value>`
//!    when the client defines an alias. A client that both supports `body` and
//!    aliases it gets both parameters.
//!
//! A client that differs from another only by its scheme prefix is declared
//! with struct update syntax:
//!
//! ```
//! use mailhandoff::ProviderDescriptor;
//! use mailhandoff::providers::MYMAIL;
//!
//! const MYMAIL_BETA: ProviderDescriptor = ProviderDescriptor {
//!     id: "mymail-beta",
//!     name: "myMail Beta",
//!     scheme: "mymail-beta://",
//!     prefix: "mymail-beta://",
//!     ..MYMAIL
//! };
//!
//! assert_eq!(MYMAIL_BETA.recipient_param, "?to");
//! ```

use serde::Serialize;
use url::Url;

use crate::error::LinkError;
use crate::intent::MailtoIntent;
use crate::link::parse_link;
use crate::normalize::{normalize, NormalizedRequest};

/// Static configuration for one mail client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderDescriptor {
    /// Stable identifier, used for lookups and stored preferences.
    pub id: &'static str,
    /// Human-readable client name.
    pub name: &'static str,
    /// Raw scheme string used to probe whether the client is installed.
    pub scheme: &'static str,
    /// Fixed prefix every link starts with.
    pub prefix: &'static str,
    /// Header names emitted as query parameters. Matched exactly against
    /// lower-case normalized names.
    pub supported_headers: &'static [&'static str],
    /// Query parameter name carrying the merged recipient. Includes a leading
    /// `?` when the prefix does not end in one.
    pub recipient_param: &'static str,
    /// Extra parameter name under which a `body` header is also emitted.
    pub body_alias: Option<&'static str>,
}

impl ProviderDescriptor {
    /// Check whether a normalized header name is emitted as-is.
    pub fn supports(&self, name: &str) -> bool {
        self.supported_headers.contains(&name)
    }

    /// Query fragments for the headers of a normalized request, in emission
    /// order. The recipient fragment is not included.
    pub fn header_params(&self, request: &NormalizedRequest) -> Vec<String> {
        let mut params = Vec::with_capacity(request.headers().len());
        for (name, value) in request.headers() {
            if self.supports(name) {
                params.push(format!("{}={}", name, value));
            }
            if name == "body" {
                if let Some(alias) = self.body_alias {
                    params.push(format!("{}={}", alias, value));
                }
            }
        }
        params
    }

    /// Assemble the link string without validating it.
    pub fn render(&self, request: &NormalizedRequest) -> String {
        let mut link = format!(
            "{}{}={}",
            self.prefix,
            self.recipient_param,
            request.recipient()
        );
        let params = self.header_params(request);
        if !params.is_empty() {
            link.push('&');
            link.push_str(&params.join("&"));
        }
        link
    }

    /// Build a deep link from a normalized request.
    ///
    /// Fails with [`LinkError::MalformedUrl`] when the assembled string is not
    /// a valid URL, which only happens when header values were not
    /// percent-encoded by the caller.
    pub fn build(&self, request: &NormalizedRequest) -> Result<Url, LinkError> {
        parse_link(self.id, self.render(request))
    }

    /// Normalize an intent and build a deep link from it.
    ///
    /// ```
    /// use mailhandoff::MailtoIntent;
    /// use mailhandoff::providers::MS_OUTLOOK;
    ///
    /// let intent = MailtoIntent::new().to("a@x.com").header("Subject", "Hi");
    /// let url = MS_OUTLOOK.compose(&intent).unwrap();
    /// assert_eq!(url.as_str(), "ms-outlook://emails/new?to=a@x.com&subject=Hi");
    /// ```
    pub fn compose(&self, intent: &MailtoIntent) -> Result<Url, LinkError> {
        self.build(&normalize(intent))
    }
}
