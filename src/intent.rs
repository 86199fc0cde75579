//! Mail intent struct with builder pattern.

use serde::{Deserialize, Serialize};

/// A request to compose an email, as carried by a `mailto:` link.
///
/// Use the builder pattern to construct intents:
///
/// ```
/// use mailhandoff::MailtoIntent;
///
/// let intent = MailtoIntent::new()
///     .to("alice@example.com")
///     .header("Subject", "Hello")
///     .header("cc", "bob@example.com");
///
/// assert_eq!(intent.recipient, "alice@example.com");
/// assert_eq!(intent.headers.len(), 2);
/// ```
///
/// Header values must already be percent-encoded. Names may use any case and
/// may repeat; [`normalize`](crate::normalize) resolves both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailtoIntent {
    /// Primary recipient (the address part of `mailto:<to>?...`). May be empty.
    #[serde(default)]
    pub recipient: String,
    /// Header fields in the order they appeared.
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

impl MailtoIntent {
    /// Create a new empty intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an intent from a recipient and any iterable of header pairs.
    pub fn from_parts<I, K, V>(recipient: impl Into<String>, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            recipient: recipient.into(),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set the primary recipient.
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Append a header field.
    ///
    /// Repeated names are kept; normalization decides which value wins.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append several header fields.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Check if the intent carries neither a recipient nor headers.
    pub fn is_empty(&self) -> bool {
        self.recipient.is_empty() && self.headers.is_empty()
    }
}
