//! Header normalization.
//!
//! Every provider runs the same two steps before building a link: header
//! names are lower-cased, and a `to` header is folded into the primary
//! recipient the way RFC 6068 combines `mailto:<to>` with `?to=`.

use serde::Serialize;

use crate::intent::MailtoIntent;

/// Separator placed between the primary recipient and a `to` header value.
///
/// A comma followed by a space, already percent-encoded.
pub const RECIPIENT_SEPARATOR: &str = "%2C%20";

/// An intent after normalization.
///
/// Header names are lower-case, unique and in first-occurrence order. There
/// is never a `to` header; its value lives in [`recipient`](Self::recipient).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedRequest {
    recipient: String,
    headers: Vec<(String, String)>,
}

impl NormalizedRequest {
    /// The merged recipient value.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Remaining headers, in first-occurrence order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header by its lower-case name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Normalize an intent. Never fails.
///
/// When two header names collapse to the same lower-case name the header keeps
/// the position of its first occurrence and takes the value of the last.
///
/// ```
/// use mailhandoff::{normalize, MailtoIntent};
///
/// let intent = MailtoIntent::new()
///     .to("a@x.com")
///     .header("To", "b@x.com")
///     .header("Subject", "Hi");
///
/// let request = normalize(&intent);
/// assert_eq!(request.recipient(), "a@x.com%2C%20b@x.com");
/// assert_eq!(request.header("subject"), Some("Hi"));
/// assert_eq!(request.header("to"), None);
/// ```
pub fn normalize(intent: &MailtoIntent) -> NormalizedRequest {
    let mut headers: Vec<(String, String)> = Vec::with_capacity(intent.headers.len());

    for (name, value) in &intent.headers {
        let name = name.to_lowercase();
        match headers.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value.clone(),
            None => headers.push((name, value.clone())),
        }
    }

    let recipient = match headers.iter().position(|(k, _)| k == "to") {
        Some(idx) => {
            let (_, to) = headers.remove(idx);
            if intent.recipient.is_empty() {
                to
            } else {
                tracing::debug!(
                    recipient = %intent.recipient,
                    to = %to,
                    "Merging to header into recipient"
                );
                format!("{}{}{}", intent.recipient, RECIPIENT_SEPARATOR, to)
            }
        }
        None => intent.recipient.clone(),
    };

    NormalizedRequest { recipient, headers }
}
