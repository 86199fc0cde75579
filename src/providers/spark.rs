//! Spark (Readdle).
//!
//! Spark names the recipient parameter `recipient` and takes the message text
//! as `textbody`, so a `mailto:` body is re-emitted under that name.
//!
//! ```
//! use mailhandoff::MailtoIntent;
//! use mailhandoff::providers::READDLE_SPARK;
//!
//! let intent = MailtoIntent::new().to("a@x.com").header("body", "hello");
//! let url = READDLE_SPARK.compose(&intent).unwrap();
//! assert_eq!(url.as_str(), "readdle-spark://compose?recipient=a@x.com&textbody=hello");
//! ```

use crate::descriptor::ProviderDescriptor;

/// Spark by Readdle.
pub const READDLE_SPARK: ProviderDescriptor = ProviderDescriptor {
    id: "readdle-spark",
    name: "Spark",
    scheme: "readdle-spark://",
    prefix: "readdle-spark://compose?",
    supported_headers: &["subject", "recipient", "textbody", "html", "cc", "bcc"],
    recipient_param: "recipient",
    body_alias: Some("textbody"),
};
