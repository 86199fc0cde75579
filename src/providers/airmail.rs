//! Airmail.
//!
//! Airmail's own parameter names are camel-case (`plainBody`, `htmlBody`).
//! Normalized header names are lower-case and matched exactly, so those two
//! entries never match an incoming header; a `mailto:` body reaches Airmail
//! only through the `htmlBody` alias.

use crate::descriptor::ProviderDescriptor;

/// Airmail by Bloop.
pub const AIRMAIL: ProviderDescriptor = ProviderDescriptor {
    id: "airmail",
    name: "Airmail",
    scheme: "airmail://",
    prefix: "airmail://compose?",
    supported_headers: &["subject", "from", "to", "cc", "bcc", "plainBody", "htmlBody"],
    recipient_param: "to",
    body_alias: Some("htmlBody"),
};
