//! Microsoft Outlook.
//!
//! Outlook only understands lower-case parameter names, which normalization
//! already guarantees.

use crate::descriptor::ProviderDescriptor;

/// Microsoft Outlook.
pub const MS_OUTLOOK: ProviderDescriptor = ProviderDescriptor {
    id: "ms-outlook",
    name: "Outlook",
    scheme: "ms-outlook://",
    prefix: "ms-outlook://emails/new?",
    supported_headers: &["to", "cc", "bcc", "subject", "body"],
    recipient_param: "to",
    body_alias: None,
};
