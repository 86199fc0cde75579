//! myMail and Mail.Ru.
//!
//! Both apps share one URL format. Their scheme prefixes do not end in `?`,
//! so the recipient parameter carries it instead. Mail.Ru is myMail with a
//! different prefix.

use crate::descriptor::ProviderDescriptor;

/// myMail.
pub const MYMAIL: ProviderDescriptor = ProviderDescriptor {
    id: "mymail",
    name: "myMail",
    scheme: "mymail-mailto://",
    prefix: "mymail-mailto://",
    supported_headers: &["to", "subject", "body", "cc", "bcc"],
    recipient_param: "?to",
    body_alias: None,
};

/// Mail.Ru.
pub const MAILRU: ProviderDescriptor = ProviderDescriptor {
    id: "mailru",
    name: "Mail.Ru",
    scheme: "mailru-mailto://",
    prefix: "mailru-mailto://",
    ..MYMAIL
};
