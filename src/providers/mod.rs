//! Supported mail clients and the provider registry.
//!
//! Each provider is a [`ProviderDescriptor`] constant. The registry is the
//! fixed, ordered list of them.
//!
//! ## Available Providers
//!
//! | Constant | Id | Prefix | Body alias |
//! |----------|----|--------|------------|
//! | [`READDLE_SPARK`] | `readdle-spark` | `readdle-spark://compose?` | `textbody` |
//! | [`AIRMAIL`] | `airmail` | `airmail://compose?` | `htmlBody` |
//! | [`MYMAIL`] | `mymail` | `mymail-mailto://` | none |
//! | [`MAILRU`] | `mailru` | `mailru-mailto://` | none |
//! | [`MS_OUTLOOK`] | `ms-outlook` | `ms-outlook://emails/new?` | none |

use serde::Serialize;

use crate::descriptor::ProviderDescriptor;

mod airmail;
pub use airmail::AIRMAIL;

mod mymail;
pub use mymail::{MAILRU, MYMAIL};

mod outlook;
pub use outlook::MS_OUTLOOK;

mod spark;
pub use spark::READDLE_SPARK;

static PROVIDERS: [ProviderDescriptor; 5] = [READDLE_SPARK, AIRMAIL, MYMAIL, MAILRU, MS_OUTLOOK];

/// What a settings screen needs to list a provider. Carries no build logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Raw scheme string for installed-app probing.
    pub scheme: &'static str,
}

impl From<&ProviderDescriptor> for ProviderInfo {
    fn from(descriptor: &ProviderDescriptor) -> Self {
        Self {
            id: descriptor.id,
            name: descriptor.name,
            scheme: descriptor.scheme,
        }
    }
}

/// All registered providers, in registry order.
pub fn all() -> &'static [ProviderDescriptor] {
    &PROVIDERS
}

/// Find a provider by identifier.
pub fn lookup(id: &str) -> Option<&'static ProviderDescriptor> {
    PROVIDERS.iter().find(|p| p.id == id)
}

/// Find a provider by its raw probe scheme (e.g. `"airmail://"`).
pub fn lookup_scheme(scheme: &str) -> Option<&'static ProviderDescriptor> {
    PROVIDERS.iter().find(|p| p.scheme == scheme)
}

/// Identifier, name and scheme of every provider, in registry order.
pub fn catalog() -> Vec<ProviderInfo> {
    PROVIDERS.iter().map(ProviderInfo::from).collect()
}
