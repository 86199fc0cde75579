//! # mailhandoff
//!
//! Open `mailto:` links in third-party mail clients.
//!
//! A `mailto:` link carries a recipient and a handful of header fields. Mail
//! clients that register their own URL scheme each expect those fields in a
//! different shape: different parameter names, different recipient
//! parameters, different subsets of supported headers. This crate turns one
//! [`MailtoIntent`] into the compose deep link a given client understands.
//!
//! ## Quick Start
//!
//! ```
//! use mailhandoff::MailtoIntent;
//! use mailhandoff::providers::READDLE_SPARK;
//!
//! let intent = MailtoIntent::new()
//!     .to("alice@example.com")
//!     .header("Subject", "Lunch")
//!     .header("Body", "Noon%3F");
//!
//! let url = READDLE_SPARK.compose(&intent).unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "readdle-spark://compose?recipient=alice@example.com&subject=Lunch&textbody=Noon%3F"
//! );
//! ```
//!
//! Header values must already be percent-encoded. The crate only
//! concatenates, and rejects the result with [`LinkError::MalformedUrl`] if it
//! is not a valid URL.
//!
//! ## Preferred Provider
//!
//! ```rust,ignore
//! use mailhandoff::{configure, deep_link};
//!
//! configure("ms-outlook")?;
//!
//! match deep_link(&intent)? {
//!     Some(url) => open(url),
//!     None => open_with_system_mail(&intent),
//! }
//! ```
//!
//! Without a call to [`configure`], the preferred provider is read from the
//! environment.
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `MAILTO_PROVIDER` | `readdle-spark`, `airmail`, `mymail`, `mailru`, `ms-outlook`, or `mailto` for the system handler |
//!
//! ## Feature Flags
//!
//! - `metrics` - Prometheus-style metrics (counters)
//!
//! ## Metrics
//!
//! Enable `features = ["metrics"]` to emit:
//!
//! | Metric | Type | Labels | Description |
//! |--------|------|--------|-------------|
//! | `mailhandoff_links_total` | Counter | provider, status | Deep links built |

/// The version of the mailhandoff crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod descriptor;
mod error;
mod intent;
mod link;
mod normalize;

pub mod catalog;
pub mod providers;

use parking_lot::RwLock;
use std::env;

// Re-exports
pub use catalog::{Catalog, CatalogEntry};
pub use descriptor::ProviderDescriptor;
pub use error::LinkError;
pub use intent::MailtoIntent;
pub use normalize::{normalize, NormalizedRequest, RECIPIENT_SEPARATOR};
pub use providers::ProviderInfo;
pub use url::Url;

// ============================================================================
// Preferred Provider Configuration
// ============================================================================

/// Environment variable naming the preferred provider.
pub const PROVIDER_ENV: &str = "MAILTO_PROVIDER";

/// Explicitly configured provider. `None` defers to the environment.
static PREFERRED: RwLock<Option<Preference>> = RwLock::new(None);

#[derive(Debug, Clone, Copy)]
enum Preference {
    SystemMail,
    Provider(&'static ProviderDescriptor),
}

/// Resolve a provider identifier as written in configuration.
///
/// Matching is case-insensitive and ignores surrounding whitespace. `mailto`,
/// `mailto:` and the empty string select the system handler (`Ok(None)`).
pub fn parse_provider(value: &str) -> Result<Option<&'static ProviderDescriptor>, LinkError> {
    let value = value.trim().to_lowercase();
    match value.as_str() {
        "" | "mailto" | "mailto:" => Ok(None),
        id => match providers::lookup(id) {
            Some(p) => Ok(Some(p)),
            None => Err(LinkError::Configuration(format!(
                "Unknown {}: {}. Valid providers are: mailto, {}",
                PROVIDER_ENV,
                id,
                providers::all()
                    .iter()
                    .map(|p| p.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        },
    }
}

/// Set the preferred provider by identifier.
///
/// Later calls replace earlier ones. `"mailto"` selects the system handler.
///
/// ```rust,ignore
/// mailhandoff::configure("airmail")?;
/// ```
pub fn configure(id: &str) -> Result<(), LinkError> {
    let preference = match parse_provider(id)? {
        Some(p) => Preference::Provider(p),
        None => Preference::SystemMail,
    };
    *PREFERRED.write() = Some(preference);
    Ok(())
}

/// Set the preferred provider from a descriptor, including ones not in the
/// registry.
pub fn configure_provider(provider: &'static ProviderDescriptor) {
    *PREFERRED.write() = Some(Preference::Provider(provider));
}

/// Forget the configured provider (useful for tests).
///
/// After calling this, [`preferred`] reads `MAILTO_PROVIDER` again.
pub fn reset() {
    *PREFERRED.write() = None;
}

/// The provider mail links should be handed to.
///
/// Returns `Ok(None)` when the system handler is preferred, including when
/// nothing is configured and `MAILTO_PROVIDER` is unset.
pub fn preferred() -> Result<Option<&'static ProviderDescriptor>, LinkError> {
    if let Some(preference) = *PREFERRED.read() {
        return Ok(match preference {
            Preference::SystemMail => None,
            Preference::Provider(p) => Some(p),
        });
    }

    match env::var(PROVIDER_ENV) {
        Ok(value) => parse_provider(&value),
        Err(_) => Ok(None),
    }
}

// ============================================================================
// Deep Links
// ============================================================================

/// Build a deep link for the preferred provider.
///
/// Returns `Ok(None)` when no third-party client is preferred; the caller
/// should open the original `mailto:` link instead.
pub fn deep_link(intent: &MailtoIntent) -> Result<Option<Url>, LinkError> {
    match preferred()? {
        Some(provider) => deep_link_with(intent, provider).map(Some),
        None => {
            tracing::debug!("No mail client preferred, using system handler");
            Ok(None)
        }
    }
}

/// Build a deep link for a specific provider (per-call override).
///
/// ```
/// use mailhandoff::{deep_link_with, MailtoIntent};
/// use mailhandoff::providers::AIRMAIL;
///
/// let intent = MailtoIntent::new().to("a@x.com").header("subject", "Hi");
/// let url = deep_link_with(&intent, &AIRMAIL).unwrap();
/// assert_eq!(url.as_str(), "airmail://compose?to=a@x.com&subject=Hi");
/// ```
pub fn deep_link_with(
    intent: &MailtoIntent,
    provider: &ProviderDescriptor,
) -> Result<Url, LinkError> {
    let span = tracing::info_span!(
        "mailhandoff.deep_link",
        provider = provider.id,
        recipient = %intent.recipient,
        headers = intent.headers.len(),
    );
    let _guard = span.enter();

    let result = provider.compose(intent);

    #[cfg(feature = "metrics")]
    {
        let status = if result.is_ok() { "success" } else { "error" };
        metrics::counter!("mailhandoff_links_total", "provider" => provider.id, "status" => status)
            .increment(1);
    }

    match &result {
        Ok(url) => tracing::debug!(url = %url, "Deep link built"),
        Err(e) => tracing::error!(error = %e, "Deep link failed"),
    }

    result
}

/// Build deep links for every registered provider.
///
/// Useful for previews and diagnostics; each entry succeeds or fails on its
/// own.
pub fn deep_links(intent: &MailtoIntent) -> Vec<(&'static str, Result<Url, LinkError>)> {
    let request = normalize(intent);
    providers::all()
        .iter()
        .map(|p| (p.id, p.build(&request)))
        .collect()
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Catalog;
    pub use crate::LinkError;
    pub use crate::MailtoIntent;
    pub use crate::ProviderDescriptor;
    pub use crate::normalize::normalize;
    pub use crate::{deep_link, deep_link_with};
}
