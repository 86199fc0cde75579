//! The mail scheme catalog shown on a "open mail links with" settings screen.
//!
//! A catalog is an ordered list of `{name, scheme}` entries. The first entry
//! is the default handler (normally the system `mailto:` client); the rest
//! name third-party clients by the raw scheme used to probe for them.
//!
//! Catalogs are plain JSON so they can ship as a resource file:
//!
//! ```json
//! [
//!   { "name": "Mail", "scheme": "mailto:" },
//!   { "name": "Outlook", "scheme": "ms-outlook://" }
//! ]
//! ```
//!
//! Installed-app detection is not done here. Callers pass it in as a
//! predicate over scheme strings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::descriptor::ProviderDescriptor;
use crate::error::LinkError;
use crate::providers;

/// Scheme of the system mail handler.
pub const MAILTO_SCHEME: &str = "mailto:";

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name.
    pub name: String,
    /// Raw scheme string, also the value stored as the user's preference.
    pub scheme: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: scheme.into(),
        }
    }
}

/// An ordered list of mail handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create a catalog from entries. The first entry is the default.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in catalog: system mail first, then every registered
    /// provider in registry order.
    pub fn builtin() -> Self {
        let mut entries = vec![CatalogEntry::new("Mail", MAILTO_SCHEME)];
        entries.extend(
            providers::all()
                .iter()
                .map(|p| CatalogEntry::new(p.name, p.scheme)),
        );
        Self { entries }
    }

    /// Parse a catalog from a JSON array of `{name, scheme}` objects.
    pub fn from_json(json: &str) -> Result<Self, LinkError> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(entries = catalog.entries.len(), "Loaded mail scheme catalog");
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LinkError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LinkError::Configuration(format!(
                "Failed to read catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The default handler (first entry).
    pub fn default_entry(&self) -> Option<&CatalogEntry> {
        self.entries.first()
    }

    /// Find an entry by scheme.
    pub fn get(&self, scheme: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.scheme == scheme)
    }

    /// The registered provider that builds links for an entry, if any.
    ///
    /// The system `mailto:` entry and unknown clients have none.
    pub fn provider_for(&self, entry: &CatalogEntry) -> Option<&'static ProviderDescriptor> {
        providers::lookup_scheme(&entry.scheme)
    }

    /// Decide which scheme mail links should open with.
    ///
    /// A preferred scheme wins only if it is listed and `is_installed` accepts
    /// it. Otherwise the default entry's scheme is used, or `mailto:` for an
    /// empty catalog.
    pub fn effective_choice<'a, F>(&'a self, preferred: Option<&str>, is_installed: F) -> &'a str
    where
        F: Fn(&str) -> bool,
    {
        let default = self
            .default_entry()
            .map(|e| e.scheme.as_str())
            .unwrap_or(MAILTO_SCHEME);

        match preferred.and_then(|p| self.get(p)) {
            Some(entry) if is_installed(&entry.scheme) => entry.scheme.as_str(),
            Some(entry) => {
                tracing::debug!(
                    scheme = %entry.scheme,
                    fallback = default,
                    "Preferred mail client not installed"
                );
                default
            }
            None => default,
        }
    }

    /// Entries paired with their installed state, for rendering a settings list.
    pub fn availability<F>(&self, is_installed: F) -> Vec<(&CatalogEntry, bool)>
    where
        F: Fn(&str) -> bool,
    {
        self.entries
            .iter()
            .map(|e| (e, is_installed(&e.scheme)))
            .collect()
    }
}
