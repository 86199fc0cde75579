//! Final validation of an assembled deep link.
//!
//! `url::Url::parse` is lenient: it silently escapes spaces and other
//! characters instead of rejecting them. A deep link must reach the OS exactly
//! as assembled, so the candidate is first checked against the RFC 3986
//! character set and only then handed to the parser.

use url::Url;

use crate::error::LinkError;

/// Characters allowed unescaped anywhere in a URI reference (RFC 3986 §2).
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            // unreserved
            '-' | '.' | '_' | '~'
            // gen-delims
            | ':' | '/' | '?' | '#' | '[' | ']' | '@'
            // sub-delims
            | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
        )
}

/// Find the first character that makes `candidate` an invalid URI.
fn find_invalid(candidate: &str) -> Option<(usize, String)> {
    let bytes = candidate.as_bytes();
    for (idx, c) in candidate.char_indices() {
        if c == '%' {
            let escape_ok = bytes.len() > idx + 2
                && bytes[idx + 1].is_ascii_hexdigit()
                && bytes[idx + 2].is_ascii_hexdigit();
            if !escape_ok {
                return Some((idx, "incomplete percent-escape".to_string()));
            }
        } else if !is_uri_char(c) {
            return Some((idx, format!("illegal character {:?}", c)));
        }
    }
    None
}

/// Parse an assembled link, rejecting anything that is not already a valid,
/// fully escaped URL.
///
/// On success the returned URL serializes to exactly `candidate`.
pub(crate) fn parse_link(provider: &'static str, candidate: String) -> Result<Url, LinkError> {
    if let Some((idx, reason)) = find_invalid(&candidate) {
        let reason = format!("{} at byte {}", reason, idx);
        tracing::warn!(provider, url = %candidate, reason = %reason, "Rejected deep link");
        return Err(LinkError::malformed(provider, candidate, reason));
    }

    match Url::parse(&candidate) {
        Ok(url) if url.as_str() == candidate => Ok(url),
        Ok(url) => {
            tracing::warn!(provider, url = %candidate, parsed = %url, "Deep link did not round-trip");
            Err(LinkError::malformed(
                provider,
                candidate,
                format!("parser rewrote link as {}", url),
            ))
        }
        Err(e) => {
            tracing::warn!(provider, url = %candidate, error = %e, "Rejected deep link");
            Err(LinkError::malformed(provider, candidate, e.to_string()))
        }
    }
}
