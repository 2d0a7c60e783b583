//! The deep-link URL grammar.
//!
//! Recognized shapes, checked in order, first match wins:
//!
//! 1. Custom scheme: `bohe://open?query=<percent-encoded target URL>`.
//!    The `open` action may sit in the host or the path position.
//! 2. Universal link: `https://<host>/open?url=<target>&title=<optional>`.
//! 3. Raw fallback: the string contains both `bohe://open` and `query=` but
//!    rule 1's structured parse could not extract the parameter; the value
//!    after `query=` is sliced out and percent-decoded. Kept as an explicit
//!    last rule because malformed share links from older app builds hit it.
//! 4. Anything else is unsupported: no navigation, one user notice.

use percent_encoding::percent_decode_str;
use url::Url;

use super::{DeepLinkError, WebTarget};

const APP_SCHEME: &str = "bohe";
const OPEN_ACTION: &str = "open";

/// Translate an external URL into a web-view target.
pub fn parse(raw: &str) -> Result<WebTarget, DeepLinkError> {
    match Url::parse(raw) {
        Ok(url) if url.scheme() == APP_SCHEME => parse_app_scheme(&url, raw),
        Ok(url) if matches!(url.scheme(), "http" | "https") => parse_universal(&url, raw),
        Ok(_) => Err(DeepLinkError::Unsupported(raw.to_string())),
        // Not a URL at all. The raw fallback still gets a chance: share
        // links mangled by intermediate apps stop parsing as URLs but keep
        // their query= payload intact.
        Err(_) => raw_fallback(raw).ok_or_else(|| DeepLinkError::Malformed(raw.to_string())),
    }
}

fn parse_app_scheme(url: &Url, raw: &str) -> Result<WebTarget, DeepLinkError> {
    if !is_open_action(url) {
        return Err(DeepLinkError::Unsupported(raw.to_string()));
    }

    if let Some(target) = query_param(url, "query") {
        return Ok(WebTarget::new(target, None));
    }

    raw_fallback(raw).ok_or_else(|| DeepLinkError::MissingTarget(raw.to_string()))
}

fn parse_universal(url: &Url, raw: &str) -> Result<WebTarget, DeepLinkError> {
    if !url.path().starts_with("/open") {
        return Err(DeepLinkError::Unsupported(raw.to_string()));
    }

    let target =
        query_param(url, "url").ok_or_else(|| DeepLinkError::MissingTarget(raw.to_string()))?;
    let title = query_param(url, "title");
    Ok(WebTarget::new(target, title))
}

/// The `open` action of the custom scheme: `bohe://open` puts it in the host
/// position, `bohe:///open` in the path.
fn is_open_action(url: &Url) -> bool {
    url.host_str() == Some(OPEN_ACTION)
        || url.path() == format!("/{OPEN_ACTION}")
        || url.path() == OPEN_ACTION
}

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Rule 3: slice everything after the first `query=` and percent-decode it.
fn raw_fallback(raw: &str) -> Option<WebTarget> {
    let marker = format!("{APP_SCHEME}://{OPEN_ACTION}");
    if !raw.contains(&marker) {
        return None;
    }
    let idx = raw.find("query=")? + "query=".len();
    let decoded = percent_decode_str(&raw[idx..]).decode_utf8().ok()?;
    if decoded.is_empty() {
        return None;
    }
    Some(WebTarget::new(decoded.into_owned(), None))
}
