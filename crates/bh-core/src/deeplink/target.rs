use serde::{Deserialize, Serialize};

/// Title shown on the web-view screen when the link carries none.
pub const DEFAULT_WEB_TITLE: &str = "网页";

/// Resolved target of a deep link: the web page pushed onto the main stack.
///
/// Transient: used once to perform navigation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebTarget {
    pub url: String,
    pub title: String,
}

impl WebTarget {
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            title: title.unwrap_or_else(|| DEFAULT_WEB_TITLE.to_string()),
        }
    }
}
