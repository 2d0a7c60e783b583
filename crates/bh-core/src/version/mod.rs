//! App-update gate.
//!
//! `/app/version` reports the latest and minimum-required versions. The gate
//! decision is pure: `force_update` (or running below the minimum) hard-locks
//! the app, an ordinary newer version produces a soft, dismissible prompt,
//! and a dismissed version is remembered via the `ignoreVersion` flag.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub latest_version: String,
    #[serde(default)]
    pub min_required_version: String,
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub update_log: String,
    #[serde(default)]
    pub force_update: bool,
}

/// Outcome of the update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateGate {
    /// Hard lock: the app must not be usable until updated.
    ForceUpdate(VersionInfo),
    /// Soft prompt: dismissible, and dismissal is remembered per version.
    Prompt(VersionInfo),
    UpToDate,
}

/// Decide the update gate for `current`, given the previously ignored
/// version (from the `ignoreVersion` flag), if any.
pub fn decide_update(info: &VersionInfo, current: &str, ignored: Option<&str>) -> UpdateGate {
    if info.force_update || is_older(current, &info.min_required_version) {
        return UpdateGate::ForceUpdate(info.clone());
    }
    if is_older(current, &info.latest_version) && ignored != Some(info.latest_version.as_str()) {
        return UpdateGate::Prompt(info.clone());
    }
    UpdateGate::UpToDate
}

/// Dotted-numeric comparison; unparseable segments compare as 0 and
/// trailing zero segments are insignificant ("1.2" == "1.2.0").
fn is_older(version: &str, than: &str) -> bool {
    version_key(version) < version_key(than)
}

fn version_key(v: &str) -> Vec<u64> {
    let mut key: Vec<u64> = v
        .split('.')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect();
    while key.last() == Some(&0) {
        key.pop();
    }
    key
}
