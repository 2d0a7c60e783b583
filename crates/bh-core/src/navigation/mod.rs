//! Navigation routes and the gates that decide what renders first.

use serde::{Deserialize, Serialize};

use crate::deeplink::WebTarget;

/// Screens of the root stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Onboarding,
    Login,
    /// The nested tab set; tab selection is a separate, idempotent step.
    Main,
    DiseaseSelection,
    WebView(WebTarget),
}

/// Tabs of the main route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainTab {
    /// 首页
    Home,
    /// 名医
    Doctors,
    /// 医说
    HealthTalks,
    /// 我的
    Profile,
}

/// Privacy-consent gate state.
///
/// The whole route tree is suppressed while consent is not `Agreed`; the
/// consent modal shows over an empty tree. `Disagreed` is in-memory only
/// (dismissing without agreeing is never persisted), so the modal shows
/// again on next launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    /// No stored decision; the modal must show.
    Unknown,
    Agreed,
    /// Dismissed without agreement; the app stays gated this process.
    Disagreed,
}

impl ConsentState {
    /// Interpret the persisted `privacyAgreed` flag. Anything but an
    /// explicit "true" (including a read failure upstream) gates the app.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Agreed,
            _ => Self::Unknown,
        }
    }

    pub fn is_agreed(self) -> bool {
        self == Self::Agreed
    }
}
