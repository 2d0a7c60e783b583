//! # bohe
//!
//! Headless client core for the Bohe health-content app. The UI shell (on
//! whichever platform) supplies a navigator and a notice sink, and gets back
//! a fully wired [`bootstrap::AppContext`] with every use case ready to call.

pub mod bootstrap;

pub use bootstrap::{AppConfig, AppContext};

/// 用户协议
pub const USER_AGREEMENT_URL: &str = "https://bhapp.bohe.cn/article_api/app/server";

/// 隐私协议
pub const PRIVACY_POLICY_URL: &str = "https://bhapp.bohe.cn/article_api/app/privacy";
