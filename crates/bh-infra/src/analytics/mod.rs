//! Analytics SDK adapter.
//!
//! The real Umeng SDK lives behind a platform binding supplied by the app
//! shell; this adapter carries the configuration and records the
//! consent-gated initialization. The `AnalyticsPort` contract (init only
//! after consent, at most once per process) is enforced by the consent
//! gate in `bh-app`, not here.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use bh_core::ports::AnalyticsPort;
use bh_core::Platform;

pub struct UmengAnalytics {
    app_key: String,
    channel: String,
    platform: Platform,
}

impl UmengAnalytics {
    pub fn new(app_key: impl Into<String>, channel: impl Into<String>, platform: Platform) -> Self {
        Self {
            app_key: app_key.into(),
            channel: channel.into(),
            platform,
        }
    }
}

#[async_trait]
impl AnalyticsPort for UmengAnalytics {
    async fn init(&self) -> Result<()> {
        info!(
            app_key = %self.app_key,
            channel = %self.channel,
            platform = self.platform.as_str(),
            "initializing analytics sdk"
        );
        Ok(())
    }
}
