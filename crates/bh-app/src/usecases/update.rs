//! App-update check against `/app/version`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use bh_core::ports::{ApiResult, ContentApiPort, FlagKey, FlagStorePort};
use bh_core::version::{decide_update, UpdateGate};
use bh_core::Platform;

pub struct CheckForUpdate {
    api: Arc<dyn ContentApiPort>,
    flags: Arc<dyn FlagStorePort>,
    platform: Platform,
    current_version: String,
}

impl CheckForUpdate {
    pub fn new(
        api: Arc<dyn ContentApiPort>,
        flags: Arc<dyn FlagStorePort>,
        platform: Platform,
        current_version: impl Into<String>,
    ) -> Self {
        Self {
            api,
            flags,
            platform,
            current_version: current_version.into(),
        }
    }

    /// Query the server and decide the gate. A failure reading the
    /// ignored-version flag only costs the suppression, never the check.
    pub async fn execute(&self) -> ApiResult<UpdateGate> {
        let info = self
            .api
            .check_version(self.platform, &self.current_version)
            .await?;
        let ignored = match self.flags.get(FlagKey::IgnoreVersion).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "reading ignored version failed");
                None
            }
        };
        Ok(decide_update(&info, &self.current_version, ignored.as_deref()))
    }

    /// Remember a dismissed soft prompt so the same version stops nagging.
    pub async fn dismiss(&self, version: &str) -> Result<()> {
        self.flags
            .set(FlagKey::IgnoreVersion, version)
            .await
            .context("persist ignored version failed")
    }
}
