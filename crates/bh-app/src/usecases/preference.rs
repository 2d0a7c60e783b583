//! Personalized-recommendation preference.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use bh_core::ports::{FlagKey, FlagStorePort};

pub struct RecommendationPreference {
    flags: Arc<dyn FlagStorePort>,
}

impl RecommendationPreference {
    pub fn new(flags: Arc<dyn FlagStorePort>) -> Self {
        Self { flags }
    }

    /// Enabled unless the user explicitly turned it off; absent flag and
    /// storage failures both read as enabled.
    pub async fn is_enabled(&self) -> bool {
        match self.flags.get(FlagKey::PersonalizedRecommendation).await {
            Ok(value) => value.as_deref() != Some("false"),
            Err(e) => {
                warn!(error = %e, "reading recommendation preference failed");
                true
            }
        }
    }

    pub async fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.flags
            .set(
                FlagKey::PersonalizedRecommendation,
                if enabled { "true" } else { "false" },
            )
            .await
            .context("persist recommendation preference failed")
    }
}
