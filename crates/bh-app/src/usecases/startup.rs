//! Initial-route gating: decide the first screen exactly once per cold start.

use std::sync::Arc;

use tracing::warn;

use bh_core::ports::{FlagKey, FlagStorePort};
use bh_core::Route;

pub struct ResolveInitialRoute {
    flags: Arc<dyn FlagStorePort>,
}

impl ResolveInitialRoute {
    pub fn new(flags: Arc<dyn FlagStorePort>) -> Self {
        Self { flags }
    }

    /// No stored first-launch flag means onboarding (and the flag is
    /// persisted so the next cold start goes straight to main). Any storage
    /// failure fails open to the main route: blocking entry is worse than
    /// skipping onboarding.
    pub async fn execute(&self) -> Route {
        match self.flags.get(FlagKey::AlreadyLaunched).await {
            Ok(None) => {
                if let Err(e) = self.flags.set(FlagKey::AlreadyLaunched, "true").await {
                    warn!(error = %e, "persisting first-launch flag failed");
                }
                Route::Onboarding
            }
            Ok(Some(_)) => Route::Main,
            Err(e) => {
                warn!(error = %e, "reading first-launch flag failed");
                Route::Main
            }
        }
    }
}
