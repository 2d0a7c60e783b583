use anyhow::Result;
use async_trait::async_trait;

use crate::deeplink::WebTarget;

/// Narrow capability handle over the navigation tree.
///
/// The router drives navigation only through this interface, never through
/// a shared global navigation reference.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    /// Select the main tabbed route. Idempotent if already selected, and
    /// resolves only once the transition has settled, so the caller can
    /// immediately push on top of it.
    async fn select_main_tab(&self) -> Result<()>;

    /// Push the web-view screen onto the main stack.
    async fn push_web_view(&self, target: &WebTarget) -> Result<()>;
}
