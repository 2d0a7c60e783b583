use anyhow::Result;
use async_trait::async_trait;

/// Consent-gated analytics SDK initialization.
///
/// Must never be called before the privacy consent is persisted; the
/// application layer additionally guarantees at-most-once per process.
#[async_trait]
pub trait AnalyticsPort: Send + Sync {
    async fn init(&self) -> Result<()>;
}
