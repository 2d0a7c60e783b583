use async_trait::async_trait;

use crate::session::Session;

/// Storage for the logged-in session as one atomic record.
///
/// Collapsing phone/token/logged-in into a single write means a crash can
/// never leave a half-cleared session behind.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<Session>>;
    async fn save(&self, session: &Session) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}
