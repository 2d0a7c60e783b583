use async_trait::async_trait;

/// One-shot user notices (modal with a single acknowledgment action).
#[async_trait]
pub trait NoticePort: Send + Sync {
    async fn notice(&self, message: &str);
}
