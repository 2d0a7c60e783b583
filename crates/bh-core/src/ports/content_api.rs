use async_trait::async_trait;
use thiserror::Error;

use crate::content::{
    Article, Banner, Disease, DiseaseNav, DoctorSection, NewsItem, Page, QuickAction, Video, Voice,
};
use crate::platform::Platform;
use crate::version::VersionInfo;

pub type ApiResult<T> = Result<T, ApiError>;

/// Article API failures.
///
/// Transport and application failures are distinguished so callers can show
/// the server's own message when one exists. Both are caught at the screen
/// or router boundary and never propagate further.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No usable response (network error, timeout, non-2xx status).
    #[error("网络错误: {0}")]
    Transport(String),

    /// The envelope came back with `errno != 0`.
    #[error("{message}")]
    Application { errno: i64, message: String },

    /// 2xx response that does not decode into the expected shape.
    #[error("响应解析失败: {0}")]
    Decode(String),
}

/// The Article API, one method per logical resource.
///
/// Implementations unwrap the `{errno, errmsg, ...}` envelope; list
/// methods return a [`Page`] with `has_more` derived from the item count.
#[async_trait]
pub trait ContentApiPort: Send + Sync {
    async fn banners(&self) -> ApiResult<Vec<Banner>>;
    async fn hot_news(&self) -> ApiResult<Vec<NewsItem>>;
    async fn doctor_section(&self) -> ApiResult<DoctorSection>;
    async fn hot_diseases(&self) -> ApiResult<Vec<Disease>>;
    async fn science_articles(&self) -> ApiResult<Vec<Article>>;
    async fn quick_actions(&self) -> ApiResult<Vec<QuickAction>>;
    async fn disease_nav(&self) -> ApiResult<DiseaseNav>;

    async fn video_page(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Video>>;
    async fn article_page(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Article>>;
    async fn voice_page(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Voice>>;

    async fn send_code(&self, phone: &str) -> ApiResult<()>;
    /// Exchange phone + SMS code for a token.
    async fn login(&self, phone: &str, code: &str) -> ApiResult<String>;
    async fn logout(&self, phone: &str, token: &str) -> ApiResult<()>;
    async fn delete_account(&self, phone: &str, token: &str) -> ApiResult<()>;

    async fn check_version(
        &self,
        platform: Platform,
        current_version: &str,
    ) -> ApiResult<VersionInfo>;
}
