//! Cursor-paginated content lists (videos, articles, voices).
//!
//! Page 1 has no cursor; follow-up pages pass the previous page's last
//! uuid. `has_more` comes from the page length, derived in the API client.

use std::sync::Arc;

use bh_core::content::{Article, Page, Video, Voice};
use bh_core::ports::{ApiResult, ContentApiPort};

pub struct LoadVideoPage {
    api: Arc<dyn ContentApiPort>,
}

impl LoadVideoPage {
    pub fn new(api: Arc<dyn ContentApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Video>> {
        self.api.video_page(page, cursor).await
    }
}

pub struct LoadArticlePage {
    api: Arc<dyn ContentApiPort>,
}

impl LoadArticlePage {
    pub fn new(api: Arc<dyn ContentApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Article>> {
        self.api.article_page(page, cursor).await
    }
}

pub struct LoadVoicePage {
    api: Arc<dyn ContentApiPort>,
}

impl LoadVoicePage {
    pub fn new(api: Arc<dyn ContentApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Voice>> {
        self.api.voice_page(page, cursor).await
    }
}
