use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use bh_core::content::{
    Article, Banner, Disease, DiseaseNav, DoctorSection, NewsItem, Page, QuickAction, Video, Voice,
};
use bh_core::ports::{ApiError, ApiResult, ContentApiPort};
use bh_core::version::VersionInfo;
use bh_core::Platform;

use super::response::*;

/// Production host of the Article API.
pub const DEFAULT_BASE_URL: &str = "https://bhapp.bohe.cn/article_api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless HTTP client for the Article API.
///
/// Every GET carries a `platform` query parameter; write-like actions are
/// POSTs with JSON bodies. No retries: failures surface to the caller and
/// the user re-triggers the action.
pub struct ArticleApiClient {
    http: reqwest::Client,
    base_url: String,
    platform: Platform,
}

impl ArticleApiClient {
    pub fn new(base_url: impl Into<String>, platform: Platform) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client failed")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            platform,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "article api GET");
        let resp = self
            .http
            .get(&url)
            .query(&[("platform", self.platform.as_str())])
            .query(query)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "article api POST");
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn paged(&self, page: u32, cursor: Option<&str>) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", page.to_string())];
        if let Some(uuid) = cursor {
            query.push(("uuid", uuid.to_string()));
        }
        query
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait]
impl ContentApiPort for ArticleApiClient {
    async fn banners(&self) -> ApiResult<Vec<Banner>> {
        let r: BannerResponse = self.get_json("/index/banner", &[]).await?;
        unwrap_envelope(r.errno, r.errmsg, r.banners, "banner")
    }

    async fn hot_news(&self) -> ApiResult<Vec<NewsItem>> {
        let r: NewsResponse = self.get_json("/index/news", &[]).await?;
        unwrap_envelope(r.errno, r.errmsg, r.news_data, "今日热门新闻")
    }

    async fn doctor_section(&self) -> ApiResult<DoctorSection> {
        let r: DoctorResponse = self.get_json("/index/doctor", &[]).await?;
        let doctors = unwrap_envelope(r.errno, r.errmsg, r.doctor_data, "严选专家")?;
        Ok(DoctorSection {
            nav: r.nav.unwrap_or_default(),
            doctors,
        })
    }

    async fn hot_diseases(&self) -> ApiResult<Vec<Disease>> {
        let r: DiseaseResponse = self.get_json("/index/disease", &[]).await?;
        unwrap_envelope(r.errno, r.errmsg, r.disease_data, "热门疾病")
    }

    async fn science_articles(&self) -> ApiResult<Vec<Article>> {
        let r: NewsListResponse = self.get_json("/index/newslist", &[]).await?;
        unwrap_envelope(r.errno, r.errmsg, r.news_data, "科普推荐")
    }

    async fn quick_actions(&self) -> ApiResult<Vec<QuickAction>> {
        let r: NavResponse = self.get_json("/index/nav", &[]).await?;
        unwrap_envelope(r.errno, r.errmsg, r.nav, "导航")
    }

    async fn disease_nav(&self) -> ApiResult<DiseaseNav> {
        let r: DiseNavResponse = self.get_json("/index/disenav", &[]).await?;
        let nav = unwrap_envelope(r.errno, r.errmsg, r.nav, "专科专病导航")?;
        let mut section = DiseaseNav {
            nav,
            ..Default::default()
        };
        if let Some(more_url) = r.more_url.filter(|u| !u.is_empty()) {
            section.more_url = more_url;
        }
        Ok(section)
    }

    async fn video_page(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Video>> {
        let query = self.paged(page, cursor);
        let r: VideoListResponse = self.get_json("/video/list", &query).await?;
        Ok(Page::new(unwrap_envelope(r.errno, r.errmsg, r.video_data, "视频列表")?))
    }

    async fn article_page(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Article>> {
        let query = self.paged(page, cursor);
        let r: ArticleListResponse = self.get_json("/article/list", &query).await?;
        Ok(Page::new(unwrap_envelope(r.errno, r.errmsg, r.article_data, "文章列表")?))
    }

    async fn voice_page(&self, page: u32, cursor: Option<&str>) -> ApiResult<Page<Voice>> {
        let query = self.paged(page, cursor);
        let r: VoiceListResponse = self.get_json("/voice/list", &query).await?;
        Ok(Page::new(unwrap_envelope(r.errno, r.errmsg, r.voice_data, "语音列表")?))
    }

    async fn send_code(&self, phone: &str) -> ApiResult<()> {
        let r: AckResponse = self
            .post_json("/user/sendcode", &serde_json::json!({ "phone": phone }))
            .await?;
        unwrap_envelope(r.errno, r.errmsg, Some(()), "验证码")
    }

    async fn login(&self, phone: &str, code: &str) -> ApiResult<String> {
        let r: LoginResponse = self
            .post_json("/user/login", &serde_json::json!({ "phone": phone, "code": code }))
            .await?;
        unwrap_envelope(r.errno, r.errmsg, r.token, "登录")
    }

    async fn logout(&self, phone: &str, token: &str) -> ApiResult<()> {
        let r: AckResponse = self
            .post_json("/user/loginout", &serde_json::json!({ "phone": phone, "token": token }))
            .await?;
        unwrap_envelope(r.errno, r.errmsg, Some(()), "退出登录")
    }

    async fn delete_account(&self, phone: &str, token: &str) -> ApiResult<()> {
        let r: AckResponse = self
            .post_json("/user/del", &serde_json::json!({ "phone": phone, "token": token }))
            .await?;
        unwrap_envelope(r.errno, r.errmsg, Some(()), "注销账号")
    }

    async fn check_version(
        &self,
        platform: Platform,
        current_version: &str,
    ) -> ApiResult<VersionInfo> {
        let body = serde_json::json!({
            "platform": platform.as_str(),
            "current_version": current_version,
        });
        let r: VersionResponse = self.post_json("/app/version", &body).await?;
        unwrap_envelope(r.errno, r.errmsg, r.data, "版本信息")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client(server: &mockito::ServerGuard) -> ArticleApiClient {
        ArticleApiClient::new(server.url(), Platform::Android).unwrap()
    }

    fn article_json(uuid: &str) -> String {
        format!(r#"{{"uuid":"{uuid}","title":"t","url":"https://m.bohe.cn/a/{uuid}"}}"#)
    }

    #[tokio::test]
    async fn banners_unwrap_envelope_and_send_platform() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/index/banner")
            .match_query(Matcher::UrlEncoded("platform".into(), "android".into()))
            .with_body(
                r#"{"errno":0,"banners":[{"title":"护肝","image":"i","url":"u","isRecommendation":true}]}"#,
            )
            .create_async()
            .await;

        let banners = client(&server).banners().await.unwrap();
        mock.assert_async().await;
        assert_eq!(banners.len(), 1);
        assert!(banners[0].is_recommendation);
    }

    #[tokio::test]
    async fn application_error_surfaces_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/index/news")
            .match_query(Matcher::Any)
            .with_body(r#"{"errno":1002,"errmsg":"服务繁忙"}"#)
            .create_async()
            .await;

        let err = client(&server).hot_news().await.unwrap_err();
        match err {
            ApiError::Application { errno, message } => {
                assert_eq!(errno, 1002);
                assert_eq!(message, "服务繁忙");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_status_is_transport_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/index/disease")
            .match_query(Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let err = client(&server).hot_diseases().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn full_article_page_has_more() {
        let mut server = mockito::Server::new_async().await;
        let items: Vec<String> = (0..10).map(|i| article_json(&format!("a{i}"))).collect();
        server
            .mock("GET", "/article/list")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("platform".into(), "android".into()),
            ]))
            .with_body(format!(r#"{{"errno":0,"article_data":[{}]}}"#, items.join(",")))
            .create_async()
            .await;

        let page = client(&server).article_page(1, None).await.unwrap();
        assert!(page.has_more);
        assert_eq!(page.cursor(), Some("a9"));
    }

    #[tokio::test]
    async fn short_voice_page_is_last_and_sends_cursor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/voice/list")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("uuid".into(), "v9".into()),
            ]))
            .with_body(r#"{"errno":0,"voice_data":[{"uuid":"v10","title":"t","url":"u"}]}"#)
            .create_async()
            .await;

        let page = client(&server).voice_page(2, Some("v9")).await.unwrap();
        mock.assert_async().await;
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn login_posts_credentials_and_returns_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/user/login")
            .match_body(Matcher::Json(serde_json::json!({
                "phone": "13812341234",
                "code": "9527"
            })))
            .with_body(r#"{"errno":0,"token":"tok-1"}"#)
            .create_async()
            .await;

        let token = client(&server).login("13812341234", "9527").await.unwrap();
        mock.assert_async().await;
        assert_eq!(token, "tok-1");
    }

    #[tokio::test]
    async fn login_success_without_token_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/user/login")
            .with_body(r#"{"errno":0}"#)
            .create_async()
            .await;

        let err = client(&server).login("13812341234", "9527").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn version_payload_is_nested_under_data() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/app/version")
            .match_body(Matcher::Json(serde_json::json!({
                "platform": "android",
                "current_version": "1.2.0"
            })))
            .with_body(
                r#"{"errno":0,"data":{"latest_version":"1.3.0","min_required_version":"1.0.0","download_url":"d","update_log":"log","force_update":false}}"#,
            )
            .create_async()
            .await;

        let info = client(&server)
            .check_version(Platform::Android, "1.2.0")
            .await
            .unwrap();
        assert_eq!(info.latest_version, "1.3.0");
        assert!(!info.force_update);
    }

    #[tokio::test]
    async fn disease_nav_keeps_default_more_url_when_absent() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/index/disenav")
            .match_query(Matcher::Any)
            .with_body(r#"{"errno":0,"nav":[{"title":"皮肤科","url":"u"}]}"#)
            .create_async()
            .await;

        let nav = client(&server).disease_nav().await.unwrap();
        assert_eq!(nav.more_url, "https://m.bohe.cn/dise/list/1_4.html");
    }
}
