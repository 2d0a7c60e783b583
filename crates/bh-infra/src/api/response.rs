//! Envelope shapes of the Article API.
//!
//! Every response wraps its payload in `{errno, errmsg?, ...fields}`; the
//! payload field name differs per endpoint, so each endpoint gets its own
//! small struct rather than one generic envelope.

use serde::Deserialize;

use bh_core::content::{
    Article, Banner, Disease, Doctor, NavItem, NewsItem, QuickAction, Video, Voice,
};
use bh_core::ports::{ApiError, ApiResult};
use bh_core::version::VersionInfo;

/// Unwrap an envelope: non-zero `errno` becomes an application error
/// carrying the server message (or a generic one), a missing payload field
/// on success is a decode error.
pub(crate) fn unwrap_envelope<T>(
    errno: i64,
    errmsg: Option<String>,
    payload: Option<T>,
    what: &str,
) -> ApiResult<T> {
    if errno != 0 {
        let message = errmsg
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("获取{what}失败"));
        return Err(ApiError::Application { errno, message });
    }
    payload.ok_or_else(|| ApiError::Decode(format!("{what}响应缺少数据字段")))
}

#[derive(Debug, Deserialize)]
pub(crate) struct BannerResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub banners: Option<Vec<Banner>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewsResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub news_data: Option<Vec<NewsItem>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DoctorResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub nav: Option<Vec<NavItem>>,
    #[serde(default)]
    pub doctor_data: Option<Vec<Doctor>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiseaseResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub disease_data: Option<Vec<Disease>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewsListResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub news_data: Option<Vec<Article>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NavResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub nav: Option<Vec<QuickAction>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiseNavResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub nav: Option<Vec<QuickAction>>,
    #[serde(default)]
    pub more_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub video_data: Option<Vec<Video>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleListResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub article_data: Option<Vec<Article>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VoiceListResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub voice_data: Option<Vec<Voice>>,
}

/// Write-like endpoints (send-code, logout, delete) only signal via errno.
#[derive(Debug, Deserialize)]
pub(crate) struct AckResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// `/app/version` nests its payload under `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct VersionResponse {
    pub errno: i64,
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub data: Option<VersionInfo>,
}
