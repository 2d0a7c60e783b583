use serde::{Deserialize, Serialize};

use super::filter::Recommendable;

/// 首页轮播图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
    /// Marker set by the server on algorithmically recommended items.
    #[serde(rename = "isRecommendation", default)]
    pub is_recommendation: bool,
}

/// 今日热门新闻条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "isRecommendation", default)]
    pub is_recommendation: bool,
}

/// 严选专家医生
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(default)]
    pub name: String,
    /// 职称，例如「主任医师」
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub hospital: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub url: String,
}

/// 热门疾病
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// 科普文章（首页推荐与医说列表共用同一形状）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "isRecommendation", default)]
    pub is_recommendation: bool,
}

/// 语音答疑条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub duration: Option<u32>,
}

/// 短视频条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    /// Playback URI consumed by the player component.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// 名医页顶部导航项（`{name, url}` 形状）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// 首页快捷入口与专科专病导航共用的 `{title, url}` 形状
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// `/index/doctor` 的组合响应：顶部导航 + 医生列表
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoctorSection {
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// `/index/disenav` 的组合响应：专科导航 + 「更多」落地页
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseNav {
    #[serde(default)]
    pub nav: Vec<QuickAction>,
    #[serde(default = "DiseaseNav::default_more_url")]
    pub more_url: String,
}

impl DiseaseNav {
    fn default_more_url() -> String {
        // Landing page used when the server omits more_url.
        "https://m.bohe.cn/dise/list/1_4.html".to_string()
    }
}

impl Default for DiseaseNav {
    fn default() -> Self {
        Self {
            nav: Vec::new(),
            more_url: Self::default_more_url(),
        }
    }
}

impl Recommendable for Banner {
    fn is_recommended(&self) -> bool {
        self.is_recommendation
    }
}

impl Recommendable for NewsItem {
    fn is_recommended(&self) -> bool {
        self.is_recommendation
    }
}

impl Recommendable for Article {
    fn is_recommended(&self) -> bool {
        self.is_recommendation
    }
}

/// Items addressable by a server-issued uuid, used as the pagination cursor.
pub trait Keyed {
    fn uuid(&self) -> &str;
}

impl Keyed for Article {
    fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl Keyed for Voice {
    fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl Keyed for Video {
    fn uuid(&self) -> &str {
        &self.uuid
    }
}
