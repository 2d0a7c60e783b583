//! Home feed assembly.
//!
//! The home screen is stitched together from several independent content
//! endpoints. A failed section degrades to empty (the screen re-fetches on
//! next entry) instead of failing the whole feed, and the recommendation
//! filter is applied to every marker-bearing section per the persisted
//! preference.

use std::sync::Arc;

use tracing::warn;

use bh_core::content::{
    filter_recommended, Article, Banner, Disease, DiseaseNav, DoctorSection, NewsItem, QuickAction,
};
use bh_core::ports::{ApiError, ContentApiPort};

use super::preference::RecommendationPreference;

#[derive(Debug, Default)]
pub struct HomeFeed {
    pub banners: Vec<Banner>,
    pub hot_news: Vec<NewsItem>,
    pub doctor_section: DoctorSection,
    pub hot_diseases: Vec<Disease>,
    pub science_articles: Vec<Article>,
    pub quick_actions: Vec<QuickAction>,
    pub disease_nav: DiseaseNav,
}

pub struct LoadHomeFeed {
    api: Arc<dyn ContentApiPort>,
    preference: Arc<RecommendationPreference>,
}

impl LoadHomeFeed {
    pub fn new(api: Arc<dyn ContentApiPort>, preference: Arc<RecommendationPreference>) -> Self {
        Self { api, preference }
    }

    pub async fn execute(&self) -> HomeFeed {
        let personalized = self.preference.is_enabled().await;

        let banners = or_empty("banner", self.api.banners().await);
        let hot_news = or_empty("hot news", self.api.hot_news().await);
        let doctor_section = or_empty("doctor section", self.api.doctor_section().await);
        let hot_diseases = or_empty("hot diseases", self.api.hot_diseases().await);
        let science_articles = or_empty("science articles", self.api.science_articles().await);
        let quick_actions = or_empty("quick actions", self.api.quick_actions().await);
        let disease_nav = or_empty("disease nav", self.api.disease_nav().await);

        HomeFeed {
            banners: filter_recommended(banners, personalized),
            hot_news: filter_recommended(hot_news, personalized),
            doctor_section,
            hot_diseases,
            science_articles: filter_recommended(science_articles, personalized),
            quick_actions,
            disease_nav,
        }
    }
}

fn or_empty<T: Default>(section: &str, result: Result<T, ApiError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(section, error = %e, "home feed section failed, rendering empty");
            T::default()
        }
    }
}
