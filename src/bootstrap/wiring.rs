//! Dependency wiring.
//!
//! The only place that knows both the concrete adapters from `bh-infra` and
//! the use cases from `bh-app`. Everything is injected through the port
//! traits; no business decisions are made here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use bh_app::{
    CheckForUpdate, ConsentGate, DeepLinkRouter, DeleteAccount, LoadArticlePage, LoadHomeFeed,
    LoadVideoPage, LoadVoicePage, LoginWithCode, Logout, RecommendationPreference,
    RequestSmsCode, ResolveInitialRoute,
};
use bh_core::ports::{
    AnalyticsPort, ContentApiPort, FlagStorePort, NavigatorPort, NoticePort, SessionStorePort,
};
use bh_core::Platform;
use bh_infra::api::DEFAULT_BASE_URL;
use bh_infra::store::default_state_path;
use bh_infra::{ArticleApiClient, FileStateStore, UmengAnalytics};

/// Host-supplied configuration. [`AppConfig::new`] fills in the production
/// defaults; tests and staging builds override the fields they need.
pub struct AppConfig {
    pub platform: Platform,
    pub app_version: String,
    pub api_base_url: String,
    pub state_path: PathBuf,
    pub analytics_app_key: String,
    pub analytics_channel: String,
}

impl AppConfig {
    pub fn new(platform: Platform, app_version: impl Into<String>) -> Self {
        Self {
            platform,
            app_version: app_version.into(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            state_path: default_state_path(),
            analytics_app_key: String::new(),
            analytics_channel: "default".to_string(),
        }
    }
}

/// The wired application: one field per use case, ready for the UI shell.
pub struct AppContext {
    pub initial_route: ResolveInitialRoute,
    pub consent: ConsentGate,
    pub router: DeepLinkRouter,

    pub request_sms_code: RequestSmsCode,
    pub login: LoginWithCode,
    pub logout: Logout,
    pub delete_account: DeleteAccount,

    pub home_feed: LoadHomeFeed,
    pub video_page: LoadVideoPage,
    pub article_page: LoadArticlePage,
    pub voice_page: LoadVoicePage,

    pub recommendation: Arc<RecommendationPreference>,
    pub update_check: CheckForUpdate,
}

impl AppContext {
    /// Build every adapter and use case. The navigator and notice sink come
    /// from the host shell because only it can move screens and show toasts.
    pub fn new(
        config: AppConfig,
        navigator: Arc<dyn NavigatorPort>,
        notices: Arc<dyn NoticePort>,
    ) -> Result<Self> {
        info!(
            platform = config.platform.as_str(),
            version = %config.app_version,
            state = %config.state_path.display(),
            "wiring app context"
        );

        let store = Arc::new(FileStateStore::new(config.state_path));
        let flags: Arc<dyn FlagStorePort> = store.clone();
        let sessions: Arc<dyn SessionStorePort> = store;

        let api: Arc<dyn ContentApiPort> = Arc::new(
            ArticleApiClient::new(config.api_base_url, config.platform)
                .context("build article api client failed")?,
        );

        let analytics: Arc<dyn AnalyticsPort> = Arc::new(UmengAnalytics::new(
            config.analytics_app_key,
            config.analytics_channel,
            config.platform,
        ));

        let recommendation = Arc::new(RecommendationPreference::new(flags.clone()));

        Ok(Self {
            initial_route: ResolveInitialRoute::new(flags.clone()),
            consent: ConsentGate::new(flags.clone(), analytics),
            router: DeepLinkRouter::new(navigator, notices),

            request_sms_code: RequestSmsCode::new(api.clone()),
            login: LoginWithCode::new(api.clone(), sessions.clone()),
            logout: Logout::new(api.clone(), sessions.clone()),
            delete_account: DeleteAccount::new(api.clone(), sessions),

            home_feed: LoadHomeFeed::new(api.clone(), recommendation.clone()),
            video_page: LoadVideoPage::new(api.clone()),
            article_page: LoadArticlePage::new(api.clone()),
            voice_page: LoadVoicePage::new(api.clone()),

            recommendation,
            update_check: CheckForUpdate::new(
                api,
                flags,
                config.platform,
                config.app_version,
            ),
        })
    }
}
