//! Test doubles shared across use-case tests.
//!
//! Port mocks use `mockall` where call expectations matter; the recording
//! doubles below exist for tests that assert ordering across ports.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use mockall::mock;
use tokio::sync::{Notify, Semaphore};

use bh_core::content::{
    Article, Banner, Disease, DiseaseNav, DoctorSection, NewsItem, Page, QuickAction, Video, Voice,
};
use bh_core::deeplink::WebTarget;
use bh_core::ports::{
    AnalyticsPort, ApiResult, ContentApiPort, FlagKey, FlagStorePort, NavigatorPort, NoticePort,
    SessionStorePort,
};
use bh_core::version::VersionInfo;
use bh_core::{Platform, Session};

mock! {
    pub Api {}

    #[async_trait]
    impl ContentApiPort for Api {
        async fn banners(&self) -> ApiResult<Vec<Banner>>;
        async fn hot_news(&self) -> ApiResult<Vec<NewsItem>>;
        async fn doctor_section(&self) -> ApiResult<DoctorSection>;
        async fn hot_diseases(&self) -> ApiResult<Vec<Disease>>;
        async fn science_articles(&self) -> ApiResult<Vec<Article>>;
        async fn quick_actions(&self) -> ApiResult<Vec<QuickAction>>;
        async fn disease_nav(&self) -> ApiResult<DiseaseNav>;
        async fn video_page<'life0, 'life1>(
            &'life0 self,
            page: u32,
            cursor: Option<&'life1 str>,
        ) -> ApiResult<Page<Video>>;
        async fn article_page<'life0, 'life1>(
            &'life0 self,
            page: u32,
            cursor: Option<&'life1 str>,
        ) -> ApiResult<Page<Article>>;
        async fn voice_page<'life0, 'life1>(
            &'life0 self,
            page: u32,
            cursor: Option<&'life1 str>,
        ) -> ApiResult<Page<Voice>>;
        async fn send_code(&self, phone: &str) -> ApiResult<()>;
        async fn login(&self, phone: &str, code: &str) -> ApiResult<String>;
        async fn logout(&self, phone: &str, token: &str) -> ApiResult<()>;
        async fn delete_account(&self, phone: &str, token: &str) -> ApiResult<()>;
        async fn check_version(
            &self,
            platform: Platform,
            current_version: &str,
        ) -> ApiResult<VersionInfo>;
    }
}

/// Shared event log for cross-port ordering assertions.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

fn push(log: &EventLog, event: impl Into<String>) {
    log.lock().unwrap().push(event.into());
}

/// In-memory flag store with an optional failure switch.
pub struct MemoryFlags {
    values: Mutex<BTreeMap<&'static str, String>>,
    events: EventLog,
    failing: AtomicBool,
}

impl MemoryFlags {
    pub fn new() -> Self {
        Self::with_log(event_log())
    }

    pub fn with_log(events: EventLog) -> Self {
        Self {
            values: Mutex::new(BTreeMap::new()),
            events,
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn value(&self, key: FlagKey) -> Option<String> {
        self.values.lock().unwrap().get(key.as_str()).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(anyhow!("storage unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FlagStorePort for MemoryFlags {
    async fn get(&self, key: FlagKey) -> Result<Option<String>> {
        self.check()?;
        Ok(self.value(key))
    }

    async fn set(&self, key: FlagKey, value: &str) -> Result<()> {
        self.check()?;
        push(&self.events, format!("flag:{}={}", key.as_str(), value));
        self.values
            .lock()
            .unwrap()
            .insert(key.as_str(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: FlagKey) -> Result<()> {
        self.check()?;
        push(&self.events, format!("flag:remove:{}", key.as_str()));
        self.values.lock().unwrap().remove(key.as_str());
        Ok(())
    }
}

/// In-memory session record store.
pub struct MemorySessions {
    inner: Mutex<Option<Session>>,
}

impl MemorySessions {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStorePort for MemorySessions {
    async fn load(&self) -> Result<Option<Session>> {
        Ok(self.current())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        *self.inner.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}

/// Navigator double recording the transition sequence. `gated()` blocks
/// `select_main_tab` on a semaphore so tests can hold a navigation in
/// flight; `failing()` rejects the tab switch.
pub struct RecordingNavigator {
    events: EventLog,
    entered: Notify,
    gate: Option<Semaphore>,
    failing: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            events: event_log(),
            entered: Notify::new(),
            gate: None,
            failing: false,
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }
}

#[async_trait]
impl NavigatorPort for RecordingNavigator {
    async fn select_main_tab(&self) -> Result<()> {
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await?;
            permit.forget();
        }
        if self.failing {
            return Err(anyhow!("navigation tree rejected the transition"));
        }
        push(&self.events, "select_main_tab");
        Ok(())
    }

    async fn push_web_view(&self, target: &WebTarget) -> Result<()> {
        push(&self.events, format!("push:{}:{}", target.url, target.title));
        Ok(())
    }
}

/// Notice double recording every message.
pub struct RecordingNotices {
    messages: EventLog,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self {
            messages: event_log(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl NoticePort for RecordingNotices {
    async fn notice(&self, message: &str) {
        push(&self.messages, message);
    }
}

/// Analytics double counting initializations into the shared log.
pub struct CountingAnalytics {
    events: EventLog,
    failing: AtomicBool,
}

impl CountingAnalytics {
    pub fn with_log(events: EventLog) -> Self {
        Self {
            events,
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail_next(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn init_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| *e == "analytics:init")
            .count()
    }
}

#[async_trait]
impl AnalyticsPort for CountingAnalytics {
    async fn init(&self) -> Result<()> {
        if self.failing.swap(false, Ordering::SeqCst) {
            return Err(anyhow!("sdk unavailable"));
        }
        push(&self.events, "analytics:init");
        Ok(())
    }
}
