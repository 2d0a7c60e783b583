//! Deep-link router orchestration.
//!
//! Translates external URLs into the two-step navigation (select the main
//! tab, then push the web view) once the navigation tree is mounted. Links
//! arriving earlier are queued and replayed exactly once after mount; links
//! arriving while a navigation is in flight queue FIFO behind it.
//!
//! The second step waits on the first step's completion (the navigator
//! resolves `select_main_tab` only once the transition settled), so there
//! is no fixed-delay race between the two transitions.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use bh_core::deeplink::{self, DeepLinkError, RouterPhase, WebTarget};
use bh_core::ports::{NavigatorPort, NoticePort};

const NAVIGATION_FAILED_NOTICE: &str = "页面打开失败，请稍后重试";

struct RouterState {
    phase: RouterPhase,
    queue: VecDeque<String>,
}

pub struct DeepLinkRouter {
    navigator: Arc<dyn NavigatorPort>,
    notices: Arc<dyn NoticePort>,
    state: Mutex<RouterState>,
}

impl DeepLinkRouter {
    pub fn new(navigator: Arc<dyn NavigatorPort>, notices: Arc<dyn NoticePort>) -> Self {
        Self {
            navigator,
            notices,
            state: Mutex::new(RouterState {
                phase: RouterPhase::Uninitialized,
                queue: VecDeque::new(),
            }),
        }
    }

    /// Record the URL the process was started with, if any. Called once at
    /// startup, before the navigation tree exists.
    pub async fn capture_initial_url(&self, url: Option<String>) {
        let mut state = self.state.lock().await;
        if state.phase == RouterPhase::Uninitialized {
            state.phase = RouterPhase::AwaitingMount;
            if let Some(url) = url {
                info!(%url, "captured initial deep link before mount");
                state.queue.push_back(url);
            }
        }
    }

    /// Signal that the navigation tree is mounted. Replays any pending link
    /// exactly once.
    pub async fn on_mounted(&self) {
        {
            let mut state = self.state.lock().await;
            if state.phase.is_mounted() {
                return;
            }
            state.phase = RouterPhase::Idle;
        }
        self.pump().await;
    }

    /// Handle a runtime link event. Queues if the tree is not mounted yet
    /// or another navigation is in flight.
    pub async fn handle_url(&self, url: impl Into<String>) {
        {
            let mut state = self.state.lock().await;
            state.queue.push_back(url.into());
        }
        self.pump().await;
    }

    /// Dispatch queued links one at a time, FIFO. Only the caller that
    /// flips `Idle → Navigating` drives the queue; everyone else has
    /// already returned after enqueueing.
    async fn pump(&self) {
        loop {
            let next = {
                let mut state = self.state.lock().await;
                if !state.phase.can_dispatch() {
                    return;
                }
                match state.queue.pop_front() {
                    Some(url) => {
                        state.phase = RouterPhase::Navigating;
                        url
                    }
                    None => return,
                }
            };

            self.dispatch(&next).await;

            let mut state = self.state.lock().await;
            state.phase = RouterPhase::Idle;
        }
    }

    async fn dispatch(&self, raw: &str) {
        match deeplink::parse(raw) {
            Ok(target) => {
                info!(url = %target.url, title = %target.title, "deep link resolved");
                if let Err(e) = self.navigate(&target).await {
                    warn!(error = %e, url = %target.url, "deep link navigation failed");
                    self.notices.notice(NAVIGATION_FAILED_NOTICE).await;
                }
            }
            Err(e) => {
                match &e {
                    DeepLinkError::Unsupported(_) => info!(link = raw, "unsupported deep link"),
                    _ => warn!(link = raw, error = %e, "deep link parse failed"),
                }
                self.notices.notice(&e.to_string()).await;
            }
        }
    }

    /// The two-step navigation. Selecting the main tab is idempotent; the
    /// push happens only after that transition has settled.
    async fn navigate(&self, target: &WebTarget) -> anyhow::Result<()> {
        self.navigator.select_main_tab().await?;
        self.navigator.push_web_view(target).await
    }
}
