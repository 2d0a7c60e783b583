//! Privacy-consent gate.
//!
//! The route tree stays suppressed until the user agrees. Agreement is
//! persisted first, then the analytics SDK is initialized — at most once
//! per process, no matter how often the gate is asked.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::OnceCell;
use tracing::warn;

use bh_core::ports::{AnalyticsPort, FlagKey, FlagStorePort};
use bh_core::ConsentState;

pub struct ConsentGate {
    flags: Arc<dyn FlagStorePort>,
    analytics: Arc<dyn AnalyticsPort>,
    analytics_started: OnceCell<()>,
    declined: AtomicBool,
}

impl ConsentGate {
    pub fn new(flags: Arc<dyn FlagStorePort>, analytics: Arc<dyn AnalyticsPort>) -> Self {
        Self {
            flags,
            analytics,
            analytics_started: OnceCell::new(),
            declined: AtomicBool::new(false),
        }
    }

    /// Current gate state. A storage failure reads as `Unknown`: the modal
    /// shows again rather than silently unlocking the app.
    pub async fn status(&self) -> ConsentState {
        if self.declined.load(Ordering::SeqCst) {
            return ConsentState::Disagreed;
        }
        match self.flags.get(FlagKey::PrivacyAgreed).await {
            Ok(value) => ConsentState::from_flag(value.as_deref()),
            Err(e) => {
                warn!(error = %e, "reading consent flag failed");
                ConsentState::Unknown
            }
        }
    }

    /// Persist agreement, then start analytics. The persist must succeed
    /// before the SDK sees a single byte; an SDK failure leaves consent
    /// stored and is retried on the next `agree`.
    pub async fn agree(&self) -> Result<()> {
        self.flags
            .set(FlagKey::PrivacyAgreed, "true")
            .await
            .context("persist consent failed")?;
        self.declined.store(false, Ordering::SeqCst);

        self.analytics_started
            .get_or_try_init(|| async { self.analytics.init().await })
            .await?;
        Ok(())
    }

    /// Dismissal without agreement: in-memory only, never persisted, so
    /// the modal shows again next launch.
    pub fn decline(&self) {
        self.declined.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{event_log, CountingAnalytics, MemoryFlags};

    fn gate() -> (ConsentGate, Arc<MemoryFlags>, Arc<CountingAnalytics>) {
        let log = event_log();
        let flags = Arc::new(MemoryFlags::with_log(log.clone()));
        let analytics = Arc::new(CountingAnalytics::with_log(log));
        let gate = ConsentGate::new(flags.clone(), analytics.clone());
        (gate, flags, analytics)
    }

    #[tokio::test]
    async fn fresh_install_is_unknown() {
        let (gate, _, _) = gate();
        assert_eq!(gate.status().await, ConsentState::Unknown);
    }

    #[tokio::test]
    async fn agree_persists_before_analytics_and_inits_once() {
        let (gate, flags, analytics) = gate();

        gate.agree().await.unwrap();
        assert_eq!(gate.status().await, ConsentState::Agreed);

        // The flag write is logged strictly before the SDK init.
        let events = flags.value(FlagKey::PrivacyAgreed);
        assert_eq!(events.as_deref(), Some("true"));
        assert_eq!(analytics.init_count(), 1);

        gate.agree().await.unwrap();
        assert_eq!(analytics.init_count(), 1, "init must run at most once");
    }

    #[tokio::test]
    async fn agree_orders_persist_before_init() {
        let log = event_log();
        let flags = Arc::new(MemoryFlags::with_log(log.clone()));
        let analytics = Arc::new(CountingAnalytics::with_log(log.clone()));
        let gate = ConsentGate::new(flags, analytics);

        gate.agree().await.unwrap();
        let events = log.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["flag:privacyAgreed=true".to_string(), "analytics:init".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_analytics_keeps_consent_and_retries() {
        let (gate, _, analytics) = gate();
        analytics.fail_next();

        assert!(gate.agree().await.is_err());
        assert_eq!(gate.status().await, ConsentState::Agreed, "consent stays persisted");
        assert_eq!(analytics.init_count(), 0);

        gate.agree().await.unwrap();
        assert_eq!(analytics.init_count(), 1);
    }

    #[tokio::test]
    async fn decline_gates_this_process_without_persisting() {
        let (gate, flags, _) = gate();
        gate.decline();
        assert_eq!(gate.status().await, ConsentState::Disagreed);
        assert_eq!(flags.value(FlagKey::PrivacyAgreed), None);
    }

    #[tokio::test]
    async fn storage_failure_keeps_the_gate_closed() {
        let (gate, flags, _) = gate();
        flags.fail_all();
        assert_eq!(gate.status().await, ConsentState::Unknown);
    }
}
