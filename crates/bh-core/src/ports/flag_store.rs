use async_trait::async_trait;

/// Persisted flag keys. Each logical flag owns one key; writers to
/// different keys never conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKey {
    /// Set on first cold start; presence routes past onboarding.
    AlreadyLaunched,
    /// "true" once the user accepted the privacy terms.
    PrivacyAgreed,
    /// Personalized-recommendation toggle; absent means enabled.
    PersonalizedRecommendation,
    /// Latest version the user dismissed from the soft update prompt.
    IgnoreVersion,
}

impl FlagKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyLaunched => "alreadyLaunched",
            Self::PrivacyAgreed => "privacyAgreed",
            Self::PersonalizedRecommendation => "personalizedRecommendation",
            Self::IgnoreVersion => "ignoreVersion",
        }
    }
}

/// Scoped string key/value storage for app flags.
///
/// Callers treat read failures as flag absence and fail open toward the
/// least disruptive default.
#[async_trait]
pub trait FlagStorePort: Send + Sync {
    async fn get(&self, key: FlagKey) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: FlagKey, value: &str) -> anyhow::Result<()>;
    async fn remove(&self, key: FlagKey) -> anyhow::Result<()>;
}
