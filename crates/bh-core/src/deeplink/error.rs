use thiserror::Error;

/// Deep-link parse failures. All are non-fatal: the router surfaces a single
/// user notice and skips navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    /// The string does not parse as a URL at all.
    #[error("无法解析的链接: {0}")]
    Malformed(String),

    /// Recognized shape but the target parameter is missing.
    #[error("链接格式错误，缺少目标地址: {0}")]
    MissingTarget(String),

    /// A well-formed URL that addresses nothing in this app.
    #[error("暂不支持的链接: {0}")]
    Unsupported(String),
}
