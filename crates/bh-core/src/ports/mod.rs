//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core independent of
//! reqwest, the filesystem, and the UI shell.

mod analytics;
mod content_api;
mod flag_store;
mod navigator;
mod notice;
mod session_store;

pub use analytics::AnalyticsPort;
pub use content_api::{ApiError, ApiResult, ContentApiPort};
pub use flag_store::{FlagKey, FlagStorePort};
pub use navigator::NavigatorPort;
pub use notice::NoticePort;
pub use session_store::SessionStorePort;
