//! # bh-infra
//!
//! Infrastructure adapters for the Bohe client: the reqwest-based Article
//! API client, the file-backed flag/session store, and the analytics
//! adapter. Everything here implements a port from `bh-core`.

pub mod analytics;
pub mod api;
pub mod store;

pub use analytics::UmengAnalytics;
pub use api::ArticleApiClient;
pub use store::FileStateStore;
