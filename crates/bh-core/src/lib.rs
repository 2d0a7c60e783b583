//! # bh-core
//!
//! Core domain models and business logic for the Bohe health-content client.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: content models, the deep-link grammar, the router state
//! machine, navigation routes, the session record, the version gate, and the
//! port traits implemented by the infrastructure layer.

pub mod content;
pub mod deeplink;
pub mod navigation;
pub mod platform;
pub mod ports;
pub mod session;
pub mod version;

// Re-export commonly used types at the crate root
pub use content::{filter_recommended, Page, Recommendable, PAGE_SIZE};
pub use deeplink::{WebTarget, DEFAULT_WEB_TITLE};
pub use navigation::{ConsentState, MainTab, Route};
pub use platform::Platform;
pub use session::Session;
pub use version::{decide_update, UpdateGate, VersionInfo};
