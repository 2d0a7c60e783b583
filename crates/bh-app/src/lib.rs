//! # bh-app
//!
//! Application use cases for the Bohe client. Each use case depends only on
//! the port traits from `bh-core`; concrete adapters are injected at
//! construction by the bootstrap wiring.

pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use usecases::auth::{DeleteAccount, LoginWithCode, Logout, RequestSmsCode};
pub use usecases::consent::ConsentGate;
pub use usecases::deep_link::DeepLinkRouter;
pub use usecases::home_feed::{HomeFeed, LoadHomeFeed};
pub use usecases::lists::{LoadArticlePage, LoadVideoPage, LoadVoicePage};
pub use usecases::preference::RecommendationPreference;
pub use usecases::startup::ResolveInitialRoute;
pub use usecases::update::CheckForUpdate;
