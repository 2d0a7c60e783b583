//! Deep-link grammar and router state machine.
//!
//! An incoming URL (from the OS, at launch or at runtime) is translated into
//! an in-app web-view target by [`parse`]. The asynchronous orchestration
//! around it (pending-link queue, two-step navigation) lives in `bh-app`;
//! this module is pure parsing and state transitions.

mod error;
mod parser;
mod state;
mod target;

pub use error::DeepLinkError;
pub use parser::parse;
pub use state::RouterPhase;
pub use target::{WebTarget, DEFAULT_WEB_TITLE};
