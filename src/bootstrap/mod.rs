pub mod logging;
pub mod wiring;

pub use wiring::{AppConfig, AppContext};
