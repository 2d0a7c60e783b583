//! Local persistence: flags and the session record in one JSON file.

mod file_store;

pub use file_store::{default_state_path, FileStateStore};
