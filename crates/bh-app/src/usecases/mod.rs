pub mod auth;
pub mod consent;
pub mod deep_link;
pub mod home_feed;
pub mod lists;
pub mod preference;
pub mod startup;
pub mod update;
