//! Article API client (JSON over HTTPS, `{errno, errmsg, ...}` envelope).

mod client;
mod response;

pub use client::{ArticleApiClient, DEFAULT_BASE_URL};
