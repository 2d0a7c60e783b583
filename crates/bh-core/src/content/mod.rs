//! Content models returned by the Article API, plus the pure
//! recommendation filter applied before rendering.

mod filter;
mod model;
mod page;

pub use filter::{filter_recommended, Recommendable};
pub use model::{
    Article, Banner, Disease, DiseaseNav, Doctor, DoctorSection, Keyed, NavItem, NewsItem,
    QuickAction, Video, Voice,
};
pub use page::{Page, PAGE_SIZE};
