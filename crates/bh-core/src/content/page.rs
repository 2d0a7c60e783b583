use serde::{Deserialize, Serialize};

use super::model::Keyed;

/// Server page size for all cursor-paginated list endpoints.
///
/// The API has no explicit has-more field; a page shorter than this is the
/// end-of-list signal.
pub const PAGE_SIZE: usize = 10;

/// One page of a cursor-paginated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Wrap a raw server page, deriving `has_more` from the item count.
    pub fn new(items: Vec<T>) -> Self {
        let has_more = items.len() >= PAGE_SIZE;
        Self { items, has_more }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> Page<T> {
    /// Cursor for the follow-up request: the last item's uuid.
    pub fn cursor(&self) -> Option<&str> {
        self.items.last().map(|i| i.uuid())
    }
}
