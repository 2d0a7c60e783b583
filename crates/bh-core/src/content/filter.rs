//! Personalized-recommendation filtering.
//!
//! When the user disables personalized recommendation, every list that can
//! carry server-recommended items is reduced to its non-recommended subset
//! before rendering. The filter is pure: it never reorders or mutates items.

/// Content that may carry the server's recommendation marker.
pub trait Recommendable {
    fn is_recommended(&self) -> bool;
}

/// Apply the personalized-recommendation preference to a content list.
///
/// - `enabled == true`: the list is returned unchanged (identity).
/// - `enabled == false`: only items without the recommendation marker are
///   retained, preserving their relative order.
pub fn filter_recommended<T: Recommendable>(items: Vec<T>, enabled: bool) -> Vec<T> {
    if enabled {
        items
    } else {
        items.into_iter().filter(|i| !i.is_recommended()).collect()
    }
}
