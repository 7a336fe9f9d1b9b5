//! In-memory pagination over a fully materialized, ordered result set.

use crate::server::model::page::{Page, PageRequest};

/// Slices one page out of `items`.
///
/// `total` always counts every input item. A page past the end yields no items but
/// keeps the metadata so clients can tell they overshot.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let total_pages = total.div_ceil(request.limit);

    let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let take = usize::try_from(request.limit).unwrap_or(usize::MAX);

    Page {
        items: items.into_iter().skip(skip).take(take).collect(),
        page: request.page,
        limit: request.limit,
        total,
        total_pages,
    }
}
