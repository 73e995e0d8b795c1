//! Fixed-size, 1-based pagination.

use std::num::NonZeroUsize;

use serde::Serialize;

/// One page of a filtered, sorted collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Records that passed filter and search, across all pages.
    pub total_filtered_count: usize,
    /// `ceil(total_filtered_count / page_size)`; zero for an empty result.
    pub total_pages: usize,
    /// The 1-based page that was requested.
    pub page: usize,
    pub page_size: usize,
}

/// Number of pages needed for `count` records.
#[must_use]
pub const fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
///
/// The pipeline itself never clamps; callers that take a page number from
/// user input use this first.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice `items` to the requested 1-based page. Page 0 is read as page 1.
/// A page past the end yields an empty `items`.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: NonZeroUsize) -> Page<T> {
    let page = page.max(1);
    let total_filtered_count = items.len();
    let start = (page - 1).saturating_mul(page_size.get());

    let items: Vec<T> = items.into_iter().skip(start).take(page_size.get()).collect();

    Page {
        items,
        total_filtered_count,
        total_pages: total_pages(total_filtered_count, page_size),
        page,
        page_size: page_size.get(),
    }
}
