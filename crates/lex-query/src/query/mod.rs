//! Collection query pipeline for the case and client list views.
//!
//! Processing order is fixed: categorical/tag filter, case-insensitive search,
//! stable sort, page slice. The pipeline is a pure function of the query state
//! and the input slice; the same inputs always give the same page.

mod case;
mod client;
mod page;
mod search;
mod sort;

pub use case::{CaseQuery, CaseSortKey};
pub use client::{ClientQuery, ClientSortKey};
pub use page::{Page, clamp_page, paginate, total_pages};
pub use search::contains_folded;
pub use sort::{SortKey, SortSpec, SortValue, compare_values, sort_by_spec};
