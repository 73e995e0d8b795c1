//! Typed sort keys and the missing-value-last comparator.
//!
//! Every sortable field is reached through an accessor on a closed key enum,
//! so a nested field such as the case's client name cannot fail at runtime.
//! An unreachable value is `None`, which sorts after every defined value in
//! both directions.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use lex_core::enums::{CaseStatus, CaseType, SortDirection};
use serde::{Deserialize, Serialize};

/// A comparable field value extracted from a record.
///
/// A given sort key always produces the same variant, so cross-variant
/// comparisons never occur in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Text(&'a str),
    Time(DateTime<Utc>),
    Status(CaseStatus),
    Type(CaseType),
}

/// A field of `T` that a list view can be sorted by.
pub trait SortKey<T>: Copy {
    /// Extract the value to sort by, or `None` when it is missing.
    fn value<'a>(self, item: &'a T) -> Option<SortValue<'a>>;
}

/// Sort key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortSpec<K> {
    #[must_use]
    pub const fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header-click behaviour: clicking the active ascending key flips it to
    /// descending, anything else sorts ascending by the clicked key.
    #[must_use]
    pub fn toggled(self, key: K) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

/// Compare two optional values: defined values by natural order (reversed when
/// descending), missing values equal to each other and after defined ones.
#[must_use]
pub fn compare_values(
    a: Option<SortValue<'_>>,
    b: Option<SortValue<'_>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of `items` by `spec`. Ties keep their input order.
pub fn sort_by_spec<T, K>(items: &mut [&T], spec: SortSpec<K>)
where
    K: SortKey<T>,
{
    items.sort_by(|a, b| compare_values(spec.key.value(a), spec.key.value(b), spec.direction));
}
