//! Case list query: type filter, search, sort, page.

use std::num::NonZeroUsize;

use lex_core::entities::CaseRecord;
use lex_core::enums::{CaseType, SortDirection};
use serde::{Deserialize, Serialize};

use super::page::{Page, paginate};
use super::search::contains_folded;
use super::sort::{SortKey, SortSpec, SortValue, sort_by_spec};

/// Sortable case list columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSortKey {
    CaseNumber,
    Title,
    /// Reached through the case's optional client reference.
    ClientName,
    CaseType,
    /// Workflow order of `CaseStatus`, not alphabetical by label.
    Status,
    LastUpdated,
}

impl SortKey<CaseRecord> for CaseSortKey {
    fn value<'a>(self, case: &'a CaseRecord) -> Option<SortValue<'a>> {
        match self {
            Self::CaseNumber => Some(SortValue::Text(&case.case_number)),
            Self::Title => Some(SortValue::Text(&case.title)),
            Self::ClientName => case.client_name().map(SortValue::Text),
            Self::CaseType => Some(SortValue::Type(case.case_type)),
            Self::Status => Some(SortValue::Status(case.status)),
            Self::LastUpdated => Some(SortValue::Time(case.last_updated)),
        }
    }
}

/// Query state of the case list.
///
/// Changing the search term, the type filter, or the sort resets the page to
/// 1. Setters return whether the state actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseQuery {
    search: String,
    type_filter: Option<CaseType>,
    sort: SortSpec<CaseSortKey>,
    page: usize,
    page_size: NonZeroUsize,
}

impl CaseQuery {
    /// Fresh query: no filter, empty search, most recently updated first.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: String::new(),
            type_filter: None,
            sort: SortSpec::new(CaseSortKey::LastUpdated, SortDirection::Descending),
            page: 1,
            page_size,
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn type_filter(&self) -> Option<CaseType> {
        self.type_filter
    }

    #[must_use]
    pub const fn sort(&self) -> SortSpec<CaseSortKey> {
        self.sort
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Apply a settled search term.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.page = 1;
        true
    }

    /// Restrict to one case type, or `None` for all types.
    pub fn set_type_filter(&mut self, filter: Option<CaseType>) -> bool {
        if filter == self.type_filter {
            return false;
        }
        self.type_filter = filter;
        self.page = 1;
        true
    }

    pub fn set_sort(&mut self, key: CaseSortKey, direction: SortDirection) -> bool {
        let sort = SortSpec::new(key, direction);
        if sort == self.sort {
            return false;
        }
        self.sort = sort;
        self.page = 1;
        true
    }

    /// Column-header click on `key`.
    pub fn toggle_sort(&mut self, key: CaseSortKey) {
        self.sort = self.sort.toggled(key);
        self.page = 1;
    }

    /// Move to a page. Not clamped; see [`super::clamp_page`].
    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Run the pipeline: type filter, search, stable sort, page slice.
    #[must_use]
    pub fn run<'a>(&self, cases: &'a [CaseRecord]) -> Page<&'a CaseRecord> {
        let needle = self.search.to_lowercase();

        let mut matched: Vec<&CaseRecord> = cases
            .iter()
            .filter(|case| self.type_filter.is_none_or(|wanted| case.case_type == wanted))
            .filter(|case| matches_search(case, &needle))
            .collect();

        sort_by_spec(&mut matched, self.sort);

        tracing::debug!(
            total = cases.len(),
            matched = matched.len(),
            page = self.page,
            "case query"
        );

        paginate(matched, self.page, self.page_size)
    }
}

/// Title, case number, or client name contains the lowercased needle.
fn matches_search(case: &CaseRecord, needle: &str) -> bool {
    needle.is_empty()
        || contains_folded(&case.title, needle)
        || contains_folded(&case.case_number, needle)
        || case
            .client_name()
            .is_some_and(|name| contains_folded(name, needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use lex_core::entities::ClientSummary;
    use lex_core::enums::CaseStatus;
    use pretty_assertions::assert_eq;

    fn case(id: &str, title: &str, case_type: CaseType) -> CaseRecord {
        CaseRecord {
            id: id.to_string(),
            case_number: format!("N-{id}"),
            title: title.to_string(),
            description: None,
            client: Some(ClientSummary {
                id: format!("client-{id}"),
                name: format!("Client {id}"),
            }),
            status: CaseStatus::InitialAnalysis,
            case_type,
            assigned_lawyer: None,
            created_date: None,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            deadlines: Vec::new(),
        }
    }

    fn ids(page: &Page<&CaseRecord>) -> Vec<String> {
        page.items.iter().map(|case| case.id.clone()).collect()
    }

    fn ten() -> NonZeroUsize {
        NonZeroUsize::new(10).unwrap()
    }

    #[test]
    fn default_sort_is_last_updated_descending() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let cases: Vec<CaseRecord> = (0..3)
            .map(|i| {
                let mut c = case(&i.to_string(), "t", CaseType::Judicial);
                c.last_updated = base + Duration::days(i);
                c
            })
            .collect();

        let page = CaseQuery::new(ten()).run(&cases);
        assert_eq!(ids(&page), vec!["2", "1", "0"]);
    }

    #[test]
    fn type_filter_applies_before_search() {
        let cases = vec![
            case("a", "Pension case", CaseType::Administrative),
            case("b", "Pension case", CaseType::Judicial),
        ];
        let mut query = CaseQuery::new(ten());
        query.set_search("pension");
        query.set_type_filter(Some(CaseType::Judicial));

        let page = query.run(&cases);
        assert_eq!(ids(&page), vec!["b"]);
        assert_eq!(page.total_filtered_count, 1);
    }

    #[test]
    fn search_matches_case_number_and_client_name() {
        let cases = vec![
            case("x1", "Alpha", CaseType::Judicial),
            case("y2", "Beta", CaseType::Judicial),
        ];
        let mut query = CaseQuery::new(ten());
        query.set_search("n-X1");
        assert_eq!(ids(&query.run(&cases)), vec!["x1"]);

        query.set_search("CLIENT Y2");
        assert_eq!(ids(&query.run(&cases)), vec!["y2"]);
    }

    #[test]
    fn missing_client_never_matches_on_client_name() {
        let mut orphan = case("o", "Orphan", CaseType::Judicial);
        orphan.client = None;
        let mut query = CaseQuery::new(ten());
        query.set_search("client");
        assert!(query.run(std::slice::from_ref(&orphan)).items.is_empty());
    }

    #[test]
    fn state_changes_reset_page() {
        let mut query = CaseQuery::new(ten());

        query.set_page(3);
        assert!(query.set_search("abc"));
        assert_eq!(query.page(), 1);

        query.set_page(3);
        assert!(query.set_type_filter(Some(CaseType::Administrative)));
        assert_eq!(query.page(), 1);

        query.set_page(3);
        assert!(query.set_sort(CaseSortKey::Title, SortDirection::Ascending));
        assert_eq!(query.page(), 1);

        query.set_page(3);
        query.toggle_sort(CaseSortKey::Title);
        assert_eq!(query.page(), 1);
        assert_eq!(query.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn unchanged_state_keeps_page() {
        let mut query = CaseQuery::new(ten());
        query.set_search("abc");
        query.set_page(2);

        assert!(!query.set_search("abc"));
        assert!(!query.set_type_filter(None));
        assert!(!query.set_sort(CaseSortKey::LastUpdated, SortDirection::Descending));
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn sort_by_status_follows_workflow_order() {
        let mut granted = case("g", "t", CaseType::Judicial);
        granted.status = CaseStatus::Granted;
        let mut filed = case("f", "t", CaseType::Judicial);
        filed.status = CaseStatus::Filed;
        let cases = vec![granted, filed];

        let mut query = CaseQuery::new(ten());
        query.set_sort(CaseSortKey::Status, SortDirection::Ascending);
        assert_eq!(ids(&query.run(&cases)), vec!["f", "g"]);
    }
}
