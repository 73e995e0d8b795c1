//! Behavioural properties of the case and client query pipelines.

use std::num::NonZeroUsize;

use chrono::{DateTime, Duration, TimeZone, Utc};
use lex_core::entities::{CaseRecord, ClientRecord, ClientSummary};
use lex_core::enums::{CaseStatus, CaseType, SortDirection};
use lex_query::query::{CaseQuery, CaseSortKey, ClientQuery, ClientSortKey, Page};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn case(id: &str, title: &str, client: Option<&str>) -> CaseRecord {
    CaseRecord {
        id: id.to_string(),
        case_number: format!("2024-{id}"),
        title: title.to_string(),
        description: None,
        client: client.map(|name| ClientSummary {
            id: format!("cl-{id}"),
            name: name.to_string(),
        }),
        status: CaseStatus::Filed,
        case_type: CaseType::Administrative,
        assigned_lawyer: None,
        created_date: None,
        last_updated: base_time(),
        deadlines: Vec::new(),
    }
}

fn client(id: &str, tags: &[&str]) -> ClientRecord {
    ClientRecord {
        id: id.to_string(),
        name: format!("Client {id}"),
        email: format!("{id}@example.com"),
        phone: None,
        tags: tags.iter().map(ToString::to_string).collect(),
        created_at: base_time(),
    }
}

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn case_ids(page: &Page<&CaseRecord>) -> Vec<String> {
    page.items.iter().map(|c| c.id.clone()).collect()
}

fn client_ids(page: &Page<&ClientRecord>) -> Vec<String> {
    page.items.iter().map(|c| c.id.clone()).collect()
}

fn mixed_cases() -> Vec<CaseRecord> {
    vec![
        case("01", "Alpha Case", Some("Maria")),
        case("02", "Beta Case", Some("joão")),
        case("03", "Gamma", Some("Ana")),
        case("04", "Alpha Case", None),
        case("05", "delta case", Some("Maria")),
        case("06", "Gamma", Some("Ana")),
    ]
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn twelve_cases_paginate_ten_then_two_by_last_updated() {
    let cases: Vec<CaseRecord> = (0..12)
        .map(|i| {
            let mut c = case(&format!("{i:02}"), "Case", Some("X"));
            c.last_updated = base_time() + Duration::hours(i);
            c
        })
        .collect();

    let mut query = CaseQuery::new(size(10));
    query.set_sort(CaseSortKey::LastUpdated, SortDirection::Descending);

    let first = query.run(&cases);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.total_filtered_count, 12);
    let expected_first: Vec<String> = (2..12).rev().map(|i| format!("{i:02}")).collect();
    assert_eq!(case_ids(&first), expected_first);

    query.set_page(2);
    let second = query.run(&cases);
    assert_eq!(case_ids(&second), vec!["01", "00"]);
    assert_eq!(second.total_pages, 2);
}

#[test]
fn search_is_case_insensitive_substring() {
    let cases = vec![
        case("a", "Alpha Case", Some("A")),
        case("b", "Beta Case", Some("B")),
        case("g", "Gamma", Some("G")),
    ];
    let mut query = CaseQuery::new(size(10));
    query.set_sort(CaseSortKey::Title, SortDirection::Ascending);
    query.set_search("case");

    let page = query.run(&cases);
    assert_eq!(case_ids(&page), vec!["a", "b"]);
}

#[test]
fn tag_filter_requires_all_tags() {
    let clients = vec![
        client("first", &["A", "B"]),
        client("second", &["A"]),
        client("third", &["B", "C"]),
    ];
    let mut query = ClientQuery::new(size(9));
    query.set_tags(["A", "B"]);

    let page = query.run(&clients);
    assert_eq!(client_ids(&page), vec!["first"]);
}

#[test]
fn empty_collection_yields_empty_page() {
    let page = CaseQuery::new(size(10)).run(&[]);
    assert_eq!(page.total_filtered_count, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());

    let page = ClientQuery::new(size(9)).run(&[]);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}

#[rstest]
#[case(SortDirection::Ascending)]
#[case(SortDirection::Descending)]
fn missing_client_name_sorts_last(#[case] direction: SortDirection) {
    let cases = vec![
        case("orphan", "t", None),
        case("b", "t", Some("Bruno")),
        case("a", "t", Some("Ana")),
    ];
    let mut query = CaseQuery::new(size(10));
    query.set_sort(CaseSortKey::ClientName, direction);

    let ids = case_ids(&query.run(&cases));
    assert_eq!(ids.last().map(String::as_str), Some("orphan"));
    let expected_head = match direction {
        SortDirection::Ascending => vec!["a", "b"],
        SortDirection::Descending => vec!["b", "a"],
    };
    assert_eq!(&ids[..2], expected_head.as_slice());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn running_twice_gives_identical_pages() {
    let cases = mixed_cases();
    let mut query = CaseQuery::new(size(4));
    query.set_search("a");
    query.set_sort(CaseSortKey::ClientName, SortDirection::Descending);

    assert_eq!(query.run(&cases), query.run(&cases));
}

#[rstest]
#[case("", 1)]
#[case("", 2)]
#[case("", 3)]
#[case("case", 1)]
#[case("case", 2)]
#[case("gamma", 1)]
#[case("nothing matches", 1)]
fn page_length_follows_cardinality_formula(#[case] term: &str, #[case] page: usize) {
    let cases = mixed_cases();
    let page_size = 4;
    let mut query = CaseQuery::new(size(page_size));
    query.set_search(term);
    query.set_page(page);

    let result = query.run(&cases);
    let needle = term.to_lowercase();
    let expected_total = cases
        .iter()
        .filter(|c| {
            c.title.to_lowercase().contains(&needle)
                || c.case_number.to_lowercase().contains(&needle)
                || c.client_name().is_some_and(|n| n.to_lowercase().contains(&needle))
        })
        .count();

    assert_eq!(result.total_filtered_count, expected_total);
    let remaining = expected_total.saturating_sub((page - 1) * page_size);
    assert_eq!(result.items.len(), page_size.min(remaining));
    assert_eq!(result.total_pages, expected_total.div_ceil(page_size));
}

#[test]
fn adding_tags_never_increases_matches() {
    let clients = vec![
        client("1", &["A", "B", "C"]),
        client("2", &["A", "B"]),
        client("3", &["A"]),
        client("4", &[]),
    ];
    let mut query = ClientQuery::new(size(9));
    let mut previous = query.run(&clients).total_filtered_count;

    for tag in ["A", "B", "C", "D"] {
        query.add_tag(tag);
        let current = query.run(&clients).total_filtered_count;
        assert!(current <= previous, "adding {tag} grew {previous} -> {current}");
        previous = current;
    }
    assert_eq!(previous, 0);
}

#[rstest]
#[case(CaseSortKey::CaseNumber)]
#[case(CaseSortKey::Title)]
#[case(CaseSortKey::ClientName)]
#[case(CaseSortKey::CaseType)]
#[case(CaseSortKey::Status)]
#[case(CaseSortKey::LastUpdated)]
fn ties_keep_input_order(#[case] key: CaseSortKey) {
    // 01/04 share a title, 01/05 share a client, 03/06 share both.
    // Every record shares case type, status, and timestamp.
    let cases = mixed_cases();
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let mut query = CaseQuery::new(size(10));
        query.set_sort(key, direction);
        let ids = case_ids(&query.run(&cases));

        for (i, a) in cases.iter().enumerate() {
            for b in &cases[i + 1..] {
                let tied = match key {
                    CaseSortKey::CaseNumber => a.case_number == b.case_number,
                    CaseSortKey::Title => a.title == b.title,
                    CaseSortKey::ClientName => a.client_name() == b.client_name(),
                    CaseSortKey::CaseType => a.case_type == b.case_type,
                    CaseSortKey::Status => a.status == b.status,
                    CaseSortKey::LastUpdated => a.last_updated == b.last_updated,
                };
                if tied {
                    let pos_a = ids.iter().position(|id| *id == a.id).unwrap();
                    let pos_b = ids.iter().position(|id| *id == b.id).unwrap();
                    assert!(pos_a < pos_b, "{key:?} {direction:?} reordered {} and {}", a.id, b.id);
                }
            }
        }
    }
}

#[test]
fn descending_reverses_ascending_without_ties() {
    let cases: Vec<CaseRecord> = ["d", "a", "c", "b", "e"]
        .iter()
        .map(|id| case(id, &format!("Title {id}"), Some(id)))
        .collect();

    let mut query = CaseQuery::new(size(10));
    query.set_sort(CaseSortKey::Title, SortDirection::Ascending);
    let ascending = case_ids(&query.run(&cases));
    query.set_sort(CaseSortKey::Title, SortDirection::Descending);
    let mut descending = case_ids(&query.run(&cases));
    descending.reverse();

    assert_eq!(ascending, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(ascending, descending);
}

#[test]
fn client_sort_by_email_is_stable_for_duplicates() {
    let mut first = client("first", &[]);
    first.email = "same@example.com".to_string();
    let mut second = client("second", &[]);
    second.email = "same@example.com".to_string();
    let other = client("aaa", &[]);

    let mut query = ClientQuery::new(size(9));
    query.set_sort(ClientSortKey::Email, SortDirection::Descending);
    let ids = client_ids(&query.run(&[first, other, second]));
    assert_eq!(ids, vec!["first", "second", "aaa"]);
}
