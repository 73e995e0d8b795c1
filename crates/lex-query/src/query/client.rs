//! Client grid query: tag filter, search, sort, page.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use lex_core::entities::ClientRecord;
use lex_core::enums::SortDirection;
use serde::{Deserialize, Serialize};

use super::page::{Page, paginate};
use super::search::contains_folded;
use super::sort::{SortKey, SortSpec, SortValue, sort_by_spec};

/// Sortable client fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientSortKey {
    Name,
    Email,
    CreatedAt,
}

impl SortKey<ClientRecord> for ClientSortKey {
    fn value<'a>(self, client: &'a ClientRecord) -> Option<SortValue<'a>> {
        Some(match self {
            Self::Name => SortValue::Text(&client.name),
            Self::Email => SortValue::Text(&client.email),
            Self::CreatedAt => SortValue::Time(client.created_at),
        })
    }
}

/// Query state of the client grid.
///
/// A client matches the tag filter only when it carries every requested tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientQuery {
    search: String,
    tags: BTreeSet<String>,
    sort: SortSpec<ClientSortKey>,
    page: usize,
    page_size: NonZeroUsize,
}

impl ClientQuery {
    /// Fresh query: no tags, empty search, alphabetical by name.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: String::new(),
            tags: BTreeSet::new(),
            sort: SortSpec::new(ClientSortKey::Name, SortDirection::Ascending),
            page: 1,
            page_size,
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[must_use]
    pub const fn sort(&self) -> SortSpec<ClientSortKey> {
        self.sort
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.page = 1;
        true
    }

    pub fn set_tags<I, S>(&mut self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        if tags == self.tags {
            return false;
        }
        self.tags = tags;
        self.page = 1;
        true
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let changed = self.tags.insert(tag.into());
        if changed {
            self.page = 1;
        }
        changed
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let changed = self.tags.remove(tag);
        if changed {
            self.page = 1;
        }
        changed
    }

    pub fn set_sort(&mut self, key: ClientSortKey, direction: SortDirection) -> bool {
        let sort = SortSpec::new(key, direction);
        if sort == self.sort {
            return false;
        }
        self.sort = sort;
        self.page = 1;
        true
    }

    pub fn toggle_sort(&mut self, key: ClientSortKey) {
        self.sort = self.sort.toggled(key);
        self.page = 1;
    }

    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Run the pipeline: tag filter, search, stable sort, page slice.
    #[must_use]
    pub fn run<'a>(&self, clients: &'a [ClientRecord]) -> Page<&'a ClientRecord> {
        let needle = self.search.to_lowercase();

        let mut matched: Vec<&ClientRecord> = clients
            .iter()
            .filter(|client| client.has_all_tags(&self.tags))
            .filter(|client| {
                needle.is_empty()
                    || contains_folded(&client.name, &needle)
                    || contains_folded(&client.email, &needle)
            })
            .collect();

        sort_by_spec(&mut matched, self.sort);

        tracing::debug!(
            total = clients.len(),
            matched = matched.len(),
            tags = self.tags.len(),
            page = self.page,
            "client query"
        );

        paginate(matched, self.page, self.page_size)
    }
}
