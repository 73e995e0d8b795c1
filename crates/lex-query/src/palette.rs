//! Quick find across cases and clients.

use lex_core::entities::{CaseRecord, ClientRecord};
use serde::Serialize;

use crate::query::contains_folded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitKind {
    Case,
    Client,
}

/// One quick-find result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickFindHit {
    pub kind: HitKind,
    pub id: String,
    /// Case title or client name.
    pub title: String,
    /// Case number or client email.
    pub subtitle: String,
}

/// Cases matching `term` on title or number, then clients matching on name
/// or email, at most `cap` in total. A blank term finds nothing.
#[must_use]
pub fn quick_find(
    cases: &[CaseRecord],
    clients: &[ClientRecord],
    term: &str,
    cap: usize,
) -> Vec<QuickFindHit> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let case_hits = cases
        .iter()
        .filter(|case| contains_folded(&case.title, &needle) || contains_folded(&case.case_number, &needle))
        .map(|case| QuickFindHit {
            kind: HitKind::Case,
            id: case.id.clone(),
            title: case.title.clone(),
            subtitle: case.case_number.clone(),
        });

    let client_hits = clients
        .iter()
        .filter(|client| contains_folded(&client.name, &needle) || contains_folded(&client.email, &needle))
        .map(|client| QuickFindHit {
            kind: HitKind::Client,
            id: client.id.clone(),
            title: client.name.clone(),
            subtitle: client.email.clone(),
        });

    let hits: Vec<QuickFindHit> = case_hits.chain(client_hits).take(cap).collect();
    tracing::debug!(term, hits = hits.len(), "quick find");
    hits
}
