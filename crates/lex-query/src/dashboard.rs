//! Dashboard panels: status funnel, headline counts, tasks, recent activity.

use chrono::{Datelike, NaiveDate, TimeZone};
use lex_config::AgendaConfig;
use lex_core::entities::{Activity, CaseRecord, Task};
use lex_core::enums::CaseStatus;
use lex_core::snapshot::Snapshot;
use serde::Serialize;

use crate::agenda::{AgendaEvent, AggregateOptions, UrgencyThresholds, aggregate, days_until};

/// Number of cases at one funnel stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: CaseStatus,
    pub count: usize,
}

/// Case counts per funnel stage, in workflow order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusFunnel {
    pub stages: Vec<StatusCount>,
    /// Largest stage count, at least 1, for bar scaling.
    pub max: usize,
}

/// Every funnel stage with its case count, zero when empty.
#[must_use]
pub fn status_funnel(cases: &[CaseRecord]) -> StatusFunnel {
    let stages: Vec<StatusCount> = CaseStatus::funnel_stages()
        .iter()
        .map(|&status| StatusCount {
            status,
            count: cases.iter().filter(|case| case.status == status).count(),
        })
        .collect();
    let max = stages.iter().map(|stage| stage.count).max().unwrap_or(0).max(1);
    StatusFunnel { stages, max }
}

/// Headline counters at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    /// Cases without a final decision.
    pub active_cases: usize,
    /// Granted cases last updated in today's month, in the caller's timezone.
    pub granted_this_month: usize,
    /// Deadlines due between today and `warning_within` days out, inclusive.
    pub deadlines_within_week: usize,
}

/// `tz` is the zone `today` was taken in; `last_updated` is shifted into it
/// before its month is compared.
#[must_use]
pub fn headline<Tz: TimeZone>(cases: &[CaseRecord], today: NaiveDate, warning_within: i64, tz: &Tz) -> Headline {
    let active_cases = cases.iter().filter(|case| !case.status.is_closed()).count();

    let granted_this_month = cases
        .iter()
        .filter(|case| case.status == CaseStatus::Granted)
        .filter(|case| {
            let updated = case.last_updated.with_timezone(tz).date_naive();
            updated.year() == today.year() && updated.month() == today.month()
        })
        .count();

    let deadlines_within_week = cases
        .iter()
        .flat_map(|case| &case.deadlines)
        .map(|deadline| days_until(deadline.date, today))
        .filter(|days| (0..=warning_within).contains(days))
        .count();

    Headline {
        active_cases,
        granted_this_month,
        deadlines_within_week,
    }
}

/// Incomplete tasks first, then completed ones, each group in input order.
#[must_use]
pub fn task_panel(tasks: &[Task], cap: usize) -> Vec<&Task> {
    let mut panel: Vec<&Task> = tasks.iter().collect();
    panel.sort_by_key(|task| task.completed);
    panel.truncate(cap);
    panel
}

/// Most recent entries first.
#[must_use]
pub fn recent_activity(activity: &[Activity], cap: usize) -> Vec<&Activity> {
    let mut recent: Vec<&Activity> = activity.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(cap);
    recent
}

/// All dashboard panels for one snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub headline: Headline,
    pub funnel: StatusFunnel,
    pub critical_deadlines: Vec<AgendaEvent>,
    pub tasks: Vec<&'a Task>,
    pub recent_activity: Vec<&'a Activity>,
}

impl<'a> Dashboard<'a> {
    #[must_use]
    pub fn build<Tz: TimeZone>(snapshot: &'a Snapshot, today: NaiveDate, config: &AgendaConfig, tz: &Tz) -> Self {
        let options = AggregateOptions::critical_deadlines()
            .with_thresholds(UrgencyThresholds::from(config))
            .with_cap(Some(config.critical_panel_cap));

        Self {
            headline: headline(&snapshot.cases, today, config.warning_within_days, tz),
            funnel: status_funnel(&snapshot.cases),
            critical_deadlines: aggregate(&snapshot.cases, &snapshot.tasks, today, &options),
            tasks: task_panel(&snapshot.tasks, config.task_panel_cap),
            recent_activity: recent_activity(&snapshot.activity, config.activity_cap),
        }
    }
}
