//! Deadline aggregation: one chronological, urgency-annotated event stream.
//!
//! Case deadlines and standalone tasks are flattened into [`AgendaEvent`]s
//! tagged with their origin, optionally stripped of past events, sorted by
//! date (stable, so same-day events keep emission order: deadlines in case
//! order, then tasks), banded by urgency, and capped.
//!
//! Each dashboard surface is a parameterization of [`aggregate`]:
//!
//! | preset                                   | tasks | past | banded | cap |
//! |------------------------------------------|-------|------|--------|-----|
//! | [`AggregateOptions::critical_deadlines`] | no    | no   | yes    | 4   |
//! | [`AggregateOptions::briefing`]           | no    | yes  | yes    | 5   |
//! | [`AggregateOptions::calendar`]           | yes   | yes  | no     | -   |

use chrono::NaiveDate;
use lex_config::AgendaConfig;
use lex_core::entities::{CaseRecord, Task};
use lex_core::enums::{Priority, UrgencyBand};
use serde::{Deserialize, Serialize};

/// Inclusive upper bounds, in days from today, of the critical and warning bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    pub critical_within: i64,
    pub warning_within: i64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            critical_within: 3,
            warning_within: 7,
        }
    }
}

impl From<&AgendaConfig> for UrgencyThresholds {
    fn from(config: &AgendaConfig) -> Self {
        Self {
            critical_within: config.critical_within_days,
            warning_within: config.warning_within_days,
        }
    }
}

/// Whole days from `today` until `date`; negative when `date` is in the past.
#[must_use]
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Band for an event due in `days` days.
#[must_use]
pub const fn classify(days: i64, thresholds: UrgencyThresholds) -> UrgencyBand {
    if days < 0 {
        UrgencyBand::Overdue
    } else if days <= thresholds.critical_within {
        UrgencyBand::Critical
    } else if days <= thresholds.warning_within {
        UrgencyBand::Warning
    } else {
        UrgencyBand::Normal
    }
}

/// Short human label for an event due in `days` days.
#[must_use]
pub fn due_label(days: i64) -> String {
    match days {
        d if d < 0 => "overdue".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d => format!("in {d} days"),
    }
}

/// Where an agenda event came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "sourceType", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum EventOrigin {
    Deadline {
        case_id: String,
        case_number: String,
    },
    Task {
        case_id: Option<String>,
        client_id: Option<String>,
        completed: bool,
    },
}

/// A dated item on the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEvent {
    pub id: String,
    #[serde(serialize_with = "lex_core::dates::calendar_date::serialize")]
    pub date: NaiveDate,
    pub description: String,
    pub priority: Priority,
    #[serde(flatten)]
    pub origin: EventOrigin,
    pub days_until: i64,
    /// Absent for unbanded streams such as the calendar grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<UrgencyBand>,
}

impl AgendaEvent {
    #[must_use]
    pub const fn is_deadline(&self) -> bool {
        matches!(self.origin, EventOrigin::Deadline { .. })
    }

    /// Case this event belongs to, if any.
    #[must_use]
    pub fn case_id(&self) -> Option<&str> {
        match &self.origin {
            EventOrigin::Deadline { case_id, .. } => Some(case_id),
            EventOrigin::Task { case_id, .. } => case_id.as_deref(),
        }
    }

    #[must_use]
    pub fn due_label(&self) -> String {
        due_label(self.days_until)
    }
}

/// Parameters of one aggregation call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Emit task events after deadline events.
    pub include_tasks: bool,
    /// Emit tasks already marked completed (only with `include_tasks`).
    pub include_completed_tasks: bool,
    /// Keep events dated before today.
    pub include_past: bool,
    /// Keep only the first `cap` events after sorting.
    pub cap: Option<usize>,
    /// Band events by urgency; `None` leaves `urgency` unset.
    pub thresholds: Option<UrgencyThresholds>,
}

impl AggregateOptions {
    /// Dashboard "critical deadlines" panel.
    #[must_use]
    pub fn critical_deadlines() -> Self {
        Self {
            include_tasks: false,
            include_completed_tasks: false,
            include_past: false,
            cap: Some(4),
            thresholds: Some(UrgencyThresholds::default()),
        }
    }

    /// Sign-in briefing: nearest deadlines, overdue ones included.
    #[must_use]
    pub fn briefing() -> Self {
        Self {
            include_tasks: false,
            include_completed_tasks: false,
            include_past: true,
            cap: Some(5),
            thresholds: Some(UrgencyThresholds::default()),
        }
    }

    /// Calendar: every deadline and task, unbanded.
    #[must_use]
    pub const fn calendar() -> Self {
        Self {
            include_tasks: true,
            include_completed_tasks: true,
            include_past: true,
            cap: None,
            thresholds: None,
        }
    }

    /// Band with `thresholds`, enabling banding if it was off.
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: UrgencyThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    #[must_use]
    pub const fn with_cap(mut self, cap: Option<usize>) -> Self {
        self.cap = cap;
        self
    }
}

/// Flatten, filter, sort, band, and cap deadlines (and optionally tasks).
#[must_use]
pub fn aggregate(
    cases: &[CaseRecord],
    tasks: &[Task],
    today: NaiveDate,
    options: &AggregateOptions,
) -> Vec<AgendaEvent> {
    let deadline_events = cases.iter().flat_map(|case| {
        case.deadlines.iter().map(move |deadline| AgendaEvent {
            id: deadline.id.clone(),
            date: deadline.date,
            description: deadline.description.clone(),
            priority: deadline.priority,
            origin: EventOrigin::Deadline {
                case_id: case.id.clone(),
                case_number: case.case_number.clone(),
            },
            days_until: days_until(deadline.date, today),
            urgency: None,
        })
    });

    let task_events = tasks
        .iter()
        .filter(|_| options.include_tasks)
        .filter(|task| options.include_completed_tasks || !task.completed)
        .map(|task| AgendaEvent {
            id: task.id.clone(),
            date: task.due_date,
            description: task.description.clone(),
            priority: task.priority,
            origin: EventOrigin::Task {
                case_id: task.case_id.clone(),
                client_id: task.client_id.clone(),
                completed: task.completed,
            },
            days_until: days_until(task.due_date, today),
            urgency: None,
        });

    let mut events: Vec<AgendaEvent> = deadline_events
        .chain(task_events)
        .filter(|event| options.include_past || event.days_until >= 0)
        .collect();

    events.sort_by_key(|event| event.date);

    if let Some(cap) = options.cap {
        events.truncate(cap);
    }

    if let Some(thresholds) = options.thresholds {
        for event in &mut events {
            event.urgency = Some(classify(event.days_until, thresholds));
        }
    }

    tracing::debug!(
        events = events.len(),
        include_tasks = options.include_tasks,
        include_past = options.include_past,
        "aggregated agenda"
    );

    events
}
