//! Deadline and dashboard panel configuration.

use serde::{Deserialize, Serialize};

const fn default_critical_within_days() -> i64 {
    3
}

const fn default_warning_within_days() -> i64 {
    7
}

const fn default_critical_panel_cap() -> usize {
    4
}

const fn default_briefing_cap() -> usize {
    5
}

const fn default_task_panel_cap() -> usize {
    4
}

const fn default_activity_cap() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgendaConfig {
    /// Events due within this many days (inclusive) are critical.
    #[serde(default = "default_critical_within_days")]
    pub critical_within_days: i64,

    /// Events due within this many days (inclusive) but past the critical
    /// window are a warning.
    #[serde(default = "default_warning_within_days")]
    pub warning_within_days: i64,

    /// Events shown in the dashboard's critical deadlines panel.
    #[serde(default = "default_critical_panel_cap")]
    pub critical_panel_cap: usize,

    /// Events shown in the sign-in briefing.
    #[serde(default = "default_briefing_cap")]
    pub briefing_cap: usize,

    /// Tasks shown in the dashboard task panel.
    #[serde(default = "default_task_panel_cap")]
    pub task_panel_cap: usize,

    /// Entries shown in the recent activity panel.
    #[serde(default = "default_activity_cap")]
    pub activity_cap: usize,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            critical_within_days: default_critical_within_days(),
            warning_within_days: default_warning_within_days(),
            critical_panel_cap: default_critical_panel_cap(),
            briefing_cap: default_briefing_cap(),
            task_panel_cap: default_task_panel_cap(),
            activity_cap: default_activity_cap(),
        }
    }
}
