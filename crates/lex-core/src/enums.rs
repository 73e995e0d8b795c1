//! Workflow stages, classifications, and presentation enums for LexDesk.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` matching the serialized form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Workflow stage of a case.
///
/// Declaration order is workflow order and drives sorting by status:
///
/// ```text
/// initial_analysis → awaiting_documents → filed → pending_requirement
///                  → administrative_appeal → granted
///                                          → denied
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    InitialAnalysis,
    AwaitingDocuments,
    Filed,
    PendingRequirement,
    AdministrativeAppeal,
    Granted,
    Denied,
}

impl CaseStatus {
    /// Stages shown in the status funnel, in workflow order. Denied cases
    /// leave the funnel.
    #[must_use]
    pub const fn funnel_stages() -> &'static [Self] {
        &[
            Self::InitialAnalysis,
            Self::AwaitingDocuments,
            Self::Filed,
            Self::PendingRequirement,
            Self::AdministrativeAppeal,
            Self::Granted,
        ]
    }

    /// Whether the case has reached a final decision.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Granted | Self::Denied)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitialAnalysis => "initial_analysis",
            Self::AwaitingDocuments => "awaiting_documents",
            Self::Filed => "filed",
            Self::PendingRequirement => "pending_requirement",
            Self::AdministrativeAppeal => "administrative_appeal",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CaseType
// ---------------------------------------------------------------------------

/// Venue of a case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    Administrative,
    Judicial,
}

impl CaseType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrative => "administrative",
            Self::Judicial => "judicial",
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a deadline or task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityType
// ---------------------------------------------------------------------------

/// Kind of entry in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    StatusChange,
    NewDocument,
    DeadlineAdded,
    CaseCreated,
    RequirementPending,
    BenefitGranted,
}

impl ActivityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StatusChange => "status_change",
            Self::NewDocument => "new_document",
            Self::DeadlineAdded => "deadline_added",
            Self::CaseCreated => "case_created",
            Self::RequirementPending => "requirement_pending",
            Self::BenefitGranted => "benefit_granted",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UrgencyBand
// ---------------------------------------------------------------------------

/// Coarse urgency classification derived from days until an event is due.
///
/// Ordered from most to least urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyBand {
    Overdue,
    Critical,
    Warning,
    Normal,
}

impl UrgencyBand {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for UrgencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

/// Direction of a list sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
