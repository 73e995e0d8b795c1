use clap::{Args, Subcommand, ValueEnum};
use lex_core::enums::SortDirection;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search, filter, sort, and page the case list.
    Cases(CasesArgs),
    /// Show one case by ID.
    Case(CaseArgs),
    /// Search, tag-filter, sort, and page the client list.
    Clients(ClientsArgs),
    /// Upcoming deadlines for a dashboard panel.
    Deadlines(DeadlinesArgs),
    /// Month calendar of deadlines and tasks.
    Agenda(AgendaArgs),
    /// Headline counts, status funnel, deadlines, tasks, and recent activity.
    Dashboard,
    /// Quick find across cases and clients.
    Find(FindArgs),
}

/// Sort direction as typed on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Asc => Self::Ascending,
            DirectionArg::Desc => Self::Descending,
        }
    }
}

/// Which deadline panel to compute.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum PanelArg {
    /// Upcoming deadlines only, banded, dashboard cap.
    #[default]
    Critical,
    /// Nearest deadlines including overdue ones, banded, briefing cap.
    Briefing,
    /// Every deadline and task, unbanded.
    Calendar,
}

/// Arguments for `lexdesk cases`.
#[derive(Clone, Debug, Args)]
pub struct CasesArgs {
    /// Case-insensitive match on title, case number, or client name.
    #[arg(long)]
    pub search: Option<String>,
    /// Restrict to one case type: administrative, judicial.
    #[arg(long = "type")]
    pub case_type: Option<String>,
    /// Sort column: case-number, title, client-name, case-type, status, last-updated.
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,
    /// 1-based page; out-of-range values are clamped.
    #[arg(long)]
    pub page: Option<usize>,
}

/// Arguments for `lexdesk case`.
#[derive(Clone, Debug, Args)]
pub struct CaseArgs {
    pub id: String,
}

/// Arguments for `lexdesk clients`.
#[derive(Clone, Debug, Args)]
pub struct ClientsArgs {
    /// Case-insensitive match on name or email.
    #[arg(long)]
    pub search: Option<String>,
    /// Require this tag; repeat to require several.
    #[arg(long)]
    pub tag: Vec<String>,
    /// Sort column: name, email, created-at.
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,
    /// 1-based page; out-of-range values are clamped.
    #[arg(long)]
    pub page: Option<usize>,
}

/// Arguments for `lexdesk deadlines`.
#[derive(Clone, Debug, Args)]
pub struct DeadlinesArgs {
    #[arg(long, value_enum, default_value_t)]
    pub panel: PanelArg,
}

/// Arguments for `lexdesk agenda`.
#[derive(Clone, Debug, Args)]
pub struct AgendaArgs {
    /// Month to show as YYYY-MM (defaults to the current month).
    #[arg(long)]
    pub month: Option<String>,
}

/// Arguments for `lexdesk find`.
#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    #[arg(required_unless_present = "live")]
    pub term: Option<String>,
    /// Read terms line by line from stdin and answer each settled term.
    #[arg(long, conflicts_with = "term")]
    pub live: bool,
}
