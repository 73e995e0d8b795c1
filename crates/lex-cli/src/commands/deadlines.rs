use lex_config::AgendaConfig;
use lex_query::agenda::{AggregateOptions, UrgencyThresholds, aggregate};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{DeadlinesArgs, PanelArg};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexdesk deadlines`.
pub fn handle(args: &DeadlinesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = panel_options(args.panel, &ctx.config.agenda, flags.limit);
    let events = aggregate(&ctx.snapshot.cases, &ctx.snapshot.tasks, ctx.today, &options);
    output(&events, flags.format)
}

/// Preset for `panel` with configured thresholds and caps; `--limit` wins.
fn panel_options(panel: PanelArg, config: &AgendaConfig, limit: Option<u32>) -> AggregateOptions {
    let thresholds = UrgencyThresholds::from(config);
    match panel {
        PanelArg::Critical => AggregateOptions::critical_deadlines()
            .with_thresholds(thresholds)
            .with_cap(Some(effective_limit(limit, config.critical_panel_cap))),
        PanelArg::Briefing => AggregateOptions::briefing()
            .with_thresholds(thresholds)
            .with_cap(Some(effective_limit(limit, config.briefing_cap))),
        PanelArg::Calendar => AggregateOptions::calendar()
            .with_cap(limit.map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))),
    }
}
