use anyhow::Context;
use lex_query::agenda::{AggregateOptions, aggregate};
use lex_query::calendar::{Month, MonthGrid};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AgendaArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexdesk agenda`.
pub fn handle(args: &AgendaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let month = match &args.month {
        Some(raw) => raw.parse::<Month>().context("invalid --month")?,
        None => Month::containing(ctx.today),
    };

    let events = aggregate(
        &ctx.snapshot.cases,
        &ctx.snapshot.tasks,
        ctx.today,
        &AggregateOptions::calendar(),
    );
    let grid = MonthGrid::build(month, &events, ctx.today);
    output(&grid, flags.format)
}
