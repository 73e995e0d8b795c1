use lex_query::dashboard::Dashboard;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexdesk dashboard`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dashboard = Dashboard::build(&ctx.snapshot, ctx.today, &ctx.config.agenda, &chrono::Local);
    output(&dashboard, flags.format)
}
