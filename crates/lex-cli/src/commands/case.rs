use crate::cli::GlobalFlags;
use crate::cli::root_commands::CaseArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexdesk case`.
pub fn handle(args: &CaseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let case = ctx.snapshot.case(&args.id)?;
    output(case, flags.format)
}
