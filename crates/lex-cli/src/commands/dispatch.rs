use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Cases(args) => commands::cases::handle(&args, ctx, flags),
        Commands::Case(args) => commands::case::handle(&args, ctx, flags),
        Commands::Clients(args) => commands::clients::handle(&args, ctx, flags),
        Commands::Deadlines(args) => commands::deadlines::handle(&args, ctx, flags),
        Commands::Agenda(args) => commands::agenda::handle(&args, ctx, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::Find(args) => commands::find::handle(&args, ctx, flags).await,
    }
}
