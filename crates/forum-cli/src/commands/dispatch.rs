use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => commands::create::handle(&args, ctx, flags).await,
        Commands::Topic { action } => commands::topic::handle(&action, ctx, flags).await,
        Commands::Tags { action } => commands::tags::handle(&action, ctx, flags),
        Commands::Sections => commands::sections::handle(ctx, flags),
        Commands::Privacy => commands::privacy::handle(flags),
        Commands::Draft { action } => commands::draft::handle(&action, ctx, flags),
        Commands::Feed { action } => commands::feed::handle(&action, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
