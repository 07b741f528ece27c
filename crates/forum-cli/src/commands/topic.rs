use forum_view::topic::TopicView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TopicCommands;
use crate::cli::subcommands::topic::TopicGetArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(action: &TopicCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TopicCommands::Get(args) => get(args, ctx, flags).await,
    }
}

async fn get(args: &TopicGetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let topic = ctx.client()?.fetch_topic(&args.id).await?;
    if args.record {
        return output(&topic, flags.format);
    }
    output(&TopicView::from_topic(&topic, chrono::Utc::now()), flags.format)
}
