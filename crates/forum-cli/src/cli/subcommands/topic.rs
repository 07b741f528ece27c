use clap::{Args, Subcommand};

/// Topic commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TopicCommands {
    /// Fetch a topic by id.
    Get(TopicGetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TopicGetArgs {
    /// Topic id.
    pub id: String,
    /// Print the API record instead of the display view.
    #[arg(long)]
    pub record: bool,
}
