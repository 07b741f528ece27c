use std::path::PathBuf;

use clap::{Args, Subcommand};
use forum_core::enums::Privacy;

use crate::cli::subcommands::{DraftCommands, FeedCommands, TagCommands, TopicCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compose and submit a topic through the five composer stages.
    Create(CreateArgs),
    /// Remote topics.
    Topic {
        #[command(subcommand)]
        action: TopicCommands,
    },
    /// Tag taxonomy.
    Tags {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// List the sections a topic can be filed under.
    Sections,
    /// List the privacy codes accepted by `forum create --privacy`.
    Privacy,
    /// The autosaved topic body.
    Draft {
        #[command(subcommand)]
        action: DraftCommands,
    },
    /// Render feed payloads.
    Feed {
        #[command(subcommand)]
        action: FeedCommands,
    },
    /// Print JSON Schemas of the wire types.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Topic title (10 to 150 characters).
    #[arg(long)]
    pub title: String,
    /// Privacy code (see `forum privacy`).
    #[arg(long, default_value = "0")]
    pub privacy: Privacy,
    /// Section slug (see `forum sections`).
    #[arg(long)]
    pub section: String,
    /// Tag label; repeat for more (max 6).
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Topic body in markdown. Defaults to the autosaved body.
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,
    /// Read the body from a file.
    #[arg(long)]
    pub body_file: Option<PathBuf>,
    /// Validate and print the request without sending it.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list the available names.
    pub name: Option<String>,
}
