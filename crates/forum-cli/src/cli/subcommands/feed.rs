use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Feed rendering commands. Input is a JSON array of feed items.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedCommands {
    /// Render feed cards.
    Cards(FeedCardsArgs),
    /// Resolve page metadata for `/topico/{id}/{slug}`.
    Meta(FeedMetaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FeedCardsArgs {
    /// Feed JSON file.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct FeedMetaArgs {
    /// Feed JSON file.
    pub file: PathBuf,
    pub id: u64,
    pub slug: String,
}
