use clap::Subcommand;

/// Autosave store commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DraftCommands {
    /// Print the autosaved body and where it is stored.
    Show,
    /// Discard the autosaved body.
    Clear,
}
