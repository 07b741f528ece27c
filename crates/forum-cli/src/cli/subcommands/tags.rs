use clap::Subcommand;

/// Tag taxonomy commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// All categories and their tags.
    List,
    /// Tags whose label contains the query, case-insensitive.
    Search { query: String },
}
