use forum_composer::{DraftStore, FileStore};
use forum_core::AUTOSAVE_KEY;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DraftCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct DraftResponse {
    path: String,
    body: Option<String>,
}

pub fn handle(action: &DraftCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut store = ctx.store()?;
    let response = match action {
        DraftCommands::Show => show(&store)?,
        DraftCommands::Clear => clear(&mut store)?,
    };
    output(&response, flags.format)
}

fn show(store: &FileStore) -> anyhow::Result<DraftResponse> {
    Ok(DraftResponse {
        path: store.path().display().to_string(),
        body: store.get(AUTOSAVE_KEY)?,
    })
}

fn clear(store: &mut FileStore) -> anyhow::Result<DraftResponse> {
    store.remove(AUTOSAVE_KEY)?;
    tracing::info!(path = %store.path().display(), "autosaved body discarded");
    show(store)
}
