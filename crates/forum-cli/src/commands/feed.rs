use std::path::Path;

use anyhow::{Context, bail};
use forum_core::entities::FeedItem;
use forum_schema::SchemaRegistry;
use forum_view::card::feed_cards;
use forum_view::metadata::{PageResolution, page_metadata};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum MetaResponse {
    Found { title: String, description: String },
    Redirect { location: String },
}

pub fn handle(action: &FeedCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FeedCommands::Cards(args) => {
            let items = read_feed(&args.file)?;
            output(&feed_cards(&items, chrono::Utc::now()), flags.format)
        }
        FeedCommands::Meta(args) => {
            let items = read_feed(&args.file)?;
            let resolution = page_metadata(&items, args.id, &args.slug);
            if let Some(location) = resolution.location() {
                return output(&MetaResponse::Redirect { location }, flags.format);
            }
            let PageResolution::Found(meta) = resolution else {
                bail!("topic {} not found", args.id);
            };
            let response = MetaResponse::Found {
                title: meta.title,
                description: meta.description,
            };
            output(&response, flags.format)
        }
    }
}

fn read_feed(path: &Path) -> anyhow::Result<Vec<FeedItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read feed file {}", path.display()))?;
    parse_feed(&text).with_context(|| format!("invalid feed in {}", path.display()))
}

/// Every element is checked against the `feed_item` schema before decoding,
/// so a bad payload names the offending item.
fn parse_feed(text: &str) -> anyhow::Result<Vec<FeedItem>> {
    let value: serde_json::Value = serde_json::from_str(text).context("not JSON")?;
    let serde_json::Value::Array(elements) = value else {
        bail!("expected a JSON array of feed items");
    };
    let registry = SchemaRegistry::new();
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            registry
                .validate("feed_item", &element)
                .with_context(|| format!("feed item #{index}"))?;
            serde_json::from_value(element).with_context(|| format!("feed item #{index}"))
        })
        .collect()
}
