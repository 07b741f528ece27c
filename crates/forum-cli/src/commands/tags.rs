use forum_composer::tags::{FilteredGroup, filter_groups};
use forum_core::taxonomy::Taxonomy;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::context::AppContext;
use crate::output::output;

/// One candidate, flattened with its category and cursor index.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct TagRow<'a> {
    index: usize,
    category: &'a str,
    tag: &'a str,
}

pub fn handle(action: &TagCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = match action {
        TagCommands::List => "",
        TagCommands::Search { query } => query.as_str(),
    };
    output(&rows(&ctx.taxonomy, query), flags.format)
}

fn rows<'a>(taxonomy: &'a Taxonomy, query: &str) -> Vec<TagRow<'a>> {
    filter_groups(taxonomy, query)
        .into_iter()
        .flat_map(|FilteredGroup { title, tags }| tags.into_iter().map(move |tag| (title, tag)))
        .enumerate()
        .map(|(index, (category, tag))| TagRow {
            index,
            category,
            tag,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_flattens_matching_groups() {
        let taxonomy = Taxonomy::embedded().unwrap();
        assert_eq!(
            rows(&taxonomy, "matem"),
            vec![TagRow {
                index: 0,
                category: "Exatas",
                tag: "Matemática",
            }]
        );
    }

    #[test]
    fn empty_query_lists_everything() {
        let taxonomy = Taxonomy::embedded().unwrap();
        assert_eq!(rows(&taxonomy, "").len(), taxonomy.tag_labels().count());
    }
}
