use forum_core::taxonomy::Taxonomy;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SectionRow<'a> {
    group: &'a str,
    slug: &'a str,
    title: &'a str,
}

/// Handle `forum sections`: the slugs accepted by `forum create --section`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&rows(&ctx.taxonomy), flags.format)
}

fn rows(taxonomy: &Taxonomy) -> Vec<SectionRow<'_>> {
    taxonomy
        .selectable_super_sections()
        .iter()
        .flat_map(|group| {
            group.sections.iter().map(|section| SectionRow {
                group: &group.title,
                slug: &section.slug,
                title: &section.title,
            })
        })
        .collect()
}
