use forum_core::enums::Privacy;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PrivacyRow {
    code: u8,
    label: &'static str,
}

/// Handle `forum privacy`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&rows(), flags.format)
}

/// Picker order, not code order.
fn rows() -> Vec<PrivacyRow> {
    Privacy::OPTIONS
        .iter()
        .map(|privacy| PrivacyRow {
            code: privacy.code(),
            label: privacy.label(),
        })
        .collect()
}
