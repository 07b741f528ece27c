//! Tag selection: candidate filtering, keyboard cursor, and the tag list rules.
//!
//! Candidates come from the tag taxonomy. Filtering runs per category and the
//! cursor walks the flattened result (category order, then label order).

use forum_core::MAX_TAGS;
use forum_core::taxonomy::Taxonomy;
use serde::Serialize;

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Down,
    Up,
    Enter,
}

/// A category with the labels that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredGroup<'a> {
    pub title: &'a str,
    pub tags: Vec<&'a str>,
}

/// Case-insensitive substring match of `query` in `label`.
#[must_use]
pub fn matches(label: &str, query: &str) -> bool {
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Filter every category independently. Categories left empty are kept so a
/// picker can still render their heading.
#[must_use]
pub fn filter_groups<'a>(taxonomy: &'a Taxonomy, query: &str) -> Vec<FilteredGroup<'a>> {
    taxonomy
        .tag_categories
        .iter()
        .map(|category| FilteredGroup {
            title: &category.title,
            tags: category
                .tags
                .iter()
                .map(String::as_str)
                .filter(|label| matches(label, query))
                .collect(),
        })
        .collect()
}

/// Flattened filtered candidates; the keyboard cursor indexes this list.
#[must_use]
pub fn visible_tags<'a>(taxonomy: &'a Taxonomy, query: &str) -> Vec<&'a str> {
    taxonomy
        .tag_labels()
        .filter(|label| matches(label, query))
        .collect()
}

/// Append `candidate` (trimmed) unless it is empty, already present, or the
/// list is full. Returns whether the list changed.
pub fn add_tag(tags: &mut Vec<String>, candidate: &str) -> bool {
    let label = candidate.trim();
    if label.is_empty() || tags.len() >= MAX_TAGS || tags.iter().any(|tag| tag == label) {
        return false;
    }
    tags.push(label.to_string());
    true
}

/// Drop every exact match of `label`. Idempotent.
pub fn remove_tag(tags: &mut Vec<String>, label: &str) {
    tags.retain(|tag| tag != label);
}

/// Input text and highlighted candidate of the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagPicker {
    input: String,
    highlight: Option<usize>,
}

impl TagPicker {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Highlight as a signed cursor, `-1` meaning no selection.
    #[must_use]
    pub fn cursor(&self) -> isize {
        self.highlight
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(-1)
    }

    /// Replace the input text. Any highlight is dropped.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.highlight = None;
    }

    pub fn focus(&mut self) {
        self.highlight = None;
    }

    /// Move forward, clamped at the last of `visible` candidates.
    pub fn move_down(&mut self, visible: usize) {
        self.highlight = match (visible, self.highlight) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(index)) => Some((index + 1).min(n - 1)),
        };
    }

    /// Move backward, clamped at no selection.
    pub fn move_up(&mut self) {
        self.highlight = match self.highlight {
            None | Some(0) => None,
            Some(index) => Some(index - 1),
        };
    }

    /// Highlight the hovered candidate; out-of-range indices are ignored.
    pub fn hover(&mut self, index: usize, visible: usize) {
        if index < visible {
            self.highlight = Some(index);
        }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.highlight = None;
    }
}
