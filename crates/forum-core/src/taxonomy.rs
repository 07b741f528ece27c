//! Section and tag taxonomies.
//!
//! Both are plain data supplied from outside the composer. The crate embeds a
//! default set (`data/taxonomy.toml`); callers may load a replacement file with
//! the same shape.

use std::collections::HashSet;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const EMBEDDED_TAXONOMY: &str = include_str!("../data/taxonomy.toml");

/// A selectable section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub slug: String,
}

/// A grouping header over one or more sections.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuperSection {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A titled group of tag labels.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TagCategory {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Taxonomy {
    #[serde(default)]
    pub super_sections: Vec<SuperSection>,
    #[serde(default)]
    pub tag_categories: Vec<TagCategory>,
}

impl Taxonomy {
    /// The taxonomy bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Taxonomy`] if the embedded data does not parse.
    pub fn embedded() -> Result<Self, CoreError> {
        Self::from_toml_str(EMBEDDED_TAXONOMY)
    }

    /// Parse a taxonomy from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Taxonomy`] on malformed TOML or shape mismatch,
    /// and [`CoreError::Validation`] for empty or duplicate section slugs.
    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        let taxonomy: Self = toml::from_str(text)?;
        taxonomy.check_slugs()?;
        Ok(taxonomy)
    }

    /// Load a taxonomy file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read, or
    /// [`CoreError::Taxonomy`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Super-sections offered as posting targets. The first super-section is
    /// reserved and never selectable.
    #[must_use]
    pub fn selectable_super_sections(&self) -> &[SuperSection] {
        self.super_sections.get(1..).unwrap_or_default()
    }

    /// Whether `slug` names a selectable section.
    #[must_use]
    pub fn is_selectable_section(&self, slug: &str) -> bool {
        self.find_section(slug).is_some()
    }

    /// Look up a selectable section by slug.
    #[must_use]
    pub fn find_section(&self, slug: &str) -> Option<&Section> {
        self.selectable_super_sections()
            .iter()
            .flat_map(|group| group.sections.iter())
            .find(|section| section.slug == slug)
    }

    fn check_slugs(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for section in self.super_sections.iter().flat_map(|group| &group.sections) {
            if section.slug.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "section '{}' has an empty slug",
                    section.title
                )));
            }
            if !seen.insert(section.slug.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate section slug '{}'",
                    section.slug
                )));
            }
        }
        Ok(())
    }

    /// Every candidate tag label, in category order.
    pub fn tag_labels(&self) -> impl Iterator<Item = &str> {
        self.tag_categories
            .iter()
            .flat_map(|category| category.tags.iter().map(String::as_str))
    }
}
