//! Workflow stages of the composer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of the linear composer workflow.
///
/// ```text
/// title → privacy → section → tags → body
/// ```
///
/// Ordering follows the workflow, so `stage >= Stage::Tags` reads as "tags
/// reached".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Title,
    Privacy,
    Section,
    Tags,
    Body,
}

impl Stage {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Privacy,
        Self::Section,
        Self::Tags,
        Self::Body,
    ];

    /// 1-based position in the workflow.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Title => 1,
            Self::Privacy => 2,
            Self::Section => 3,
            Self::Tags => 4,
            Self::Body => 5,
        }
    }

    /// The stage after this one. `Body` is last.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Title => Some(Self::Privacy),
            Self::Privacy => Some(Self::Section),
            Self::Section => Some(Self::Tags),
            Self::Tags => Some(Self::Body),
            Self::Body => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Título",
            Self::Privacy => "Privacidade",
            Self::Section => "Seção",
            Self::Tags => "Tags (opcional)",
            Self::Body => "Corpo",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_the_workflow_once() {
        let mut walked = vec![Stage::Title];
        while let Some(next) = walked.last().and_then(|s| s.next()) {
            walked.push(next);
        }
        assert_eq!(walked, Stage::ALL.to_vec());
    }

    #[test]
    fn indices_are_one_based_and_ordered() {
        let indices: Vec<u8> = Stage::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert!(Stage::Body > Stage::Tags);
    }
}
