//! # forum-core
//!
//! Core types shared across the forum client crates.
//!
//! This crate provides:
//! - The topic [`Draft`](entities::Draft) edited by the composer
//! - Topic and feed-item records as returned by the forum API
//! - Request/response envelopes for the HTTP boundary
//! - The [`Privacy`](enums::Privacy) code enum
//! - Section and tag taxonomies, with an embedded default set
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod taxonomy;

/// Local storage key holding the autosaved topic body.
pub const AUTOSAVE_KEY: &str = "editor-auto-saved-content";

/// Maximum number of tags a topic may carry.
pub const MAX_TAGS: usize = 6;
