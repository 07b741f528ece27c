//! # forum-composer
//!
//! The staged topic composer.
//!
//! A topic is written in five stages (title → privacy → section → tags →
//! body). Each stage's controls unlock once the previous one is advanced, and
//! the stage never moves backwards. The pieces:
//!
//! - [`ComposerState`]: immutable draft + stage value with a pure
//!   `apply(event)` transition
//! - [`tags`]: candidate filtering, keyboard cursor, tag list rules (max 6)
//! - [`validation`]: the submit rules and title feedback
//! - [`DraftStore`]: local persistence backing the body autosave
//! - [`ComposerSession`]: mount/dispatch/submit around a state, with an
//!   in-flight guard and store wipe on confirmed creation only

pub mod notify;
pub mod publish;
pub mod stage;
pub mod state;
pub mod store;
pub mod tags;
pub mod validation;

mod error;
mod session;

pub use error::ComposerError;
pub use notify::{Notice, Notifier};
pub use publish::TopicPublisher;
pub use session::{ComposerSession, SubmitSettings};
pub use stage::Stage;
pub use state::{ComposerEvent, ComposerState};
pub use store::{DraftStore, FileStore, MemoryStore, StoreError};
