//! # forum-schema
//!
//! JSON Schema generation, validation, and registry for the forum wire types.
//!
//! Wire types are defined in `forum-core` with `#[derive(JsonSchema)]`. This
//! crate collects their schemas by name, validates arbitrary JSON against
//! them, and backs the `forum schema` command.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
