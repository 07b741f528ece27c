use thiserror::Error;

/// Failures looking up or checking against a named schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema named '{0}'")]
    Unknown(String),

    /// The instance broke at least one rule; one message per violation.
    #[error("does not match '{name}': {}", violations.join("; "))]
    Mismatch {
        name: String,
        violations: Vec<String>,
    },

    /// `jsonschema` refused a generated schema.
    #[error("schema '{name}' does not compile: {reason}")]
    Uncompilable { name: String, reason: String },
}
