//! Composer error types.

use forum_client::ClientError;
use thiserror::Error;

use crate::stage::Stage;
use crate::store::StoreError;
use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum ComposerError {
    /// The draft failed the submit rules.
    #[error("invalid draft: {0}")]
    Validation(#[from] ValidationErrors),

    /// Submit was requested before the body stage.
    #[error("composer is at stage {stage}, submit needs stage 5")]
    NotReady { stage: Stage },

    /// A previous submit has not resolved yet.
    #[error("a submit is already in flight")]
    SubmitInFlight,

    /// An outcome was settled without a matching `begin_submit`.
    #[error("no submit is in flight")]
    NotInFlight,

    /// The API answered `success: false`.
    #[error("topic rejected: {message}")]
    Rejected { message: String },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
