//! A mounted composer: state plus the side effects around it.
//!
//! The session owns the [`ComposerState`], the taxonomy, the autosave store,
//! and the notifier. It restores the body on mount, writes accepted body edits
//! back to the store, and runs the submit round trip.

use forum_client::ClientError;
use forum_core::AUTOSAVE_KEY;
use forum_core::responses::{CreateTopicRequest, CreateTopicResponse};
use forum_core::taxonomy::Taxonomy;

use crate::error::ComposerError;
use crate::notify::{CREATED_MESSAGE, FAILED_MESSAGE, Notice, Notifier};
use crate::publish::TopicPublisher;
use crate::stage::Stage;
use crate::state::{ComposerEvent, ComposerState};
use crate::store::DraftStore;
use crate::validation;

/// Values stamped onto every request that the draft does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSettings {
    pub user_id: u64,
    /// Primary tag used when the draft has none.
    pub default_tag: String,
}

pub struct ComposerSession<S, N> {
    state: ComposerState,
    taxonomy: Taxonomy,
    settings: SubmitSettings,
    store: S,
    notifier: N,
}

impl<S: DraftStore, N: Notifier> ComposerSession<S, N> {
    /// Mount a composer, restoring the autosaved body (empty if absent).
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::Store`] if the store cannot be read.
    pub fn mount(
        taxonomy: Taxonomy,
        settings: SubmitSettings,
        store: S,
        notifier: N,
    ) -> Result<Self, ComposerError> {
        let body = store.get(AUTOSAVE_KEY)?.unwrap_or_default();
        tracing::debug!(restored_chars = body.chars().count(), "composer mounted");
        Ok(Self {
            state: ComposerState::new(body),
            taxonomy,
            settings,
            store,
            notifier,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &ComposerState {
        &self.state
    }

    #[must_use]
    pub const fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Feed one user event through the reducer.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::Store`] if autosaving an accepted body edit
    /// fails. The state transition itself has already happened.
    pub fn dispatch(&mut self, event: ComposerEvent) -> Result<(), ComposerError> {
        let previous_body = self.state.draft().body.clone();
        self.state = std::mem::take(&mut self.state).apply(&self.taxonomy, event);

        let body = &self.state.draft().body;
        if self.state.is_interactive(Stage::Body) && *body != previous_body {
            self.store.set(AUTOSAVE_KEY, body)?;
        }
        Ok(())
    }

    /// Validate the draft and mark a submit as in flight.
    ///
    /// Pair with [`finish_submit`](Self::finish_submit) once the request
    /// resolves. While in flight, further submits are refused.
    ///
    /// # Errors
    ///
    /// - [`ComposerError::SubmitInFlight`] if a submit has not resolved yet
    /// - [`ComposerError::NotReady`] before the body stage
    /// - [`ComposerError::Validation`] if the draft breaks a rule
    pub fn begin_submit(&mut self) -> Result<CreateTopicRequest, ComposerError> {
        if self.state.in_flight() {
            return Err(ComposerError::SubmitInFlight);
        }
        if self.state.stage() < Stage::Body {
            return Err(ComposerError::NotReady {
                stage: self.state.stage(),
            });
        }

        let valid = validation::validate(self.state.draft(), &self.taxonomy)?;
        let request = valid.into_request(self.settings.user_id, &self.settings.default_tag);
        self.dispatch(ComposerEvent::SubmitStarted)?;
        tracing::info!(section = %request.section, tags = request.tags.len(), "submitting topic");
        Ok(request)
    }

    /// Settle an in-flight submit with the API outcome.
    ///
    /// On a confirmed creation the store is wiped and the composer resets.
    /// On any failure the draft and the store are left intact.
    ///
    /// The topic exists once the API confirms it, so a store that cannot be
    /// wiped is logged rather than reported as a failed submit.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::NotInFlight`] when no submit was started,
    /// [`ComposerError::Rejected`] for `success: false`, or
    /// [`ComposerError::Client`] for transport/API failures.
    pub fn finish_submit(
        &mut self,
        outcome: Result<CreateTopicResponse, ClientError>,
    ) -> Result<CreateTopicResponse, ComposerError> {
        if !self.state.in_flight() {
            tracing::warn!("submit outcome arrived with nothing in flight, ignored");
            return Err(ComposerError::NotInFlight);
        }

        let failure = match outcome {
            Ok(answer) if answer.success => {
                if let Err(error) = self.store.clear() {
                    tracing::warn!(%error, "topic created but the autosave store was not wiped");
                }
                self.dispatch(ComposerEvent::SubmitFinished { success: true })?;
                self.notifier.notify(Notice::Success {
                    title: CREATED_MESSAGE.to_string(),
                    detail: answer.message.clone(),
                });
                return Ok(answer);
            }
            Ok(answer) => ComposerError::Rejected {
                message: answer.message,
            },
            Err(error) => ComposerError::Client(error),
        };

        tracing::warn!(error = %failure, "topic submit failed, draft kept");
        self.dispatch(ComposerEvent::SubmitFinished { success: false })?;
        self.notifier.notify(Notice::Error {
            title: FAILED_MESSAGE.to_string(),
            detail: failure.to_string(),
        });
        Err(failure)
    }

    /// Validate, send, and settle in one call. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// Any error from [`begin_submit`](Self::begin_submit) (nothing is sent)
    /// or [`finish_submit`](Self::finish_submit).
    pub async fn submit<P: TopicPublisher>(
        &mut self,
        publisher: &P,
    ) -> Result<CreateTopicResponse, ComposerError> {
        let request = self.begin_submit()?;
        let outcome = publisher.create_topic(&request).await;
        self.finish_submit(outcome)
    }
}
