//! The composer as a value: draft + stage + picker, advanced by events.
//!
//! [`ComposerState::apply`] is a pure transition. Events aimed at a control
//! whose stage has not been reached are dropped, so the state never holds a
//! value the user could not have entered.

use forum_core::entities::Draft;
use forum_core::enums::Privacy;
use forum_core::taxonomy::Taxonomy;

use crate::stage::Stage;
use crate::tags::{self, TagKey, TagPicker};
use crate::validation::{TITLE_MIN_CHARS, TitleHint};

/// A discrete user action on the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    TitleChanged(String),
    /// The title input was clicked; from now on the title hint is shown.
    TitleTouched,
    PrivacyChanged(Privacy),
    SectionChanged(String),
    /// The "next" control of the current stage.
    Advance,
    TagInputChanged(String),
    TagInputFocused,
    TagKey(TagKey),
    /// Pointer over the candidate at this flattened index.
    TagHovered(usize),
    TagClicked(usize),
    /// Add the free-typed input text as a tag.
    TagTyped,
    TagRemoved(String),
    BodyChanged(String),
    SubmitStarted,
    SubmitFinished { success: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    draft: Draft,
    stage: Stage,
    picker: TagPicker,
    title_touched: bool,
    in_flight: bool,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl ComposerState {
    /// Fresh composer at the title stage, with `body` restored from autosave.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self {
            draft: Draft::with_body(body),
            stage: Stage::Title,
            picker: TagPicker::default(),
            title_touched: false,
            in_flight: false,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub const fn picker(&self) -> &TagPicker {
        &self.picker
    }

    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether controls of `stage` accept input.
    #[must_use]
    pub fn is_interactive(&self, stage: Stage) -> bool {
        self.stage >= stage
    }

    /// Whether the "next" control of the current stage is enabled.
    #[must_use]
    pub fn advance_enabled(&self) -> bool {
        match self.stage {
            Stage::Title => self.draft.title.trim().chars().count() >= TITLE_MIN_CHARS,
            Stage::Privacy | Stage::Section | Stage::Tags => true,
            Stage::Body => false,
        }
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.stage == Stage::Body && !self.in_flight
    }

    /// Title feedback, once the title input has been touched.
    #[must_use]
    pub fn title_hint(&self) -> Option<TitleHint> {
        self.title_touched
            .then(|| TitleHint::for_title(&self.draft.title))
    }

    /// Candidates currently matching the picker input.
    #[must_use]
    pub fn visible_tags<'a>(&self, taxonomy: &'a Taxonomy) -> Vec<&'a str> {
        tags::visible_tags(taxonomy, self.picker.input())
    }

    /// The highlighted candidate, if any.
    #[must_use]
    pub fn highlighted_tag<'a>(&self, taxonomy: &'a Taxonomy) -> Option<&'a str> {
        let index = self.picker.highlight()?;
        self.visible_tags(taxonomy).get(index).copied()
    }

    /// Apply one event and return the next state.
    #[must_use]
    pub fn apply(mut self, taxonomy: &Taxonomy, event: ComposerEvent) -> Self {
        tracing::trace!(stage = %self.stage, ?event, "composer event");
        match event {
            ComposerEvent::TitleChanged(title) => self.draft.title = title,
            ComposerEvent::TitleTouched => self.title_touched = true,
            ComposerEvent::PrivacyChanged(privacy) if self.is_interactive(Stage::Privacy) => {
                self.draft.privacy = Some(privacy);
            }
            ComposerEvent::SectionChanged(slug) if self.is_interactive(Stage::Section) => {
                self.draft.section = Some(slug);
            }
            ComposerEvent::Advance => self.advance(),
            ComposerEvent::BodyChanged(body) if self.is_interactive(Stage::Body) => {
                self.draft.body = body;
            }
            ComposerEvent::SubmitStarted if self.submit_enabled() => self.in_flight = true,
            ComposerEvent::SubmitFinished { success: true } => {
                tracing::debug!("submit confirmed, resetting composer");
                return Self::default();
            }
            ComposerEvent::SubmitFinished { success: false } => self.in_flight = false,
            event if self.is_interactive(Stage::Tags) => self.apply_tag_event(taxonomy, event),
            ignored => {
                tracing::debug!(stage = %self.stage, ?ignored, "event ignored at current stage");
            }
        }
        self
    }

    fn advance(&mut self) {
        if !self.advance_enabled() {
            return;
        }
        if let Some(next) = self.stage.next() {
            tracing::debug!(from = %self.stage, to = %next, "stage advanced");
            self.stage = next;
        }
    }

    fn apply_tag_event(&mut self, taxonomy: &Taxonomy, event: ComposerEvent) {
        match event {
            ComposerEvent::TagInputChanged(text) => self.picker.set_input(text),
            ComposerEvent::TagInputFocused => self.picker.focus(),
            ComposerEvent::TagKey(TagKey::Down) => {
                let visible = self.visible_tags(taxonomy).len();
                self.picker.move_down(visible);
            }
            ComposerEvent::TagKey(TagKey::Up) => self.picker.move_up(),
            ComposerEvent::TagKey(TagKey::Enter) => {
                if let Some(label) = self.highlighted_tag(taxonomy) {
                    tags::add_tag(&mut self.draft.tags, label);
                    self.picker.clear();
                }
            }
            ComposerEvent::TagHovered(index) => {
                let visible = self.visible_tags(taxonomy).len();
                self.picker.hover(index, visible);
            }
            ComposerEvent::TagClicked(index) => {
                if let Some(label) = self.visible_tags(taxonomy).get(index).copied() {
                    tags::add_tag(&mut self.draft.tags, label);
                }
            }
            ComposerEvent::TagTyped => {
                let typed = self.picker.input().to_string();
                tags::add_tag(&mut self.draft.tags, &typed);
                self.picker.clear();
            }
            ComposerEvent::TagRemoved(label) => tags::remove_tag(&mut self.draft.tags, &label),
            ignored => {
                tracing::debug!(stage = %self.stage, ?ignored, "event ignored at current stage");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::MAX_TAGS;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn taxonomy() -> Taxonomy {
        Taxonomy::from_toml_str(
            r#"
[[super_sections]]
title = "Reservado"

[[super_sections]]
title = "Ciências"

[[super_sections.sections]]
title = "Física"
slug = "fisica"

[[tag_categories]]
title = "Exatas"
tags = ["Matemática", "Física", "Química", "Estatística"]

[[tag_categories]]
title = "Humanas"
tags = ["História", "Filosofia", "Sociologia", "Geografia"]
"#,
        )
        .unwrap()
    }

    fn run(state: ComposerState, events: impl IntoIterator<Item = ComposerEvent>) -> ComposerState {
        let taxonomy = taxonomy();
        events
            .into_iter()
            .fold(state, |state, event| state.apply(&taxonomy, event))
    }

    fn at_stage(stage: Stage) -> ComposerState {
        let mut events = vec![ComposerEvent::TitleChanged("Um título suficiente".into())];
        events.extend(std::iter::repeat_n(
            ComposerEvent::Advance,
            usize::from(stage.index() - 1),
        ));
        let state = run(ComposerState::default(), events);
        assert_eq!(state.stage(), stage);
        state
    }

    #[rstest]
    #[case("", false)]
    #[case("123456789", false)]
    #[case("   123456789   ", false)]
    #[case("1234567890", true)]
    #[case("  Como resolver?  ", true)]
    fn title_gate_follows_trimmed_length(#[case] title: &str, #[case] enabled: bool) {
        let state = run(
            ComposerState::default(),
            [ComposerEvent::TitleChanged(title.into())],
        );
        assert_eq!(state.advance_enabled(), enabled);

        let advanced = run(state, [ComposerEvent::Advance]);
        let expected = if enabled { Stage::Privacy } else { Stage::Title };
        assert_eq!(advanced.stage(), expected);
    }

    #[test]
    fn advance_moves_exactly_one_stage() {
        let state = at_stage(Stage::Privacy);
        let state = run(state, [ComposerEvent::Advance]);
        assert_eq!(state.stage(), Stage::Section);
    }

    #[test]
    fn body_stage_has_no_advance() {
        let state = at_stage(Stage::Body);
        assert!(!state.advance_enabled());
        let state = run(state, [ComposerEvent::Advance]);
        assert_eq!(state.stage(), Stage::Body);
    }

    #[test]
    fn earlier_stage_stays_editable_after_advancing() {
        let state = at_stage(Stage::Section);
        let state = run(state, [ComposerEvent::TitleChanged("curto".into())]);
        assert_eq!(state.draft().title, "curto");
        assert_eq!(state.stage(), Stage::Section);
    }

    #[test]
    fn locked_controls_ignore_input() {
        let state = run(
            ComposerState::default(),
            [
                ComposerEvent::PrivacyChanged(Privacy::Private),
                ComposerEvent::SectionChanged("fisica".into()),
                ComposerEvent::TagInputChanged("fis".into()),
                ComposerEvent::TagClicked(0),
                ComposerEvent::BodyChanged("texto que não deveria entrar".into()),
            ],
        );
        assert_eq!(state.draft().privacy, Some(Privacy::Public));
        assert_eq!(state.draft().section, None);
        assert!(state.draft().tags.is_empty());
        assert_eq!(state.picker().input(), "");
        assert_eq!(state.draft().body, "");
    }

    #[test]
    fn restored_body_survives_until_edited() {
        let state = ComposerState::new("rascunho salvo antes".into());
        assert_eq!(state.draft().body, "rascunho salvo antes");
    }

    #[test]
    fn enter_adds_highlighted_candidate_and_resets_picker() {
        let state = run(
            at_stage(Stage::Tags),
            [
                ComposerEvent::TagInputChanged("mat".into()),
                ComposerEvent::TagKey(TagKey::Down),
                ComposerEvent::TagKey(TagKey::Enter),
            ],
        );
        assert_eq!(state.draft().tags, vec!["Matemática".to_string()]);
        assert_eq!(state.picker().input(), "");
        assert_eq!(state.picker().cursor(), -1);
    }

    #[test]
    fn enter_without_highlight_is_a_no_op() {
        let state = run(
            at_stage(Stage::Tags),
            [
                ComposerEvent::TagInputChanged("mat".into()),
                ComposerEvent::TagKey(TagKey::Enter),
            ],
        );
        assert!(state.draft().tags.is_empty());
        assert_eq!(state.picker().input(), "mat");
    }

    #[test]
    fn hover_then_click_adds_candidate() {
        let state = run(
            at_stage(Stage::Tags),
            [ComposerEvent::TagHovered(5), ComposerEvent::TagClicked(5)],
        );
        assert_eq!(state.picker().highlight(), Some(5));
        assert_eq!(state.draft().tags, vec!["Filosofia".to_string()]);
    }

    #[test]
    fn typed_tag_is_added_trimmed() {
        let state = run(
            at_stage(Stage::Tags),
            [
                ComposerEvent::TagInputChanged("  Robótica ".into()),
                ComposerEvent::TagTyped,
            ],
        );
        assert_eq!(state.draft().tags, vec!["Robótica".to_string()]);
        assert_eq!(state.picker().input(), "");
    }

    #[test]
    fn clicking_every_candidate_stops_at_cap() {
        let events = (0..8).map(ComposerEvent::TagClicked);
        let state = run(at_stage(Stage::Tags), events);
        assert_eq!(state.draft().tags.len(), MAX_TAGS);
    }

    #[test]
    fn remove_then_add_restores_tag() {
        let state = run(
            at_stage(Stage::Tags),
            [
                ComposerEvent::TagClicked(0),
                ComposerEvent::TagClicked(1),
                ComposerEvent::TagRemoved("Matemática".into()),
                ComposerEvent::TagClicked(0),
            ],
        );
        assert_eq!(
            state.draft().tags,
            vec!["Física".to_string(), "Matemática".to_string()]
        );
    }

    #[test]
    fn cursor_stays_in_bounds_for_any_key_sequence() {
        let taxonomy = taxonomy();
        let keys = [
            TagKey::Down,
            TagKey::Down,
            TagKey::Up,
            TagKey::Down,
            TagKey::Down,
            TagKey::Down,
            TagKey::Down,
            TagKey::Down,
            TagKey::Up,
            TagKey::Up,
            TagKey::Up,
            TagKey::Up,
            TagKey::Up,
            TagKey::Up,
            TagKey::Down,
        ];
        for query in ["", "a", "ica", "zzz"] {
            let mut state = run(
                at_stage(Stage::Tags),
                [ComposerEvent::TagInputChanged(query.into())],
            );
            let visible = isize::try_from(state.visible_tags(&taxonomy).len()).unwrap();
            for key in keys {
                state = state.apply(&taxonomy, ComposerEvent::TagKey(key));
                let cursor = state.picker().cursor();
                assert!(
                    (-1..visible).contains(&cursor),
                    "cursor {cursor} out of [-1, {visible}) for query {query:?}"
                );
            }
        }
    }

    #[test]
    fn submit_needs_body_stage_and_no_request_in_flight() {
        let early = run(at_stage(Stage::Tags), [ComposerEvent::SubmitStarted]);
        assert!(!early.in_flight());

        let state = run(at_stage(Stage::Body), [ComposerEvent::SubmitStarted]);
        assert!(state.in_flight());
        assert!(!state.submit_enabled());

        let failed = run(state, [ComposerEvent::SubmitFinished { success: false }]);
        assert!(!failed.in_flight());
        assert_eq!(failed.stage(), Stage::Body);
    }

    #[test]
    fn confirmed_submit_resets_everything() {
        let state = run(
            at_stage(Stage::Body),
            [
                ComposerEvent::BodyChanged("um corpo qualquer com texto".into()),
                ComposerEvent::SubmitStarted,
                ComposerEvent::SubmitFinished { success: true },
            ],
        );
        assert_eq!(state, ComposerState::default());
    }

    #[test]
    fn title_hint_appears_once_touched() {
        let state = run(
            ComposerState::default(),
            [ComposerEvent::TitleChanged("abc".into())],
        );
        assert_eq!(state.title_hint(), None);
        let state = run(state, [ComposerEvent::TitleTouched]);
        assert_eq!(state.title_hint(), Some(TitleHint::NeedsMore(7)));
    }
}
