use anyhow::{Context, bail};
use forum_composer::validation::{self, TitleHint};
use forum_composer::{
    ComposerEvent, ComposerSession, DraftStore, MemoryStore, Notice, Notifier, Stage,
};
use forum_core::AUTOSAVE_KEY;
use forum_core::responses::CreateTopicRequest;
use forum_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Prints composer notices on stderr, keeping stdout for the response.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        if !ui::prefs().notices {
            return;
        }
        match notice {
            Notice::Success { title, .. } => eprintln!("{title}"),
            Notice::Error { title, detail } => eprintln!("{title} ({detail})"),
        }
    }
}

/// Handle `forum create`.
pub async fn handle(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = read_body(args)?;

    if args.dry_run {
        let mut session = ComposerSession::mount(
            ctx.taxonomy.clone(),
            ctx.submit_settings(),
            dry_run_store(&ctx.store()?)?,
            TerminalNotifier,
        )?;
        fill(&mut session, args, body)?;
        let request = preview(&session, ctx)?;
        return output(&request, flags.format);
    }

    let mut session = ComposerSession::mount(
        ctx.taxonomy.clone(),
        ctx.submit_settings(),
        ctx.store()?,
        TerminalNotifier,
    )?;
    fill(&mut session, args, body)?;
    let client = ctx.client()?;
    let response = session.submit(&client).await?;
    output(&response, flags.format)
}

fn read_body(args: &CreateArgs) -> anyhow::Result<Option<String>> {
    if let Some(path) = &args.body_file {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read body from {}", path.display()))?;
        return Ok(Some(body));
    }
    Ok(args.body.clone())
}

/// In-memory copy of the autosaved body; a dry run never writes the real store.
fn dry_run_store(file: &impl DraftStore) -> anyhow::Result<MemoryStore> {
    let mut store = MemoryStore::default();
    if let Some(body) = file.get(AUTOSAVE_KEY)? {
        store.set(AUTOSAVE_KEY, &body)?;
    }
    Ok(store)
}

/// Walk the composer through all five stages with the given field values.
///
/// With no `body`, the autosaved body restored on mount is kept.
fn fill<S: DraftStore, N: Notifier>(
    session: &mut ComposerSession<S, N>,
    args: &CreateArgs,
    body: Option<String>,
) -> anyhow::Result<()> {
    session.dispatch(ComposerEvent::TitleTouched)?;
    session.dispatch(ComposerEvent::TitleChanged(args.title.clone()))?;
    advance(session)?;

    session.dispatch(ComposerEvent::PrivacyChanged(args.privacy))?;
    advance(session)?;

    session.dispatch(ComposerEvent::SectionChanged(args.section.clone()))?;
    advance(session)?;

    for tag in &args.tags {
        let before = session.state().draft().tags.len();
        session.dispatch(ComposerEvent::TagInputChanged(tag.clone()))?;
        session.dispatch(ComposerEvent::TagTyped)?;
        if session.state().draft().tags.len() == before {
            tracing::warn!(%tag, "tag skipped (empty, duplicate, or tag limit reached)");
        }
    }
    advance(session)?;

    if let Some(body) = body {
        session.dispatch(ComposerEvent::BodyChanged(body))?;
    }
    Ok(())
}

fn advance<S: DraftStore, N: Notifier>(session: &mut ComposerSession<S, N>) -> anyhow::Result<()> {
    let from = session.state().stage();
    session.dispatch(ComposerEvent::Advance)?;
    if session.state().stage() == from && from != Stage::Body {
        let hint = session
            .state()
            .title_hint()
            .unwrap_or_else(|| TitleHint::for_title(&session.state().draft().title));
        bail!("cannot leave stage {from} ({}): {}", from.label(), hint.message());
    }
    Ok(())
}

/// The request a submit would send, without sending it.
fn preview<S: DraftStore, N: Notifier>(
    session: &ComposerSession<S, N>,
    ctx: &AppContext,
) -> anyhow::Result<CreateTopicRequest> {
    let settings = ctx.submit_settings();
    let valid = validation::validate(session.state().draft(), session.taxonomy())?;
    let request = valid.into_request(settings.user_id, &settings.default_tag);
    SchemaRegistry::new()
        .validate("create_topic_request", &serde_json::to_value(&request)?)
        .context("request does not match the API contract")?;
    Ok(request)
}
