// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{anyhow, Context, Result};
use application::{CacheFirstRepository, GetNotes, SaveNotes};
use chrono::Utc;
use domain::Note;
use infrastructure::{Config, StubService};
use ports::{NotePresenter, NoteView, NoteViewModel, OutputFormat, TerminalView};
use std::io::Write;
use std::process::ExitCode;
use std::sync::{Arc, Weak};
use tracing::{debug, info};
use uuid::Uuid;
use crate::cli::args::{Args, Command};

/// How a `list` or `add` command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Listed,
    Added(Uuid),
    /// Loading failed and the view has already shown the error
    LoadFailed,
}

pub async fn run(args: Args) -> Result<ExitCode> {
    debug!(?args, "Starting notekeeper with arguments");

    if let Command::InitConfig { path } = &args.command {
        let path = match path {
            Some(path) => path.clone(),
            None => infrastructure::config::default_config_path()
                .context("Could not find config directory")?,
        };
        Config::create_default(&path)?;
        info!(?path, "Wrote default config");
        println!("{}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = resolve_config(&args)?;
    let cache_path = config.cache_path()?;
    debug!(?cache_path, backend = ?config.cache.backend, "Using cache");

    // Initialize infrastructure
    let cache = infrastructure::open_cache(config.cache.backend, &cache_path)?;
    let repository = Arc::new(CacheFirstRepository::new(Arc::new(StubService::new()), cache));

    let (outcome, mut out) = run_command(args.command, repository, std::io::stdout()).await?;
    Ok(match outcome {
        Outcome::Listed => ExitCode::SUCCESS,
        Outcome::Added(id) => {
            writeln!(out, "added {}", id)?;
            ExitCode::SUCCESS
        }
        Outcome::LoadFailed => ExitCode::FAILURE,
    })
}

/// Drive the presenter for `list` or `add`, rendering into `out`.
///
/// A load failure is reported by the view alone and comes back as
/// `Outcome::LoadFailed`, not as an error. The writer is handed back.
pub async fn run_command<W: Write + Send + 'static>(
    command: Command,
    repository: Arc<CacheFirstRepository>,
    out: W,
) -> Result<(Outcome, W)> {
    let format = match command {
        Command::List { json: true } => OutputFormat::Json,
        _ => OutputFormat::Text,
    };
    let view = Arc::new(TerminalView::new(out, format));
    let weak_view: Weak<dyn NoteView> = Arc::downgrade(&view) as Weak<dyn NoteView>;
    let presenter = NotePresenter::new(
        weak_view,
        GetNotes::new(repository.clone()),
        SaveNotes::new(repository),
    );

    presenter.view_did_load().await;

    let outcome = if view.last_error().is_some() {
        Outcome::LoadFailed
    } else if let Command::Add { title, notes, due, complete } = command {
        let note = Note::new(title, complete, due.unwrap_or_else(Utc::now), Some(notes));
        info!(note_id = %note.id(), "Adding note");

        let all = view.add_note(NoteViewModel::from(&note));
        presenter.save_notes(all).await?;
        Outcome::Added(note.id())
    } else {
        Outcome::Listed
    };

    drop(presenter);
    let view = Arc::try_unwrap(view).map_err(|_| anyhow!("Terminal view is still shared"))?;
    Ok((outcome, view.into_output()))
}

/// Config file values with command line overrides applied
pub fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(backend) = args.backend {
        config.cache.backend = backend;
    }
    if let Some(database) = &args.database {
        config.cache.path = database.to_string_lossy().into_owned();
    }
    Ok(config)
}
