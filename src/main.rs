use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use aurum::cli::{CliArgs, StartupConfig};
use aurum::clipboard::SystemClipboard;
use aurum::config::EditorConfig;
use aurum::model::{AutoSave, EditSession};
use aurum::persistence::{open_or_create, FilePersistence};
use aurum::recovery::{install_panic_hook, RollbackSnapshot, CRASH_EXIT_CODE};
use aurum::theme::{Theme, ThemeLibrary, ThemeProvider};

mod runtime;
mod view;

use runtime::{App, RunOutcome};

fn main() -> ExitCode {
    aurum::tracing::init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let startup = CliArgs::parse().into_config(EditorConfig::load());
    tracing::info!("Starting aurum on {}", startup.path.display());

    let text = open_or_create(&startup.path)
        .with_context(|| format!("Failed to open {}", startup.path.display()))?;

    let snapshot = RollbackSnapshot::capture(&startup.path, &text);
    install_panic_hook(snapshot.clone());

    let session = build_session(&startup, &text);
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(session, startup);

    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop failed: {}", e);
        snapshot.restore_best_effort();
        return Ok(ExitCode::from(CRASH_EXIT_CODE as u8));
    }

    match app.into_outcome() {
        RunOutcome::Clean => Ok(ExitCode::SUCCESS),
        RunOutcome::Crashed(_) => {
            snapshot.restore_best_effort();
            Ok(ExitCode::from(CRASH_EXIT_CODE as u8))
        }
        RunOutcome::Failed(e) => Err(e),
    }
}

fn build_session(startup: &StartupConfig, text: &str) -> EditSession {
    let themes = ThemeLibrary::new();
    let theme = themes.load_theme(&startup.editor.theme).unwrap_or_else(|e| {
        tracing::warn!("Falling back to the default theme: {}", e);
        Theme::default()
    });

    let autosave = if startup.editor.autosave {
        AutoSave::for_document(text)
    } else {
        AutoSave::disabled()
    };

    EditSession::new(text, FilePersistence::new(&startup.path))
        .with_clipboard(SystemClipboard::new())
        .with_theme_provider(themes)
        .with_theme(theme)
        .with_autosave(autosave)
}
