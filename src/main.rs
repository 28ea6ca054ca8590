use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;

use postdeck::adapters::{FilePreferenceBackend, InMemoryPreferences, ReqwestHttpClient, TerminalHint};
use postdeck::app::App;
use postdeck::cli::{handle_help_command, handle_version_command, parse_args, CliCommand};
use postdeck::config::Config;
use postdeck::logging::init_tracing;
use postdeck::preference::PreferenceStore;
use postdeck::remote::RemoteListClient;
use postdeck::terminal::{setup_panic_hook, TerminalManager};
use postdeck::traits::{ItemSource, PreferenceBackend};
use postdeck::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let overrides = match parse_args(std::env::args())? {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(overrides) => overrides,
    };

    let config = overrides.apply(Config::from_env()?);
    config.validate()?;

    let log_file = init_tracing(&config);
    tracing::info!(
        version = postdeck::cli::VERSION,
        base_url = %config.endpoints.base_url,
        page_size = config.page_size,
        log_file = ?log_file,
        "Starting postdeck"
    );

    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let source: Arc<dyn ItemSource> = Arc::new(RemoteListClient::new(http, config.endpoints.clone()));
    let preferences = PreferenceStore::load(preference_backend(&config), &TerminalHint::new());

    let mut app = App::new(source, config.page_size, preferences);

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;
    let result = run_app(&mut term_manager, &mut app).await;
    term_manager.restore()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "postdeck exited with an error");
    }
    result
}

/// File-backed preferences, or in-memory ones when there is no home directory.
fn preference_backend(config: &Config) -> Box<dyn PreferenceBackend> {
    let file = match &config.preferences_path {
        Some(path) => Some(FilePreferenceBackend::at(path)),
        None => FilePreferenceBackend::new(),
    };

    match file {
        Some(backend) => {
            tracing::debug!(path = %backend.path().display(), "Using preference file");
            Box::new(backend)
        }
        None => {
            tracing::warn!("No home directory; display preference will not persist");
            Box::new(InMemoryPreferences::new())
        }
    }
}

async fn run_app(term_manager: &mut TerminalManager, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let Some(mut message_rx) = app.message_rx.take() else {
        return Err(color_eyre::eyre::eyre!("message receiver already taken"));
    };

    app.start();

    loop {
        if app.needs_redraw {
            term_manager.terminal().draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }
    }
}
