use crate::config::ConfigStore;
use crate::fetch::spawn_worker;
use crate::omdb::OmdbClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::search::SearchIntent;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the UI loop on the current thread until the user quits.
///
/// Network work runs on `handle`; its results come back through the same
/// event channel as key presses, so every state change happens here.
pub fn run(
    config: ConfigStore,
    client: OmdbClient,
    handle: &Handle,
    initial_query: Option<String>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.get().ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config.clone());

    tracing::info!(base_url = client.base_url(), "Starting UI");
    app.attach_commands(spawn_worker(handle, client, config, events.sender()));
    if let Some(query) = initial_query {
        app.dispatch_search(SearchIntent::SetQuery { query });
    }

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

/// Route one event into the app.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick | AppEvent::Resize(..) => {}
        AppEvent::SearchSettled { seq, outcome } => app.on_search_settled(seq, outcome),
        AppEvent::DetailsSettled { imdb_id, outcome } => app.on_details_settled(imdb_id, outcome),
        AppEvent::ConfigReload => app.on_config_reload(),
        AppEvent::ConfigError(message) => app.on_config_error(message),
    }
}
