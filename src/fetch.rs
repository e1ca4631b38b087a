//! Background worker that performs OMDb requests for the UI.
//!
//! The UI thread owns all state. It sends [`UiCommand`]s here and receives
//! the outcome back as [`AppEvent`]s, which it applies through the reducers.
//! Requests are not cancelled; superseded answers are dropped by the search
//! reducer using the request sequence.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::ConfigStore;
use crate::omdb::OmdbClient;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

const COMMAND_QUEUE: usize = 64;

/// Spawn the worker on `handle` and return the sender the app talks to.
pub fn spawn_worker(
    handle: &Handle,
    client: OmdbClient,
    config: ConfigStore,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);

    handle.spawn(async move {
        let mut client = client;
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::Search { seq, query } => {
                    tokio::spawn(run_search(client.clone(), seq, query, events.clone()));
                }
                UiCommand::FetchDetails { imdb_id } => {
                    tokio::spawn(run_details(client.clone(), imdb_id, events.clone()));
                }
                UiCommand::ReloadConfig => {
                    let event = match reload_client(&config) {
                        Ok(reloaded) => {
                            tracing::info!(path = %config.path().display(), "Config reloaded");
                            client = reloaded;
                            AppEvent::ConfigReload
                        }
                        Err(err) => AppEvent::ConfigError(format!("{err:#}")),
                    };
                    if events.send(event).is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Fetch worker stopped");
    });

    tx
}

async fn run_search(client: OmdbClient, seq: u64, query: String, events: Sender<AppEvent>) {
    let outcome = match client.search(&query).await {
        Ok(results) => {
            tracing::debug!(seq, query = %query, count = results.len(), "Search settled");
            Ok(results)
        }
        Err(err) => {
            tracing::warn!(seq, query = %query, error = ?err, "Search failed");
            Err(err.user_message())
        }
    };
    let _ = events.send(AppEvent::SearchSettled { seq, outcome });
}

async fn run_details(client: OmdbClient, imdb_id: String, events: Sender<AppEvent>) {
    let outcome = match client.details(&imdb_id).await {
        Ok(details) => Ok(details),
        Err(err) => {
            tracing::warn!(imdb_id = %imdb_id, error = ?err, "Details lookup failed");
            Err(err.user_message())
        }
    };
    let _ = events.send(AppEvent::DetailsSettled { imdb_id, outcome });
}

fn reload_client(config: &ConfigStore) -> anyhow::Result<OmdbClient> {
    config.reload()?;
    let current = config.get();
    let api_key = current.require_api_key()?;
    Ok(OmdbClient::new(&current.api, api_key)?)
}
