use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use frate::cli::Cli;
use frate::config::{Config, ConfigStore};
use frate::logging::init_tracing;
use frate::omdb::OmdbClient;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.config_path();

    let mut config = Config::load_from(&path)?;
    cli.apply(&mut config);
    config.validate()?;
    let api_key = config.require_api_key()?.to_string();

    let log_path = config.log_path();
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let client = OmdbClient::new(&config.api, api_key)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let store = ConfigStore::new(config, path).with_overrides(cli.overrides());
    frate::ui::runtime::run(store, client, runtime.handle(), cli.query)?;

    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
