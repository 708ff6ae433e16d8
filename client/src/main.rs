//! QuoteSync client entry point.
//!
//! Loads configuration, opens the local state file, wires the store to the
//! HTTP remote, and drives the periodic sync loop until shutdown.

use quotesync_client::{scheduler, signals, Config, FileStorage, HttpRemote, SyncService};
use quotesync_engine::{KeyPolicy, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotesync_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!(
        remote = %config.remote_url,
        data = %config.data_path,
        interval_secs = config.sync_interval.as_secs(),
        push = config.push_enabled,
        "Starting QuoteSync client"
    );

    // Load the committed list; missing or corrupt state reads as defaults
    let storage = FileStorage::open(&config.data_path);
    let store = Store::load(storage, KeyPolicy::IdOrText);
    tracing::info!(quotes = store.len(), "Loaded local quote list");

    let remote = HttpRemote::new(&config.remote_url)?;
    let service = SyncService::new(store, remote, config.push_enabled);

    // Greet with a quote, the way the widget does on load
    if let Some(quote) = service.random_quote(None).await {
        tracing::info!(text = %quote.text, category = %quote.category, "Quote of the moment");
    }

    let shutdown = signals::setup_signal_handlers();
    scheduler::run_sync_loop(&service, config.sync_interval, shutdown).await;

    tracing::info!("QuoteSync client stopped");
    Ok(())
}
