//! Periodic sync driver.

use std::time::Duration;

use quotesync_engine::Storage;
use tracing::{error, info};

use crate::remote::RemoteQuotes;
use crate::signals::{is_shutdown_requested, ShutdownFlag};
use crate::sync::{SyncOutcome, SyncService};

/// Run sync cycles at a fixed interval until shutdown is requested.
///
/// Cycle failures are logged and the timer continues unaffected.
pub async fn run_sync_loop<R: RemoteQuotes, S: Storage>(
    service: &SyncService<R, S>,
    interval: Duration,
    shutdown: ShutdownFlag,
) {
    info!(interval_secs = interval.as_secs(), "starting sync loop");

    loop {
        if is_shutdown_requested(&shutdown) {
            info!("shutdown requested, exiting sync loop");
            break;
        }

        match service.sync().await {
            Ok(SyncOutcome::Completed(summary)) => {
                if !summary.is_noop() {
                    info!(
                        added = summary.added,
                        updated = summary.updated,
                        conflicts = summary.conflicts,
                        "sync cycle completed with changes"
                    );
                }
            }
            Ok(SyncOutcome::Skipped) => {}
            Err(e) => {
                error!(error = %e, "sync cycle failed");
            }
        }

        // Sleep with early exit on shutdown
        let sleep_step = Duration::from_secs(1);
        let mut slept = Duration::ZERO;
        while slept < interval {
            if is_shutdown_requested(&shutdown) {
                info!("shutdown requested during sleep, exiting");
                return;
            }
            tokio::time::sleep(sleep_step).await;
            slept += sleep_step;
        }
    }
}
