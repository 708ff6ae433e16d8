//! The sync service: one guarded reconcile cycle at a time.
//!
//! A cycle runs fetch -> reconcile -> (optional push) -> commit. The remote
//! fetch is the only suspending step, and the store is first touched after
//! the fetch result is fully available, so a failed or abandoned cycle
//! never leaves a partial commit behind.

use crate::error::Result;
use crate::remote::RemoteQuotes;
use quotesync_engine::{summarize, Quote, Reconciler, Storage, Store, SyncSummary};
use rand::Rng;
use std::path::Path;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Outcome of a sync request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A full cycle ran and committed
    Completed(SyncSummary),
    /// Another cycle was in flight; the request was ignored
    Skipped,
}

/// Drives reconcile cycles against the remote and owns the store.
pub struct SyncService<R, S: Storage> {
    store: Mutex<Store<S>>,
    remote: R,
    reconciler: Reconciler,
    push_enabled: bool,
    /// Single in-flight guard shared by the timer and manual triggers.
    in_flight: Mutex<()>,
}

impl<R: RemoteQuotes, S: Storage> SyncService<R, S> {
    /// Create a service around a loaded store and a remote collaborator.
    pub fn new(store: Store<S>, remote: R, push_enabled: bool) -> Self {
        let reconciler = Reconciler::new(store.policy());
        Self {
            store: Mutex::new(store),
            remote,
            reconciler,
            push_enabled,
            in_flight: Mutex::new(()),
        }
    }

    /// Run one sync cycle, unless one is already in flight.
    ///
    /// Requests arriving while a cycle is in flight are ignored, not
    /// queued; the periodic timer will come around again.
    pub async fn sync(&self) -> Result<SyncOutcome> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("sync already in flight, ignoring request");
            return Ok(SyncOutcome::Skipped);
        };

        // Fetching. The store stays untouched until this has resolved.
        let remote = self.remote.fetch_quotes().await?;

        // Reconciling and committing run under the store lock, so a quote
        // added mid-fetch is part of the snapshot being merged.
        let mut store = self.store.lock().await;
        let result = self.reconciler.reconcile(store.quotes(), &remote);
        let summary = summarize(&result);

        if self.push_enabled {
            // Push before committing: a failed push aborts the cycle with
            // the store unchanged.
            self.remote.push_quotes(&result.merged).await?;
        }

        store.replace_all(result.merged);
        info!(
            added = summary.added,
            updated = summary.updated,
            conflicts = summary.conflicts,
            "sync committed"
        );

        Ok(SyncOutcome::Completed(summary))
    }

    /// Add a user-entered quote, assigning it a stable id.
    pub async fn add_quote(&self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::with_id(Uuid::new_v4().to_string(), text.trim(), category.trim());

        let mut store = self.store.lock().await;
        store.add(quote.clone())?;
        Ok(quote)
    }

    /// A random quote, optionally restricted to a category, recorded as
    /// the last-viewed quote.
    pub async fn random_quote(&self, category: Option<&str>) -> Option<Quote> {
        let mut store = self.store.lock().await;

        let quote = {
            let filtered = store.filtered(category);
            if filtered.is_empty() {
                return None;
            }
            let index = rand::thread_rng().gen_range(0..filtered.len());
            filtered[index].clone()
        };

        store.set_last_viewed(&quote);
        Some(quote)
    }

    /// Export the committed snapshot to a JSON document.
    pub async fn export_file(&self, path: &Path) -> Result<()> {
        let json = { self.store.lock().await.to_json_pretty()? };
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Import a JSON document, merging it into the committed list.
    ///
    /// The document is fed through the reconciler like a remote snapshot
    /// rather than overwriting the store. A malformed document is rejected
    /// wholesale with the store unchanged.
    pub async fn import_file(&self, path: &Path) -> Result<SyncSummary> {
        let text = tokio::fs::read_to_string(path).await?;
        let imported = quotesync_engine::snapshot::from_json(&text)?;

        let mut store = self.store.lock().await;
        let result = self.reconciler.reconcile(store.quotes(), &imported);
        let summary = summarize(&result);
        store.replace_all(result.merged);
        Ok(summary)
    }

    /// Run `f` with read access to the store, for presentation layers.
    pub async fn with_store<T>(&self, f: impl FnOnce(&Store<S>) -> T) -> T {
        f(&*self.store.lock().await)
    }
}
