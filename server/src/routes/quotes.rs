//! Quote list endpoints.
//!
//! `GET /quotes` serves the canonical snapshot. `POST /quotes` takes a full
//! snapshot from a client and merges it into the canonical list with the
//! pushed side as remote, so a push and a subsequent fetch converge on the
//! same merged list the client computed.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use quotesync_engine::{summarize, Snapshot, SyncSummary};

use crate::error::Result;
use crate::AppState;

/// Create quote routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/quotes", get(list_quotes).post(merge_quotes))
}

/// GET /quotes - the canonical quote snapshot.
async fn list_quotes(State(state): State<AppState>) -> Json<Snapshot> {
    let quotes = state.quotes.read().await;
    Json(quotes.clone())
}

/// POST /quotes - merge a pushed snapshot into the canonical list.
///
/// Every pushed quote is validated first; a validation failure rejects the
/// whole request with the list unchanged.
async fn merge_quotes(
    State(state): State<AppState>,
    Json(pushed): Json<Snapshot>,
) -> Result<Json<SyncSummary>> {
    for quote in &pushed {
        quote.validate()?;
    }

    let mut quotes = state.quotes.write().await;
    let result = state.reconciler.reconcile(&quotes, &pushed);
    let summary = summarize(&result);
    *quotes = result.merged;

    tracing::info!(
        added = summary.added,
        updated = summary.updated,
        conflicts = summary.conflicts,
        total = quotes.len(),
        "merged pushed snapshot"
    );

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotesync_engine::{Quote, Reconciler};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn state_with(quotes: Snapshot) -> AppState {
        AppState {
            quotes: Arc::new(RwLock::new(quotes)),
            reconciler: Reconciler::default(),
        }
    }

    #[tokio::test]
    async fn list_serves_the_canonical_snapshot() {
        let seed = vec![Quote::with_id("q-1", "Ship it.", "work")];
        let state = state_with(seed.clone());

        let Json(listed) = list_quotes(State(state)).await;
        assert_eq!(listed, seed);
    }

    #[tokio::test]
    async fn push_merges_and_reports_the_outcome() {
        let state = state_with(vec![Quote::with_id("q-1", "Ship it.", "work")]);

        let pushed = vec![
            Quote::with_id("q-1", "Ship it.", "process"),
            Quote::with_id("q-2", "Less is more.", "design"),
        ];
        let Json(summary) = merge_quotes(State(state.clone()), Json(pushed))
            .await
            .unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(summary.conflicts, 1);

        let quotes = state.quotes.read().await;
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].category, "process"); // pushed side won
    }

    #[tokio::test]
    async fn invalid_push_leaves_the_list_unchanged() {
        let seed = vec![Quote::with_id("q-1", "Ship it.", "work")];
        let state = state_with(seed.clone());

        let pushed = vec![Quote::new("   ", "work")];
        let result = merge_quotes(State(state.clone()), Json(pushed)).await;
        assert!(result.is_err());

        let quotes = state.quotes.read().await;
        assert_eq!(*quotes, seed);
    }

    #[tokio::test]
    async fn push_then_list_round_trips() {
        let state = state_with(Vec::new());

        let pushed = vec![Quote::with_id("q-1", "Ship it.", "work")];
        merge_quotes(State(state.clone()), Json(pushed.clone()))
            .await
            .unwrap();

        let Json(listed) = list_quotes(State(state)).await;
        assert_eq!(listed, pushed);
    }
}
