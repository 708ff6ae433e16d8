//! Reconciliation of local and remote quote snapshots.
//!
//! This is the core of the sync path. Given the committed local snapshot
//! and a freshly fetched remote one, this module classifies each remote
//! quote as new, unchanged, or conflicting, and produces a merged list
//! plus a conflict report.
//!
//! # Algorithm
//!
//! 1. Deduplicate the remote snapshot by identity key (last occurrence wins)
//! 2. Index the local snapshot by identity key
//! 3. Walk local quotes in order; a key also present remotely with differing
//!    content becomes a conflict and the remote version takes its place
//! 4. Append remote quotes with unseen keys, in remote order
//!
//! The merged output contains no duplicate identity keys, for any inputs.

use crate::{IdentityKey, KeyPolicy, Quote, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A pair of quotes sharing an identity key but differing in content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Identity key both versions share
    pub key: IdentityKey,
    /// The version held locally before the merge
    pub local: Quote,
    /// The version received from the remote, which wins
    pub remote: Quote,
}

/// Result of reconciling a local snapshot against a remote one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    /// Merged snapshot: retained locals in original order, then new remote
    /// quotes in remote order. Identity-unique.
    pub merged: Snapshot,
    /// Conflicts detected, each resolved remote-wins
    pub conflicts: Vec<ConflictRecord>,
    /// Identity keys of remote quotes that were new to the local snapshot
    pub added: Vec<IdentityKey>,
}

/// The reconciler compares snapshots and resolves conflicts.
///
/// Resolution policy is remote-wins: when both sides hold a quote with the
/// same identity key but different text or category, the remote version
/// replaces the local one in the merged output. The policy is deterministic;
/// reconciling the merged output against the same remote again yields no
/// further conflicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    policy: KeyPolicy,
}

impl Reconciler {
    /// Create a reconciler with the given identity policy.
    pub fn new(policy: KeyPolicy) -> Self {
        Self { policy }
    }

    /// Reconcile a local snapshot with a remote one.
    pub fn reconcile(&self, local: &[Quote], remote: &[Quote]) -> MergeResult {
        // Remote snapshots may carry internal duplicate keys; the last
        // occurrence wins, keeping the first occurrence's position.
        let mut remote_by_key: HashMap<IdentityKey, Quote> = HashMap::new();
        let mut remote_order: Vec<IdentityKey> = Vec::new();
        for quote in remote {
            let key = self.policy.key_for(quote);
            if remote_by_key.insert(key.clone(), quote.clone()).is_none() {
                remote_order.push(key);
            }
        }

        let mut merged = Vec::with_capacity(local.len() + remote_order.len());
        let mut conflicts = Vec::new();
        let mut seen: HashSet<IdentityKey> = HashSet::with_capacity(local.len());

        // Retained locals first, preserving their relative order.
        for quote in local {
            let key = self.policy.key_for(quote);
            if !seen.insert(key.clone()) {
                // Degenerate local input with duplicate keys; the first
                // occurrence is the committed one.
                continue;
            }
            match remote_by_key.get(&key) {
                Some(remote_quote) if !remote_quote.content_eq(quote) => {
                    conflicts.push(ConflictRecord {
                        key,
                        local: quote.clone(),
                        remote: remote_quote.clone(),
                    });
                    merged.push(remote_quote.clone());
                }
                _ => merged.push(quote.clone()),
            }
        }

        // New remote quotes appended after retained locals, in remote order.
        let mut added = Vec::new();
        for key in remote_order {
            if seen.contains(&key) {
                continue;
            }
            if let Some(quote) = remote_by_key.remove(&key) {
                merged.push(quote);
                added.push(key);
            }
        }

        MergeResult {
            merged,
            conflicts,
            added,
        }
    }
}
