//! # QuoteSync Engine
//!
//! A deterministic reconciliation engine for locally managed quote lists.
//!
//! This crate provides the core logic for keeping a local quote list in step
//! with a remote one. It handles the quote records themselves, the store that
//! owns the committed list, snapshot comparison, conflict detection, and
//! merge-outcome reporting - with guaranteed determinism: the same inputs
//! always produce the same merged output.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of files, network, or platform.
//!   Persistence happens through the [`Storage`] collaborator the host
//!   injects; the remote snapshot arrives as a plain list.
//! - **Deterministic**: same inputs always produce same outputs
//! - **Testable**: pure logic, no mocks needed
//! - **Portable**: runs anywhere Rust runs
//!
//! ## Core Concepts
//!
//! ### Quotes
//!
//! Data is stored as [`Quote`] records: an optional stable id, the quote
//! text, and a category. Identity during reconciliation is derived by a
//! [`KeyPolicy`]: by id when present, falling back to exact text equality.
//!
//! ### Store
//!
//! The [`Store`] owns the authoritative in-memory list and persists it
//! through the injected [`Storage`] collaborator after every mutation.
//! Missing or corrupt persisted state falls back to a fixed default
//! snapshot; loading never fails.
//!
//! ### Reconciliation
//!
//! The [`Reconciler`] compares a local and a remote snapshot, classifies
//! each remote quote as new, unchanged, or conflicting, and produces a
//! [`MergeResult`]. Conflicts resolve remote-wins: the remote version
//! replaces the local one in the merged output.
//!
//! ### Summaries
//!
//! [`summarize`] condenses a [`MergeResult`] into added/updated/conflict
//! counts for the host to display.
//!
//! ## Quick Start
//!
//! ```rust
//! use quotesync_engine::{
//!     summarize, KeyPolicy, MemoryStorage, Quote, Reconciler, Store,
//! };
//!
//! // 1. A store over an injected persistence collaborator
//! let mut store = Store::new(MemoryStorage::new(), KeyPolicy::IdOrText);
//! store
//!     .add(Quote::with_id("q-1", "Stay hungry, stay foolish.", "work"))
//!     .unwrap();
//!
//! // 2. A remote snapshot: one changed quote, one new quote
//! let remote = vec![
//!     Quote::with_id("q-1", "Stay hungry, stay foolish.", "inspiration"),
//!     Quote::new("Simplicity is the ultimate sophistication.", "design"),
//! ];
//!
//! // 3. Reconcile and commit the merged list
//! let reconciler = Reconciler::new(KeyPolicy::IdOrText);
//! let result = reconciler.reconcile(store.quotes(), &remote);
//! let summary = summarize(&result);
//! store.replace_all(result.merged);
//!
//! assert_eq!(summary.added, 1);
//! assert_eq!(summary.conflicts, 1);
//! assert_eq!(store.quotes()[0].category, "inspiration"); // remote won
//! ```

pub mod error;
pub mod identity;
pub mod notify;
pub mod quote;
pub mod reconcile;
pub mod snapshot;
pub mod store;

// Re-export main types at crate root
pub use error::Error;
pub use identity::{IdentityKey, KeyPolicy};
pub use notify::{summarize, SyncSummary};
pub use quote::Quote;
pub use reconcile::{ConflictRecord, MergeResult, Reconciler};
pub use snapshot::default_quotes;
pub use store::{MemoryStorage, Storage, Store};

/// Type aliases for clarity
pub type QuoteId = String;
pub type Snapshot = Vec<Quote>;
