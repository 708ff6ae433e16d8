//! QuoteSync client - the sync host around the engine.
//!
//! This crate wires the engine's store to its real-world collaborators: a
//! file-backed persistence store, an HTTP remote endpoint, and a periodic
//! scheduler that drives guarded reconcile cycles. The engine stays pure;
//! everything that touches the disk or the network lives here.

pub mod config;
pub mod error;
pub mod remote;
pub mod scheduler;
pub mod signals;
pub mod storage;
pub mod sync;

pub use config::Config;
pub use error::{ClientError, Result};
pub use remote::{HttpRemote, RemoteQuotes};
pub use storage::FileStorage;
pub use sync::{SyncOutcome, SyncService};
