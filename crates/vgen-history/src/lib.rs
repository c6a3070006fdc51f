//! Persistent local history of past generations.
//!
//! A single JSON file on disk, rewritten atomically on every mutation. Owned
//! by the front-end, not the orchestrator: entries are added only after a
//! generation succeeds.

pub mod error;
pub mod store;

pub use error::{HistoryError, HistoryResult};
pub use store::HistoryStore;
