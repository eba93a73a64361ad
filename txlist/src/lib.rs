//! Transaction list manager for the keel wallet data layer.
//!
//! Orchestrates the activity list shown in the UI: fetches transaction
//! summaries for a scope from the payload library, caches them in the
//! [`TransactionListStore`](keel_store::TransactionListStore) sorted by
//! recency, publishes each committed refresh to subscribers, and forwards
//! balance lookups and per-transaction notes to the payload.

pub mod error;
pub mod manager;

pub use error::TxListError;
pub use manager::TransactionListManager;
