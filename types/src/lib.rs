//! Shared value types for the keel wallet data layer.
//!
//! Everything the list manager, store, and payload seam exchange lives
//! here: transaction hashes, timestamps, satoshi amounts, transaction
//! summaries, and the scope types that select which slice of the wallet
//! a list or balance covers.

pub mod amount;
pub mod hash;
pub mod scope;
pub mod summary;
pub mod time;

pub use amount::Satoshis;
pub use hash::TxHash;
pub use scope::{
    Account, ConsolidatedAccount, ConsolidatedKind, LegacyAddress, ScopeError, ScopeSelector,
    TxScope,
};
pub use summary::{TransactionSummary, TxDirection};
pub use time::Timestamp;
