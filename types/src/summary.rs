//! Transaction summary records.
//!
//! A summary is the display-level view of a transaction produced by the
//! payload library's multi-address resolution. The data layer treats
//! summaries as immutable: it caches, sorts, and hands them out, but
//! never edits them.

use crate::{Satoshis, Timestamp, TxHash};
use serde::{Deserialize, Serialize};

/// Direction of a transaction relative to the selected scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxDirection {
    /// Funds left the scope.
    Sent,
    /// Funds arrived into the scope.
    Received,
    /// Funds moved between addresses inside the same wallet.
    Transferred,
}

/// A single transaction as shown in the activity list.
///
/// `hash` is unique per transaction and is the lookup key for both cached
/// summaries and persisted notes. `time` is the ordering key: the cached
/// list is kept sorted by descending `time` (most recent first).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub hash: TxHash,
    pub time: Timestamp,
    pub direction: TxDirection,
    /// Total amount moved, always positive; `direction` carries the sign.
    pub total: Satoshis,
    /// Miner fee, known only for sent transactions.
    #[serde(default)]
    pub fee: Option<Satoshis>,
    pub confirmations: u32,
    /// True for locally created transactions not yet seen on the network.
    #[serde(default)]
    pub pending: bool,
}

impl TransactionSummary {
    /// Convenience constructor for a confirmed transaction.
    pub fn new(
        hash: impl Into<TxHash>,
        time: Timestamp,
        direction: TxDirection,
        total: Satoshis,
    ) -> Self {
        Self {
            hash: hash.into(),
            time,
            direction,
            total,
            fee: None,
            confirmations: 0,
            pending: false,
        }
    }

    /// A locally created transaction not yet seen on the network,
    /// timestamped with the device clock. The next full refresh replaces
    /// it with the payload library's view.
    pub fn pending(hash: impl Into<TxHash>, direction: TxDirection, total: Satoshis) -> Self {
        Self {
            hash: hash.into(),
            time: Timestamp::now(),
            direction,
            total,
            fee: None,
            confirmations: 0,
            pending: true,
        }
    }
}
