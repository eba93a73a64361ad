//! The payload manager trait.

use async_trait::async_trait;
use keel_types::{Satoshis, TransactionSummary, TxHash};

use crate::PayloadError;

/// Accessors the data layer needs from the wallet payload library.
///
/// Transaction accessors return summaries in whatever order the backend
/// produced them; the caller owns sorting. Balance accessors return
/// aggregated amounts in satoshis.
///
/// The notes mapping is mutated only through [`put_note`] followed by
/// [`save`]; implementations may share payload state internally, but the
/// data layer is the single writer of transaction notes.
///
/// [`put_note`]: PayloadManager::put_note
/// [`save`]: PayloadManager::save
#[async_trait]
pub trait PayloadManager: Send + Sync {
    /// Transactions across every HD account, paginated.
    async fn wallet_transactions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionSummary>, PayloadError>;

    /// Transactions across every imported legacy address, paginated.
    async fn imported_address_transactions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionSummary>, PayloadError>;

    /// Transactions for one HD account, identified by xpub, paginated.
    async fn account_transactions(
        &self,
        xpub: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionSummary>, PayloadError>;

    /// Transactions for one legacy address. Unpaginated: the backend
    /// returns the full history for a single address.
    async fn address_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionSummary>, PayloadError>;

    /// Aggregated balance across every HD account.
    async fn wallet_balance(&self) -> Result<Satoshis, PayloadError>;

    /// Aggregated balance across every imported legacy address.
    async fn imported_addresses_balance(&self) -> Result<Satoshis, PayloadError>;

    /// Balance for one identifier — an xpub or a legacy address string.
    async fn address_balance(&self, identifier: &str) -> Result<Satoshis, PayloadError>;

    /// Write a note against a transaction hash, overwriting any existing
    /// note. Not durable until [`save`](PayloadManager::save) succeeds.
    async fn put_note(&self, hash: &TxHash, note: &str) -> Result<(), PayloadError>;

    /// Read the note stored against a transaction hash, if any.
    async fn note(&self, hash: &TxHash) -> Result<Option<String>, PayloadError>;

    /// Commit the current payload state. Returns whether the backend
    /// accepted the save; errors on I/O or network failure.
    async fn save(&self) -> Result<bool, PayloadError>;
}
