//! The transaction list manager.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, warn};

use keel_payload::PayloadManager;
use keel_store::TransactionListStore;
use keel_types::{Satoshis, ScopeSelector, TransactionSummary, TxHash, TxScope};

use crate::error::TxListError;

/// Fetches, caches, sorts, and publishes the wallet activity list.
///
/// One manager owns one [`TransactionListStore`] for its whole lifetime;
/// every committed refresh clears and repopulates it. Committed refreshes
/// are published through a latest-value channel obtained from
/// [`subscribe`](Self::subscribe) — the channel never completes, it
/// simply carries the most recent list.
///
/// Concurrent refreshes are arbitrated by generation number: a fetch that
/// finishes after a newer fetch has already committed is dropped without
/// touching the store. Cancelling a fetch (dropping its future) never
/// mutates the store either, because mutation happens strictly after the
/// payload call returns.
pub struct TransactionListManager {
    payload: Arc<dyn PayloadManager>,
    store: Mutex<TransactionListStore>,
    next_generation: AtomicU64,
    /// Highest generation committed to the store. Written only while the
    /// store lock is held.
    committed_generation: AtomicU64,
    list_tx: watch::Sender<Vec<TransactionSummary>>,
}

impl TransactionListManager {
    pub fn new(payload: Arc<dyn PayloadManager>) -> Self {
        let (list_tx, _) = watch::channel(Vec::new());
        Self {
            payload,
            store: Mutex::new(TransactionListStore::new()),
            next_generation: AtomicU64::new(0),
            committed_generation: AtomicU64::new(0),
            list_tx,
        }
    }

    /// Observer handle for refresh notifications.
    ///
    /// Each committed refresh publishes the freshly sorted list. A
    /// receiver created after a refresh sees the latest list immediately
    /// via [`watch::Receiver::borrow`].
    pub fn subscribe(&self) -> watch::Receiver<Vec<TransactionSummary>> {
        self.list_tx.subscribe()
    }

    /// Fetch the transactions for a scope and commit them to the store.
    ///
    /// Resolution is strict: an untyped consolidated selector fails with
    /// [`TxListError::InvalidScope`] and leaves the cached list exactly
    /// as it was. On success the store is cleared, repopulated, sorted by
    /// descending time, and the result is published to subscribers.
    ///
    /// `limit`/`offset` paginate every branch except a single legacy
    /// address, whose payload accessor returns the full history.
    ///
    /// Returns the sorted fetched list. If a newer fetch committed while
    /// this one was in flight, the result is still returned but the store
    /// and subscribers are left with the newer list.
    pub async fn fetch_transactions(
        &self,
        selector: &ScopeSelector,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionSummary>, TxListError> {
        let scope = TxScope::resolve(selector)?;
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = match &scope {
            TxScope::AllAccounts => self.payload.wallet_transactions(limit, offset).await?,
            TxScope::AllImportedAddresses => {
                self.payload
                    .imported_address_transactions(limit, offset)
                    .await?
            }
            TxScope::Account { xpub } => {
                self.payload.account_transactions(xpub, limit, offset).await?
            }
            TxScope::LegacyAddress { address } => {
                self.payload.address_transactions(address).await?
            }
        };

        let mut store = self.store.lock().await;
        let committed = self.committed_generation.load(Ordering::SeqCst);
        if generation <= committed {
            drop(store);
            warn!(generation, committed, "stale refresh dropped, keeping newer list");
            let mut list = fetched;
            list.sort_by(|a, b| b.time.cmp(&a.time));
            return Ok(list);
        }

        store.clear();
        store.insert_all(fetched);
        store.sort_by_time_descending();
        let list = store.list().to_vec();
        self.committed_generation.store(generation, Ordering::SeqCst);
        // Publish while still holding the store lock; commit and publish
        // must be atomic or an older refresh could publish after a newer
        // one committed. send_replace is synchronous, so no await here.
        self.list_tx.send_replace(list.clone());
        drop(store);

        debug!(%selector, count = list.len(), "transaction list refreshed");
        Ok(list)
    }

    /// The current cached list. Never triggers a fetch.
    pub async fn transaction_list(&self) -> Vec<TransactionSummary> {
        self.store.lock().await.list().to_vec()
    }

    /// Reset the cached list.
    pub async fn clear(&self) {
        self.store.lock().await.clear();
    }

    /// Insert a locally created (not yet confirmed) summary into the
    /// cached list and return the freshly sorted result. Used for
    /// optimistic updates between full refreshes; the next committed
    /// fetch replaces it with the payload's view.
    pub async fn insert_and_resort(
        &self,
        transaction: TransactionSummary,
    ) -> Vec<TransactionSummary> {
        let mut store = self.store.lock().await;
        store.insert_sorted(transaction);
        store.list().to_vec()
    }

    /// Balance for a scope, in satoshis.
    ///
    /// Scope resolution here is lenient, unlike fetch: an unresolvable
    /// selector logs an error and yields zero, matching the long-standing
    /// behavior dashboards rely on. Payload failures still propagate.
    pub async fn balance(&self, selector: &ScopeSelector) -> Result<Satoshis, TxListError> {
        let scope = match TxScope::resolve(selector) {
            Ok(scope) => scope,
            Err(e) => {
                error!(%selector, error = %e, "balance lookup with unresolvable scope");
                return Ok(Satoshis::ZERO);
            }
        };

        let balance = match &scope {
            TxScope::AllAccounts => self.payload.wallet_balance().await?,
            TxScope::AllImportedAddresses => self.payload.imported_addresses_balance().await?,
            TxScope::Account { xpub } => self.payload.address_balance(xpub).await?,
            TxScope::LegacyAddress { address } => self.payload.address_balance(address).await?,
        };
        Ok(balance)
    }

    /// Aggregated balance across every HD account.
    pub async fn wallet_balance(&self) -> Result<Satoshis, TxListError> {
        Ok(self.payload.wallet_balance().await?)
    }

    /// Aggregated balance across every imported legacy address.
    pub async fn imported_addresses_balance(&self) -> Result<Satoshis, TxListError> {
        Ok(self.payload.imported_addresses_balance().await?)
    }

    /// Look up a cached summary by hash. Scans the cached list in its
    /// current order; never fetches. Hashes are unique, so the first
    /// match is the only match.
    pub async fn transaction_for_hash(
        &self,
        hash: &TxHash,
    ) -> Result<TransactionSummary, TxListError> {
        let store = self.store.lock().await;
        store
            .list()
            .iter()
            .find(|tx| &tx.hash == hash)
            .cloned()
            .ok_or_else(|| TxListError::NotFound(hash.clone()))
    }

    /// Write a note against a transaction hash (overwriting any existing
    /// note) and persist the payload. Returns whether the backend
    /// accepted the save.
    pub async fn update_transaction_notes(
        &self,
        hash: &TxHash,
        note: &str,
    ) -> Result<bool, TxListError> {
        self.payload.put_note(hash, note).await?;
        let accepted = self
            .payload
            .save()
            .await
            .map_err(TxListError::Persistence)?;
        if !accepted {
            warn!(%hash, "payload save was not accepted");
        }
        Ok(accepted)
    }
}
