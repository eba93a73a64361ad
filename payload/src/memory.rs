//! In-memory payload — deterministic wallet state for testing.
//!
//! Transaction lists and balances are set programmatically per scope,
//! notes live in a plain map, and save failures can be injected. Never
//! touches the network. An optional per-call latency makes refresh-race
//! tests reproducible.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use keel_types::{Satoshis, TransactionSummary, TxHash};

use crate::{PayloadError, PayloadManager};

struct Inner {
    wallet_txs: Vec<TransactionSummary>,
    imported_txs: Vec<TransactionSummary>,
    account_txs: HashMap<String, Vec<TransactionSummary>>,
    address_txs: HashMap<String, Vec<TransactionSummary>>,
    wallet_balance: Satoshis,
    imported_balance: Satoshis,
    balances: HashMap<String, Satoshis>,
    notes: HashMap<TxHash, String>,
    save_result: Result<bool, String>,
    latency: Option<Duration>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            wallet_txs: Vec::new(),
            imported_txs: Vec::new(),
            account_txs: HashMap::new(),
            address_txs: HashMap::new(),
            wallet_balance: Satoshis::ZERO,
            imported_balance: Satoshis::ZERO,
            balances: HashMap::new(),
            notes: HashMap::new(),
            save_result: Ok(true),
            latency: None,
        }
    }
}

/// A [`PayloadManager`] backed by in-process maps.
#[derive(Default)]
pub struct MemoryPayload {
    inner: Mutex<Inner>,
}

impl MemoryPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_wallet_transactions(&self, txs: Vec<TransactionSummary>) {
        self.lock().wallet_txs = txs;
    }

    pub fn set_imported_transactions(&self, txs: Vec<TransactionSummary>) {
        self.lock().imported_txs = txs;
    }

    pub fn set_account_transactions(&self, xpub: impl Into<String>, txs: Vec<TransactionSummary>) {
        self.lock().account_txs.insert(xpub.into(), txs);
    }

    pub fn set_address_transactions(
        &self,
        address: impl Into<String>,
        txs: Vec<TransactionSummary>,
    ) {
        self.lock().address_txs.insert(address.into(), txs);
    }

    pub fn set_wallet_balance(&self, balance: Satoshis) {
        self.lock().wallet_balance = balance;
    }

    pub fn set_imported_balance(&self, balance: Satoshis) {
        self.lock().imported_balance = balance;
    }

    pub fn set_balance(&self, identifier: impl Into<String>, balance: Satoshis) {
        self.lock().balances.insert(identifier.into(), balance);
    }

    /// Make the next and all following `save` calls return this outcome.
    pub fn set_save_result(&self, result: Result<bool, String>) {
        self.lock().save_result = result;
    }

    /// Delay every accessor by `latency`, for ordering-sensitive tests.
    pub fn set_latency(&self, latency: Duration) {
        self.lock().latency = Some(latency);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory payload lock poisoned")
    }

    async fn simulate_latency(&self) {
        let latency = self.lock().latency;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }
}

fn page(txs: &[TransactionSummary], limit: usize, offset: usize) -> Vec<TransactionSummary> {
    txs.iter().skip(offset).take(limit).cloned().collect()
}

#[async_trait]
impl PayloadManager for MemoryPayload {
    async fn wallet_transactions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionSummary>, PayloadError> {
        self.simulate_latency().await;
        Ok(page(&self.lock().wallet_txs, limit, offset))
    }

    async fn imported_address_transactions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionSummary>, PayloadError> {
        self.simulate_latency().await;
        Ok(page(&self.lock().imported_txs, limit, offset))
    }

    async fn account_transactions(
        &self,
        xpub: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionSummary>, PayloadError> {
        self.simulate_latency().await;
        let inner = self.lock();
        let txs = inner
            .account_txs
            .get(xpub)
            .ok_or_else(|| PayloadError::UnknownIdentifier(xpub.to_owned()))?;
        Ok(page(txs, limit, offset))
    }

    async fn address_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionSummary>, PayloadError> {
        self.simulate_latency().await;
        let inner = self.lock();
        let txs = inner
            .address_txs
            .get(address)
            .ok_or_else(|| PayloadError::UnknownIdentifier(address.to_owned()))?;
        Ok(txs.clone())
    }

    async fn wallet_balance(&self) -> Result<Satoshis, PayloadError> {
        self.simulate_latency().await;
        Ok(self.lock().wallet_balance)
    }

    async fn imported_addresses_balance(&self) -> Result<Satoshis, PayloadError> {
        self.simulate_latency().await;
        Ok(self.lock().imported_balance)
    }

    async fn address_balance(&self, identifier: &str) -> Result<Satoshis, PayloadError> {
        self.simulate_latency().await;
        Ok(self
            .lock()
            .balances
            .get(identifier)
            .copied()
            .unwrap_or(Satoshis::ZERO))
    }

    async fn put_note(&self, hash: &TxHash, note: &str) -> Result<(), PayloadError> {
        self.lock().notes.insert(hash.clone(), note.to_owned());
        Ok(())
    }

    async fn note(&self, hash: &TxHash) -> Result<Option<String>, PayloadError> {
        Ok(self.lock().notes.get(hash).cloned())
    }

    async fn save(&self) -> Result<bool, PayloadError> {
        self.simulate_latency().await;
        match &self.lock().save_result {
            Ok(accepted) => Ok(*accepted),
            Err(reason) => Err(PayloadError::Save(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_types::{Timestamp, TxDirection};

    fn tx(hash: &str, secs: u64) -> TransactionSummary {
        TransactionSummary::new(hash, Timestamp::new(secs), TxDirection::Received, Satoshis::new(100))
    }

    #[tokio::test]
    async fn wallet_transactions_paginate() {
        let payload = MemoryPayload::new();
        payload.set_wallet_transactions(vec![tx("a", 1), tx("b", 2), tx("c", 3), tx("d", 4)]);

        let pg = payload.wallet_transactions(2, 1).await.unwrap();
        assert_eq!(pg.len(), 2);
        assert_eq!(pg[0].hash.as_str(), "b");
        assert_eq!(pg[1].hash.as_str(), "c");
    }

    #[tokio::test]
    async fn unknown_xpub_is_an_error() {
        let payload = MemoryPayload::new();
        let err = payload.account_transactions("xpub404", 50, 0).await.unwrap_err();
        assert!(matches!(err, PayloadError::UnknownIdentifier(_)));
    }

    #[tokio::test]
    async fn notes_overwrite() {
        let payload = MemoryPayload::new();
        let hash = TxHash::new("deadbeef");

        payload.put_note(&hash, "lunch").await.unwrap();
        payload.put_note(&hash, "dinner").await.unwrap();

        assert_eq!(payload.note(&hash).await.unwrap().as_deref(), Some("dinner"));
    }

    #[tokio::test]
    async fn save_outcome_is_programmable() {
        let payload = MemoryPayload::new();
        assert!(payload.save().await.unwrap());

        payload.set_save_result(Ok(false));
        assert!(!payload.save().await.unwrap());

        payload.set_save_result(Err("disk full".into()));
        assert!(matches!(payload.save().await, Err(PayloadError::Save(_))));
    }

    #[tokio::test]
    async fn unknown_balance_identifier_reads_zero() {
        let payload = MemoryPayload::new();
        payload.set_balance("xpubA", Satoshis::new(500));

        assert_eq!(payload.address_balance("xpubA").await.unwrap(), Satoshis::new(500));
        assert_eq!(payload.address_balance("nope").await.unwrap(), Satoshis::ZERO);
    }
}
