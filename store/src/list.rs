//! The transaction list store.

use keel_types::TransactionSummary;

/// An ordered sequence of cached transaction summaries.
///
/// Invariant after every refresh cycle: sorted by descending time, most
/// recent first. Equal timestamps keep their relative insertion order
/// (the sort is stable), so ordering is deterministic.
#[derive(Clone, Debug, Default)]
pub struct TransactionListStore {
    items: Vec<TransactionSummary>,
}

impl TransactionListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the cached list. No other side effects.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append summaries preserving their order. No uniqueness check.
    pub fn insert_all(&mut self, items: Vec<TransactionSummary>) {
        self.items.extend(items);
    }

    /// Insert a single summary and restore the descending-time order.
    pub fn insert_sorted(&mut self, item: TransactionSummary) {
        self.items.push(item);
        self.sort_by_time_descending();
    }

    /// Re-sort in place, most recent first. Stable for equal timestamps.
    pub fn sort_by_time_descending(&mut self) {
        self.items.sort_by(|a, b| b.time.cmp(&a.time));
    }

    /// Immutable view of the current sequence.
    pub fn list(&self) -> &[TransactionSummary] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_types::{Satoshis, Timestamp, TxDirection};

    fn tx(hash: &str, secs: u64) -> TransactionSummary {
        TransactionSummary::new(
            hash,
            Timestamp::new(secs),
            TxDirection::Received,
            Satoshis::new(1_000),
        )
    }

    #[test]
    fn insert_all_preserves_input_order() {
        let mut store = TransactionListStore::new();
        store.insert_all(vec![tx("a", 3), tx("b", 1), tx("c", 2)]);

        let hashes: Vec<_> = store.list().iter().map(|t| t.hash.as_str()).collect();
        assert_eq!(hashes, ["a", "b", "c"]);
    }

    #[test]
    fn sort_orders_most_recent_first() {
        let mut store = TransactionListStore::new();
        store.insert_all(vec![tx("old", 1), tx("new", 3), tx("mid", 2)]);
        store.sort_by_time_descending();

        let hashes: Vec<_> = store.list().iter().map(|t| t.hash.as_str()).collect();
        assert_eq!(hashes, ["new", "mid", "old"]);
    }

    #[test]
    fn sort_is_stable_for_equal_timestamps() {
        let mut store = TransactionListStore::new();
        store.insert_all(vec![tx("first", 5), tx("second", 5), tx("third", 5)]);
        store.sort_by_time_descending();

        let hashes: Vec<_> = store.list().iter().map(|t| t.hash.as_str()).collect();
        assert_eq!(hashes, ["first", "second", "third"]);
    }

    #[test]
    fn insert_sorted_places_newest_on_top() {
        let mut store = TransactionListStore::new();
        store.insert_all(vec![tx("b", 2), tx("a", 1)]);
        store.insert_sorted(tx("newest", 10));

        assert_eq!(store.list()[0].hash.as_str(), "newest");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut store = TransactionListStore::new();
        store.insert_all(vec![tx("a", 1)]);
        store.clear();

        assert!(store.is_empty());
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let mut store = TransactionListStore::new();
        store.insert_all(vec![tx("same", 1), tx("same", 1)]);

        assert_eq!(store.len(), 2);
    }
}
