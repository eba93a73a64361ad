//! In-memory transaction list cache.
//!
//! The store is the single cached copy of the activity list shown in the
//! UI. It is cleared and repopulated on every refresh and lives for the
//! lifetime of the manager that owns it. It does not deduplicate; the
//! upstream fetch owns uniqueness.

pub mod list;

pub use list::TransactionListStore;
