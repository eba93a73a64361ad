//! Seam to the external wallet payload library.
//!
//! The hard problems — HD key derivation, address generation, chain
//! synchronization, multi-address balance aggregation — live in the
//! payload library. This crate defines the trait the data layer consumes
//! and an in-memory implementation for deterministic tests. Real backends
//! implement [`PayloadManager`]; the rest of the workspace depends only
//! on the trait.

pub mod error;
pub mod manager;
pub mod memory;

pub use error::PayloadError;
pub use manager::PayloadManager;
pub use memory::MemoryPayload;
