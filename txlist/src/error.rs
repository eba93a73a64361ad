use keel_payload::PayloadError;
use keel_types::{ScopeError, TxHash};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TxListError {
    /// The selector could not be resolved to a scope. Fetch fails loudly
    /// on this; balance lookup deliberately does not (lenient policy).
    #[error("invalid scope: {0}")]
    InvalidScope(#[from] ScopeError),

    #[error("transaction {0} not found")]
    NotFound(TxHash),

    /// The payload library failed to produce transactions or balances.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// The payload library failed to persist a note update.
    #[error("failed to persist payload: {0}")]
    Persistence(#[source] PayloadError),
}
