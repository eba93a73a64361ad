use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload fetch failed: {0}")]
    Fetch(String),

    #[error("payload save failed: {0}")]
    Save(String),

    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),
}
