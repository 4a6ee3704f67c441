use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeIdError {
    #[error("expected 64 hex characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),
}
