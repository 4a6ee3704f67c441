use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("tree width must be at least 1, got {0}")]
    InvalidTreeWidth(usize),

    #[error("config error: {0}")]
    Config(String),
}
