use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvrError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{name} must be positive, got {value}")]
    InvalidPaging { name: &'static str, value: u32 },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, EvrError>;
