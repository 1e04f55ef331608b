use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    DivisionByZero,
    InfiniteReduction,
    InvalidArgument(String),
    NotFound(String),
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqError::DivisionByZero => write!(f, "Division By Zero"),
            SeqError::InfiniteReduction => {
                write!(f, "Infinite Reduction: bound the sequence with prefix(n) before reducing")
            }
            SeqError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            SeqError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for SeqError {}

impl SeqError {
    pub fn invalid_argument(message: &str) -> Self { SeqError::InvalidArgument(message.to_string()) }
    pub fn not_found(message: &str) -> Self { SeqError::NotFound(message.to_string()) }

    /// Rejects a zero count for operations that need at least one element.
    pub fn require_positive(n: usize, what: &str) -> Result<(), SeqError> {
        if n == 0 {
            return Err(SeqError::InvalidArgument(format!("{what} requires n >= 1, got 0")));
        }
        Ok(())
    }
}

pub type SeqResult<T> = Result<T, SeqError>;
