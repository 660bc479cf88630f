use thiserror::Error;

/// Errors raised by adapters and checked container access.
///
/// A failed call leaves the adapter unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    #[error("{0} is empty")]
    Empty(&'static str),
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AdapterError>;
