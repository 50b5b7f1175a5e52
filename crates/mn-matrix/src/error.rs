use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("buffer length mismatch for {size}x{size} matrix: expected {expected}, got {got}")]
    SizeMismatch {
        size: usize,
        expected: usize,
        got: usize,
    },
    #[error("matrix size {size} is too large: {size}x{size} elements overflow usize")]
    TooLarge { size: usize },
    #[error("failed to allocate {elements} matrix elements: {source}")]
    Allocation {
        elements: usize,
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
