//! `mn-matrix` - Dense operands and result buffers for matrix-norm.
//!
//! This crate provides:
//! - A `SquareMatrix` type: row-major `f64` storage of side length `n`
//! - A `RowSumVector` holding one accumulated value per result row
//! - Seeded pseudo-random population of operands

pub mod error;
pub mod matrix;
pub mod random;
pub mod vector;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::SquareMatrix;
pub use random::{populate_pair, DEFAULT_SEED};
pub use vector::RowSumVector;
