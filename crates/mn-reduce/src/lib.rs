//! `mn-reduce` - Partitioned row-sum computation with a concurrent max reduction.
//!
//! For square operands `A` and `B` (the latter stored transposed), every
//! result row `i` gets one accumulated value, the sum of the dot products of
//! row `i` of `A` with every stored row of `B`. The largest of those values
//! is reported without ever materialising the product matrix.
//!
//! The row space is split into equal partitions ([`partition::plan`]), each
//! partition is processed by [`kernel::row_block_sums`], and the per-partition
//! maxima are combined by one of the [`RowSumReducer`] strategies.

pub mod config;
pub mod error;
pub mod kernel;
pub mod maximum;
pub mod parallel_for;
pub mod partition;
pub mod reducer;
pub mod worker;

use mn_matrix::{RowSumVector, SquareMatrix};
use tracing::{debug, instrument};

pub use config::{ReduceConfig, Strategy};
pub use error::{ReduceError, Result};
pub use maximum::GlobalMaximum;
pub use parallel_for::ParallelForReducer;
pub use partition::{plan, Partition, PartitionPlan};
pub use reducer::{RowSumReducer, SequentialReducer};
pub use worker::{WorkerTask, WorkerTaskReducer};

/// Fill `row_sums` and return the maximum row sum.
///
/// Checks that `a`, `b` and `row_sums` agree on the size and that the size
/// splits evenly into `config.partitions` before anything is dispatched.
///
/// # Errors
/// - `SizeMismatch` if the operands disagree on `n`.
/// - `InvalidPartition` if `n` is not a positive multiple of the partition
///   count.
///
/// In both cases `row_sums` is left untouched.
#[instrument(level = "debug", skip_all, fields(size = a.size(), partitions = config.partitions, strategy = %config.strategy))]
pub fn compute_max_row_sum(
    a: &SquareMatrix,
    b: &SquareMatrix,
    row_sums: &mut RowSumVector,
    config: &ReduceConfig,
) -> Result<f64> {
    if a.size() != b.size() || a.size() != row_sums.len() {
        return Err(ReduceError::SizeMismatch {
            a: a.size(),
            b: b.size(),
            rows: row_sums.len(),
        });
    }
    let plan = partition::plan(a.size(), config.partitions)?;

    let reducer = config.strategy.reducer();
    let max = reducer.reduce(a, b, row_sums, &plan)?;
    debug!(reducer = reducer.name(), max, "reduction complete");
    Ok(max)
}

/// Out-parameter form of [`compute_max_row_sum`].
///
/// Writes the maximum into `out_maximum` on success and leaves it unchanged
/// on error.
pub fn ijk_row_sum_partitioned(
    a: &SquareMatrix,
    b: &SquareMatrix,
    row_sums: &mut RowSumVector,
    out_maximum: &mut f64,
    config: &ReduceConfig,
) -> Result<()> {
    *out_maximum = compute_max_row_sum(a, b, row_sums, config)?;
    Ok(())
}
