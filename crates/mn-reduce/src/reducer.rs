use std::fmt::Debug;

use mn_matrix::{RowSumVector, SquareMatrix};

use crate::error::Result;
use crate::kernel::row_block_sums;
use crate::partition::PartitionPlan;

/// Trait for the concurrency strategies that fan the row-block kernel out
/// over a partition plan and reduce the partition-local maxima.
///
/// Callers go through [`crate::compute_max_row_sum`], which validates the
/// operands and builds the plan before any reducer runs. Implementations
/// may therefore assume that `a`, `b` and `row_sums` all have side length
/// `plan.size()`.
pub trait RowSumReducer: Send + Sync + Debug {
    /// Returns the name of this strategy (e.g., "parallel-for").
    fn name(&self) -> &str;

    /// Populate every entry of `row_sums` and return the largest one.
    ///
    /// Each partition writes only its own rows. All work has finished when
    /// this returns.
    fn reduce(
        &self,
        a: &SquareMatrix,
        b: &SquareMatrix,
        row_sums: &mut RowSumVector,
        plan: &PartitionPlan,
    ) -> Result<f64>;
}

/// Runs every partition on the calling thread, in order.
///
/// This is the ground truth the concurrent strategies are compared against.
#[derive(Debug, Clone, Default)]
pub struct SequentialReducer;

impl SequentialReducer {
    pub fn new() -> Self {
        SequentialReducer
    }
}

impl RowSumReducer for SequentialReducer {
    fn name(&self) -> &str {
        "sequential"
    }

    fn reduce(
        &self,
        a: &SquareMatrix,
        b: &SquareMatrix,
        row_sums: &mut RowSumVector,
        plan: &PartitionPlan,
    ) -> Result<f64> {
        let chunks = row_sums.as_mut_slice().chunks_mut(plan.partition_size());
        let max = plan
            .iter()
            .zip(chunks)
            .map(|(partition, out)| row_block_sums(a, b, partition, out))
            .fold(f64::NEG_INFINITY, f64::max);
        Ok(max)
    }
}
