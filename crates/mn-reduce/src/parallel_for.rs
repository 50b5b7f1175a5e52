use mn_matrix::{RowSumVector, SquareMatrix};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::Result;
use crate::kernel::row_block_sums;
use crate::partition::PartitionPlan;
use crate::reducer::RowSumReducer;

/// Structured parallel loop over partitions.
///
/// Each call builds its own rayon pool with one thread per partition, so the
/// worker count comes from the plan rather than from global pool state. The
/// row-sum vector is split with `par_chunks_mut` into one disjoint slice per
/// partition, and the local maxima are combined with a parallel `reduce`,
/// which needs no lock.
#[derive(Debug, Clone, Default)]
pub struct ParallelForReducer;

impl ParallelForReducer {
    pub fn new() -> Self {
        ParallelForReducer
    }
}

impl RowSumReducer for ParallelForReducer {
    fn name(&self) -> &str {
        "parallel-for"
    }

    fn reduce(
        &self,
        a: &SquareMatrix,
        b: &SquareMatrix,
        row_sums: &mut RowSumVector,
        plan: &PartitionPlan,
    ) -> Result<f64> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(plan.partitions())
            .thread_name(|i| format!("mn-parallel-{i}"))
            .build()?;
        debug!(threads = plan.partitions(), "dispatching parallel-for");

        let max = pool.install(|| {
            row_sums
                .as_mut_slice()
                .par_chunks_mut(plan.partition_size())
                // One chunk per iteration, matching one partition per worker.
                .with_max_len(1)
                .enumerate()
                .map(|(index, out)| {
                    let partition = plan.partition(index);
                    let local_max = row_block_sums(a, b, partition, out);
                    trace!(partition = index, local_max, "partition done");
                    local_max
                })
                .reduce(|| f64::NEG_INFINITY, f64::max)
        });
        Ok(max)
    }
}
