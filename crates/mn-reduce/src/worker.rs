use std::thread;

use mn_matrix::{RowSumVector, SquareMatrix};
use tracing::{debug, trace};

use crate::error::Result;
use crate::kernel::row_block_sums;
use crate::maximum::GlobalMaximum;
use crate::partition::{Partition, PartitionPlan};
use crate::reducer::RowSumReducer;

/// The unit of work handed to one worker thread.
///
/// Borrows the shared read-only operands and the shared maximum, and owns
/// exclusive access to its partition's slice of the row-sum vector. Lives
/// no longer than the reduction call that created it.
#[derive(Debug)]
pub struct WorkerTask<'a> {
    pub a: &'a SquareMatrix,
    pub b: &'a SquareMatrix,
    pub rows: &'a mut [f64],
    pub maximum: &'a GlobalMaximum,
    pub partition: Partition,
}

impl WorkerTask<'_> {
    /// Run the kernel over this task's rows and fold the local maximum into
    /// the shared one. Returns the local maximum.
    pub fn run(self) -> f64 {
        let local_max = row_block_sums(self.a, self.b, self.partition, self.rows);
        self.maximum.fold(local_max);
        trace!(partition = self.partition.index, local_max, "worker done");
        local_max
    }
}

/// Explicit dispatch: one named OS thread per partition.
///
/// All tasks are built up front, spawned inside a `std::thread::scope`, and
/// joined before the call returns. Workers share a [`GlobalMaximum`] and
/// fold their local maxima into it as they finish.
#[derive(Debug, Clone, Default)]
pub struct WorkerTaskReducer;

impl WorkerTaskReducer {
    pub fn new() -> Self {
        WorkerTaskReducer
    }
}

impl RowSumReducer for WorkerTaskReducer {
    fn name(&self) -> &str {
        "worker-tasks"
    }

    fn reduce(
        &self,
        a: &SquareMatrix,
        b: &SquareMatrix,
        row_sums: &mut RowSumVector,
        plan: &PartitionPlan,
    ) -> Result<f64> {
        let maximum = GlobalMaximum::default();

        let tasks: Vec<WorkerTask<'_>> = row_sums
            .as_mut_slice()
            .chunks_mut(plan.partition_size())
            .zip(plan.iter())
            .map(|(rows, partition)| WorkerTask {
                a,
                b,
                rows,
                maximum: &maximum,
                partition,
            })
            .collect();
        debug!(workers = tasks.len(), "dispatching worker tasks");

        thread::scope(|scope| -> Result<()> {
            for task in tasks {
                thread::Builder::new()
                    .name(format!("mn-worker-{}", task.partition.index))
                    .spawn_scoped(scope, move || task.run())?;
            }
            Ok(())
        })?;

        Ok(maximum.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::plan;
    use crate::reducer::SequentialReducer;
    use approx::assert_relative_eq;

    #[test]
    fn test_task_run_folds_into_shared_maximum() {
        let a = SquareMatrix::filled(4, 1.0).unwrap();
        let maximum = GlobalMaximum::new(10.0);
        let mut rows = vec![0.0; 2];
        let task = WorkerTask {
            a: &a,
            b: &a,
            rows: &mut rows,
            maximum: &maximum,
            partition: plan(4, 2).unwrap().partition(1),
        };
        assert_eq!(task.run(), 16.0);
        assert_eq!(maximum.into_inner(), 16.0);
        assert_eq!(rows, vec![16.0, 16.0]);
    }

    #[test]
    fn test_worker_tasks_all_ones() {
        let a = SquareMatrix::filled(4, 1.0).unwrap();
        let mut sums = RowSumVector::zeros(4);
        let max = WorkerTaskReducer::new()
            .reduce(&a, &a, &mut sums, &plan(4, 2).unwrap())
            .unwrap();
        assert_eq!(max, 16.0);
        assert_eq!(sums.as_slice(), &[16.0; 4]);
    }

    #[test]
    fn test_worker_tasks_match_sequential() {
        let a = SquareMatrix::random(30, 20).unwrap();
        let b = SquareMatrix::random(30, 21).unwrap();

        let mut expected = RowSumVector::zeros(30);
        let expected_max = SequentialReducer::new()
            .reduce(&a, &b, &mut expected, &plan(30, 1).unwrap())
            .unwrap();

        for partitions in [1, 2, 3, 5, 6, 10, 15, 30] {
            let mut sums = RowSumVector::zeros(30);
            let max = WorkerTaskReducer::new()
                .reduce(&a, &b, &mut sums, &plan(30, partitions).unwrap())
                .unwrap();
            assert_relative_eq!(max, expected_max, max_relative = 1e-12);
            for (got, want) in sums.as_slice().iter().zip(expected.as_slice()) {
                assert_relative_eq!(*got, *want, max_relative = 1e-12);
            }
        }
    }
}
