use std::ops::Range;

use tracing::debug;

use crate::error::{ReduceError, Result};

/// A half-open range `[start, end)` of result rows owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Position of this partition in the plan (`0..partitions`).
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    /// Number of rows in the partition.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The row indices covered, in ascending order.
    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Equal-sized, non-overlapping partitioning of `[0, size)`.
///
/// Only constructed through [`plan`], so `partitions >= 1` and
/// `size == partitions * partition_size` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    size: usize,
    partitions: usize,
    partition_size: usize,
}

impl PartitionPlan {
    /// Matrix side length being partitioned.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of partitions (and workers).
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// Rows per partition.
    pub fn partition_size(&self) -> usize {
        self.partition_size
    }

    /// The `index`-th partition.
    ///
    /// # Panics
    /// Panics if `index >= partitions()`.
    pub fn partition(&self, index: usize) -> Partition {
        assert!(
            index < self.partitions,
            "partition index {index} out of range for {} partitions",
            self.partitions
        );
        let start = index * self.partition_size;
        Partition {
            index,
            start,
            end: start + self.partition_size,
        }
    }

    /// All partitions in ascending row order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Partition> + '_ {
        (0..self.partitions).map(move |i| self.partition(i))
    }
}

/// Validate `size` against `partitions` and compute the partition size.
///
/// # Errors
/// Returns `InvalidPartition` when `partitions` is zero, `size` is zero, or
/// `size` is not a multiple of `partitions`. Nothing is dispatched in that
/// case; callers must run this before spawning any worker.
pub fn plan(size: usize, partitions: usize) -> Result<PartitionPlan> {
    if partitions == 0 || size == 0 || size % partitions != 0 {
        return Err(ReduceError::InvalidPartition { size, partitions });
    }
    let partition_size = size / partitions;
    debug!(size, partitions, partition_size, "planned row partitions");
    Ok(PartitionPlan {
        size,
        partitions,
        partition_size,
    })
}
