use std::fmt;
use std::str::FromStr;

use crate::error::ReduceError;
use crate::parallel_for::ParallelForReducer;
use crate::reducer::{RowSumReducer, SequentialReducer};
use crate::worker::WorkerTaskReducer;

/// How partitions are fanned out and their maxima combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Single-threaded, partitions processed in order.
    Sequential,
    /// Work-sharing loop over partitions with a built-in max reduction.
    #[default]
    ParallelFor,
    /// One explicit worker per partition folding into a shared maximum.
    WorkerTasks,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Sequential,
        Strategy::ParallelFor,
        Strategy::WorkerTasks,
    ];

    /// The reducer implementing this strategy.
    pub fn reducer(self) -> Box<dyn RowSumReducer> {
        match self {
            Strategy::Sequential => Box::new(SequentialReducer::new()),
            Strategy::ParallelFor => Box::new(ParallelForReducer::new()),
            Strategy::WorkerTasks => Box::new(WorkerTaskReducer::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::ParallelFor => "parallel-for",
            Strategy::WorkerTasks => "worker-tasks",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ReduceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "parallel-for" | "omp" => Ok(Strategy::ParallelFor),
            "worker-tasks" | "threads" => Ok(Strategy::WorkerTasks),
            _ => Err(ReduceError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Concurrency configuration for one reduction call.
///
/// Passed explicitly into [`crate::compute_max_row_sum`]; the library keeps
/// no process-wide thread-count state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Number of partitions, and of workers for the concurrent strategies.
    pub partitions: usize,
    pub strategy: Strategy,
}

impl ReduceConfig {
    pub fn new(partitions: usize, strategy: Strategy) -> Self {
        ReduceConfig {
            partitions,
            strategy,
        }
    }
}
