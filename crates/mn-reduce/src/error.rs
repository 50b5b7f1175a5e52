use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("invalid partition: matrix size {size} cannot be split into {partitions} equal partitions")]
    InvalidPartition { size: usize, partitions: usize },
    #[error("operand size mismatch: matrix A is {a}x{a}, matrix B is {b}x{b}, row-sum vector has {rows} entries")]
    SizeMismatch { a: usize, b: usize, rows: usize },
    #[error("unknown strategy '{0}' (expected sequential, parallel-for or worker-tasks)")]
    UnknownStrategy(String),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to spawn worker thread: {0}")]
    WorkerSpawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReduceError>;
