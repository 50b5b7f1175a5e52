use clap::Parser;
use mn_matrix::DEFAULT_SEED;
use mn_reduce::Strategy;

/// Infinity-norm style row-sum benchmark over two random square matrices
///
/// Prints one `size;partitions;elapsed_us` line on success.
#[derive(Parser, Debug)]
#[command(name = "matrix-norm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Matrix side length
    #[arg(value_name = "SIZE")]
    pub size: usize,

    /// Number of equal row partitions (one worker each); must divide SIZE
    #[arg(value_name = "PARTITIONS")]
    pub partitions: usize,

    /// Concurrency strategy: sequential, parallel-for or worker-tasks
    #[arg(short, long, default_value_t = Strategy::ParallelFor)]
    pub strategy: Strategy,

    /// Seed for operand generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Log planning and dispatch details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
