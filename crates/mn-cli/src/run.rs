use std::time::Instant;

use mn_matrix::{populate_pair, RowSumVector, SquareMatrix};
use mn_reduce::{compute_max_row_sum, ReduceConfig};
use tracing::{debug, info};

use crate::args::Cli;
use crate::error::Result;
use crate::report::RunRecord;

/// Build the operands, time one reduction, and return the record.
///
/// The partition plan is checked before any matrix is allocated, so an
/// invalid `SIZE`/`PARTITIONS` pair fails fast with no work done.
pub fn run(cli: &Cli) -> Result<RunRecord> {
    mn_reduce::plan(cli.size, cli.partitions)?;

    let mut a = SquareMatrix::zeros(cli.size)?;
    let mut b = SquareMatrix::zeros(cli.size)?;
    populate_pair(&mut a, &mut b, cli.seed);
    let mut row_sums = RowSumVector::zeros(cli.size);
    debug!(size = cli.size, seed = cli.seed, "operands ready");

    let config = ReduceConfig::new(cli.partitions, cli.strategy);
    let start = Instant::now();
    let maximum = compute_max_row_sum(&a, &b, &mut row_sums, &config)?;
    let elapsed_us = start.elapsed().as_micros();

    info!(
        strategy = %cli.strategy,
        maximum,
        elapsed_us = elapsed_us as u64,
        "row-sum reduction finished"
    );

    Ok(RunRecord {
        size: cli.size,
        partitions: cli.partitions,
        elapsed_us,
        maximum,
    })
}
