use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Matrix(#[from] mn_matrix::MatrixError),
    #[error(transparent)]
    Reduce(#[from] mn_reduce::ReduceError),
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
