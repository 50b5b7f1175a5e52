use std::fmt;

/// Outcome of one timed run.
///
/// `Display` renders the `size;partitions;elapsed_us` record that downstream
/// collection scripts parse; the maximum is only logged.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub size: usize,
    pub partitions: usize,
    pub elapsed_us: u128,
    pub maximum: f64,
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.size, self.partitions, self.elapsed_us)
    }
}
