/// One accumulated value per result row.
///
/// Each entry is written by exactly one worker; the reducers hand out
/// disjoint sub-slices via [`RowSumVector::as_mut_slice`] and `chunks_mut`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSumVector {
    data: Vec<f64>,
}

impl RowSumVector {
    /// Allocate a zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        RowSumVector { data: vec![0.0; n] }
    }

    /// Wrap existing values.
    pub fn from_vec(data: Vec<f64>) -> Self {
        RowSumVector { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Largest entry, or `None` for an empty vector.
    ///
    /// Computed sequentially; this is the ground truth the parallel
    /// reductions are checked against.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }
}
