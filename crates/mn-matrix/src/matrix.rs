use crate::error::{MatrixError, Result};

/// A square matrix of `f64` values in contiguous row-major storage.
///
/// The buffer always holds exactly `size * size` elements. Row `i` occupies
/// `data[i * size..(i + 1) * size]`; callers never compute those offsets
/// themselves and go through [`SquareMatrix::row`] instead.
///
/// When used as the right-hand operand of the row-sum kernel the stored rows
/// are read as the columns of the logical operand, i.e. the matrix is kept
/// transposed so that both operands are walked with unit stride.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    size: usize,
    data: Vec<f64>,
}

/// Element count of a `size x size` matrix, if it fits in `usize`.
fn element_count(size: usize) -> Result<usize> {
    size.checked_mul(size)
        .ok_or(MatrixError::TooLarge { size })
}

impl SquareMatrix {
    /// Allocate a zero-filled `size x size` matrix.
    ///
    /// # Errors
    /// See [`SquareMatrix::filled`].
    pub fn zeros(size: usize) -> Result<Self> {
        Self::filled(size, 0.0)
    }

    /// Allocate a `size x size` matrix with every entry set to `value`.
    ///
    /// # Errors
    /// Returns `TooLarge` if `size * size` overflows, and `Allocation` if the
    /// buffer cannot be reserved.
    pub fn filled(size: usize, value: f64) -> Result<Self> {
        let len = element_count(size)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|source| MatrixError::Allocation {
                elements: len,
                source,
            })?;
        data.resize(len, value);
        Ok(SquareMatrix { size, data })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    /// Returns `TooLarge` if `size * size` overflows and `SizeMismatch` if
    /// `data.len() != size * size`.
    pub fn from_vec(size: usize, data: Vec<f64>) -> Result<Self> {
        let expected = element_count(size)?;
        if data.len() != expected {
            return Err(MatrixError::SizeMismatch {
                size,
                expected,
                got: data.len(),
            });
        }
        Ok(SquareMatrix { size, data })
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of elements (`n * n`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for the degenerate `0 x 0` matrix.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row `i` as a slice of length `n`.
    ///
    /// # Panics
    /// Panics if `i >= size()`. Row indices come from validated partitions,
    /// so an out-of-range row is a programming error.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.size;
        &self.data[start..start + self.size]
    }

    /// Iterate rows in ascending order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size, so an empty matrix
        // yields no rows through an empty slice instead.
        let chunk = self.size.max(1);
        self.data.chunks_exact(chunk)
    }

    /// The full row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The full row-major buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
