use mn_matrix::SquareMatrix;

use crate::partition::Partition;

/// Compute the folded row sums for one partition and return their maximum.
///
/// For every row `i` in `partition`, accumulates the dot product of row `i`
/// of `a` with every stored row `j` of `b` into one scalar:
///
/// ```text
/// out[i - start] = sum_j sum_k a[i][k] * b[j][k]
/// ```
///
/// Summation runs in ascending `j`, then `k` order. `out` is the partition's
/// own slice of the row-sum vector (`out[0]` is row `partition.start`), so
/// the kernel cannot write outside its range.
///
/// Returns the largest row sum in the partition, or negative infinity for
/// an empty partition.
///
/// # Panics
/// Panics if `out.len() != partition.len()` or if the partition does not
/// fit `a`. Both indicate a planning bug, not a runtime condition.
pub fn row_block_sums(
    a: &SquareMatrix,
    b: &SquareMatrix,
    partition: Partition,
    out: &mut [f64],
) -> f64 {
    assert_eq!(
        out.len(),
        partition.len(),
        "row-sum slice does not match partition {partition:?}"
    );

    let mut local_max = f64::NEG_INFINITY;
    for (slot, i) in out.iter_mut().zip(partition.rows()) {
        let a_row = a.row(i);
        let mut row_sum = 0.0;
        for b_row in b.rows() {
            for (x, y) in a_row.iter().zip(b_row) {
                row_sum += x * y;
            }
        }
        *slot = row_sum;
        if row_sum > local_max {
            local_max = row_sum;
        }
    }
    local_max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::plan;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_ones_row_sum_is_n_squared() {
        let a = SquareMatrix::filled(4, 1.0).unwrap();
        let b = SquareMatrix::filled(4, 1.0).unwrap();
        let part = plan(4, 2).unwrap().partition(1);
        let mut out = vec![0.0; 2];
        let max = row_block_sums(&a, &b, part, &mut out);
        assert_eq!(out, vec![16.0, 16.0]);
        assert_eq!(max, 16.0);
    }

    #[test]
    fn test_folds_every_row_of_b() {
        // a = [1,2;3,4], b rows = [5,6], [7,8]
        // row 0: (1*5 + 2*6) + (1*7 + 2*8) = 17 + 23 = 40
        // row 1: (3*5 + 4*6) + (3*7 + 4*8) = 39 + 53 = 92
        let a = SquareMatrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = SquareMatrix::from_vec(2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let part = plan(2, 1).unwrap().partition(0);
        let mut out = vec![0.0; 2];
        let max = row_block_sums(&a, &b, part, &mut out);
        assert_eq!(out, vec![40.0, 92.0]);
        assert_eq!(max, 92.0);
    }

    #[test]
    fn test_writes_only_its_slice() {
        let a = SquareMatrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = SquareMatrix::from_vec(2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let p = plan(2, 2).unwrap();

        let mut rows = [f64::NAN; 2];
        let (first, second) = rows.split_at_mut(1);
        let max1 = row_block_sums(&a, &b, p.partition(1), second);
        assert!(first[0].is_nan());
        assert_eq!(second[0], 92.0);
        assert_eq!(max1, 92.0);

        let max0 = row_block_sums(&a, &b, p.partition(0), first);
        assert_eq!(rows, [40.0, 92.0]);
        assert_eq!(max0, 40.0);
    }

    #[test]
    fn test_local_max_with_negative_sums() {
        let a = SquareMatrix::from_vec(2, vec![-1.0, -1.0, -2.0, -2.0]).unwrap();
        let b = SquareMatrix::filled(2, 1.0).unwrap();
        let part = plan(2, 1).unwrap().partition(0);
        let mut out = vec![0.0; 2];
        let max = row_block_sums(&a, &b, part, &mut out);
        assert_eq!(out, vec![-4.0, -8.0]);
        assert_eq!(max, -4.0);
    }

    #[test]
    fn test_matches_transposed_product_row_total() {
        // Folding all dot products of row i equals the sum of row i of A * B^T.
        let a = SquareMatrix::random(6, 1).unwrap();
        let b = SquareMatrix::random(6, 2).unwrap();
        let part = plan(6, 1).unwrap().partition(0);
        let mut out = vec![0.0; 6];
        row_block_sums(&a, &b, part, &mut out);

        for i in 0..6 {
            let expected: f64 = (0..6)
                .map(|j| (0..6).map(|k| a.row(i)[k] * b.row(j)[k]).sum::<f64>())
                .sum();
            assert_relative_eq!(out[i], expected, max_relative = 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "does not match partition")]
    fn test_slice_length_mismatch_panics() {
        let a = SquareMatrix::zeros(4).unwrap();
        let part = plan(4, 2).unwrap().partition(0);
        let mut out = vec![0.0; 3];
        row_block_sums(&a, &a, part, &mut out);
    }
}
