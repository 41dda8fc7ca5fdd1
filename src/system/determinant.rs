use nalgebra::DMatrix;

use crate::value::Value;

/// Computes the determinant of a square matrix by recursive cofactor
/// (Laplace) expansion.
///
/// The expansion walks down the matrix one row per recursion level, tracking
/// eliminated columns with a boolean mask instead of materializing each minor.
/// At every level the submatrix is expanded along its topmost remaining row,
/// with the cofactor sign `(-1)^(row + col)` taken in submatrix coordinates,
/// so the sign simply alternates across the surviving columns.
///
/// The matrix is never mutated; given the same input this always produces the
/// same output.
///
/// <div class="warning">
///
/// **Scaling**
///
/// Cofactor expansion is O(n!). It is exact under infinite precision and
/// entirely adequate for the small matrices produced by low-degree fits, but
/// it is not a general-purpose determinant. For larger systems, LU
/// decomposition with sign-tracked partial pivoting is the O(n³) alternative,
/// at the cost of a different rounding path.
/// </div>
///
/// # Example
/// ```
/// # use polyapprox::nalgebra::DMatrix;
/// # use polyapprox::system::determinant;
/// let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(determinant(&m), -2.0);
/// ```
///
/// # Panics
/// Panics if the matrix is not square or is zero-sized. The equation systems
/// built by this crate are always square and at least 1×1.
#[must_use]
pub fn determinant<T: Value>(matrix: &DMatrix<T>) -> T {
    assert!(
        matrix.is_square() && matrix.nrows() > 0,
        "determinant requires a square matrix of size >= 1"
    );

    let mut eliminated = vec![false; matrix.ncols()];
    expand(matrix, 0, &mut eliminated)
}

/// One level of the Laplace recursion: the determinant of the submatrix made
/// of rows `row..` and the columns not yet marked in `eliminated`.
///
/// Invariant: exactly `nrows - row` columns are unmarked on entry, and the
/// mask is returned to its entry state before every exit.
fn expand<T: Value>(matrix: &DMatrix<T>, row: usize, eliminated: &mut [bool]) -> T {
    let order = matrix.nrows() - row;

    if order == 1 {
        let col = next_column(eliminated, 0);
        return matrix[(row, col)];
    }

    if order == 2 {
        let col1 = next_column(eliminated, 0);
        let col2 = next_column(eliminated, col1 + 1);
        return matrix[(row, col1)] * matrix[(row + 1, col2)]
            - matrix[(row, col2)] * matrix[(row + 1, col1)];
    }

    let mut det = T::zero();
    let mut sign = T::one();
    for col in 0..matrix.ncols() {
        if eliminated[col] {
            continue;
        }

        eliminated[col] = true;
        det += sign * matrix[(row, col)] * expand(matrix, row + 1, eliminated);
        eliminated[col] = false;

        sign = -sign;
    }
    det
}

/// First surviving column at or after `start`.
fn next_column(eliminated: &[bool], start: usize) -> usize {
    for col in start..eliminated.len() {
        if !eliminated[col] {
            return col;
        }
    }
    unreachable!("mask always leaves `order` columns unmarked")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, entries: &[f64]) -> DMatrix<f64> {
        DMatrix::from_row_slice(rows, rows, entries)
    }

    #[test]
    fn test_size_one() {
        assert_eq!(determinant(&matrix(1, &[7.5])), 7.5);
    }

    #[test]
    fn test_size_two() {
        // 1*4 - 2*3 = -2
        assert_eq!(determinant(&matrix(2, &[1.0, 2.0, 3.0, 4.0])), -2.0);
    }

    #[test]
    fn test_size_three() {
        // Rule of Sarrus: 1*(4*6 - 5*0) - 2*(0*6 - 5*2) + 3*(0*0 - 4*2) = 20
        let m = matrix(3, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 2.0, 0.0, 6.0]);
        assert_eq!(determinant(&m), 20.0);
    }

    #[test]
    fn test_identity() {
        for size in 1..=6 {
            let m = DMatrix::<f64>::identity(size, size);
            assert_eq!(determinant(&m), 1.0);
        }
    }

    #[test]
    fn test_even_permutation() {
        // Permutation (0 1)(2 3) is even, so the determinant is +1
        #[rustfmt::skip]
        let m = matrix(4, &[
            0.0, 1.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
            0.0, 0.0, 1.0, 0.0,
        ]);
        assert_eq!(determinant(&m), 1.0);
    }

    #[test]
    fn test_odd_permutation() {
        // A single row swap of the identity flips the sign
        #[rustfmt::skip]
        let m = matrix(4, &[
            0.0, 1.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_eq!(determinant(&m), -1.0);
    }

    #[test]
    fn test_size_four() {
        // Cross-checked by hand against expansion along the first row
        #[rustfmt::skip]
        let m = matrix(4, &[
            2.0, 0.0, 1.0, 3.0,
            1.0, 4.0, 0.0, 2.0,
            3.0, 1.0, 2.0, 0.0,
            0.0, 2.0, 1.0, 1.0,
        ]);
        assert_eq!(determinant(&m), 50.0);
    }

    #[test]
    fn test_triangular_is_diagonal_product() {
        #[rustfmt::skip]
        let m = matrix(4, &[
            2.0, 5.0, -1.0, 3.0,
            0.0, 3.0,  4.0, 1.0,
            0.0, 0.0, -2.0, 6.0,
            0.0, 0.0,  0.0, 5.0,
        ]);
        assert_eq!(determinant(&m), -60.0);
    }

    #[test]
    fn test_duplicate_rows() {
        let m = matrix(3, &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(determinant(&m), 0.0);
    }

    #[test]
    fn test_duplicate_columns() {
        let m = matrix(3, &[1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 5.0, 6.0]);
        assert_eq!(determinant(&m), 0.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let m = matrix(3, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 2.0, 0.0, 6.0]);
        let copy = m.clone();
        let _ = determinant(&m);
        assert_eq!(m, copy);
    }

    #[test]
    #[should_panic(expected = "square matrix")]
    fn test_rejects_non_square() {
        let m = DMatrix::<f64>::zeros(2, 3);
        let _ = determinant(&m);
    }
}
