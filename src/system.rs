//! Normal equations and their exact solution.
//!
//! An [`EquationSystem`] owns the square moment matrix and right-hand side of
//! a least-squares fit. [`EquationSystem::normal_equations`] assembles the
//! system from raw samples, and [`EquationSystem::solve`] resolves it by
//! Cramer's rule on top of the cofactor [`determinant`].
use nalgebra::{DMatrix, DVector};

use crate::{
    error::{Error, Result},
    value::Value,
};

mod determinant;
pub use determinant::determinant;

/// Determinant magnitudes below this are treated as zero.
///
/// Exact zero-testing on floating-point determinants is unsound; this absorbs
/// the rounding noise of the cofactor expansion for the matrix sizes the crate
/// targets.
pub const SINGULARITY_TOLERANCE: f64 = 1e-6;

/// A square linear system `A·x = b`.
///
/// For polynomial fitting, `A` is the moment matrix of the normal equations
/// and `b` the matching right-hand side; see
/// [`EquationSystem::normal_equations`]. The system is an ephemeral value:
/// built fresh for one solve attempt and discarded afterwards.
///
/// # Example
/// ```
/// # use polyapprox::EquationSystem;
/// let data: [(f64, f64); 4] = [(1.0, 3.0), (2.0, 8.0), (3.0, 15.0), (4.0, 24.0)];
/// let mut system = EquationSystem::normal_equations(&data, 2);
///
/// // y = x² + 2x
/// let coefficients = system.solve().unwrap();
/// assert!((coefficients[1] - 2.0).abs() < 1e-9);
/// assert!((coefficients[2] - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSystem<T: Value = f64> {
    matrix: DMatrix<T>,
    right_hand_side: DVector<T>,
}
impl<T: Value> EquationSystem<T> {
    /// Creates a system from an explicit matrix and right-hand side.
    ///
    /// # Panics
    /// Panics if the matrix is not square, or if the right-hand side length
    /// does not match the matrix size.
    #[must_use]
    pub fn new(matrix: DMatrix<T>, right_hand_side: DVector<T>) -> Self {
        assert!(matrix.is_square(), "matrix must be square");
        assert_eq!(
            matrix.nrows(),
            right_hand_side.len(),
            "right-hand side length must match the matrix size"
        );

        Self {
            matrix,
            right_hand_side,
        }
    }

    /// Builds the least-squares normal equations for a polynomial fit.
    ///
    /// For samples `(x_i, y_i)` and a target degree `d`, this produces the
    /// `(d+1)×(d+1)` moment matrix and its right-hand side:
    ///
    /// ```math
    /// A[i][j] = S_(i+j)     where S_k = Σ x_i^k   (S_0 = sample count)
    /// b[0]    = Σ y_i
    /// b[i]    = Σ x_i^i * y_i
    /// ```
    ///
    /// The matrix is symmetric by construction, constant along its
    /// anti-diagonals (a Hankel matrix). All powers are taken from a single
    /// forward pass over the samples, each power derived from the previous one
    /// by one multiplication, rather than repeated `pow` calls.
    ///
    /// Degree 0 degenerates to averaging: a 1×1 matrix holding the sample
    /// count, and `Σ y` on the right.
    ///
    /// An empty sample set is out of contract here and produces a singular
    /// 1×1 zero system; [`crate::Approximator`] rejects it before building.
    #[must_use]
    pub fn normal_equations(data: &[(T, T)], degree: usize) -> Self {
        let size = degree + 1;

        // powers[k][i] = x_i^(k+1), for k in 0..2*degree
        let mut powers: Vec<Vec<T>> = Vec::with_capacity(2 * degree);
        for k in 0..2 * degree {
            let mut row = Vec::with_capacity(data.len());
            for (i, &(x, _)) in data.iter().enumerate() {
                let prev = if k == 0 { T::one() } else { powers[k - 1][i] };
                row.push(prev * x);
            }
            powers.push(row);
        }

        // S_0 is the sample count, S_k the k-th power sum
        let mut sums = Vec::with_capacity(2 * degree + 1);
        sums.push(T::from_positive_int(data.len()));
        for row in &powers {
            let mut sum = T::zero();
            for &power in row {
                sum += power;
            }
            sums.push(sum);
        }

        let matrix = DMatrix::from_fn(size, size, |i, j| sums[i + j]);

        let mut right_hand_side = DVector::zeros(size);
        for &(_, y) in data {
            right_hand_side[0] += y;
        }
        for i in 1..size {
            let mut sum = T::zero();
            for (j, &(_, y)) in data.iter().enumerate() {
                sum += powers[i - 1][j] * y;
            }
            right_hand_side[i] = sum;
        }

        Self {
            matrix,
            right_hand_side,
        }
    }

    /// The side length of the square matrix (`degree + 1` for a fit system).
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Returns a reference to the matrix.
    #[must_use]
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Returns a reference to the right-hand side vector.
    #[must_use]
    pub fn right_hand_side(&self) -> &DVector<T> {
        &self.right_hand_side
    }

    /// Solves the system by Cramer's rule.
    ///
    /// Computes the determinant of the matrix; if its magnitude is below
    /// [`SINGULARITY_TOLERANCE`] the system has no unique solution and
    /// [`Error::SingularSystem`] is returned. Otherwise each unknown is the
    /// ratio of two determinants: the matrix with the corresponding column
    /// replaced by the right-hand side, over the unmodified matrix.
    ///
    /// Column substitution happens in place, but every substituted column is
    /// restored before the next one is touched, so the system is left exactly
    /// as it was on every path out of this method.
    ///
    /// Cost is O(n) determinant evaluations of O(n!) each; see
    /// [`determinant`] for the scaling discussion.
    ///
    /// # Errors
    /// Returns [`Error::SingularSystem`] if the determinant is below the
    /// tolerance, and [`Error::CastFailed`] if the tolerance itself cannot be
    /// represented in `T`.
    pub fn solve(&mut self) -> Result<Vec<T>> {
        let tolerance = T::try_cast(SINGULARITY_TOLERANCE)?;

        let det = determinant(&self.matrix);
        if Value::abs(det) < tolerance {
            return Err(Error::SingularSystem { size: self.size() });
        }

        let mut solution = Vec::with_capacity(self.size());
        for i in 0..self.size() {
            let det_i = self.substituted_determinant(i);
            solution.push(det_i / det);
        }
        Ok(solution)
    }

    /// Determinant of the matrix with column `col` replaced by the right-hand
    /// side. The column is restored before returning; nothing between the
    /// substitution and the restore can fail or observe the system.
    fn substituted_determinant(&mut self, col: usize) -> T {
        let original = self.matrix.column(col).into_owned();

        self.matrix.set_column(col, &self.right_hand_side);
        let det = determinant(&self.matrix);
        self.matrix.set_column(col, &original);

        det
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_all_close;

    #[test]
    fn test_moment_matrix_layout() {
        let data = [(1.0, 3.0), (2.0, 8.0), (3.0, 15.0), (4.0, 24.0)];
        let system = EquationSystem::normal_equations(&data, 2);

        // S_0..S_4 = 4, 10, 30, 100, 354
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(3, 3, &[
             4.0,  10.0,  30.0,
            10.0,  30.0, 100.0,
            30.0, 100.0, 354.0,
        ]);
        assert_eq!(system.matrix(), &expected);

        // Σy, Σxy, Σx²y
        let rhs = DVector::from_vec(vec![50.0, 160.0, 554.0]);
        assert_eq!(system.right_hand_side(), &rhs);
    }

    #[test]
    fn test_moment_matrix_is_symmetric() {
        let data = [(0.5, 1.0), (1.5, 2.0), (-2.0, 0.5), (3.0, -1.0), (4.5, 2.5)];
        let system = EquationSystem::normal_equations(&data, 3);
        let matrix = system.matrix();

        for i in 0..system.size() {
            for j in 0..system.size() {
                assert_eq!(matrix[(i, j)], matrix[(j, i)]);
            }
        }
    }

    #[test]
    fn test_degree_zero_averages() {
        let data = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)];
        let mut system = EquationSystem::normal_equations(&data, 0);

        assert_eq!(system.size(), 1);
        assert_eq!(system.matrix()[(0, 0)], 3.0);

        let solution = system.solve().unwrap();
        assert_all_close!(solution, &[4.0]);
    }

    #[test]
    fn test_solve_quadratic() {
        // y = x² + 2x
        let data = [(1.0, 3.0), (2.0, 8.0), (3.0, 15.0), (4.0, 24.0)];
        let mut system = EquationSystem::normal_equations(&data, 2);

        let solution = system.solve().unwrap();
        assert_all_close!(solution, &[0.0, 2.0, 1.0], tol = 1e-9);
    }

    #[test]
    fn test_solve_restores_the_system() {
        let data = [(1.0, 3.0), (2.0, 8.0), (3.0, 15.0), (4.0, 24.0)];
        let mut system = EquationSystem::normal_equations(&data, 2);
        let before = system.clone();

        let _ = system.solve().unwrap();
        assert_eq!(system, before);
    }

    #[test]
    fn test_singular_system() {
        // Duplicate x with conflicting y: determinant is exactly zero
        let data = [(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)];
        let mut system = EquationSystem::normal_equations(&data, 2);

        assert!(matches!(
            system.solve(),
            Err(Error::SingularSystem { size: 3 })
        ));
    }

    #[test]
    fn test_explicit_system() {
        // 2x + y = 5, x - y = 1  =>  x = 2, y = 1
        let matrix = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, -1.0]);
        let rhs = DVector::from_vec(vec![5.0, 1.0]);

        let mut system = EquationSystem::new(matrix, rhs);
        let solution = system.solve().unwrap();
        assert_all_close!(solution, &[2.0, 1.0], tol = 1e-12);
    }

    #[test]
    #[should_panic(expected = "right-hand side length")]
    fn test_mismatched_rhs() {
        let matrix = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, -1.0]);
        let rhs = DVector::from_vec(vec![5.0]);
        let _ = EquationSystem::new(matrix, rhs);
    }
}
