use std::borrow::Cow;

use crate::{
    error::{Error, Result},
    statistics,
    system::EquationSystem,
    value::{CoordExt, Value},
    Polynomial,
};

/// The memoized result of a successful fit.
#[derive(Debug, Clone, PartialEq)]
struct Fitted<T: Value> {
    degree: usize,
    polynomial: Polynomial<'static, T>,
}

/// Fits polynomials to a set of `(x, y)` samples by least squares.
///
/// An `Approximator` owns its sample data for as long as it lives, and
/// memoizes the most recent successful fit by degree: requesting the same
/// degree again returns the cached [`Polynomial`] without touching the solver.
/// Replacing the data or requesting a different degree invalidates the cache.
///
/// # How it works
/// - [`Approximator::fit`] assembles the normal equations for the requested
///   degree ([`EquationSystem::normal_equations`]) and solves them exactly by
///   Cramer's rule ([`EquationSystem::solve`]).
/// - The solution vector becomes the coefficients of a [`Polynomial`],
///   constant term first.
/// - A singular system surfaces as [`Error::SingularSystem`]; the cache is
///   left empty in that case.
///
/// The matrix and right-hand side are created fresh per solve attempt and
/// discarded afterwards; the cached polynomial is the only state that
/// outlives a call.
///
/// # Example
/// ```
/// # use polyapprox::Approximator;
/// let data = vec![(1.0, 3.0), (2.0, 8.0), (3.0, 15.0), (4.0, 24.0)];
/// let mut approx = Approximator::new(data);
///
/// let polynomial = approx.fit(2).unwrap();
/// println!("{polynomial}"); // y(x) = 1x^2 + 2x
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Approximator<'data, T: Value = f64> {
    data: Cow<'data, [(T, T)]>,
    fitted: Option<Fitted<T>>,
}
impl<'data, T: Value> Approximator<'data, T> {
    /// Creates an approximator owning or borrowing the given samples.
    ///
    /// The samples are immutable once handed over; use
    /// [`Approximator::set_data`] to replace them wholesale.
    pub fn new(data: impl Into<Cow<'data, [(T, T)]>>) -> Self {
        Self {
            data: data.into(),
            fitted: None,
        }
    }

    /// Replaces the owned samples, invalidating any cached fit.
    pub fn set_data(&mut self, data: impl Into<Cow<'data, [(T, T)]>>) {
        self.data = data.into();
        self.fitted = None;
    }

    /// Returns a read-only view of the owned samples.
    #[must_use]
    pub fn data(&self) -> &[(T, T)] {
        &self.data
    }

    /// Fits a polynomial of the given degree to the data.
    ///
    /// If a polynomial of exactly this degree is already cached, it is
    /// returned as-is without recomputation. Otherwise the normal equations
    /// are built and solved, and the result replaces whatever was cached.
    ///
    /// # Errors
    /// - [`Error::NoData`]: the sample set is empty.
    /// - [`Error::DegreeTooHigh`]: `degree + 1` exceeds the sample count, so
    ///   the system cannot be well determined.
    /// - [`Error::SingularSystem`]: the moment matrix has no unique solution
    ///   (typically duplicate x-values or too few distinct points). The cache
    ///   is cleared; [`Approximator::polynomial`] returns `None` afterwards.
    ///
    /// # Example
    /// ```
    /// # use polyapprox::Approximator;
    /// let data = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
    /// let mut approx = Approximator::new(data);
    /// let poly = approx.fit(2).unwrap();
    /// println!("Coefficients: {:?}", poly.coefficients());
    /// ```
    pub fn fit(&mut self, degree: usize) -> Result<&Polynomial<'static, T>> {
        if self.data.is_empty() {
            return Err(Error::NoData);
        }
        if degree >= self.data.len() {
            return Err(Error::DegreeTooHigh(degree));
        }

        // take() empties the cache; on the singular path below it stays empty
        let fitted = match self.fitted.take() {
            Some(fitted) if fitted.degree == degree => fitted,
            _ => {
                let mut system = EquationSystem::normal_equations(&self.data, degree);
                let coefficients = system.solve()?;
                Fitted {
                    degree,
                    polynomial: Polynomial::owned(coefficients),
                }
            }
        };

        Ok(&self.fitted.insert(fitted).polynomial)
    }

    /// Returns the cached polynomial from the most recent successful fit,
    /// if any.
    #[must_use]
    pub fn polynomial(&self) -> Option<&Polynomial<'static, T>> {
        self.fitted.as_ref().map(|fitted| &fitted.polynomial)
    }

    /// Returns the degree of the cached fit, if any.
    #[must_use]
    pub fn fitted_degree(&self) -> Option<usize> {
        self.fitted.as_ref().map(|fitted| fitted.degree)
    }

    /// Computes the sum of squared errors of the cached fit against the
    /// owned samples.
    ///
    /// ```math
    /// SSE = Σ (y_i - p(x_i))²
    /// ```
    ///
    /// Returns zero when no fit is cached. That is "no fit yet", not a
    /// perfect fit; check the result of [`Approximator::fit`] first.
    #[must_use]
    pub fn sum_squared_errors(&self) -> T {
        let Some(fitted) = self.fitted.as_ref() else {
            return T::zero();
        };

        let data = self.data.as_ref();
        let y_fit = data.x_iter().map(|x| fitted.polynomial.y(x));
        statistics::sum_squared_errors(data.y_iter(), y_fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, assert_close, assert_y};

    fn quadratic_data() -> Vec<(f64, f64)> {
        // y = x² + 2x
        vec![(1.0, 3.0), (2.0, 8.0), (3.0, 15.0), (4.0, 24.0)]
    }

    #[test]
    fn test_quadratic_recovery() {
        let mut approx = Approximator::new(quadratic_data());
        let poly = approx.fit(2).unwrap();

        assert_all_close!(poly.coefficients(), &[0.0, 2.0, 1.0], tol = 1e-9);
        assert_close!(approx.sum_squared_errors(), 0.0, tol = 1e-9);
    }

    #[test]
    fn test_evaluation_round_trip() {
        let data = quadratic_data();
        let mut approx = Approximator::new(data.clone());
        let poly = approx.fit(2).unwrap().clone();

        for (x, y) in data {
            assert_close!(poly.y(x), y, tol = 1e-9);
        }
    }

    #[test]
    fn test_cubic_recovery() {
        // y = x³ - 2x² + 3x - 1 at x = 0..=5; exercises a 4x4 solve
        let truth = crate::polynomial!(-1.0, 3.0, -2.0, 1.0);
        let data = truth.solve_range(0.0..=5.0, 1.0);

        let mut approx = Approximator::new(data);
        let poly = approx.fit(3).unwrap();
        assert_all_close!(poly.coefficients(), truth.coefficients(), tol = 1e-6);
    }

    #[test]
    fn test_quartic_recovery() {
        // Degree 4 puts a 5x5 matrix through the cofactor recursion
        let truth = crate::polynomial!(2.0, 0.0, -1.0, 0.0, 1.0);
        let data = truth.solve_range(-3.0..=3.0, 1.0);

        let mut approx = Approximator::new(data);
        let poly = approx.fit(4).unwrap();
        assert_all_close!(poly.coefficients(), truth.coefficients(), tol = 1e-6);
    }

    #[test]
    fn test_degree_zero_is_mean() {
        let mut approx = Approximator::new(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 6.0)]);
        let poly = approx.fit(0).unwrap();
        assert_y!(poly, 10.0, 3.0);
    }

    #[test]
    fn test_fit_is_memoized() {
        let mut approx = Approximator::new(quadratic_data());

        let first = approx.fit(2).unwrap().clone();
        let first_ptr = approx.polynomial().unwrap().coefficients().as_ptr();

        let second = approx.fit(2).unwrap();
        assert_eq!(&first, second);

        // Same allocation: the cached polynomial was returned, not rebuilt
        let second_ptr = approx.polynomial().unwrap().coefficients().as_ptr();
        assert_eq!(first_ptr, second_ptr);
    }

    #[test]
    fn test_degree_change_refits() {
        let mut approx = Approximator::new(quadratic_data());

        let _ = approx.fit(2).unwrap();
        assert_eq!(approx.fitted_degree(), Some(2));

        let _ = approx.fit(1).unwrap();
        assert_eq!(approx.fitted_degree(), Some(1));
        assert_eq!(approx.polynomial().unwrap().coefficients().len(), 2);
    }

    #[test]
    fn test_set_data_invalidates_cache() {
        let mut approx = Approximator::new(quadratic_data());
        let _ = approx.fit(2).unwrap();
        assert!(approx.polynomial().is_some());

        approx.set_data(vec![(0.0, 0.0), (1.0, 1.0)]);
        assert!(approx.polynomial().is_none());
        assert_eq!(approx.sum_squared_errors(), 0.0);
    }

    #[test]
    fn test_singular_system_clears_cache() {
        let mut approx = Approximator::new(quadratic_data());
        let _ = approx.fit(2).unwrap();

        // Duplicate x with conflicting y cannot be fit at degree 2
        approx.set_data(vec![(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        assert!(matches!(
            approx.fit(2),
            Err(Error::SingularSystem { size: 3 })
        ));
        assert!(approx.polynomial().is_none());
        assert_eq!(approx.sum_squared_errors(), 0.0);
    }

    #[test]
    fn test_empty_data() {
        let mut approx = Approximator::<f64>::new(vec![]);
        assert!(matches!(approx.fit(0), Err(Error::NoData)));
    }

    #[test]
    fn test_degree_too_high() {
        let mut approx = Approximator::new(vec![(0.0, 1.0), (1.0, 2.0)]);
        assert!(matches!(approx.fit(2), Err(Error::DegreeTooHigh(2))));
    }

    #[test]
    fn test_sse_without_fit_is_zero() {
        let approx = Approximator::new(quadratic_data());
        assert_eq!(approx.sum_squared_errors(), 0.0);
    }

    #[test]
    fn test_overdetermined_line() {
        // Noisy-ish line: y = 2x + 1 with one point nudged off
        let data = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.5)];
        let mut approx = Approximator::new(data);
        let poly = approx.fit(1).unwrap();

        // Least squares: slope 2.15, intercept 0.9
        assert_all_close!(poly.coefficients(), &[0.9, 2.15], tol = 1e-9);
        assert!(approx.sum_squared_errors() > 0.0);
    }
}
