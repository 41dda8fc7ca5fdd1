//! Goodness-of-fit metrics for polynomial approximations
//!
//! This module provides free functions to evaluate how well a fitted
//! polynomial represents a dataset.
//!
//! - [`sum_squared_errors`]: The residual metric reported by
//!   [`crate::Approximator::sum_squared_errors`]. Lower is better; zero is an
//!   exact fit.
//! - [`mean_squared_error`]: SSE averaged over the observations.
//! - [`r_squared`]: Proportion of variance explained by the model (0 to 1).
//! - [`mean`]: Arithmetic mean of a dataset.
use crate::value::Value;

/// Computes the sum of squared errors (SSE) between two sets of values.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// SSE = Σ (y_i - y_fit_i)²
/// where
///   y_i = observed values, y_fit_i = predicted values
/// ```
/// </div>
///
/// # Parameters
/// - `y`: Iterator over the observed (actual) values.
/// - `y_fit`: Iterator over the predicted values from the model.
///
/// # Returns
/// The sum of squared errors as a `T`. Zero for an exact fit, and also zero
/// for empty input.
///
/// # Example
/// ```rust
/// # use polyapprox::statistics::sum_squared_errors;
/// let y = vec![1.0, 2.0, 3.0];
/// let y_fit = vec![1.0, 2.5, 3.0];
/// let sse = sum_squared_errors(y.into_iter(), y_fit.into_iter());
/// assert_eq!(sse, 0.25);
/// ```
pub fn sum_squared_errors<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    let mut total = T::zero();
    for (y, y_fit) in y.zip(y_fit) {
        total += Value::powi(y - y_fit, 2);
    }
    total
}

/// Computes the mean squared error (MSE) between two sets of values.
///
/// MSE is the [`sum_squared_errors`] averaged over the number of
/// observations. Lower values indicate a better fit. Returns NaN for empty
/// input.
pub fn mean_squared_error<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    let mut total = T::zero();
    let mut n = T::zero();
    for (y, y_fit) in y.zip(y_fit) {
        total += Value::powi(y - y_fit, 2);
        n += T::one();
    }
    total / n
}

/// Calculate the R-squared value for a set of data.
///
/// R-squared is a number between 0 and 1 that tells you how well the model
/// explains the data:
/// - `0` means the model explains none of the variation.
/// - `1` means the model explains all the variation.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_res / SS_tot)
/// where
///   SS_res = Σ (y_i - y_fit_i)²
///   SS_tot = Σ (y_i - y_mean)²
/// ```
/// </div>
///
/// # Parameters
/// - `y`: The actual (observed) values.
/// - `y_fit`: The predicted values from the model.
///
/// # Returns
/// The proportion of variance explained by the model. NaN when the observed
/// values are all identical (zero total variance).
pub fn r_squared<T: Value>(y: impl Iterator<Item = T>, y_fit: impl Iterator<Item = T>) -> T {
    let y: Vec<T> = y.collect();
    let y_mean = mean(y.iter().copied());

    let mut ss_total = T::zero();
    let mut ss_residual = T::zero();
    for (y, y_fit) in y.into_iter().zip(y_fit) {
        ss_total += Value::powi(y - y_mean, 2);
        ss_residual += Value::powi(y - y_fit, 2);
    }

    T::one() - (ss_residual / ss_total)
}

/// Computes the arithmetic mean of a sequence of values.
///
/// Returns NaN if the iterator yields no elements.
pub fn mean<T: Value>(data: impl Iterator<Item = T>) -> T {
    let mut sum = T::zero();
    let mut count = T::zero();
    for value in data {
        sum += value;
        count += T::one();
    }
    sum / count
}
