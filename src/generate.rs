//! Randomized polynomial and sample-data generation.
//!
//! Useful for exercising the fitting pipeline end to end: draw a random
//! ground-truth polynomial, sample it on an even grid, optionally perturb the
//! y-values with Gaussian noise, and check that the fit recovers what you
//! started from.
//!
//! ```rust
//! use polyapprox::{generate::RandomPolynomial, Approximator};
//!
//! let truth = RandomPolynomial::new(2, 1.0..=5.0, Some(42));
//! let data = truth.sampled(-10.0..=10.0, 25);
//!
//! let mut approx = Approximator::new(data);
//! let fitted = approx.fit(2).unwrap();
//! ```
//!
//! All generators accept an optional seed. Pass `Some(seed)` for reproducible
//! output, `None` for system entropy.
use std::ops::RangeInclusive;

use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

use crate::Polynomial;

/// A randomly generated ground-truth polynomial.
///
/// Coefficients are drawn uniformly from a caller-supplied range, one per
/// power from the constant term up to the requested degree.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPolynomial {
    polynomial: Polynomial<'static, f64>,
}
impl RandomPolynomial {
    /// Draws a polynomial of the given degree with coefficients uniform in
    /// `coefficient_range`.
    ///
    /// # Panics
    /// Panics if the coefficient range is reversed (`start > end`).
    #[must_use]
    pub fn new(degree: usize, coefficient_range: RangeInclusive<f64>, seed: Option<u64>) -> Self {
        let mut rng = rng(seed);
        let distribution = Uniform::new_inclusive(
            *coefficient_range.start(),
            *coefficient_range.end(),
        );

        let coefficients = (0..=degree).map(|_| distribution.sample(&mut rng)).collect();
        Self {
            polynomial: Polynomial::owned(coefficients),
        }
    }

    /// Returns the generated polynomial.
    #[must_use]
    pub fn polynomial(&self) -> &Polynomial<'static, f64> {
        &self.polynomial
    }

    /// Evaluates the polynomial at `count` evenly spaced x-values across the
    /// given range, endpoints included.
    ///
    /// A count of zero produces an empty dataset, and a count of one produces
    /// the range start alone.
    #[must_use]
    pub fn sampled(&self, range: RangeInclusive<f64>, count: usize) -> Vec<(f64, f64)> {
        let (min, max) = (*range.start(), *range.end());
        let step = if count > 1 {
            (max - min) / (count - 1) as f64
        } else {
            0.0
        };

        (0..count)
            .map(|i| {
                let x = min + step * i as f64;
                (x, self.polynomial.y(x))
            })
            .collect()
    }
}

/// Extension trait for perturbing the y-channel of an `(x, y)` dataset.
pub trait ApplyNoise {
    /// Adds independent Gaussian noise `N(0, sigma²)` to every y-value.
    ///
    /// A non-positive `sigma` leaves the data unchanged.
    #[must_use]
    fn apply_normal_noise(self, sigma: f64, seed: Option<u64>) -> Self;
}
impl ApplyNoise for Vec<(f64, f64)> {
    fn apply_normal_noise(mut self, sigma: f64, seed: Option<u64>) -> Self {
        let Ok(distribution) = Normal::new(0.0, sigma) else {
            return self;
        };
        if sigma <= 0.0 {
            return self;
        }

        let mut rng = rng(seed);
        for (_, y) in &mut self {
            *y += distribution.sample(&mut rng);
        }
        self
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
