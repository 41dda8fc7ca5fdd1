//! # Polyapprox
//! ## Small-system polynomial fitting, the determinant way
//!
//! This library fits a polynomial of your chosen degree to a set of `(x, y)`
//! samples by least squares, then lets you evaluate the fitted curve anywhere.
//!
//! Unlike the usual suspects (SVD, QR, iterative solvers), the linear system at
//! the heart of the fit is solved **exactly** with determinant arithmetic:
//! the normal equations are assembled into a moment matrix, and the
//! coefficients fall out of Cramer's rule, with each determinant computed by
//! recursive cofactor (Laplace) expansion.
//!
//! ```rust
//! # use polyapprox::Approximator;
//! // y = x² + 2x, sampled without noise
//! let data: Vec<(f64, f64)> = vec![(1.0, 3.0), (2.0, 8.0), (3.0, 15.0), (4.0, 24.0)];
//!
//! let mut approx = Approximator::new(data);
//! let polynomial = approx.fit(2).expect("system is well determined");
//!
//! assert!((polynomial.y(5.0) - 35.0).abs() < 1e-9);
//! assert!(approx.sum_squared_errors() < 1e-9);
//! ```
//!
//! # Core Concepts
//! - An [`Approximator`] owns your samples and hands out fits on demand.
//!     - Fits are memoized: asking for the same degree twice does not recompute.
//!     - A singular system (duplicate x-values, too few distinct points, degree
//!       too high for the data) is reported as an explicit error, never as a
//!       garbage coefficient vector.
//! - A [`Polynomial`] is the fitted function: ordered coefficients, constant
//!   term first, with an evaluation operation.
//! - An [`EquationSystem`] is the normal-equation form of the fit: one square
//!   moment matrix and one right-hand side, solved by [`EquationSystem::solve`].
//!
//! # Scaling limits
//!
//! Cofactor expansion costs O(n!) per determinant and Cramer's rule evaluates
//! n + 1 of them, so a fit of degree d costs O(d·d!) in the solve step. That is
//! perfectly fine for the small systems this crate targets (degree ≲ 10) and
//! hopeless beyond them. An LU decomposition with partial pivoting would bring
//! the solve to O(d³), but follows a different rounding path and is deliberately
//! not what this crate implements.
//!
//! The moment matrix itself is notoriously ill-conditioned for high-degree fits
//! over wide x-ranges. Near-singular systems below the tolerance are rejected;
//! near-singular systems above it produce numerically shaky coefficients
//! without warning. That is an inherent property of the normal-equation
//! formulation, not a bug this crate tries to paper over.
//!
//! # Testing utilities
//!
//! The crate exports a small set of assertion macros ([`assert_close`],
//! [`assert_all_close`], [`assert_y`]) and a [`polynomial!`] constructor for
//! synthetic data, plus (with the `generate` feature) seeded random dataset
//! generation in [`generate`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::cast_precision_loss)] // I don't care about this one

pub mod test;

#[cfg(feature = "generate")]
pub mod generate;

pub mod error;
pub mod statistics;
pub mod system;
pub mod value;

mod fit;
mod polynomial;

pub use fit::Approximator;
pub use polynomial::Polynomial;
pub use system::EquationSystem;

pub use nalgebra;
