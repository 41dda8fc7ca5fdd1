//! Error types for polynomial approximation
//!
//! This module defines the common errors encountered when building or solving
//! a least-squares fit, along with a convenient `Result` alias.

/// Errors that can occur during polynomial approximation.
///
/// This enum represents the common failure modes when constructing or
/// solving a least-squares fit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cannot perform a fit because there is no data.
    #[error("No data available for fitting")]
    NoData,

    /// The requested polynomial degree is too high for the dataset.
    ///
    /// The degree must be less than the number of data points.
    #[error("Polynomial degree `{0}` is too high for the dataset")]
    DegreeTooHigh(usize),

    /// The moment matrix has a determinant below the singularity tolerance.
    ///
    /// Usually duplicate x-values, too few distinct points, or a degree too
    /// high for the data. The system has no unique solution.
    #[error(
        "Moment matrix is singular; the data may be insufficient, collinear, or overfitted [size: {size}]"
    )]
    SingularSystem {
        /// Side length of the square moment matrix (degree + 1)
        size: usize,
    },

    /// A numeric value could not be cast to the target type. This is usually a custom type much smaller than f64/f32
    #[error("Failed to cast value to target type")]
    CastFailed,
}

/// Result type for polynomial approximation
pub type Result<T> = std::result::Result<T, Error>;
