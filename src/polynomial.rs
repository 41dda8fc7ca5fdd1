use std::{borrow::Cow, ops::RangeInclusive};

use crate::value::{SteppedValues, Value};

/// A polynomial in the monomial basis: ordered coefficients, constant term
/// first.
///
/// `Polynomial` is a pure value type. It is not tied to any dataset, and it is
/// immutable once constructed; a fit produces one (see
/// [`crate::Approximator::fit`]), and anything may evaluate it anywhere.
///
/// # Type Parameters
/// - `'a`: Lifetime of borrowed coefficients, if any.
/// - `T`: Numeric type for coefficients and evaluations, default `f64`.
///
/// # Example
/// ```
/// # use polyapprox::Polynomial;
/// let poly = Polynomial::borrowed(&[1.0, 2.0, 3.0]); // 1 + 2x + 3x²
/// assert_eq!(poly.y(2.0), 17.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<'a, T: Value = f64> {
    coefficients: Cow<'a, [T]>,
}
impl<'a, T: Value> Polynomial<'a, T> {
    /// Creates a polynomial borrowing its coefficients.
    ///
    /// Coefficient `k` multiplies `x^k`; `&[1.0, -3.0, 2.0]` is
    /// `y(x) = 2x² - 3x + 1`.
    #[must_use]
    pub const fn borrowed(coefficients: &'a [T]) -> Self {
        Self {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    /// Creates a polynomial owning its coefficients.
    #[must_use]
    pub fn owned(coefficients: Vec<T>) -> Polynomial<'static, T> {
        Polynomial {
            coefficients: Cow::Owned(coefficients),
        }
    }

    /// Converts the polynomial into an owned version with `'static` lifetime.
    #[must_use]
    pub fn into_owned(self) -> Polynomial<'static, T> {
        Polynomial {
            coefficients: Cow::Owned(self.coefficients.into_owned()),
        }
    }

    /// Returns a reference to the polynomial's coefficients.
    ///
    /// Coefficient `k` multiplies `x^k`.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial: one less than the number of
    /// coefficients it carries. Trailing zero coefficients still count.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at a given x-value.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// The sum `y(x) = Σ c_k * x^k` is accumulated alongside a running power
    /// of x, each power derived from the previous one by a single
    /// multiplication. This is mathematically equivalent to Horner's scheme
    /// but not numerically identical to it: for very high degrees or extreme
    /// x-values it accumulates slightly more rounding error. A known
    /// limitation, kept for a stable, predictable evaluation order.
    /// </div>
    ///
    /// # Example
    /// ```
    /// # use polyapprox::Polynomial;
    /// let poly = Polynomial::borrowed(&[1.0, 2.0, 3.0]); // 1 + 2x + 3x²
    /// assert_eq!(poly.y(2.0), 17.0); // 1 + 4 + 12
    /// ```
    pub fn y(&self, x: T) -> T {
        let mut y = T::zero();
        let mut power = T::one();
        for &coefficient in self.coefficients.iter() {
            y += coefficient * power;
            power *= x;
        }
        y
    }

    /// Evaluates the polynomial at multiple x-values.
    ///
    /// # Returns
    /// A `Vec` of `(x, y)` pairs corresponding to each input value.
    ///
    /// # Example
    /// ```
    /// # use polyapprox::Polynomial;
    /// let poly = Polynomial::borrowed(&[1.0, 2.0, 3.0]);
    /// let points = poly.solve(vec![0.0, 1.0, 2.0]);
    /// // points = [(0.0, 1.0), (1.0, 6.0), (2.0, 17.0)]
    /// ```
    pub fn solve(&self, x: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        x.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// Evaluates the polynomial over a range of x-values with a fixed step.
    ///
    /// # Example
    /// ```
    /// # use polyapprox::Polynomial;
    /// let poly = Polynomial::borrowed(&[1.0, 2.0, 3.0]);
    /// let points = poly.solve_range(0.0..=2.0, 1.0);
    /// // points = [(0.0, 1.0), (1.0, 6.0), (2.0, 17.0)]
    /// ```
    pub fn solve_range(&self, range: RangeInclusive<T>, step: T) -> Vec<(T, T)> {
        self.solve(SteppedValues::new(range, step))
    }

    /// Returns a human-readable string of the polynomial equation, highest
    /// power first, e.g. `y(x) = 2x^2 + 3x - 5`.
    #[expect(clippy::missing_panics_doc, reason = "Infallible operation")]
    #[must_use]
    pub fn equation(&self) -> String {
        use std::fmt::Write;

        let mut out = String::from("y(x) = ");
        let mut first = true;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if c == T::zero() && !(first && power == 0) {
                continue;
            }

            if first {
                if c < T::zero() {
                    out.push('-');
                }
                first = false;
            } else if c < T::zero() {
                out.push_str(" - ");
            } else {
                out.push_str(" + ");
            }

            let magnitude = Value::abs(c);
            match power {
                0 => write!(out, "{magnitude}"),
                1 => write!(out, "{magnitude}x"),
                _ => write!(out, "{magnitude}x^{power}"),
            }
            .expect("writing to a String is infallible");
        }

        if first {
            out.push('0');
        }
        out
    }
}

impl<T: Value> std::fmt::Display for Polynomial<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.equation())
    }
}

impl<'a, T: Value> AsRef<Polynomial<'a, T>> for Polynomial<'a, T> {
    fn as_ref(&self) -> &Polynomial<'a, T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_all_close, assert_y, polynomial, value::CoordExt};

    use super::*;

    #[test]
    fn test_y() {
        let poly = polynomial!(8.0, 7.0, 6.0);
        assert_y!(&poly, 0.0, 8.0);
        assert_y!(&poly, 1.0, 21.0);
        assert_y!(&poly, 2.0, 46.0);
    }

    #[test]
    fn test_y_negative_x() {
        // 8 - 14 + 24 = 18
        let poly = polynomial!(8.0, 7.0, 6.0);
        assert_y!(&poly, -2.0, 18.0);
    }

    #[test]
    fn test_constant() {
        let poly = polynomial!(4.5);
        assert_eq!(poly.degree(), 0);
        assert_y!(&poly, 123.0, 4.5);
    }

    #[test]
    fn test_solve() {
        let poly = polynomial!(8.0, 7.0, 6.0);
        let points = poly.solve(vec![0.0, 1.0, 2.0]).y();
        assert_all_close!(points, &[8.0, 21.0, 46.0]);
    }

    #[test]
    fn test_solve_range() {
        let poly = polynomial!(8.0, 7.0, 6.0);
        let points = poly.solve_range(0.0..=3.0, 1.0).y();
        assert_all_close!(points, &[8.0, 21.0, 46.0, 83.0]);
    }

    #[test]
    fn test_equation() {
        let poly = polynomial!(-5.0, 3.0, 2.0);
        assert_eq!(poly.equation(), "y(x) = 2x^2 + 3x - 5");

        let poly = polynomial!(0.0, -1.0);
        assert_eq!(poly.equation(), "y(x) = -1x");

        let poly = polynomial!(0.0);
        assert_eq!(poly.equation(), "y(x) = 0");
    }

    #[test]
    fn test_borrowed_vs_owned() {
        let borrowed = Polynomial::borrowed(&[1.0, 2.0]);
        let owned = Polynomial::owned(vec![1.0, 2.0]);
        assert_eq!(borrowed.into_owned(), owned);
    }
}
