//! A Domain represents the set of points where the density of a factor
//! is non-zero (it's support).
//!
//! In this library we use it for the pdf of the continuous factors (see
//! [crate::factor_trait]). A factor may have no bounds at all (like the
//! [Normal](crate::factors::Normal)), only a lower bound (like the
//! [Gamma](crate::factors::Gamma)) or both. Instead of checking for the
//! presence of optional `lb`/`ub` attributes, the 4 possible combinations
//! are encoded as the variants of [ContinuousDomain].
//!

use core::f64;

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
    /// All the numbers until the given value.
    To(f64),
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative
    /// infinity (for the unbounded sides). It is guaranteed that
    /// `return.0 <= return.1`. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, *max),
        }
    }
}
