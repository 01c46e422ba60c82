//! # Custom factor
//!
//! A [CustomFactor] wraps an arbitrary density function (any closure or
//! function pointer) together with it's support, so that ad-hoc densities can
//! be discretized exacly like the factors that ship with the library.
//!
//! All the derived quantities (cdf, limited expected value, mean) come from
//! the deafult numerical implementations in
//! [ContinuousFactor](crate::factor_trait::ContinuousFactor), so they can be
//! expensive. If you know an analytical solution for your density, implement
//! [ContinuousFactor](crate::factor_trait::ContinuousFactor) on your own type
//! instead.

use crate::{domain::ContinuousDomain, factor_trait::ContinuousFactor};

/// A continuous factor defined by a user-provided density function and
/// it's support.
pub struct CustomFactor<Pdf>
where
    Pdf: Fn(f64) -> f64,
{
    pdf: Pdf,
    domain: ContinuousDomain,
}

impl<Pdf> CustomFactor<Pdf>
where
    Pdf: Fn(f64) -> f64,
{
    /// Creates a new [CustomFactor] from a density function and it's support.
    ///
    /// The density is trusted to be a
    /// [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function)
    /// over the given domain (non-negative and with a total area of `1.0`):
    /// this is not (and cannot be) checked here, and the discretizations will
    /// be meaningless if it does not hold.
    pub fn new(pdf: Pdf, domain: ContinuousDomain) -> CustomFactor<Pdf> {
        return CustomFactor { pdf, domain };
    }
}

impl<Pdf> ContinuousFactor for CustomFactor<Pdf>
where
    Pdf: Fn(f64) -> f64,
{
    fn pdf(&self, x: f64) -> f64 {
        return (self.pdf)(x);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }
}
