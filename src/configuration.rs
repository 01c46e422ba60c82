
//! This file contains the deafult values and other value choices used trough the library.
//!

/// The library uses numerical integration when a factor does not override
/// the deafult [cdf](crate::factor_trait::ContinuousFactor::cdf) or
/// [limited_expected_value](crate::factor_trait::ContinuousFactor::limited_expected_value)
/// with an analytical solution. In order to do this we have decided to use the
/// [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// to integrate. But even considering this, for a given integral we still need
/// to choose the number of steps.
///
/// There are no perfect values that will work with every factor. Increasing the
/// precision comes with an extra computational cost. We recommend changing the
/// values to fit your needs. This values are just a mere recomendation.
pub mod integration {

    /// The number of subdivisions of the integration interval used by the
    /// deafult numerical [cdf](crate::factor_trait::ContinuousFactor::cdf) and
    /// [limited_expected_value](crate::factor_trait::ContinuousFactor::limited_expected_value).
    /// `1 << 12 = 4096`
    ///
    /// Must be even because of how Simpson's rule works.
    pub static DEFAULT_INTEGRATION_NUM_STEPS: usize = 1 << 12;
}

/// Tolerance used to stop the Newton's method iterations in the quantile
/// function of the [StdNormal](crate::factors::Normal::StdNormal)
/// (used for sampling).
pub static QUANTILE_NEWTON_TOLERANCE: f64 = 0.000000001;

/// Maximum number of Newton's method iterations in the quantile function of
/// the [StdNormal](crate::factors::Normal::StdNormal). Reaching it means the
/// iteration did not converge, but the guess at that point is returned anyway
/// (it is good enough for sampling).
pub static QUANTILE_NEWTON_MAX_ITERS: u32 = 64;
