//! This script contains the interface used to comunicate with the continuous
//! factors.
//!
//! A continuous factor is just a continuous probability distribution given by
//! it's density function and it's support. The discretizers in
//! [crate::discretize] only talk to the factor trough this trait.

use crate::configuration::integration::DEFAULT_INTEGRATION_NUM_STEPS;
use crate::domain::ContinuousDomain;
use crate::euclid::{self, IntegrationType};

/// The trait for any continuous factor.
///
/// None of the provided methods are guaranteed to work if the implemented
/// [ContinuousFactor::pdf] is NOT a
/// [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve.
pub trait ContinuousFactor {
    // Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the factor at point `x`.
    ///
    /// The PDF is assumed to be a valid probability distribution. It must fullfill:
    ///  - `0.0 <= pdf(x)`
    ///  - It is normalized. (It has an area under the curve of `1.0`)
    ///  - As `x` approaches `+-inf` (if inside the domain), `pdf(x)` should
    ///     tend to `0.0`.
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich
    /// points the pdf has non-zero density. The returned domain should be
    /// constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    // Provided methods:
    // Manual implementation for a specific factor is recommended.

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function): the integral of the pdf from the
    /// lower bound of the domain (or `-inf` if there is none) until `x`.
    ///
    /// If the function is evaluated outside the domain of the pdf, it will
    /// return either `0.0` or `1.0`. **Panicks** if `x` is a NaN.
    ///
    /// Note that the deafult implemetation requieres numerical integration and
    /// may be expensive.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the cdf function with a NaN value. \n");
        }

        let bounds: (f64, f64) = self.get_domain().get_bounds();
        if x <= bounds.0 {
            return 0.0;
        }
        let upper: f64 = x.min(bounds.1);

        if bounds.0.is_finite() {
            return euclid::simpson_integration(
                |t| self.pdf(t),
                bounds.0,
                upper,
                DEFAULT_INTEGRATION_NUM_STEPS,
            );
        }

        /*
            The lower bound is infinite, so we need a change of variable
            before integrating numerically:

                For -infinite to a (const):
            integral {-inf -> a} f(x) dx =
                        integral {0 -> 1} f(a - (1 - t)/t)  /  t^2  dt

            The integrand has a singularity at t = 0, but since the pdf must
            tend to 0.0 towards -inf (faster than 1/t^2 grows), we can just
            evaluate it to 0.0 there.
        */
        return euclid::simpson_integration(
            |t| {
                if t <= 0.0 {
                    return 0.0;
                }
                let original_x: f64 = upper - (1.0 - t) / t;
                return self.pdf(original_x) / (t * t);
            },
            0.0,
            1.0,
            DEFAULT_INTEGRATION_NUM_STEPS,
        );
    }

    /// Evaluates the [limited expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// `E[min(X, x)]`: the mean of the factor when all the values greater than
    /// `x` are capped to `x`.
    ///
    /// `lev(x) = integral {lb -> x} t * pdf(t) dt + x * (1 - cdf(x))`
    ///
    /// The [UnbiasedDiscretizer](crate::discretize::UnbiasedDiscretizer) uses
    /// this function to preserve the mean of the discretized factor.
    /// **Panicks** if `x` is a NaN or if `x` is infinite (capping at an
    /// infinite value is not meaningfull, use
    /// [ContinuousFactor::expected_value] instead).
    ///
    /// Note that the deafult implemetation requieres numerical integration and
    /// may be expensive.
    fn limited_expected_value(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the limited expected value with a NaN value. \n");
        }
        if x.is_infinite() {
            panic!("Tried to evaluate the limited expected value with an infinite value. \n");
        }

        let bounds: (f64, f64) = self.get_domain().get_bounds();
        if x <= bounds.0 {
            // min(X, x) = x (with probability 1)
            return x;
        }
        let upper: f64 = x.min(bounds.1);

        let partial_mean: f64 = if bounds.0.is_finite() {
            euclid::simpson_integration(
                |t| t * self.pdf(t),
                bounds.0,
                upper,
                DEFAULT_INTEGRATION_NUM_STEPS,
            )
        } else {
            // same change of variable as in [ContinuousFactor::cdf]
            euclid::simpson_integration(
                |t| {
                    if t <= 0.0 {
                        return 0.0;
                    }
                    let original_x: f64 = upper - (1.0 - t) / t;
                    return original_x * self.pdf(original_x) / (t * t);
                },
                0.0,
                1.0,
                DEFAULT_INTEGRATION_NUM_STEPS,
            )
        };

        return partial_mean + x * (1.0 - self.cdf(x));
    }

    /// Returns the [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// (the mean) of the factor, if it exists.
    ///
    /// The deafult implemetation integrates `t * pdf(t)` numerically over the
    /// whole domain. If the distribution has no mean (for example the
    /// [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution)),
    /// the returned value is meaningless; override this method with `None` in
    /// that case.
    fn expected_value(&self) -> Option<f64> {
        let bounds: (f64, f64) = self.get_domain().get_bounds();
        let integration_type: IntegrationType = IntegrationType::from_bounds(bounds);

        /*
            To compute integrals over an infinite range, we will perform a special
            [numerial integration](https://en.wikipedia.org/wiki/Numerical_integration#Integrals_over_infinite_intervals).
            (change of variable)

                For a (const) to infinite:
            integral {a -> inf} f(x) dx =
                        integral {0 -> 1} f(a + (1 - t)/t)  /  t^2  dt

                For -infinite to a (const):
            integral {-inf -> a} f(x) dx =
                        integral {0 -> 1} f(a - (1 - t)/t)  /  t^2  dt

                For -infinite to infinite:
            integral {-inf -> inf} f(x) dx =
                        integral {-1 -> 1} f( t / (1-t^2) ) * (1 + t^2) / (1 - t^2)^2  dt

            And "just" compute the new integral (taking care of the singularities
            at the endpoints, where the integrand must tend to 0.0 for any pdf
            with a finite mean).
        */

        let integrand = |t: f64| t * self.pdf(t);

        let mean: f64 = match integration_type {
            IntegrationType::Finite => euclid::simpson_integration(
                integrand,
                bounds.0,
                bounds.1,
                DEFAULT_INTEGRATION_NUM_STEPS,
            ),
            IntegrationType::ConstToInfinite => euclid::simpson_integration(
                |t| {
                    if t <= 0.0 {
                        return 0.0;
                    }
                    let x: f64 = bounds.0 + (1.0 - t) / t;
                    return integrand(x) / (t * t);
                },
                0.0,
                1.0,
                DEFAULT_INTEGRATION_NUM_STEPS,
            ),
            IntegrationType::InfiniteToConst => euclid::simpson_integration(
                |t| {
                    if t <= 0.0 {
                        return 0.0;
                    }
                    let x: f64 = bounds.1 - (1.0 - t) / t;
                    return integrand(x) / (t * t);
                },
                0.0,
                1.0,
                DEFAULT_INTEGRATION_NUM_STEPS,
            ),
            IntegrationType::FullInfinite => euclid::simpson_integration(
                |t| {
                    let u: f64 = 1.0 - t * t;
                    if u <= 0.0 {
                        return 0.0;
                    }
                    let x: f64 = t / u;
                    return integrand(x) * (1.0 + t * t) / (u * u);
                },
                -1.0,
                1.0,
                DEFAULT_INTEGRATION_NUM_STEPS,
            ),
        };

        return Some(mean);
    }
}
