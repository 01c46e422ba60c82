//! # Gamma factor
//!
//! The [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
//! is a continuous probability distribution.
//!
//! It has 2 parameters, but there are 2 ways to model it:
//!
//! 1. `alpha` or shape
//! 2. `theta` or scale
//!
//! The other way is:
//!
//! 1. `alpha` or shape
//! 2. `lambda` or rate
//!
//! `theta = 1/lambda`
//!
//! All parameters (in every possible parametritzations) are stricly positive.
//! We use the shape + scale parametritzation.
//!

use rand::Rng;

use crate::{
    domain::ContinuousDomain,
    errors::DiscretizationError,
    euclid,
    factor_trait::ContinuousFactor,
    factors::Normal::StdNormal,
};

/// The support of the gamma distribution: `[0, inf)`.
pub const GAMMA_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// A [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {
    /// alpha or shape
    alpha: f64,
    /// theta or scale
    theta: f64,
    normalitzation_constant: f64,
}

impl Gamma {
    /// Creates a new [Gamma] distribution with parameters `alpha` and `theta`.
    ///
    /// It will return an error under the following conditions:
    ///  - `alpha` is `+-inf` or a NaN
    ///  - `theta` is `+-inf` or a NaN
    ///  - `alpha <= 0.0`
    ///  - `theta <= 0.0`
    ///  - The values for `alpha` and `theta` are too large to model properly
    ///      - This means that a [f64] value is not precise enough.
    ///
    pub fn new(alpha: f64, theta: f64) -> Result<Gamma, DiscretizationError> {
        if alpha.is_nan() || theta.is_nan() {
            return Err(DiscretizationError::NanErr);
        }
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(DiscretizationError::InvalidNumber);
        }
        if !theta.is_finite() || theta <= 0.0 {
            return Err(DiscretizationError::InvalidNumber);
        }

        let norm_const: f64 = euclid::gamma(alpha) * theta.powf(alpha);

        if !norm_const.is_finite() {
            // we do not have enough precision to do the computations
            return Err(DiscretizationError::NumericalError);
        }

        return Ok(Gamma {
            alpha,
            theta,
            normalitzation_constant: 1.0 / norm_const,
        });
    }

    /// Get the parameter alpha
    pub fn get_alpha(&self) -> f64 {
        return self.alpha;
    }

    pub fn get_theta(&self) -> f64 {
        return self.theta;
    }

    /// Samples the distribution at random with the
    /// [Marsaglia-Tsang method](https://en.wikipedia.org/wiki/Gamma_distribution#Random_variate_generation).
    pub fn sample(&self) -> f64 {
        return self.theta * Gamma::sample_standard_shape(self.alpha);
    }

    pub fn sample_multiple(&self, n: usize) -> Vec<f64> {
        return (0..n).map(|_| self.sample()).collect::<Vec<f64>>();
    }

    /// Marsaglia-Tsang sampling of a Gamma with shape `alpha` and scale `1.0`.
    fn sample_standard_shape(alpha: f64) -> f64 {
        let mut rng: rand::rngs::ThreadRng = rand::rng();

        if alpha < 1.0 {
            // boosting: gamma(alpha) = gamma(alpha + 1) * U^(1/alpha)
            let u: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
            return Gamma::sample_standard_shape(alpha + 1.0) * u.powf(1.0 / alpha);
        }

        let std_normal: StdNormal = StdNormal::new();
        let b: f64 = alpha - (1.0 / 3.0);
        let c: f64 = 1.0 / (3.0 * b.sqrt());

        loop {
            let z: f64 = std_normal.sample();
            let v: f64 = {
                let base: f64 = 1.0 + c * z;
                base * base * base
            };
            if v <= 0.0 {
                continue;
            }

            let u: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
            if u.ln() < 0.5 * z * z + b - b * v + b * v.ln() {
                return b * v;
            }
        }
    }
}

impl ContinuousFactor for Gamma {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let shape: f64 = x.powf(self.alpha - 1.0) * (-x / self.theta).exp();
        return self.normalitzation_constant * shape;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &GAMMA_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the cdf function of a Gamma with a NaN value. \n");
        }
        if x <= 0.0 {
            return 0.0;
        }

        // The cdf of a Gamma is the regularized lower incomplete gamma function
        return euclid::regularized_lower_gamma(self.alpha, x / self.theta);
    }

    fn limited_expected_value(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!(
                "Tried to evaluate the limited expected value of a Gamma with a NaN value. \n"
            );
        }
        if x <= 0.0 {
            // min(X, x) = x (with probability 1)
            return x;
        }

        /*
            E[min(X, x)] = alpha * theta * P(alpha + 1, x/theta)
                            + x * (1 - P(alpha, x/theta))

            where P is the regularized lower incomplete gamma function
            (the same closed form as `levgamma` in the actuar R package).
        */
        let scaled: f64 = x / self.theta;
        let partial_mean: f64 =
            self.alpha * self.theta * euclid::regularized_lower_gamma(self.alpha + 1.0, scaled);
        return partial_mean + x * (1.0 - euclid::regularized_lower_gamma(self.alpha, scaled));
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.alpha * self.theta);
    }
}
