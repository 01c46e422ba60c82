//! # Exponential factor
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! The Exponential distribution has a parameter: the rate `lambda` wich
//! determines how fast do events happen. Both the cdf and the limited
//! expected value have simple closed forms, so discretizing an [Exponential]
//! is cheap with either policy.

use rand::Rng;

use crate::{
    domain::ContinuousDomain,
    errors::DiscretizationError,
    factor_trait::ContinuousFactor,
};

/// The support of the exponential distribution: `[0, inf)`.
pub const EXPONENTIAL_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

/// An iterator that generates infinite samples form the exponential
/// distribution faster than normally calling [Exponential::sample] many times.
pub struct ExponentialGenerator {
    inv_lambda: f64,
    rng: rand::rngs::ThreadRng,
}

impl Exponential {
    /// Creates a new [Exponential] distribution. It is requiered that
    /// `0.0 < lambda` (and finite) or an error will be returned.
    pub fn new(lambda: f64) -> Result<Exponential, DiscretizationError> {
        if lambda.is_nan() {
            return Err(DiscretizationError::NanErr);
        }
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(DiscretizationError::InvalidNumber);
        }

        return Ok(Exponential { lambda });
    }

    pub fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// Samples the distribution at random with
    /// [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling).
    pub fn sample(&self) -> f64 {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        let r: f64 = rng.random();
        return -r.ln() / self.lambda;
    }

    pub fn sample_multiple(&self, n: usize) -> Vec<f64> {
        return self.iter().take(n).collect::<Vec<f64>>();
    }

    /// Returns an iterator that can generate [Exponential] samples even faster
    /// than normally calling [Exponential::sample] many times. Uscefull if you
    /// don't know exacly how many values you want for
    /// [Exponential::sample_multiple].
    ///
    /// It avoids the heap allocation of [Exponential::sample_multiple] and
    /// the repeated initialitzation processes in [Exponential::sample].
    pub fn iter(&self) -> ExponentialGenerator {
        return ExponentialGenerator {
            inv_lambda: 1.0 / self.lambda,
            rng: rand::rng(),
        };
    }
}

impl ContinuousFactor for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        return self.lambda * (-self.lambda * x).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &EXPONENTIAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the cdf of an Exponential with a NaN value. \n");
        }
        if x <= 0.0 {
            return 0.0;
        }
        return 1.0 - (-self.lambda * x).exp();
    }

    fn limited_expected_value(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!(
                "Tried to evaluate the limited expected value of an Exponential with a NaN value. \n"
            );
        }
        if x <= 0.0 {
            // min(X, x) = x (with probability 1)
            return x;
        }

        // E[min(X, x)] = (1 - exp(-lambda * x)) / lambda = cdf(x)/lambda
        return (1.0 - (-self.lambda * x).exp()) / self.lambda;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(1.0 / self.lambda);
    }
}

impl Iterator for ExponentialGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let r: f64 = self.rng.random();
        return Some(-r.ln() * self.inv_lambda);
    }
}
