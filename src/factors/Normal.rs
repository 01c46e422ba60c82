//! # Normal factor
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a very important continuous probability distribution.
//!
//! We implement the [Normal] distribution and the [StdNormal], wich is the same
//! as [Normal] but for fixed `mean = 0.0` and `std_dev = 1.0`. [Normal] is a
//! thin wrapper: every query is forwarded to [StdNormal] after standarizing
//! the input.
//!

use rand::Rng;
use std::f64::consts::PI;

use crate::{
    configuration::{QUANTILE_NEWTON_MAX_ITERS, QUANTILE_NEWTON_TOLERANCE},
    domain::ContinuousDomain,
    errors::DiscretizationError,
    euclid,
    factor_trait::ContinuousFactor,
};

/*
    Coefitients for the (aprox) computation of the cdf of the std normal by:

    Dia, Yaya D. (2023). "Approximate Incomplete Integrals, Application to
    Complementary Error Function". SSRN. doi:10.2139/ssrn.4487559.

    The precision of this method is extremly high: an error of less than
    `~1.1 * 10^-16 ~= 2^-53`. Considering that
    `f64::EPSILON = 2.220446049250313e-16 ~= 2.22 * 10^-16`, this solution
    may as well be considered exact if we are working with `f64`.
*/
const B_ZERO_COEFITIENT: f64 = 2.92678600515804815402;
const B_ONE_COEFITIENTS: [f64; 5] = [
    8.97280659046817350354,
    10.27157061171363078863,
    12.72323261907760928036,
    16.88639562007936907786,
    24.12333774572479110372,
];

const B_TWO_COEFITIENTS: [f64; 5] = [
    5.81582518933527390512,
    5.70347935898051436684,
    5.51862483025707963145,
    5.26184239579604207321,
    4.92081346632882032881,
];

const C_ONE_COEFITIENTS: [f64; 5] = [
    11.61511226260603247078,
    18.25323235347346524796,
    18.38871225773938486923,
    18.61193318971775795045,
    24.14804072812762821134,
];

const C_TWO_COEFITIENTS: [f64; 5] = [
    3.83362947800146179416,
    7.30756258553673541139,
    8.42742300458043240405,
    5.66479518878470764762,
    4.91396098895240075156,
];

/// The support of the normal distribution: all the real numbers.
pub const NORMAL_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

/// A [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
/// with `mean = 0.0` and `std_dev = 1.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StdNormal {}

/// A [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    std_normal: StdNormal,
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl StdNormal {
    /// Create a Standard normal distribution. Has a mean of `0.0` and a
    /// standard deviation of `1.0`.
    pub const fn new() -> StdNormal {
        return StdNormal {};
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function)
    /// (the inverse of [ContinuousFactor::cdf]).
    ///  - if `x` is outside the range (0.0, 1.0), the bounds of the domain
    ///     (`+-inf`) will be returned.
    ///  - **Panicks** if `x` is a NaN.
    ///
    /// Uses [Newton's method](https://en.wikipedia.org/wiki/Newton%27s_method)
    /// over the (essentially exact) [ContinuousFactor::cdf].
    pub fn quantile(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the quantile function of StdNormal with a NaN value. \n");
        }

        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if 1.0 <= x {
            return f64::INFINITY;
        }

        /*
            Newton's method: for finding a root for a function f(x)

            x_n+1 = x_n - f(x_n)/f'(x_n)

            In our particular case:

            g_n+1 = g_n - (cdf(g_n) - q)/pdf(g_n)

            knowing that:
            pdf(x) = 1/sqrt(2*pi) * exp(-0.5 * x^2)
            1/pdf(x) = sqrt(2*pi) * exp(0.5 * x^2)

            Therefore:
            g_n+1 = g_n + (q - cdf(g_n)) * sqrt(2*pi) * exp(0.5 * g_n * g_n)
        */

        let sqrt_2_pi: f64 = (2.0 * PI).sqrt();
        let mut guess: f64 = sqrt_2_pi * (x - 0.5);
        // ^initial guess, 1 deg. Taylor series of quantile(x) at x = 0.5

        for _ in 0..QUANTILE_NEWTON_MAX_ITERS {
            let inv_pdf: f64 = sqrt_2_pi * (0.5 * guess * guess).exp();
            let delta: f64 = (x - self.cdf(guess)) * inv_pdf;
            guess = guess + delta;

            if delta.abs() < QUANTILE_NEWTON_TOLERANCE {
                break;
            }
        }

        return guess;
    }

    /// Samples the distribution at random with
    /// [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling).
    pub fn sample(&self) -> f64 {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        let r: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
        // ^avoid the degenerate quantile at exacly 0.0
        return self.quantile(r);
    }

    pub fn sample_multiple(&self, n: usize) -> Vec<f64> {
        return (0..n).map(|_| self.sample()).collect::<Vec<f64>>();
    }
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, DiscretizationError> {
        if mean.is_nan() || standard_deviation.is_nan() {
            return Err(DiscretizationError::NanErr);
        }
        if !mean.is_finite() || !standard_deviation.is_finite() || standard_deviation <= 0.0 {
            return Err(DiscretizationError::InvalidNumber);
        }

        return Ok(Normal {
            std_normal: StdNormal::new(),
            mean,
            standard_deviation,
        });
    }

    /// Returns the mean, the first parameter of the normal distribution.
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal
    /// distribution.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    pub fn sample(&self) -> f64 {
        return self.mean + self.standard_deviation * self.std_normal.sample();
    }

    pub fn sample_multiple(&self, n: usize) -> Vec<f64> {
        return (0..n).map(|_| self.sample()).collect::<Vec<f64>>();
    }
}

impl ContinuousFactor for StdNormal {
    fn pdf(&self, x: f64) -> f64 {
        return euclid::INV_SQRT_2_PI * (-x * x * 0.5).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &NORMAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the cdf function of StdNormal with a NaN value. \n");
        }

        /*
            Approximation of the complementary cdf `1 - cdf(x)` (for `0 <= x`)
            by Dia (2023) (see the note on the coefitients above):

            1 - cdf(x) = pdf(x) / (x + b_0) * product {i} of
                            (x^2 + c_2[i]*x + c_1[i]) / (x^2 + b_2[i]*x + b_1[i])

            For negative `x` we use the symetry `cdf(x) = 1 - cdf(-x)`.

            To evaluate the quadratics we will do Horner's rule for efficiency:
            https://en.wikipedia.org/wiki/Polynomial_evaluation#Horner's_rule
            using `f64::mul_add` (`x.mul_add(a, b) = x * a + b`).
        */

        let (point, flipped): (f64, bool) = if x < 0.0 { (-x, true) } else { (x, false) };

        let mut numerator: f64 = 1.0;
        let mut denominator: f64 = point + B_ZERO_COEFITIENT;
        for i in 0..5 {
            numerator = numerator * (point + C_TWO_COEFITIENTS[i]).mul_add(point, C_ONE_COEFITIENTS[i]);
            denominator = denominator * (point + B_TWO_COEFITIENTS[i]).mul_add(point, B_ONE_COEFITIENTS[i]);
        }

        // `complementary` = `1 - cdf(|x|)`
        let complementary: f64 = self.pdf(point) * numerator / denominator;

        return if flipped {
            complementary
        } else {
            1.0 - complementary
        };
    }

    fn limited_expected_value(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!(
                "Tried to evaluate the limited expected value of StdNormal with a NaN value. \n"
            );
        }

        // E[min(Z, x)] = -pdf(x) + x * (1 - cdf(x))
        return -self.pdf(x) + x * (1.0 - self.cdf(x));
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.0);
    }
}

impl ContinuousFactor for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z: f64 = (x - self.mean) / self.standard_deviation;
        return self.std_normal.pdf(z) / self.standard_deviation;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &NORMAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!("Tried to evaluate the cdf function of a Normal with a NaN value. \n");
        }
        let z: f64 = (x - self.mean) / self.standard_deviation;
        return self.std_normal.cdf(z);
    }

    fn limited_expected_value(&self, x: f64) -> f64 {
        if x.is_nan() {
            // x is not valid
            panic!(
                "Tried to evaluate the limited expected value of a Normal with a NaN value. \n"
            );
        }

        // X = mean + std_dev * Z, therefore (for 0 < std_dev):
        // min(X, x) = mean + std_dev * min(Z, z) with z = (x - mean)/std_dev
        let z: f64 = (x - self.mean) / self.standard_deviation;
        return self.mean + self.standard_deviation * self.std_normal.limited_expected_value(z);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.mean);
    }
}
