use FactorDiscretization::{
    discretize::{
        DiscretizationInterval, DiscretizationMethod, Discretizer, RoundingDiscretizer,
        UnbiasedDiscretizer, discretize,
    },
    errors::DiscretizationError,
    factors::Exponential::*,
    factors::Gamma::*,
    factors::Normal::*,
};

#[inline]
fn assert_approx_eq(a: f64, b: f64) {
    let eps: f64 = 1.0e-6;

    assert!(
        (a - b).abs() < eps,
        "assertion failed: `(left !== right)` \
         (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
        a,
        b,
        eps,
        (a - b).abs()
    );
}

#[inline]
fn assert_approx_eq_slice(obtained: &[f64], desired: &[f64]) {
    assert_eq!(
        obtained.len(),
        desired.len(),
        "assertion failed: `(obtained.len() !== desired.len())` \
         (obtained: `{:?}`, desired: `{:?}`)",
        obtained,
        desired
    );

    for (o, d) in obtained.iter().zip(desired.iter()) {
        assert_approx_eq(*o, *d);
    }
}

#[cfg(test)]
mod interval_tests {
    use super::*;

    #[test]
    fn test_invalid_ranges() {
        // to <= from
        assert_eq!(
            DiscretizationInterval::new(5.0, 5.0, 1.0).unwrap_err(),
            DiscretizationError::InvalidRange
        );
        assert_eq!(
            DiscretizationInterval::new(5.0, 0.0, 1.0).unwrap_err(),
            DiscretizationError::InvalidRange
        );

        // step <= 0
        assert_eq!(
            DiscretizationInterval::new(0.0, 5.0, 0.0).unwrap_err(),
            DiscretizationError::InvalidRange
        );
        assert_eq!(
            DiscretizationInterval::new(0.0, 5.0, -1.0).unwrap_err(),
            DiscretizationError::InvalidRange
        );

        // non-finite inputs
        assert_eq!(
            DiscretizationInterval::new(0.0, f64::INFINITY, 1.0).unwrap_err(),
            DiscretizationError::InvalidRange
        );
        assert_eq!(
            DiscretizationInterval::new(f64::NAN, 5.0, 1.0).unwrap_err(),
            DiscretizationError::InvalidRange
        );
    }

    #[test]
    fn test_grid_is_half_open() {
        // the grid never includes `to`
        let interval: DiscretizationInterval = DiscretizationInterval::new(0.0, 5.0, 1.0).unwrap();
        assert_eq!(interval.grid_points(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        let interval: DiscretizationInterval = DiscretizationInterval::new(-10.0, 10.0, 1.0).unwrap();
        assert_eq!(interval.grid_points().len(), 20);
    }

    #[test]
    fn test_grid_count_follows_increment_rule() {
        // ceil((1 - 0)/0.3) = 4 points: 0, 0.3, 0.6, 0.899...
        let interval: DiscretizationInterval = DiscretizationInterval::new(0.0, 1.0, 0.3).unwrap();
        assert_eq!(interval.grid_points().len(), 4);

        // The count is defined by the repeated-addition rule, NOT by a closed
        // formula: with step 0.1 the accumulated sum after 10 additions is
        // 0.9999999999999999 < 1.0, so an 11th point is generated.
        let interval: DiscretizationInterval = DiscretizationInterval::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(interval.grid_points().len(), 11);
    }

    #[test]
    fn test_grid_stricly_increasing() {
        let interval: DiscretizationInterval = DiscretizationInterval::new(-2.5, 7.5, 0.25).unwrap();
        let points: Vec<f64> = interval.grid_points();
        for window in points.windows(2) {
            assert!(window[0] < window[1]);
        }
    }
}

#[cfg(test)]
mod base_discretizer_tests {
    use super::*;

    #[test]
    fn test_get_labels_integral_step() {
        let normal: StdNormal = StdNormal::new();
        let discretizer: RoundingDiscretizer<StdNormal> =
            RoundingDiscretizer::new(&normal, -10.0, 10.0, 1.0).unwrap();

        let expected: Vec<&str> = vec![
            "x=-10", "x=-9", "x=-8", "x=-7", "x=-6", "x=-5", "x=-4", "x=-3", "x=-2", "x=-1",
            "x=0", "x=1", "x=2", "x=3", "x=4", "x=5", "x=6", "x=7", "x=8", "x=9",
        ];
        assert_eq!(discretizer.get_labels(), expected);

        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");
        let discretizer: RoundingDiscretizer<Gamma> =
            RoundingDiscretizer::new(&gamma, 0.0, 10.0, 1.0).unwrap();

        let expected: Vec<&str> = vec![
            "x=0", "x=1", "x=2", "x=3", "x=4", "x=5", "x=6", "x=7", "x=8", "x=9",
        ];
        assert_eq!(discretizer.get_labels(), expected);
    }

    #[test]
    fn test_get_labels_fractional_step() {
        let exponential: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let discretizer: RoundingDiscretizer<Exponential> =
            RoundingDiscretizer::new(&exponential, 0.0, 5.0, 0.5).unwrap();

        let expected: Vec<&str> = vec![
            "x=0.0", "x=0.5", "x=1.0", "x=1.5", "x=2.0", "x=2.5", "x=3.0", "x=3.5", "x=4.0",
            "x=4.5",
        ];
        assert_eq!(discretizer.get_labels(), expected);
    }

    #[test]
    fn test_labels_and_values_are_aligned() {
        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");

        let rounding: RoundingDiscretizer<Gamma> =
            RoundingDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();
        assert_eq!(
            rounding.get_labels().len(),
            rounding.get_discrete_values().len()
        );

        // the unbiased discretizer appends the synthetic endpoint label so
        // labels and masses stay index aligned
        let unbiased: UnbiasedDiscretizer<Gamma> =
            UnbiasedDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();
        assert_eq!(
            unbiased.get_labels().len(),
            unbiased.get_discrete_values().len()
        );
        assert_eq!(
            unbiased.get_labels(),
            vec!["x=0", "x=1", "x=2", "x=3", "x=4", "x=5"]
        );
    }
}

#[cfg(test)]
mod rounding_tests {
    use super::*;

    // The desired outputs have been cross checked with the
    // discretize {actuar} package in R, assuming that it gives correct
    // results. The R commands to reproduce them are included.

    #[test]
    fn test_standard_normal() {
        // library(actuar);discretize(pnorm(x), method = "rounding", from = -5, to = 5, step = 1)
        let desired: [f64; 10] = [
            3.111022e-06,
            2.292314e-04,
            5.977036e-03,
            6.059754e-02,
            2.417303e-01,
            3.829249e-01,
            2.417303e-01,
            6.059754e-02,
            5.977036e-03,
            2.292314e-04,
        ];

        let normal: StdNormal = StdNormal::new();
        let discretizer: RoundingDiscretizer<StdNormal> =
            RoundingDiscretizer::new(&normal, -5.0, 5.0, 1.0).unwrap();

        assert_approx_eq_slice(&discretizer.get_discrete_values(), &desired);
    }

    #[test]
    fn test_gamma() {
        // library(actuar);discretize(pgamma(x, 3), method = "rounding", from = 0, to = 5, step = 1)
        let desired: [f64; 5] = [0.01438768, 0.17676549, 0.26503371, 0.22296592, 0.14726913];

        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");
        let discretizer: RoundingDiscretizer<Gamma> =
            RoundingDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();

        assert_approx_eq_slice(&discretizer.get_discrete_values(), &desired);
    }

    #[test]
    fn test_exponential() {
        // library(actuar);discretize(pexp(x), method = "rounding", from = 0, to = 5, step = 0.5)
        let desired: [f64; 10] = [
            0.221199217,
            0.306434230,
            0.185861756,
            0.112730853,
            0.068374719,
            0.041471363,
            0.025153653,
            0.015256462,
            0.009253512,
            0.005612539,
        ];

        let exponential: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let discretizer: RoundingDiscretizer<Exponential> =
            RoundingDiscretizer::new(&exponential, 0.0, 5.0, 0.5).unwrap();

        assert_approx_eq_slice(&discretizer.get_discrete_values(), &desired);
    }

    #[test]
    fn test_lost_tail_probability() {
        // mass beyond the right half-edge of the last point is silently lost:
        // the values sum to less than 1 when `to` underbounds the support
        let exponential: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let discretizer: RoundingDiscretizer<Exponential> =
            RoundingDiscretizer::new(&exponential, 0.0, 5.0, 0.5).unwrap();

        let total: f64 = discretizer.get_discrete_values().iter().sum();
        assert!(total < 1.0);
        // everything up to 4.75 (the right half-edge of x=4.5) is accounted for
        use FactorDiscretization::factor_trait::ContinuousFactor;
        assert_approx_eq(total, exponential.cdf(4.75));
    }
}

#[cfg(test)]
mod unbiased_tests {
    use super::*;
    use FactorDiscretization::factor_trait::ContinuousFactor;

    // The desired outputs have been cross checked with the
    // discretize {actuar} package in R, assuming that it gives correct
    // results. The R commands to reproduce them are included.

    #[test]
    fn test_gamma() {
        // library(actuar);discretize(pgamma(x, 3), method = "unbiased", lev = levgamma(x, 3), from = 0, to = 5, step = 1)
        let desired: [f64; 6] = [
            0.02333693, 0.17134370, 0.25942725, 0.22176384, 0.14794879, 0.05152747,
        ];

        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");
        let discretizer: UnbiasedDiscretizer<Gamma> =
            UnbiasedDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();

        assert_approx_eq_slice(&discretizer.get_discrete_values(), &desired);
    }

    #[test]
    fn test_exponential() {
        // library(actuar);discretize(pexp(x), method = "unbiased", lev = levexp(x), from = 0, to = 5, step = 0.5)
        let desired: [f64; 11] = [
            0.213061319,
            0.309636243,
            0.187803875,
            0.113908808,
            0.069089185,
            0.041904709,
            0.025416491,
            0.015415881,
            0.009350204,
            0.005671186,
            0.002004152,
        ];

        let exponential: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let discretizer: UnbiasedDiscretizer<Exponential> =
            UnbiasedDiscretizer::new(&exponential, 0.0, 5.0, 0.5).unwrap();

        assert_approx_eq_slice(&discretizer.get_discrete_values(), &desired);
    }

    #[test]
    fn test_mass_conservation() {
        // the masses always sum to cdf(to) - cdf(from)
        let exponential: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let discretizer: UnbiasedDiscretizer<Exponential> =
            UnbiasedDiscretizer::new(&exponential, 0.0, 5.0, 0.5).unwrap();

        let total: f64 = discretizer.get_discrete_values().iter().sum();
        assert_approx_eq(total, exponential.cdf(5.0) - exponential.cdf(0.0));
    }

    #[test]
    fn test_mean_preservation_covered_support() {
        // when the interval covers (essentially) the whole support, the mean
        // of the discretized distribution equals the mean of the factor

        {
            // Exponential(1): mean = 1, support covered up to cdf(40) ~= 1 - 4e-18
            let exponential: Exponential =
                Exponential::new(1.0).expect("Parameter should be valid");
            let discretizer: UnbiasedDiscretizer<Exponential> =
                UnbiasedDiscretizer::new(&exponential, 0.0, 40.0, 0.5).unwrap();

            let masses: Vec<f64> = discretizer.get_discrete_values();
            let mut points: Vec<f64> = discretizer.get_interval().grid_points();
            points.push(discretizer.get_interval().get_to());

            let discrete_mean: f64 = masses.iter().zip(points.iter()).map(|(m, x)| m * x).sum();
            assert_approx_eq(discrete_mean, exponential.expected_value().unwrap());
        }

        {
            // Gamma(3, 1): mean = 3
            let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");
            let discretizer: UnbiasedDiscretizer<Gamma> =
                UnbiasedDiscretizer::new(&gamma, 0.0, 30.0, 1.0).unwrap();

            let masses: Vec<f64> = discretizer.get_discrete_values();
            let mut points: Vec<f64> = discretizer.get_interval().grid_points();
            points.push(discretizer.get_interval().get_to());

            let discrete_mean: f64 = masses.iter().zip(points.iter()).map(|(m, x)| m * x).sum();
            assert_approx_eq(discrete_mean, gamma.expected_value().unwrap());
        }
    }

    #[test]
    fn test_mean_preservation_partial_support() {
        // over a partial interval the preserved quantity is the mean of the
        // values that fall inside it: E[X * indicator(from < X <= to)]
        let exponential: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let discretizer: UnbiasedDiscretizer<Exponential> =
            UnbiasedDiscretizer::new(&exponential, 0.0, 5.0, 0.5).unwrap();

        let masses: Vec<f64> = discretizer.get_discrete_values();
        let mut points: Vec<f64> = discretizer.get_interval().grid_points();
        points.push(discretizer.get_interval().get_to());

        let discrete_mean: f64 = masses.iter().zip(points.iter()).map(|(m, x)| m * x).sum();

        // E[X * indicator(X <= 5)] = lev(5) - 5 * (1 - cdf(5))
        let partial_mean: f64 =
            exponential.limited_expected_value(5.0) - 5.0 * (1.0 - exponential.cdf(5.0));
        assert_approx_eq(discrete_mean, partial_mean);
    }
}

#[cfg(test)]
mod discretize_function_tests {
    use super::*;

    #[test]
    fn test_default_method_is_rounding() {
        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");

        let values: Vec<f64> = discretize()
            .factor(&gamma)
            .from(0.0)
            .to(5.0)
            .step(1.0)
            .call()
            .unwrap();

        let reference: RoundingDiscretizer<Gamma> =
            RoundingDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();
        assert_eq!(values, reference.get_discrete_values());
    }

    #[test]
    fn test_explicit_unbiased_method() {
        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");

        let values: Vec<f64> = discretize()
            .factor(&gamma)
            .from(0.0)
            .to(5.0)
            .step(1.0)
            .method(DiscretizationMethod::Unbiased)
            .call()
            .unwrap();

        let reference: UnbiasedDiscretizer<Gamma> =
            UnbiasedDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();
        assert_eq!(values, reference.get_discrete_values());
    }

    #[test]
    fn test_invalid_range_is_propagated() {
        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");

        let result: Result<Vec<f64>, DiscretizationError> =
            discretize().factor(&gamma).from(5.0).to(0.0).step(1.0).call();
        assert_eq!(result.unwrap_err(), DiscretizationError::InvalidRange);
    }
}

#[cfg(test)]
mod idempotence_tests {
    use super::*;

    #[test]
    fn test_repeated_calls_return_identical_values() {
        let gamma: Gamma = Gamma::new(3.0, 1.0).expect("Parameters should be valid");

        let rounding: RoundingDiscretizer<Gamma> =
            RoundingDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();
        assert_eq!(rounding.get_discrete_values(), rounding.get_discrete_values());
        assert_eq!(rounding.get_labels(), rounding.get_labels());

        let unbiased: UnbiasedDiscretizer<Gamma> =
            UnbiasedDiscretizer::new(&gamma, 0.0, 5.0, 1.0).unwrap();
        assert_eq!(unbiased.get_discrete_values(), unbiased.get_discrete_values());
        assert_eq!(unbiased.get_labels(), unbiased.get_labels());
    }
}
