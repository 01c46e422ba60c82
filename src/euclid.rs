//! Euclid contains uscefull math functions shared by the factors and the
//! deafult numerical implementations in [crate::factor_trait].

/// `1/sqrt(2*pi)`, the normalitzation constant of the standard normal pdf.
pub const INV_SQRT_2_PI: f64 = 0.39894228040143267794;

/// Indicates how big is the range to integrate.
///
/// Mainly ised for the deafult numerical implementations in
/// [crate::factor_trait], wich need to know if a change of variables is
/// requiered before applying [simpson_integration].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationType {
    /// closed interval: `[a, b]`
    Finite,
    /// interval with infinite negative side: `[-inf, b)`
    InfiniteToConst,
    /// interval with infinite positive side: `(a, inf]`
    ConstToInfinite,
    /// interval with both sides infinite: `(-inf, inf)`
    FullInfinite,
}

impl IntegrationType {
    #[must_use]
    pub fn from_bounds(bounds: (f64, f64)) -> IntegrationType {
        match (bounds.0.is_finite(), bounds.1.is_finite()) {
            (true, true) => IntegrationType::Finite,
            (false, true) => IntegrationType::InfiniteToConst,
            (true, false) => IntegrationType::ConstToInfinite,
            (false, false) => IntegrationType::FullInfinite,
        }
    }
}

/// Numerical integration of `func` in the finite interval `[a, b]` with the
/// [composite Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule).
///
/// `num_steps` is the number of subdivisions of `[a, b]` and must be even
/// (if it is odd, 1 more subdivision will be used).
///
/// If the interval to integrate is infinite, perform the corresponding change
/// of variables first (see the plan in [crate::factor_trait]) and then call
/// this function with the transformed (finite) interval.
pub fn simpson_integration(func: impl Fn(f64) -> f64, a: f64, b: f64, num_steps: usize) -> f64 {
    let num_steps: usize = if num_steps & 1 == 1 {
        num_steps + 1
    } else {
        num_steps
    };

    let step_length: f64 = (b - a) / (num_steps as f64);

    let mut accumulator: f64 = func(a) + func(b);
    for i in 1..num_steps {
        let x: f64 = a + step_length * (i as f64);
        let weight: f64 = if i & 1 == 1 { 4.0 } else { 2.0 };
        accumulator = accumulator + weight * func(x);
    }

    return accumulator * step_length / 3.0;
}

/// The natural logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function),
/// `ln(gamma(x))`, computed with the
/// [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// (g = 7).
///
/// The relative error is less than `2 * 10^-10` for positive `x`.
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    const LANCZOS_COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // Reflection formula: gamma(x) * gamma(1-x) = pi/sin(pi*x)
        let pi: f64 = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let z: f64 = x - 1.0;
    let mut sum: f64 = LANCZOS_COEFFICIENTS[0];
    for (i, coefficient) in LANCZOS_COEFFICIENTS[1..].iter().enumerate() {
        sum = sum + coefficient / (z + (i as f64) + 1.0);
    }

    let t: f64 = z + G + 0.5;
    return 0.5 * (2.0 * std::f64::consts::PI).ln() + (z + 0.5) * t.ln() - t + sum.ln();
}

/// The [gamma function](https://en.wikipedia.org/wiki/Gamma_function).
///
/// Computed trough [ln_gamma], so it is only valid for positive `x`.
#[must_use]
pub fn gamma(x: f64) -> f64 {
    return ln_gamma(x).exp();
}

/// The [regularized lower incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function#Regularized_gamma_functions_and_Poisson_random_variables)
/// `P(a, x) = lower_gamma(a, x) / gamma(a)`.
///
/// `P(a, x)` is the cdf of a [Gamma](crate::factors::Gamma) distribution with
/// shape `a` and scale `1.0` evaluated at `x`. Requieres `0.0 < a` and
/// `0.0 <= x`.
///
/// Uses the series expansion for `x < a + 1` and the continued fraction
/// (with [Lentz's algorithm](https://en.wikipedia.org/wiki/Lentz%27s_algorithm))
/// otherwise, as both converge fast in their respective regions.
#[must_use]
pub fn regularized_lower_gamma(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }

    if x < a + 1.0 {
        return lower_gamma_series(a, x);
    }
    return 1.0 - upper_gamma_continued_fraction(a, x);
}

/// Series expansion of `P(a, x)`. Converges fast for `x < a + 1`.
fn lower_gamma_series(a: f64, x: f64) -> f64 {
    let max_iters: u32 = 256;
    let tolerance: f64 = f64::EPSILON;

    let mut ap: f64 = a;
    let mut term: f64 = 1.0 / a;
    let mut sum: f64 = term;

    for _ in 0..max_iters {
        ap = ap + 1.0;
        term = term * x / ap;
        sum = sum + term;
        if term.abs() < sum.abs() * tolerance {
            break;
        }
    }

    return sum * (-x + a * x.ln() - ln_gamma(a)).exp();
}

/// Continued fraction expansion of `Q(a, x) = 1 - P(a, x)`.
/// Converges fast for `a + 1 <= x`.
fn upper_gamma_continued_fraction(a: f64, x: f64) -> f64 {
    let max_iters: u32 = 256;
    let tolerance: f64 = f64::EPSILON;
    // tiny number to avoid divisions by 0 in Lentz's algorithm
    let floor: f64 = f64::MIN_POSITIVE / f64::EPSILON;

    let mut b: f64 = x + 1.0 - a;
    let mut c: f64 = 1.0 / floor;
    let mut d: f64 = 1.0 / b;
    let mut h: f64 = d;

    let mut i: f64 = 1.0;
    for _ in 0..max_iters {
        let an: f64 = -i * (i - a);
        b = b + 2.0;

        d = an * d + b;
        if d.abs() < floor {
            d = floor;
        }

        c = b + an / c;
        if c.abs() < floor {
            c = floor;
        }

        d = 1.0 / d;
        let delta: f64 = d * c;
        h = h * delta;

        if (delta - 1.0).abs() < tolerance {
            break;
        }
        i = i + 1.0;
    }

    return (-x + a * x.ln() - ln_gamma(a)).exp() * h;
}
