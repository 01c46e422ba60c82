//! # Discretization of continuous factors
//!
//! This module turns a continuous factor (see [crate::factor_trait]) into a
//! finite sequence of probability masses placed on equally spaced points, so
//! the factor can be used as if it were a discrete distribution.
//!
//! There are 2 discretization policies:
//!
//!  - [RoundingDiscretizer]: each grid point receives the probability that the
//!     factor assigns to the step-sized bin centered on it. This is the
//!     "rounding" method from the actuarial literature and only needs the cdf.
//!  - [UnbiasedDiscretizer]: the masses are chosen so that the mean of the
//!     discretized distribution matches the mean of the continuous factor over
//!     the covered interval (a first moment preserving quadrature). Needs the
//!     cdf and the limited expected value.
//!
//! Both read the factor trough an immutable borrow and compute everything on
//! demand: there is no cached state, so calling the methods twice always
//! returns the same values.

use crate::errors::DiscretizationError;
use crate::factor_trait::ContinuousFactor;

/// The interval `[from, to)` to discretize and the spacing of the grid
/// points inside it.
///
/// The grid is the sequence `x_i = from + i*step` for `i = 0, 1, 2, ...`
/// while `x_i < to` (half-open on the right). The points are always generated
/// by repeated addition, NOT with a closed formula like
/// `num_points = ceil((to - from)/step)`: the 2 options can disagree by one
/// point when floating point noise places the last point exactly on `to`,
/// and the repeated addition is the behaviour everything else in this module
/// (labels and masses alike) must stay aligned with.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizationInterval {
    from: f64,
    to: f64,
    step: f64,
}

impl DiscretizationInterval {
    /// Creates a new [DiscretizationInterval].
    ///
    /// It will return [DiscretizationError::InvalidRange] under the following
    /// conditions:
    ///  - any of `from`, `to`, `step` is `+-inf` or a NaN
    ///  - `to <= from`
    ///  - `step <= 0.0`
    pub fn new(from: f64, to: f64, step: f64) -> Result<DiscretizationInterval, DiscretizationError> {
        if !from.is_finite() || !to.is_finite() || !step.is_finite() {
            return Err(DiscretizationError::InvalidRange);
        }
        if to <= from {
            return Err(DiscretizationError::InvalidRange);
        }
        if step <= 0.0 {
            return Err(DiscretizationError::InvalidRange);
        }

        return Ok(DiscretizationInterval { from, to, step });
    }

    pub const fn get_from(&self) -> f64 {
        return self.from;
    }

    pub const fn get_to(&self) -> f64 {
        return self.to;
    }

    pub const fn get_step(&self) -> f64 {
        return self.step;
    }

    /// Returns the grid points `from, from + step, from + 2*step, ...`
    /// (all of them stricly less than `to`).
    #[must_use]
    pub fn grid_points(&self) -> Vec<f64> {
        let mut points: Vec<f64> = Vec::new();
        let mut x: f64 = self.from;
        while x < self.to {
            points.push(x);
            x = x + self.step;
        }
        return points;
    }

    /// Renders a single grid point as a label.
    ///
    /// If both `from` and `step` are integral numbers, every grid point is
    /// integral too and it is rendered without a fractional part (`x=-10`).
    /// Otherwise the shortest decimal representation that round-trips the
    /// value is used (`x=0.5`, and `x=0.0` rather than `x=0`), so the labels
    /// follow the natural rendering of the step arithmetic for any step value.
    #[must_use]
    pub fn label_of(&self, x: f64) -> String {
        if self.from.fract() == 0.0 && self.step.fract() == 0.0 {
            return format!("x={}", x as i64);
        }
        return format!("x={:?}", x);
    }

    /// Returns the labels of all the grid points, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        return self
            .grid_points()
            .iter()
            .map(|&x| self.label_of(x))
            .collect::<Vec<String>>();
    }
}

/// The interface shared by all the discretization policies.
///
/// [Discretizer::get_labels] and [Discretizer::get_discrete_values] are pure
/// queries: they read only the construction-time state (and the side-effect
/// free functions of the factor), so they are idempotent and can be called
/// concurrently on the same instance.
pub trait Discretizer {
    /// The interval this discretizer operates on.
    fn get_interval(&self) -> &DiscretizationInterval;

    /// Returns the probability mass assigned to each grid point, in the same
    /// order as [Discretizer::get_labels].
    ///
    /// Contract for implementers: the returned vector must have the same
    /// length as [Discretizer::get_labels] (if a policy emits an extra
    /// point beyond the base grid, it must also extend the labels
    /// accordingly, as [UnbiasedDiscretizer] does).
    fn get_discrete_values(&self) -> Vec<f64>;

    /// Returns the ordered labels (`"x=<value>"`) of the grid points.
    fn get_labels(&self) -> Vec<String> {
        return self.get_interval().labels();
    }
}

/// Determines the discretization policy used by [discretize].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscretizationMethod {
    /// See [RoundingDiscretizer]
    #[default]
    Rounding,
    /// See [UnbiasedDiscretizer]
    Unbiased,
}

/// Discretizes `factor` on the interval `[from, to)` with spacing `step` in
/// one call, without keeping a discretizer arround.
///
/// ## Inputs:
///
/// 1. `factor`: the continuous factor to discretize.
/// 2. `from`, `to`, `step`: the grid (see [DiscretizationInterval]).
/// 3. `method`: (optional) the discretization policy.
///      - The default is [DiscretizationMethod::Rounding].
///
/// ## Results
///
/// The probability masses of the grid points ([Discretizer::get_discrete_values]
/// of the corresponding discretizer). Note that with
/// [DiscretizationMethod::Unbiased] the result has 1 more value than the base
/// grid (see [UnbiasedDiscretizer]).
///
/// If the interval is invalid, returns [DiscretizationError::InvalidRange].
#[bon::builder]
pub fn discretize<F: ContinuousFactor>(
    factor: &F,
    from: f64,
    to: f64,
    step: f64,
    #[builder(default)] method: DiscretizationMethod,
) -> Result<Vec<f64>, DiscretizationError> {
    let values: Vec<f64> = match method {
        DiscretizationMethod::Rounding => {
            RoundingDiscretizer::new(factor, from, to, step)?.get_discrete_values()
        }
        DiscretizationMethod::Unbiased => {
            UnbiasedDiscretizer::new(factor, from, to, step)?.get_discrete_values()
        }
    };

    return Ok(values);
}

/// Discretization by the "rounding" (midpoint) method.
///
/// Each grid point `x` receives the probability of the step-sized bin
/// centered on it:
///
/// `mass(x) = cdf(x + step/2) - cdf(x - step/2)`
///
/// except the first point, wich absorbs all the mass from `from` up to it's
/// right half-edge:
///
/// `mass(from) = cdf(from + step/2) - cdf(from)`
///
/// Note that the mass beyond the right half-edge of the last grid point is
/// silently lost: if `to` is smaller than the upper end of the factor's
/// support, the masses will sum less than `1.0`. This matches the reference
/// behaviour of the method in the literature (`discretize {actuar}` in R).
/// No compensation or clamping of floating point noise is performed.
pub struct RoundingDiscretizer<'a, F: ContinuousFactor> {
    factor: &'a F,
    interval: DiscretizationInterval,
}

impl<'a, F: ContinuousFactor> RoundingDiscretizer<'a, F> {
    /// Creates a new [RoundingDiscretizer] over `[from, to)` with spacing
    /// `step`. The factor is only borrowed: computing the masses never
    /// mutates it.
    ///
    /// Returns [DiscretizationError::InvalidRange] if the interval is invalid
    /// (see [DiscretizationInterval::new]).
    pub fn new(
        factor: &'a F,
        from: f64,
        to: f64,
        step: f64,
    ) -> Result<RoundingDiscretizer<'a, F>, DiscretizationError> {
        let interval: DiscretizationInterval = DiscretizationInterval::new(from, to, step)?;
        return Ok(RoundingDiscretizer { factor, interval });
    }
}

impl<F: ContinuousFactor> Discretizer for RoundingDiscretizer<'_, F> {
    fn get_interval(&self) -> &DiscretizationInterval {
        return &self.interval;
    }

    fn get_discrete_values(&self) -> Vec<f64> {
        let step: f64 = self.interval.get_step();
        let half_step: f64 = 0.5 * step;
        let from: f64 = self.interval.get_from();

        let points: Vec<f64> = self.interval.grid_points();
        let mut values: Vec<f64> = Vec::with_capacity(points.len());

        // The first bin is `[from, from + step/2)` instead of being centered:
        // everything below `from` is outside the discretization interval.
        values.push(self.factor.cdf(from + half_step) - self.factor.cdf(from));

        for &x in &points[1..] {
            values.push(self.factor.cdf(x + half_step) - self.factor.cdf(x - half_step));
        }

        return values;
    }
}

/// Discretization by the "unbiased" method: a first moment preserving
/// quadrature.
///
/// The masses are built from the [limited expected value](crate::factor_trait::ContinuousFactor::limited_expected_value)
/// `lev(x) = E[min(X, x)]` (and the cdf at the 2 endpoints), with `h = step`:
///
///  - `mass(from) = (lev(from) - lev(from + h))/h + 1 - cdf(from)`
///  - `mass(x) = (2*lev(x) - lev(x - h) - lev(x + h))/h` for the interior points
///  - `mass(to) = (lev(to) - lev(to - h))/h - 1 + cdf(to)`
///
/// Unlike [RoundingDiscretizer], the endpoint `to` always receives a mass:
/// the residual probability beyond the last interior point, placed so that
/// the invariants below hold. [UnbiasedDiscretizer::get_labels] therefore
/// appends a matching `x=<to>` label, keeping labels and masses index-aligned
/// and of equal length.
///
/// The resulting discrete distribution satisfies (up to floating error):
///
///  - `sum mass(x_i) == cdf(to) - cdf(from)` (mass conservation)
///  - `sum mass(x_i) * x_i == E[X * indicator(from < X <= to)]`
///
/// so when `[from, to]` covers the whole support of the factor, the mean of
/// the discretized distribution is exactly the mean of the continuous one.
pub struct UnbiasedDiscretizer<'a, F: ContinuousFactor> {
    factor: &'a F,
    interval: DiscretizationInterval,
}

impl<'a, F: ContinuousFactor> UnbiasedDiscretizer<'a, F> {
    /// Creates a new [UnbiasedDiscretizer] over `[from, to]` with spacing
    /// `step`. The factor is only borrowed: computing the masses never
    /// mutates it.
    ///
    /// Returns [DiscretizationError::InvalidRange] if the interval is invalid
    /// (see [DiscretizationInterval::new]).
    pub fn new(
        factor: &'a F,
        from: f64,
        to: f64,
        step: f64,
    ) -> Result<UnbiasedDiscretizer<'a, F>, DiscretizationError> {
        let interval: DiscretizationInterval = DiscretizationInterval::new(from, to, step)?;
        return Ok(UnbiasedDiscretizer { factor, interval });
    }
}

impl<F: ContinuousFactor> Discretizer for UnbiasedDiscretizer<'_, F> {
    fn get_interval(&self) -> &DiscretizationInterval {
        return &self.interval;
    }

    fn get_discrete_values(&self) -> Vec<f64> {
        let h: f64 = self.interval.get_step();
        let from: f64 = self.interval.get_from();
        let to: f64 = self.interval.get_to();
        let lev = |x: f64| self.factor.limited_expected_value(x);

        let points: Vec<f64> = self.interval.grid_points();
        let mut values: Vec<f64> = Vec::with_capacity(points.len() + 1);

        // first point: no left neighbour, absorbs the left tail contribution
        values.push((lev(from) - lev(from + h)) / h + 1.0 - self.factor.cdf(from));

        // interior points: difference of differences of the lev
        for &x in &points[1..] {
            values.push((2.0 * lev(x) - lev(x - h) - lev(x + h)) / h);
        }

        // endpoint: the residual mass at (and beyond) `to`
        values.push((lev(to) - lev(to - h)) / h - 1.0 + self.factor.cdf(to));

        return values;
    }

    /// Same as [Discretizer::get_labels], plus the synthetic `x=<to>` label of
    /// the residual endpoint, so that labels and masses have equal length.
    fn get_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.interval.labels();
        labels.push(self.interval.label_of(self.interval.get_to()));
        return labels;
    }
}
