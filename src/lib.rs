#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `FactorDiscretization` should have a snake case name convert the identifier to snake case: `factor_discretization`"
// The rest of the names will follow the snake_case convention.

//! # Factor Discretization
//!
//!
//! This library discretizes continuous probability distributions into finite
//! sequences of probability masses, so they can be used as piecewise-constant
//! approximations inside a probabilistic graphical model:
//!
//! - [x] Interface for continuous factors (density + support)
//! - [x] Common continuous factors (ready to be discretized)
//! - [x] Custom factors from an arbitrary density function
//! - [x] Rounding (midpoint) discretization
//! - [x] Unbiased (mean preserving) discretization
//! - [ ] Multidimensional factors
//! - [x] Updated to rust 2024 version
//!
//! ## Factors
//!
//! We have defined the trait [ContinuousFactor](factor_trait::ContinuousFactor)
//! that defines a basic trait (interface) to work with continuous distributions.
//! The only requiered methods to implement are:
//!  - [pdf](factor_trait::ContinuousFactor::pdf): the pdf of the factor.
//!  - [get_domain](factor_trait::ContinuousFactor::get_domain): the [domain](crate::domain)
//!     of the pdf of the factor.
//!
//! After this, the [cdf](factor_trait::ContinuousFactor::cdf), the
//! [limited expected value](factor_trait::ContinuousFactor::limited_expected_value)
//! and the [mean](factor_trait::ContinuousFactor::expected_value) are avaliable
//! trough numerical integration. Note that this deafult implementations can be
//! computationally costly, therefore we recommend implementing the other methods
//! if there is an avaliable analytical solution for them.
//!
//! But if you are interested on a more common distribution, you may find it among
//! the ones that we have already implemented:
//!
//!  - [x] [Normal factor](crate::factors::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Gamma factor](crate::factors::Gamma) ([Wiki](https://en.wikipedia.org/wiki/Gamma_distribution))
//!  - [x] [Exponential factor](crate::factors::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Custom factor](crate::factors::Custom) (any density function + support)
//!  - [ ] ... (more to come (?))
//!
//! ## Discretizers
//!
//! The [Discretizer](discretize::Discretizer) trait exposes the grid labels
//! ([get_labels](discretize::Discretizer::get_labels)) and the probability
//! masses ([get_discrete_values](discretize::Discretizer::get_discrete_values))
//! of a discretized factor. There are 2 implementations:
//!
//!  - [x] [RoundingDiscretizer](discretize::RoundingDiscretizer): each grid point
//!     receives the probability of the step-sized bin centered on it. Only uses
//!     the cdf.
//!  - [x] [UnbiasedDiscretizer](discretize::UnbiasedDiscretizer): the masses are
//!     chosen so that the mean of the discretized distribution matches the mean
//!     of the continuous one over the covered interval. Uses the cdf and the
//!     limited expected value.
//!
//! There is also the one-shot [discretize](discretize::discretize) function
//! (a builder) if you do not need to keep the discretizer arround.
//!
//! ***
//!

pub mod configuration;
pub mod discretize;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod factor_trait;
pub mod factors;
