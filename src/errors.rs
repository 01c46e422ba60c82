use thiserror::Error;

/// An enum that indicates what went wrong when setting up a discretization
/// or constructing a factor.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiscretizationError {
    /// The discretization interval did not fullfill `from < to` and `0.0 < step`
    /// (with all the values finite).
    #[error(
        "The discretization interval is invalid. It must fullfill `from < to` and `0.0 < step`, and all values must be finite. "
    )]
    InvalidRange,
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// A number did not fullfill the conditions of the function. Maybe it was
    /// infinite when it was not allowed, or it was negative when the function
    /// only takes positive numbers. It may also be a NaN.
    #[error(
        "A number did not fullfill the conditions of the function. Maybe it was infinite when it was not allowed, or it was negative when the function only takes positive numbers. It may also be a NaN. "
    )]
    InvalidNumber,
    /// There was an error when performing some numerical computation. Overflow/underflow/division by 0
    #[error(
        "There was an error when performing some numerical computation. Overflow/underflow/division by 0"
    )]
    NumericalError,
}
