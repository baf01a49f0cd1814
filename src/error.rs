//! Errors raised while turning command-line tokens into a sampling request.
use thiserror::Error;

/// Anything wrong with the parameters of an invocation.
///
/// All of these are fatal for the command-line tool and map to exit code 3.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("Missing parameters: type (float/int) distribution (uniform/normal/exponential) number [min/stddev max/mean]")]
    MissingParameters,
    #[error("Number not specified properly: '{0}'")]
    InvalidCount(String),
    #[error("Unknown type '{0}': expected 'f' for floats or 'i' for integers")]
    UnknownType(String),
    #[error("Unknown distribution '{0}': expected 'u' for uniform, 'n' for normal or 'e' for exponential")]
    UnknownDistribution(String),
    /// `{0}` names the bound, `{1}` is the token that failed to convert.
    #[error("Cannot convert parameter {0}: '{1}'")]
    InvalidBound(&'static str, String),
    #[error("Parameter {0} must be finite, got {1}")]
    NonFiniteBound(&'static str, f64),
    /// Exactly one of the two optional bounds was given.
    #[error("Expected both min/stddev and max/mean, got only one")]
    MissingBound,
    #[error("Too many parameters: unexpected '{0}'")]
    TooManyParameters(String),
    #[error("Integers need explicit bounds: min/stddev and max/mean")]
    IntegerWithoutBounds,
    #[error("Uniform range [{min}, {max}) is too wide to sample")]
    RangeOverflow { min: f64, max: f64 },
    #[error("Empty uniform range: min ({min}) must be less than max ({max})")]
    EmptyRange { min: String, max: String },
}
