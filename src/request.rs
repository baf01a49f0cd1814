//! Validation of the positional parameters into a [`Request`].
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::error::ParamError;

const FIRST_BOUND: &str = "min/stddev";
const SECOND_BOUND: &str = "max/mean";

/// Whether samples are printed as floats or truncated to integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum NumberType {
    #[strum(to_string = "float", serialize = "f")]
    Float,
    #[strum(to_string = "int", serialize = "i")]
    Int,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum DistributionKind {
    #[strum(to_string = "uniform", serialize = "u")]
    Uniform,
    #[strum(to_string = "normal", serialize = "n")]
    Normal,
    #[strum(to_string = "exponential", serialize = "e", serialize = "exp")]
    Exponential,
}

/// The two optional trailing parameters.
///
/// The first one is the minimum of a uniform range, or the scale (standard
/// deviation) of a normal or exponential distribution. The second one is the
/// maximum of a uniform range, or the shift (mean) of the others.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    Float(f64, f64),
    Int(i64, i64),
}

impl Bounds {
    pub fn number_type(&self) -> NumberType {
        match self {
            Bounds::Float(..) => NumberType::Float,
            Bounds::Int(..) => NumberType::Int,
        }
    }
}

/// A validated description of what to generate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Request {
    distribution: DistributionKind,
    count: usize,
    bounds: Option<Bounds>,
}

impl Request {
    /// Builds a request, checking that the bounds make sense for the
    /// distribution. Without bounds, samples come from the unit distribution.
    pub fn new(
        distribution: DistributionKind,
        count: usize,
        bounds: Option<Bounds>,
    ) -> Result<Self, ParamError> {
        match bounds {
            Some(Bounds::Float(first, second)) => {
                if !first.is_finite() {
                    return Err(ParamError::NonFiniteBound(FIRST_BOUND, first));
                }
                if !second.is_finite() {
                    return Err(ParamError::NonFiniteBound(SECOND_BOUND, second));
                }
                if distribution == DistributionKind::Uniform && first >= second {
                    return Err(ParamError::EmptyRange {
                        min: first.to_string(),
                        max: second.to_string(),
                    });
                }
                if distribution == DistributionKind::Uniform && !(second - first).is_finite() {
                    return Err(ParamError::RangeOverflow {
                        min: first,
                        max: second,
                    });
                }
            }
            Some(Bounds::Int(first, second)) => {
                if distribution == DistributionKind::Uniform && first >= second {
                    return Err(ParamError::EmptyRange {
                        min: first.to_string(),
                        max: second.to_string(),
                    });
                }
            }
            None => {}
        }

        Ok(Request {
            distribution,
            count,
            bounds,
        })
    }

    /// Parses the raw positional tokens: `<type> <distribution> <count>`
    /// followed by either no bound or both of them.
    pub fn from_tokens<S: AsRef<str>>(
        number_type: &str,
        distribution: &str,
        count: &str,
        bounds: &[S],
    ) -> Result<Self, ParamError> {
        let number_type: NumberType = number_type
            .parse()
            .map_err(|_| ParamError::UnknownType(number_type.to_owned()))?;
        let distribution_kind: DistributionKind = distribution
            .parse()
            .map_err(|_| ParamError::UnknownDistribution(distribution.to_owned()))?;
        let count: usize = count
            .parse()
            .map_err(|_| ParamError::InvalidCount(count.to_owned()))?;

        let bounds = match bounds {
            [] => None,
            [_] => return Err(ParamError::MissingBound),
            [first, second] => Some(parse_bounds(
                number_type,
                first.as_ref(),
                second.as_ref(),
            )?),
            [_, _, extra, ..] => {
                return Err(ParamError::TooManyParameters(extra.as_ref().to_owned()))
            }
        };

        if number_type == NumberType::Int && bounds.is_none() {
            return Err(ParamError::IntegerWithoutBounds);
        }

        debug!(%number_type, distribution = %distribution_kind, count, ?bounds, "parsed parameters");
        Request::new(distribution_kind, count, bounds)
    }

    pub fn distribution(&self) -> DistributionKind {
        self.distribution
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn number_type(&self) -> NumberType {
        self.bounds
            .map(|b| b.number_type())
            .unwrap_or(NumberType::Float)
    }
}

fn parse_bounds(number_type: NumberType, first: &str, second: &str) -> Result<Bounds, ParamError> {
    Ok(match number_type {
        NumberType::Float => Bounds::Float(
            parse_bound(FIRST_BOUND, first)?,
            parse_bound(SECOND_BOUND, second)?,
        ),
        NumberType::Int => Bounds::Int(
            parse_bound(FIRST_BOUND, first)?,
            parse_bound(SECOND_BOUND, second)?,
        ),
    })
}

fn parse_bound<T: std::str::FromStr>(name: &'static str, token: &str) -> Result<T, ParamError> {
    token
        .parse()
        .map_err(|_| ParamError::InvalidBound(name, token.to_owned()))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    const NO_BOUNDS: [&str; 0] = [];

    #[test]
    fn short_and_long_tags() {
        assert_eq!("f".parse::<NumberType>(), Ok(NumberType::Float));
        assert_eq!("int".parse::<NumberType>(), Ok(NumberType::Int));
        assert_eq!("u".parse::<DistributionKind>(), Ok(DistributionKind::Uniform));
        assert_eq!("n".parse::<DistributionKind>(), Ok(DistributionKind::Normal));
        assert_eq!("e".parse::<DistributionKind>(), Ok(DistributionKind::Exponential));
        assert_eq!("exp".parse::<DistributionKind>(), Ok(DistributionKind::Exponential));

        for kind in DistributionKind::iter() {
            assert_eq!(kind.to_string().parse::<DistributionKind>(), Ok(kind));
        }
        for number_type in NumberType::iter() {
            assert_eq!(number_type.to_string().parse::<NumberType>(), Ok(number_type));
        }
    }

    #[test]
    fn unit_float_request() {
        let request = Request::from_tokens("f", "n", "10", &NO_BOUNDS).unwrap();
        assert_eq!(request.distribution(), DistributionKind::Normal);
        assert_eq!(request.count(), 10);
        assert_eq!(request.bounds(), None);
        assert_eq!(request.number_type(), NumberType::Float);
    }

    #[test]
    fn bounds_follow_the_number_type() {
        let request = Request::from_tokens("f", "u", "3", &["-1.5", "2.5"]).unwrap();
        assert_eq!(request.bounds(), Some(Bounds::Float(-1.5, 2.5)));

        let request = Request::from_tokens("i", "n", "3", &["2", "-7"]).unwrap();
        assert_eq!(request.bounds(), Some(Bounds::Int(2, -7)));
        assert_eq!(request.number_type(), NumberType::Int);

        assert_eq!(
            Request::from_tokens("i", "u", "3", &["0.5", "10"]),
            Err(ParamError::InvalidBound(FIRST_BOUND, "0.5".to_owned()))
        );
    }

    #[test]
    fn invalid_count() {
        for count in ["", "abc", "-1", "2.5"] {
            assert_eq!(
                Request::from_tokens("f", "u", count, &NO_BOUNDS),
                Err(ParamError::InvalidCount(count.to_owned()))
            );
        }
    }

    #[test]
    fn unknown_tags() {
        assert_eq!(
            Request::from_tokens("x", "u", "1", &NO_BOUNDS),
            Err(ParamError::UnknownType("x".to_owned()))
        );
        assert_eq!(
            Request::from_tokens("f", "z", "1", &NO_BOUNDS),
            Err(ParamError::UnknownDistribution("z".to_owned()))
        );
    }

    #[test]
    fn bound_count() {
        assert_eq!(
            Request::from_tokens("f", "u", "1", &["0"]),
            Err(ParamError::MissingBound)
        );
        assert_eq!(
            Request::from_tokens("f", "u", "1", &["0", "1", "2"]),
            Err(ParamError::TooManyParameters("2".to_owned()))
        );
        assert_eq!(
            Request::from_tokens("i", "u", "1", &NO_BOUNDS),
            Err(ParamError::IntegerWithoutBounds)
        );
    }

    #[test]
    fn invalid_bounds() {
        assert_eq!(
            Request::from_tokens("f", "n", "1", &["1", "ten"]),
            Err(ParamError::InvalidBound(SECOND_BOUND, "ten".to_owned()))
        );
        assert!(matches!(
            Request::from_tokens("f", "n", "1", &["inf", "0"]),
            Err(ParamError::NonFiniteBound(FIRST_BOUND, _))
        ));
        assert!(matches!(
            Request::from_tokens("f", "e", "1", &["1", "NaN"]),
            Err(ParamError::NonFiniteBound(SECOND_BOUND, _))
        ));
    }

    #[test]
    fn uniform_range_must_not_be_empty() {
        assert_eq!(
            Request::from_tokens("f", "u", "1", &["5", "5"]),
            Err(ParamError::EmptyRange {
                min: "5".to_owned(),
                max: "5".to_owned()
            })
        );
        assert!(Request::from_tokens("i", "u", "1", &["3", "-3"]).is_err());
        assert!(matches!(
            Request::from_tokens("f", "u", "1", &["-1e308", "1e308"]),
            Err(ParamError::RangeOverflow { .. })
        ));
        // min/stddev may exceed max/mean for the other distributions
        assert!(Request::from_tokens("f", "n", "1", &["5", "1"]).is_ok());
        assert!(Request::from_tokens("i", "e", "1", &["5", "1"]).is_ok());
    }
}
