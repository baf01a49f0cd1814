//! Command-line options.
use crate::error::ParamError;
use crate::request::Request;

/// Print a comma-separated list of random numbers drawn from a distribution.
///
/// Options go before the positional parameters. The bounds may be negative.
#[derive(argh::FromArgs, Debug, PartialEq)]
pub struct Opts {
    /// number of digits after the decimal point for floats (shortest exact form by default)
    #[argh(option, short = 'p')]
    pub precision: Option<usize>,

    /// seed for the random number generator (OS entropy by default)
    #[argh(option, short = 's')]
    pub seed: Option<u64>,

    /// log parsed parameters to stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// type ('f' float, 'i' int), distribution ('u' uniform, 'n' normal,
    /// 'e' exponential), count, then optionally min/stddev and max/mean
    #[argh(positional, greedy)]
    pub params: Vec<String>,
}

impl Opts {
    /// Parses everything after the program name.
    pub fn parse(args: &[&str]) -> Result<Opts, argh::EarlyExit> {
        <Opts as argh::FromArgs>::from_args(&["rnd"], args)
    }

    pub fn request(&self) -> Result<Request, ParamError> {
        match self.params.as_slice() {
            [number_type, distribution, count, bounds @ ..] => {
                Request::from_tokens(number_type, distribution, count, bounds)
            }
            _ => Err(ParamError::MissingParameters),
        }
    }
}
