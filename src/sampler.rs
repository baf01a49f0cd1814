//! Sample generation.
//!
//! [`generate`] is a pure function of the request and the random source, so a
//! fixed seed always reproduces the same sequence. Samples are drawn lazily:
//! the count only bounds the iterator, nothing is allocated for it.
use std::fmt;

use rand::distributions::{Distribution, Standard, Uniform};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Exp1, StandardNormal};
use tracing::debug;

use crate::request::{Bounds, DistributionKind, NumberType, Request};

/// A single generated number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Float(f64),
    Int(i64),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Float(x) => write!(f, "{}", x),
            Sample::Int(x) => write!(f, "{}", x),
        }
    }
}

trait DistributionObject {
    fn draw(&self, rng: &mut dyn RngCore) -> f64;
}
impl<T: Distribution<f64>> DistributionObject for T {
    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        Distribution::sample(self, rng)
    }
}

/// `unit * scale + shift`
struct Affine<D> {
    unit: D,
    scale: f64,
    shift: f64,
}

impl<D: Distribution<f64>> Distribution<f64> for Affine<D> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.unit.sample(rng) * self.scale + self.shift
    }
}

fn unit_distribution(kind: DistributionKind) -> Box<dyn DistributionObject> {
    match kind {
        DistributionKind::Uniform => Box::new(Standard),
        DistributionKind::Normal => Box::new(StandardNormal),
        DistributionKind::Exponential => Box::new(Exp1),
    }
}

fn scaled_distribution(kind: DistributionKind, first: f64, second: f64) -> Box<dyn DistributionObject> {
    match kind {
        DistributionKind::Uniform => Box::new(Uniform::new(first, second)),
        DistributionKind::Normal => Box::new(Affine {
            unit: StandardNormal,
            scale: first,
            shift: second,
        }),
        DistributionKind::Exponential => Box::new(Affine {
            unit: Exp1,
            scale: first,
            shift: second,
        }),
    }
}

enum Draw {
    Real(Box<dyn DistributionObject>),
    /// uniform integers come straight from `[min,max)`
    Range(Uniform<i64>),
}

/// Iterator over the samples of a [`Request`], see [`generate`].
pub struct SampleIter<R> {
    draw: Draw,
    number_type: NumberType,
    remaining: usize,
    rng: R,
}

impl<R: RngCore> Iterator for SampleIter<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let sample = match &self.draw {
            Draw::Range(range) => Sample::Int(range.sample(&mut self.rng)),
            Draw::Real(d) => {
                let x = d.draw(&mut self.rng);
                match self.number_type {
                    NumberType::Float => Sample::Float(x),
                    NumberType::Int => Sample::Int(x as i64),
                }
            }
        };
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: RngCore> ExactSizeIterator for SampleIter<R> {}

/// Draws `request.count()` samples from `rng`.
///
/// Floats without bounds come from the unit distribution: `[0,1)`, standard
/// normal or rate-1 exponential. With bounds, uniform samples are rescaled to
/// `[min,max)` and the other two are multiplied by the first bound and shifted
/// by the second. Integers use the same draws truncated toward zero, except
/// for uniform integers which are drawn directly from `[min,max)`.
///
/// `rng` may be owned or a `&mut` borrow.
pub fn generate<R: RngCore>(request: &Request, rng: R) -> SampleIter<R> {
    let kind = request.distribution();

    let draw = match request.bounds() {
        None => Draw::Real(unit_distribution(kind)),
        Some(Bounds::Float(first, second)) => Draw::Real(scaled_distribution(kind, first, second)),
        Some(Bounds::Int(min, max)) if kind == DistributionKind::Uniform => {
            Draw::Range(Uniform::new(min, max))
        }
        Some(Bounds::Int(first, second)) => {
            Draw::Real(scaled_distribution(kind, first as f64, second as f64))
        }
    };
    debug!(
        distribution = %kind,
        number_type = %request.number_type(),
        count = request.count(),
        bounds = ?request.bounds(),
        "sampling"
    );

    SampleIter {
        draw,
        number_type: request.number_type(),
        remaining: request.count(),
        rng,
    }
}

/// Builds the random source: seeded when `seed` is given, from OS entropy
/// otherwise.
pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}

pub fn generate_seeded(request: &Request, seed: u64) -> SampleIter<SmallRng> {
    generate(request, create_rng(Some(seed)))
}
