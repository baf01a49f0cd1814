//! Generate lists of random numbers from uniform, normal or exponential
//! distributions.
//!
//! The library side is a pure pipeline: [`Request`] validates the parameters,
//! [`generate`] lazily draws the samples from an explicit random source and
//! [`write_samples`] streams them as one comma-separated line.
pub mod cli;
pub mod error;
pub mod output;
pub mod request;
pub mod sampler;

pub use error::ParamError;
pub use output::write_samples;
pub use request::{Bounds, DistributionKind, NumberType, Request};
pub use sampler::{create_rng, generate, generate_seeded, Sample, SampleIter};
