use std::io::{self, Write};

use crate::sampler::Sample;

const SEPARATOR: &str = ", ";

/// Writes all samples on a single line, separated by `", "`, and returns how
/// many were written.
///
/// Nothing at all is written for an empty sequence, not even the newline.
/// Floats use the shortest representation that reads back to the same value,
/// unless `precision` asks for a fixed number of digits after the decimal
/// point. Integers ignore `precision`.
pub fn write_samples<W, I>(out: &mut W, samples: I, precision: Option<usize>) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    let mut written = 0;
    for sample in samples {
        if written > 0 {
            out.write_all(SEPARATOR.as_bytes())?;
        }
        match (sample, precision) {
            (Sample::Float(x), Some(p)) => write!(out, "{:.*}", p, x)?,
            _ => write!(out, "{}", sample)?,
        }
        written += 1;
    }
    if written > 0 {
        writeln!(out)?;
    }
    Ok(written)
}
