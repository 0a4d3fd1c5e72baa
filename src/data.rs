//! Generating and loading whitespace separated integer data files.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Outcome of [`generate_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    Created,
    AlreadyExists,
}

/// Writes `count` uniformly random values from `range` to a new file at `path`, space separated
/// on a single line.
///
/// An existing file is never touched, not even if its content doesn't match `count` or `range`.
#[tracing::instrument(skip(rng))]
pub fn generate_data<R>(
    path: &Path,
    count: usize,
    range: RangeInclusive<i64>,
    rng: &mut R,
) -> Result<Generation>
where
    R: Rng + ?Sized,
{
    if path.exists() {
        info!("data file already exists, skipping generation");
        return Ok(Generation::AlreadyExists);
    }

    if range.is_empty() {
        return Err(Error::EmptyRange {
            start: *range.start(),
            end: *range.end(),
        });
    }

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            info!("data file appeared concurrently, skipping generation");
            return Ok(Generation::AlreadyExists);
        }
        Err(err) => return Err(Error::io(path, err)),
    };

    let dist = Uniform::from(range);
    let mut writer = BufWriter::new(file);
    write_values(&mut writer, dist.sample_iter(rng).take(count)).map_err(|e| Error::io(path, e))?;

    info!(count, "generated data file");
    Ok(Generation::Created)
}

fn write_values<W: Write>(writer: &mut W, values: impl Iterator<Item = i64>) -> io::Result<()> {
    for (i, value) in values.enumerate() {
        if i != 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{value}")?;
    }
    writer.flush()
}

/// Parses whitespace separated decimal integers. The first malformed token is an error.
pub fn parse_data(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|source| Error::Parse {
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

/// Reads and parses the data file at `path`.
#[tracing::instrument]
pub fn load_data(path: &Path) -> Result<Vec<i64>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let data = parse_data(&text)?;
    debug!(len = data.len(), "loaded data file");
    Ok(data)
}
