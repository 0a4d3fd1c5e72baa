//! Timing a sort run and exporting the collected timings.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::data::load_data;
use crate::error::{Error, Result};
use crate::progress::Spinner;
use crate::unstable::rust_stooge::stoogesort;

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 2] = ["Data Size", "Execution Time (s)"];

/// Elapsed wall-clock time for sorting one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub data_size: usize,
    /// Seconds.
    pub execution_time: f64,
}

pub fn is_sorted<T: PartialOrd>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Sorts the data file at `path` and writes a human-readable report to `out`, including the
/// progress spinner.
#[tracing::instrument(skip(out))]
pub fn measure_execution_time<W: Write>(path: &Path, out: &mut W) -> Result<Measurement> {
    let mut data = load_data(path)?;
    let n = data.len();
    writeln!(out, "Sorting {n} elements:").map_err(Error::Report)?;

    let mut spinner = Spinner::new(&mut *out);
    let start = Instant::now();
    if let Some(h) = n.checked_sub(1) {
        stoogesort(&mut data, 0, h, &mut spinner);
    }
    let execution_time = start.elapsed().as_secs_f64();
    debug!(steps = spinner.ticks(), "sort finished");

    let sorted = is_sorted(&data);
    let verdict = if sorted {
        "sorted correctly"
    } else {
        warn!("sort produced unsorted output");
        "NOT sorted correctly"
    };

    writeln!(out, "\nArray is {verdict}.").map_err(Error::Report)?;
    writeln!(out, "Sorted array: {data:?}").map_err(Error::Report)?;
    writeln!(out, "Execution time for {n} elements: {execution_time:.4} seconds")
        .map_err(Error::Report)?;

    info!(n, execution_time, sorted, "measured");
    Ok(Measurement {
        data_size: n,
        execution_time,
    })
}

/// Writes `measurements` as CSV, header first, one row each.
pub fn write_csv<W: Write>(writer: W, measurements: &[Measurement]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for measurement in measurements {
        wtr.serialize(measurement)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Creates or truncates the file at `path` and writes the CSV export to it.
#[tracing::instrument(skip(measurements), fields(rows = measurements.len()))]
pub fn export_csv(path: &Path, measurements: &[Measurement]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_csv(file, measurements)?;
    info!("exported timings");
    Ok(())
}
