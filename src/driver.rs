use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::RunConfig;
use crate::data::{generate_data, Generation};
use crate::error::{Error, Result};
use crate::measure::{export_csv, measure_execution_time, Measurement};

/// Generates missing data files, measures every dataset in order and exports the timings to
/// `config.output`. The first failure aborts the run.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Vec<Measurement>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for dataset in &config.datasets {
        let path = dataset.path.display();
        let notice = match generate_data(
            &dataset.path,
            dataset.count,
            config.value_range.clone(),
            &mut rng,
        )? {
            Generation::Created => writeln!(
                out,
                "Generated file {path} with {} random numbers.",
                dataset.count
            ),
            Generation::AlreadyExists => writeln!(
                out,
                "File {path} already exists. No new data will be generated."
            ),
        };
        notice.map_err(Error::Report)?;
    }

    let measurements = config
        .datasets
        .iter()
        .map(|dataset| measure_execution_time(&dataset.path, &mut *out))
        .collect::<Result<Vec<_>>>()?;

    export_csv(&config.output, &measurements)?;
    info!(
        files = measurements.len(),
        output = %config.output.display(),
        "run complete"
    );

    Ok(measurements)
}
