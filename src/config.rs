use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Values drawn for generated data unless configured otherwise.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i64> = 1..=1000;

/// Where the aggregated timings end up unless configured otherwise.
pub const DEFAULT_OUTPUT: &str = "execution_times.csv";

/// One input file and how many values to put in it when it has to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub path: PathBuf,
    pub count: usize,
}

impl Dataset {
    pub fn new(path: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            path: path.into(),
            count,
        }
    }
}

/// Everything a measurement run needs. Datasets are generated and measured in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub datasets: Vec<Dataset>,
    pub value_range: RangeInclusive<i64>,
    pub output: PathBuf,
    /// Fixed seed for data generation, `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            datasets: vec![
                Dataset::new("data1.dat", 500),
                Dataset::new("data2.dat", 1000),
                Dataset::new("data3.dat", 2000),
            ],
            value_range: DEFAULT_VALUE_RANGE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}
