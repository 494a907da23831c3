// Run parameters handed to the driver.

use std::path::PathBuf;
use thiserror::Error;

use crate::harness::DEFAULT_REPEATS;

pub const DEFAULT_OUTPUT_PATH: &str = "runtime_results.csv";

/// Largest size the recursive algorithm is run for. This is a guess at what
/// a typical main-thread stack survives, not a measured limit.
pub const DEFAULT_MAX_RECURSIVE_DEPTH: usize = 10000;

/// (start, end, step), end inclusive
const SCHEDULE_SEGMENTS: [(usize, usize, usize); 4] = [
    (1, 1, 1),
    (10, 100, 10),
    (150, 1000, 50),
    (2000, 10000, 1000),
];

/// The sizes tested by a default run, in increasing order.
pub fn default_schedule() -> Vec<usize> {
    SCHEDULE_SEGMENTS
        .iter()
        .flat_map(|&(start, end, step)| (start..=end).step_by(step))
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("repeat count must be at least 1")]
    ZeroRepeats,
    #[error("size schedule is empty")]
    EmptySchedule,
    #[error("size schedule contains 0")]
    ZeroSize,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Sizes to test, processed in the given order.
    pub sizes: Vec<usize>,
    /// Timed calls per algorithm and size.
    pub repeats: u32,
    /// Sizes above this skip the recursive algorithm.
    pub max_recursive_depth: usize,
    pub output_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: default_schedule(),
            repeats: DEFAULT_REPEATS,
            max_recursive_depth: DEFAULT_MAX_RECURSIVE_DEPTH,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeats == 0 {
            return Err(ConfigError::ZeroRepeats);
        }
        if self.sizes.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        if self.sizes.contains(&0) {
            return Err(ConfigError::ZeroSize);
        }
        Ok(())
    }

    /// Whether the recursive algorithm may run for size `n`.
    pub fn recursion_allowed(&self, n: usize) -> bool {
        n <= self.max_recursive_depth
    }
}
