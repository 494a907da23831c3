
// Timing harness, report writers and driver loop comparing iterative and
// recursive summation over a schedule of input sizes.

pub mod config;
pub mod driver;
pub mod harness;
pub mod report;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use config::{ConfigError, RunConfig};
pub use driver::{Algorithms, RunSummary, run, run_with};
pub use harness::benchmark_ms;
pub use report::{ConsoleTable, CsvReport, Note, ReportRow};

/// Errors that stop a whole run. Per-size problems never end up here; they
/// are reported as rows instead.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("cannot open output file {}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid run configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
