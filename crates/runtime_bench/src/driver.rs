// The per-size loop: generate, sum both ways, time, report.

use std::io::{self, Write};

use ndarray::Array1;
use sum_algos::{GenerateError, generate_scores, iterative_sum, recursive_sum};

use crate::BenchError;
use crate::config::RunConfig;
use crate::harness::benchmark_ms;
use crate::report::{ConsoleTable, CsvReport, Note, ReportRow};

/// Every row emitted by a run, in schedule order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub rows: Vec<ReportRow>,
}

impl RunSummary {
    pub fn mismatches(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| r.note == Note::TotalMismatch)
    }
}

/// The pair of summation functions being compared.
#[derive(Debug, Clone, Copy)]
pub struct Algorithms {
    pub iterative: fn(&[i64]) -> i64,
    /// Called with a start index of 0.
    pub recursive: fn(&[i64], usize) -> i64,
}

impl Default for Algorithms {
    fn default() -> Self {
        Self {
            iterative: iterative_sum,
            recursive: recursive_sum,
        }
    }
}

/// Runs the configured schedule using [`generate_scores`] for the inputs.
pub fn run<C: Write, F: Write>(
    config: &RunConfig,
    console: &mut ConsoleTable<C>,
    csv: &mut CsvReport<F>,
) -> Result<RunSummary, BenchError> {
    run_with(config, &Algorithms::default(), generate_scores, console, csv)
}

/// Runs the configured schedule with caller-supplied algorithms and input
/// generator.
///
/// A failing generator produces an allocation-failure row for that size and
/// the run moves on. Console write failures are logged and the table is
/// abandoned, but the CSV keeps receiving rows. Only invalid configuration
/// or a failed CSV write ends the run early.
///
/// __Arguments:__
///
/// + `config` - sizes, repeat count and recursion threshold.
///
/// + `algorithms` - the iterative and recursive sums to compare.
///
/// + `generate` - produces the `1..=n` input for size `n`.
///
/// + `console`, `csv` - destinations for the table and the file rows; the
///   CSV header is assumed to be written already.
///
pub fn run_with<G, C, F>(
    config: &RunConfig,
    algorithms: &Algorithms,
    mut generate: G,
    console: &mut ConsoleTable<C>,
    csv: &mut CsvReport<F>,
) -> Result<RunSummary, BenchError>
where
    G: FnMut(usize) -> Result<Array1<i64>, GenerateError>,
    C: Write,
    F: Write,
{
    config.validate()?;

    let mut console_live = console_ok(console.write_header());

    let mut summary = RunSummary {
        rows: Vec::with_capacity(config.sizes.len()),
    };

    for &n in &config.sizes {
        log::debug!("testing n = {}", n);

        let row = match generate(n) {
            Ok(scores) => measure(config, algorithms, n, &scores),
            Err(e) => {
                log::error!("n = {}: {}", n, e);
                ReportRow::allocation_failed(n)
            }
        };

        if console_live {
            console_live = console_ok(console.write_row(&row));
        }
        csv.write_row(&row)?;
        summary.rows.push(row);
        // scores for this n are dropped here, before the next size
    }

    csv.flush()?;
    if console_live {
        console_ok(console.write_summary(config));
    }

    log::info!(
        "finished {} sizes, {} mismatches",
        summary.rows.len(),
        summary.mismatches().count()
    );

    Ok(summary)
}

/// Logs a failed console write; the table is not written to again after one.
fn console_ok(result: io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("console output stopped: {}", e);
            false
        }
    }
}

/// Sums and times both algorithms for one input array.
fn measure(
    config: &RunConfig,
    algorithms: &Algorithms,
    n: usize,
    scores: &Array1<i64>,
) -> ReportRow {
    let Algorithms {
        iterative,
        recursive,
    } = *algorithms;

    let owned;
    let scores: &[i64] = match scores.as_slice() {
        Some(slice) => slice,
        None => {
            owned = scores.to_vec();
            &owned
        }
    };

    let total_iter = iterative(scores);
    let iterative_ms = benchmark_ms(|| iterative(scores), config.repeats);

    let mut row = ReportRow {
        n,
        iterative_ms: Some(iterative_ms),
        total_iter: Some(total_iter),
        ..ReportRow::default()
    };

    if !config.recursion_allowed(n) {
        row.note = Note::RecursionSkipped;
        return row;
    }

    let total_rec = recursive(scores, 0);
    row.recursive_ms = Some(benchmark_ms(|| recursive(scores, 0), config.repeats));
    row.total_rec = Some(total_rec);

    if total_rec != total_iter {
        log::warn!(
            "n = {}: iterative total {} != recursive total {}",
            n,
            total_iter,
            total_rec
        );
        row.note = Note::TotalMismatch;
    }

    row
}
