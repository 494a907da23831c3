// Console table and CSV file output, one row per tested size.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::BenchError;
use crate::config::RunConfig;

pub const CSV_HEADER: &str = "n,iterative_ms,recursive_ms,note,total_iter,total_rec";

const N_WIDTH: usize = 10;
const TIME_WIDTH: usize = 18;
const NOTE_WIDTH: usize = 20;
const SEPARATOR_WIDTH: usize = 66;

/// Remark attached to a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Note {
    #[default]
    None,
    /// The two algorithms disagreed on the total.
    TotalMismatch,
    /// The size exceeded the recursion threshold.
    RecursionSkipped,
    /// The input array could not be allocated.
    AllocationFailed,
}

impl Note {
    pub fn csv_text(self) -> &'static str {
        match self {
            Note::None => "",
            Note::TotalMismatch => "WARNING: total beda",
            Note::RecursionSkipped => "SKIPPED (stack overflow)",
            Note::AllocationFailed => "ERROR: allocation failed",
        }
    }

    pub fn console_text(self) -> &'static str {
        match self {
            Note::AllocationFailed => "ERROR: alokasi gagal",
            other => other.csv_text(),
        }
    }
}

/// Results for one tested size. `None` marks a value that was not measured.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportRow {
    pub n: usize,
    pub iterative_ms: Option<f64>,
    pub recursive_ms: Option<f64>,
    pub note: Note,
    pub total_iter: Option<i64>,
    pub total_rec: Option<i64>,
}

impl ReportRow {
    pub fn allocation_failed(n: usize) -> Self {
        Self {
            n,
            note: Note::AllocationFailed,
            ..Self::default()
        }
    }
}

fn format_ms(ms: Option<f64>) -> String {
    ms.map(|v| format!("{:.6}", v)).unwrap_or_default()
}

fn format_total(total: Option<i64>) -> String {
    total.map(|v| v.to_string()).unwrap_or_default()
}

/// Fixed-width table written to the console.
pub struct ConsoleTable<W: Write> {
    out: W,
}

impl<W: Write> ConsoleTable<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<nw$}{:<tw$}{:<tw$}{:<cw$}",
            "n",
            "Iteratif (ms)",
            "Rekursif (ms)",
            "Catatan",
            nw = N_WIDTH,
            tw = TIME_WIDTH,
            cw = NOTE_WIDTH,
        )?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    pub fn write_row(&mut self, row: &ReportRow) -> io::Result<()> {
        // absent times show as a dash
        let dash = |ms: Option<f64>| {
            if ms.is_some() {
                format_ms(ms)
            } else {
                "-".to_string()
            }
        };

        writeln!(
            self.out,
            "{:<nw$}{:<tw$}{:<tw$}{:<cw$}",
            row.n,
            dash(row.iterative_ms),
            dash(row.recursive_ms),
            row.note.console_text(),
            nw = N_WIDTH,
            tw = TIME_WIDTH,
            cw = NOTE_WIDTH,
        )
    }

    /// Trailing lines naming the threshold, repeat count and output file.
    pub fn write_summary(&mut self, config: &RunConfig) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Catatan:")?;
        writeln!(
            self.out,
            "- Rekursif di-skip jika n > {}",
            config.max_recursive_depth
        )?;
        writeln!(self.out, "- Rata-rata dari {} pengulangan", config.repeats)?;
        writeln!(
            self.out,
            "- Output CSV: {} (ms)",
            config.output_path.display()
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Comma-separated results file. The header is written on construction.
pub struct CsvReport<W: Write> {
    out: W,
}

impl CsvReport<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, BenchError> {
        let file = File::create(path).map_err(|source| BenchError::OpenOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file))?)
    }
}

impl<W: Write> CsvReport<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", CSV_HEADER)?;
        Ok(Self { out })
    }

    pub fn write_row(&mut self, row: &ReportRow) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{},{}",
            row.n,
            format_ms(row.iterative_ms),
            format_ms(row.recursive_ms),
            row.note.csv_text(),
            format_total(row.total_iter),
            format_total(row.total_rec)
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
