// Times iterative vs. recursive summation over a schedule of sizes and
// writes the results to the console and a CSV file.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use runtime_bench::config::{DEFAULT_MAX_RECURSIVE_DEPTH, DEFAULT_OUTPUT_PATH};
use runtime_bench::harness::DEFAULT_REPEATS;
use runtime_bench::{BenchError, ConsoleTable, CsvReport, RunConfig};

/// Every flag is optional; with none given the run uses the fixed schedule,
/// 20 repeats, a recursion threshold of 10000 and `runtime_results.csv`.
#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    /// CSV file to write; overwritten if it exists.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Timed calls per algorithm and size.
    #[arg(long, default_value_t = DEFAULT_REPEATS)]
    repeats: u32,
    /// Sizes above this skip the recursive algorithm.
    #[arg(long, default_value_t = DEFAULT_MAX_RECURSIVE_DEPTH)]
    max_recursive_depth: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = RunConfig {
        output_path: args.output,
        repeats: args.repeats,
        max_recursive_depth: args.max_recursive_depth,
        ..RunConfig::default()
    };

    if let Err(e) = config.validate() {
        eprintln!("ERROR: {}", e);
        return ExitCode::FAILURE;
    }

    let mut csv = match CsvReport::create(&config.output_path) {
        Ok(csv) => csv,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("ERROR: tidak bisa membuka file CSV.");
            return ExitCode::FAILURE;
        }
    };
    let mut console = ConsoleTable::new(io::stdout().lock());

    match runtime_bench::run(&config, &mut console, &mut csv) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(e: &BenchError) {
    log::error!("run aborted: {:?}", e);
    eprintln!("ERROR: {}", e);
}
