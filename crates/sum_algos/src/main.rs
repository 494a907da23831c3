// Quick manual check of both summation algorithms for a single size.

use clap::Parser;
use sum_algos::{expected_total, generate_scores, iterative_sum, recursive_sum};

/// Size used when none is given on the command line.
const SIZE: usize = 100;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    #[arg(long)]
    size: Option<usize>,
}

/// Generates `1..=n`, sums it both ways, and prints the totals next to the
/// closed-form value.
fn main() -> Result<(), String> {
    let args = Args::parse();
    let n = args.size.unwrap_or(SIZE);

    let scores = generate_scores(n).map_err(|e| e.to_string())?;
    let scores = scores
        .as_slice()
        .ok_or_else(|| "generated scores are not contiguous".to_string())?;

    println!("n:         {}", n);
    println!("Expected:  {}", expected_total(n));
    println!("Iterative: {}", iterative_sum(scores));
    println!("Recursive: {}", recursive_sum(scores, 0));

    Ok(())
}
