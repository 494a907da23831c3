
// Home of the two summation algorithms and the input generator they share.

use ndarray::Array1;
use std::collections::TryReserveError;
use thiserror::Error;

/// Failure to produce an input array for a given size.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("input size must be positive")]
    ZeroSize,
    #[error("allocation of {n} scores failed")]
    Allocation {
        n: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Allocates an array of `n` scores holding the values `1..=n`.
///
/// The backing storage is reserved up front with a fallible reservation, so
/// an allocation the system cannot satisfy comes back as
/// [`GenerateError::Allocation`] instead of aborting the process.
///
/// __Arguments:__
///
/// + `n` - number of scores; must be at least 1.
///
pub fn generate_scores(n: usize) -> Result<Array1<i64>, GenerateError> {
    if n == 0 {
        return Err(GenerateError::ZeroSize);
    }

    let mut scores: Vec<i64> = Vec::new();
    scores
        .try_reserve_exact(n)
        .map_err(|source| GenerateError::Allocation { n, source })?;
    scores.extend((1..=n).map(|v| v as i64));

    Ok(Array1::from_vec(scores))
}

/// Closed form of `1 + 2 + ... + n`, wrapping like the summation functions.
pub fn expected_total(n: usize) -> i64 {
    let n = n as u64;
    // halve the even factor first so the wrapped product stays exact mod 2^64
    let total = if n % 2 == 0 {
        (n / 2).wrapping_mul(n.wrapping_add(1))
    } else {
        n.wrapping_mul(n / 2 + 1)
    };
    total as i64
}

/// Sums the scores in a single pass with one accumulator.
///
/// Overflow is not checked; the accumulator wraps.
pub fn iterative_sum(scores: &[i64]) -> i64 {
    let mut total: i64 = 0;
    for &score in scores {
        total = total.wrapping_add(score);
    }
    total
}

/// Sums `scores[start..]` as `scores[start] + recursive_sum(scores, start + 1)`,
/// bottoming out at 0 once `start` reaches the end of the slice.
///
/// Each element costs one stack frame, so callers must bound the slice length
/// themselves; a long enough slice will overflow the stack.
///
/// __Arguments:__
///
/// + `scores` - the values to add up.
///
/// + `start` - index to begin at; pass 0 to sum the whole slice.
///
pub fn recursive_sum(scores: &[i64], start: usize) -> i64 {
    if start >= scores.len() {
        return 0;
    }
    scores[start].wrapping_add(recursive_sum(scores, start + 1))
}
