// Wall-clock timing of a single callable.

use std::hint::black_box;
use std::time::Instant;

pub const DEFAULT_REPEATS: u32 = 20;

/// Mean wall-clock time of one call to `f`, in milliseconds.
///
/// One warm-up call is made and discarded, then `f` is timed `repeats` times
/// with the monotonic [`Instant`] clock. Every return value goes through
/// [`black_box`] so the optimizer cannot drop the calls being measured.
///
/// __Arguments:__
///
/// + `f` - the work to time; assumed not to fail.
///
/// + `repeats` - number of timed calls; 0 yields a mean of 0.0.
///
pub fn benchmark_ms<F, T>(mut f: F, repeats: u32) -> f64
where
    F: FnMut() -> T,
{
    black_box(f());

    if repeats == 0 {
        return 0.0;
    }

    let mut total_ms = 0.0_f64;
    for _ in 0..repeats {
        let start = Instant::now();
        black_box(f());
        total_ms += start.elapsed().as_secs_f64() * 1000.0;
    }

    total_ms / repeats as f64
}
