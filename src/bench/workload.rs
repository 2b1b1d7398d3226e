//! Workload Drivers - Timed insertion and deletion loops
//!
//! Both drivers are written once against [`SortedSequence`] and take the
//! generator by `&mut` so consecutive phases continue the same random stream.
//! Only the loop itself sits inside the timed region.

use std::time::Duration;

use crate::bench::rng::WorkloadRng;
use crate::perf::measure;
use crate::sequence::SortedSequence;

/// Result of one driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRun {
    /// Loop iterations actually executed
    pub iterations: usize,
    pub elapsed: Duration,
}

/// Insert `ops` values drawn from `[0, max_value)` into `seq`.
///
/// # Panics
/// If `max_value` is zero and `ops` is non-zero.
pub fn run_insertion_phase<S>(
    seq: &mut S,
    rng: &mut WorkloadRng,
    ops: usize,
    max_value: u32,
) -> PhaseRun
where
    S: SortedSequence<i32>,
{
    let ((), elapsed) = measure(|| {
        for _ in 0..ops {
            // draws stay below max_value, which BenchParams caps at i32::MAX
            let value = rng.draw_below(max_value) as i32;
            seq.insert_sorted(value);
        }
    });
    PhaseRun {
        iterations: ops,
        elapsed,
    }
}

/// Remove elements at random indices, up to `ops` times or until empty.
pub fn run_deletion_phase<S>(seq: &mut S, rng: &mut WorkloadRng, ops: usize) -> PhaseRun
where
    S: SortedSequence<i32>,
{
    let (iterations, elapsed) = measure(|| {
        let mut done = 0;
        while done < ops && !seq.is_empty() {
            let index = rng.draw_index(seq.len());
            seq.remove_at(index);
            done += 1;
        }
        done
    });
    PhaseRun {
        iterations,
        elapsed,
    }
}
