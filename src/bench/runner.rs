//! Benchmark Runner - The five-phase pipeline
//!
//! ```text
//! seed ──▶ insert(Vector) ──▶ insert(List) ──▶ delete(Vector) ──▶ delete(List) ──▶ report
//! ```
//!
//! Strictly linear: no branching, no retries. Both containers and all four
//! samples are owned by [`run_benchmark`] for the duration of the run.

use thiserror::Error;

use crate::bench::rng::WorkloadRng;
use crate::bench::workload::{PhaseRun, run_deletion_phase, run_insertion_phase};
use crate::perf::{Phase, PhaseTimings, TimingSample, Variant};
use crate::sequence::{ContiguousSeq, LinkedSeq, SortedSequence};

/// Operations per phase and per variant
pub const N: usize = 20_000;

/// Exclusive upper bound on inserted values
pub const MAX_VALUE: u32 = 20_000;

/// Workload parameter errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("max_value must be positive")]
    ZeroMaxValue,

    #[error("max_value {0} does not fit the i32 element type")]
    MaxValueTooLarge(u32),
}

/// Workload size, fixed at build time through [`N`] and [`MAX_VALUE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchParams {
    pub ops: usize,
    pub max_value: u32,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            ops: N,
            max_value: MAX_VALUE,
        }
    }
}

impl BenchParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.max_value == 0 {
            return Err(ParamsError::ZeroMaxValue);
        }
        if self.max_value > i32::MAX as u32 {
            return Err(ParamsError::MaxValueTooLarge(self.max_value));
        }
        Ok(())
    }
}

/// Everything a run produces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchOutcome {
    pub seed: u64,
    pub timings: PhaseTimings,
    /// Sizes after the insertion phase (contiguous, linked)
    pub peak_len: (usize, usize),
    /// Sizes after the deletion phase (contiguous, linked)
    pub final_len: (usize, usize),
}

/// Run the whole pipeline with a caller-owned generator.
pub fn run_benchmark(
    params: &BenchParams,
    rng: &mut WorkloadRng,
) -> Result<BenchOutcome, ParamsError> {
    params.validate()?;
    tracing::info!(
        seed = rng.seed(),
        ops = params.ops,
        max_value = params.max_value,
        "Starting benchmark"
    );

    let mut timings = PhaseTimings::new();
    let mut vector: ContiguousSeq<i32> = ContiguousSeq::new();
    let mut list: LinkedSeq<i32> = LinkedSeq::new();

    // [1] Insertion
    let run = run_insertion_phase(&mut vector, rng, params.ops, params.max_value);
    record(&mut timings, &vector, Variant::Contiguous, Phase::Insertion, run);
    let run = run_insertion_phase(&mut list, rng, params.ops, params.max_value);
    record(&mut timings, &list, Variant::Linked, Phase::Insertion, run);
    let peak_len = (vector.len(), list.len());

    // [2] Deletion
    let run = run_deletion_phase(&mut vector, rng, params.ops);
    record(&mut timings, &vector, Variant::Contiguous, Phase::Deletion, run);
    let run = run_deletion_phase(&mut list, rng, params.ops);
    record(&mut timings, &list, Variant::Linked, Phase::Deletion, run);
    let final_len = (vector.len(), list.len());

    tracing::info!(
        total_speedup = timings.total_speedup(),
        "Benchmark finished"
    );

    Ok(BenchOutcome {
        seed: rng.seed(),
        timings,
        peak_len,
        final_len,
    })
}

fn record<S: SortedSequence<i32>>(
    timings: &mut PhaseTimings,
    seq: &S,
    variant: Variant,
    phase: Phase,
    run: PhaseRun,
) {
    let sample = TimingSample::new(variant, phase, run.elapsed);
    tracing::debug!(
        container = S::LABEL,
        %phase,
        iterations = run.iterations,
        len = seq.len(),
        elapsed_ms = sample.millis(),
        "Phase complete"
    );
    timings.record(sample);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_params() {
        let p = BenchParams::default();
        assert_eq!(p.ops, 20_000);
        assert_eq!(p.max_value, 20_000);
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let zero = BenchParams {
            ops: 10,
            max_value: 0,
        };
        assert_eq!(zero.validate(), Err(ParamsError::ZeroMaxValue));

        let huge = BenchParams {
            ops: 10,
            max_value: u32::MAX,
        };
        assert_eq!(
            huge.validate(),
            Err(ParamsError::MaxValueTooLarge(u32::MAX))
        );
    }

    #[test]
    fn test_run_small_workload() {
        let params = BenchParams {
            ops: 1_000,
            max_value: 500,
        };
        let mut rng = WorkloadRng::with_seed(2024);
        let outcome = run_benchmark(&params, &mut rng).unwrap();
        assert_eq!(outcome.seed, 2024);
        assert_eq!(outcome.peak_len, (1_000, 1_000));
        assert_eq!(outcome.final_len, (0, 0));
    }

    #[test]
    fn test_run_zero_ops() {
        let params = BenchParams {
            ops: 0,
            max_value: MAX_VALUE,
        };
        let mut rng = WorkloadRng::with_seed(1);
        let outcome = run_benchmark(&params, &mut rng).unwrap();
        assert_eq!(outcome.peak_len, (0, 0));
        assert_eq!(outcome.final_len, (0, 0));
        // loops are empty but still bracketed; samples stay tiny
        assert!(outcome.timings.contiguous_insert < Duration::from_secs(1));
    }

    #[test]
    fn test_run_rejects_invalid_params() {
        let params = BenchParams {
            ops: 5,
            max_value: 0,
        };
        let mut rng = WorkloadRng::with_seed(1);
        assert_eq!(
            run_benchmark(&params, &mut rng),
            Err(ParamsError::ZeroMaxValue)
        );
    }
}
