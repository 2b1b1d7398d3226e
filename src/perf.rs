//! Performance Metrics - Phase timing and speedup ratios
//!
//! Each benchmark phase is bracketed by [`measure`] and stored as a
//! [`TimingSample`]. [`PhaseTimings`] collects the four samples of a run and
//! derives the per-phase and aggregate speedups consumed by the report.

use std::fmt;
use std::time::{Duration, Instant};

/// Run `f` between two monotonic clock reads.
#[inline]
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Container variant a sample belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Contiguous,
    Linked,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Contiguous => write!(f, "Vector"),
            Variant::Linked => write!(f, "List"),
        }
    }
}

/// Workload phase a sample belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Insertion,
    Deletion,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Insertion => write!(f, "Insertion"),
            Phase::Deletion => write!(f, "Deletion"),
        }
    }
}

/// One elapsed-time measurement for a (variant, phase) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    pub variant: Variant,
    pub phase: Phase,
    pub elapsed: Duration,
}

impl TimingSample {
    pub fn new(variant: Variant, phase: Phase, elapsed: Duration) -> Self {
        Self {
            variant,
            phase,
            elapsed,
        }
    }

    /// Elapsed time in fractional milliseconds
    #[inline]
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// The four samples of one benchmark run
///
/// Unrecorded slots read as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PhaseTimings {
    // Raw durations; converted to milliseconds on read
    pub contiguous_insert: Duration,
    pub linked_insert: Duration,
    pub contiguous_delete: Duration,
    pub linked_delete: Duration,
}

impl PhaseTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sample in its (variant, phase) slot, replacing any previous one
    pub fn record(&mut self, sample: TimingSample) {
        *self.slot_mut(sample.variant, sample.phase) = sample.elapsed;
    }

    fn slot_mut(&mut self, variant: Variant, phase: Phase) -> &mut Duration {
        match (variant, phase) {
            (Variant::Contiguous, Phase::Insertion) => &mut self.contiguous_insert,
            (Variant::Linked, Phase::Insertion) => &mut self.linked_insert,
            (Variant::Contiguous, Phase::Deletion) => &mut self.contiguous_delete,
            (Variant::Linked, Phase::Deletion) => &mut self.linked_delete,
        }
    }

    pub fn sample(&self, variant: Variant, phase: Phase) -> TimingSample {
        let elapsed = match (variant, phase) {
            (Variant::Contiguous, Phase::Insertion) => self.contiguous_insert,
            (Variant::Linked, Phase::Insertion) => self.linked_insert,
            (Variant::Contiguous, Phase::Deletion) => self.contiguous_delete,
            (Variant::Linked, Phase::Deletion) => self.linked_delete,
        };
        TimingSample::new(variant, phase, elapsed)
    }

    #[inline]
    pub fn millis(&self, variant: Variant, phase: Phase) -> f64 {
        self.sample(variant, phase).millis()
    }

    /// Insertion + deletion time for one variant, in milliseconds
    pub fn total_millis(&self, variant: Variant) -> f64 {
        self.millis(variant, Phase::Insertion) + self.millis(variant, Phase::Deletion)
    }

    /// How many times slower the linked variant was for `phase`.
    ///
    /// Not guarded against a zero contiguous time: yields `inf` or `NaN`.
    pub fn speedup(&self, phase: Phase) -> f64 {
        self.millis(Variant::Linked, phase) / self.millis(Variant::Contiguous, phase)
    }

    /// Aggregate ratio over both phases (same caveat as [`Self::speedup`])
    pub fn total_speedup(&self) -> f64 {
        self.total_millis(Variant::Linked) / self.total_millis(Variant::Contiguous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn sample_timings() -> PhaseTimings {
        let mut t = PhaseTimings::new();
        t.record(TimingSample::new(Variant::Contiguous, Phase::Insertion, ms(10)));
        t.record(TimingSample::new(Variant::Linked, Phase::Insertion, ms(50)));
        t.record(TimingSample::new(Variant::Contiguous, Phase::Deletion, ms(30)));
        t.record(TimingSample::new(Variant::Linked, Phase::Deletion, ms(70)));
        t
    }

    #[test]
    fn test_record_and_read_back() {
        let t = sample_timings();
        assert_eq!(t.contiguous_insert, ms(10));
        assert_eq!(t.linked_insert, ms(50));
        assert_eq!(t.contiguous_delete, ms(30));
        assert_eq!(t.linked_delete, ms(70));
        assert!((t.millis(Variant::Linked, Phase::Deletion) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_speedups() {
        let t = sample_timings();
        assert!((t.speedup(Phase::Insertion) - 5.0).abs() < 1e-9);
        assert!((t.speedup(Phase::Deletion) - 70.0 / 30.0).abs() < 1e-9);
        assert!((t.total_millis(Variant::Contiguous) - 40.0).abs() < 1e-9);
        assert!((t.total_millis(Variant::Linked) - 120.0).abs() < 1e-9);
        // total ratio comes from the per-variant sums, not the per-phase ratios
        assert!((t.total_speedup() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_contiguous_time_is_unguarded() {
        let mut t = PhaseTimings::new();
        assert!(t.total_speedup().is_nan());

        t.record(TimingSample::new(Variant::Linked, Phase::Insertion, ms(1)));
        assert!(t.speedup(Phase::Insertion).is_infinite());
    }

    #[test]
    fn test_measure_returns_result() {
        let (sum, elapsed) = measure(|| (1..=100u64).sum::<u64>());
        assert_eq!(sum, 5050);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_sample_millis() {
        let s = TimingSample::new(Variant::Linked, Phase::Deletion, Duration::from_micros(1500));
        assert!((s.millis() - 1.5).abs() < 1e-9);
        assert_eq!(s.variant.to_string(), "List");
        assert_eq!(s.phase.to_string(), "Deletion");
    }
}
