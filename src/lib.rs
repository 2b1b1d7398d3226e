//! seqbench - Vector vs. Linked List
//!
//! Times sorted random insertions followed by random-index deletions on a
//! contiguous sequence and a linked sequence, then reports the ratio.
//!
//! # Modules
//!
//! - [`sequence`] - `SortedSequence` trait and the two containers
//! - [`perf`] - Phase timing samples and speedup ratios
//! - [`bench`] - Random source, workload drivers, pipeline runner
//! - [`report`] - Fixed-column result table
//! - [`config`] - Logging configuration (YAML)
//! - [`logging`] - tracing subscriber setup

pub mod bench;
pub mod config;
pub mod logging;
pub mod perf;
pub mod report;
pub mod sequence;

// Convenient re-exports at crate root
pub use bench::rng::WorkloadRng;
pub use bench::runner::{BenchOutcome, BenchParams, MAX_VALUE, N, ParamsError, run_benchmark};
pub use perf::{Phase, PhaseTimings, TimingSample, Variant, measure};
pub use report::Report;
pub use sequence::{ContiguousSeq, LinkedSeq, SortedSequence};
