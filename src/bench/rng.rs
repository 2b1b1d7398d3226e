//! Workload random source
//!
//! A locally owned generator handed to the workload drivers. Draws are taken
//! as the raw 32-bit output modulo the bound, so bounds that do not divide
//! 2^32 carry a small bias toward low values. The benchmark accepts that.
//!
//! # Example
//!
//! ```rust
//! use seqbench::bench::rng::WorkloadRng;
//!
//! let mut rng = WorkloadRng::with_seed(12345);
//! let value = rng.draw_below(100);
//! assert!(value < 100);
//! ```

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seeded pseudo-random generator for values and indices
#[derive(Debug, Clone)]
pub struct WorkloadRng {
    inner: StdRng,
    seed: u64,
}

impl WorkloadRng {
    /// Deterministic generator for a known seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the current wall-clock time (microseconds since the epoch).
    ///
    /// Not reproducible across runs.
    pub fn from_wall_clock() -> Self {
        Self::with_seed(Utc::now().timestamp_micros() as u64)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a value in `[0, bound)` by modulo reduction.
    ///
    /// # Panics
    /// If `bound` is zero. Callers validate bounds before drawing.
    #[inline]
    pub fn draw_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be positive");
        self.inner.next_u32() % bound
    }

    /// Draw an index in `[0, len)`.
    ///
    /// # Panics
    /// If `len` is zero.
    #[inline]
    pub fn draw_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index into an empty sequence");
        (self.inner.next_u64() % len as u64) as usize
    }
}
