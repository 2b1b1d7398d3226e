//! Report - Fixed-column timing table
//!
//! ```text
//! Operation           List(ms)       Vector(ms)     Speedup(x)
//! -----------------------------------------------------------------
//! Insertion           812.40         35.17          23.10
//! Deletion            640.02         12.88          49.69
//! Total               1452.42        48.05          30.23
//! ```

use std::fmt;

use crate::perf::{Phase, PhaseTimings, Variant};

const OP_WIDTH: usize = 20;
const COL_WIDTH: usize = 15;
const SEPARATOR_WIDTH: usize = 65;

/// Renders one run's [`PhaseTimings`] as a table through `Display`
pub struct Report<'a> {
    timings: &'a PhaseTimings,
}

impl<'a> Report<'a> {
    pub fn new(timings: &'a PhaseTimings) -> Self {
        Self { timings }
    }

    fn row(
        f: &mut fmt::Formatter<'_>,
        name: &str,
        linked: f64,
        contiguous: f64,
        speedup: f64,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<op$}{:<col$.2}{:<col$.2}{:.2}",
            name,
            linked,
            contiguous,
            speedup,
            op = OP_WIDTH,
            col = COL_WIDTH,
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.timings;
        writeln!(
            f,
            "{:<op$}{:<col$}{:<col$}{}",
            "Operation",
            "List(ms)",
            "Vector(ms)",
            "Speedup(x)",
            op = OP_WIDTH,
            col = COL_WIDTH,
        )?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        for phase in [Phase::Insertion, Phase::Deletion] {
            Self::row(
                f,
                &phase.to_string(),
                t.millis(Variant::Linked, phase),
                t.millis(Variant::Contiguous, phase),
                t.speedup(phase),
            )?;
        }

        Self::row(
            f,
            "Total",
            t.total_millis(Variant::Linked),
            t.total_millis(Variant::Contiguous),
            t.total_speedup(),
        )
    }
}
