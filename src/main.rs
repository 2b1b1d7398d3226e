//! seqbench - Vector vs. Linked List micro-benchmark
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │   Seed   │───▶│  Insert  │───▶│  Delete  │───▶│  Report  │
//! │  (clock) │    │ Vec/List │    │ Vec/List │    │ (stdout) │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Takes no arguments. Logging is configured by `config/seqbench.yaml`
//! (optional) and `RUST_LOG`.

use std::io::{self, Write};

use anyhow::Context;

use seqbench::config::{AppConfig, DEFAULT_CONFIG_PATH};
use seqbench::logging::init_logging;
use seqbench::{BenchParams, Report, WorkloadRng, run_benchmark};

fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    let _log_guard = init_logging(&app_config);

    let params = BenchParams::default();
    let mut rng = WorkloadRng::from_wall_clock();

    let outcome = run_benchmark(&params, &mut rng).context("invalid benchmark parameters")?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", Report::new(&outcome.timings)).context("failed to write report")?;
    stdout.flush()?;

    tracing::info!(seed = outcome.seed, "Report written");
    Ok(())
}
