//! Benchmark Harness Module
//!
//! # Components
//!
//! - [`rng`] - Wall-clock seeded workload generator
//! - [`workload`] - Timed insertion and deletion drivers
//! - [`runner`] - Parameters and the end-to-end pipeline

pub mod rng;
pub mod runner;
pub mod workload;
