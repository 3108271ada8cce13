//! Benchmark module
//! Warmup-aware wall-clock measurement of labelled operations

pub mod harness;

pub use harness::{measure, run_and_measure, RunReport};
