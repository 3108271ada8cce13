//! Parallel-policy benchmark suite
//!
//! Measures wall-clock latency of numeric workloads under four execution
//! policies: sequential, vectorized, parallel and parallel+vectorized.
//!
//! ## Architecture
//! - Bench: warmup-aware timing harness producing per-operation run reports
//! - Policy: execution-policy taxonomy and rayon pool setup
//! - Generators: per-context random input generation
//! - Workloads: the benchmarked operation groups (trig, dot, sort, counting)

pub mod bench;
pub mod config;
pub mod generators;
pub mod policy;
pub mod workloads;

pub use bench::{measure, run_and_measure, RunReport};
pub use config::BenchConfig;
pub use policy::ExecutionPolicy;
