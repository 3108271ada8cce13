//! Benchmark CLI
//! Usage: parbench [size] [step]
//! step: 0 = all groups, 2 = trig, 3 = dot, 4 = sort, 5 = counting

use parbench::workloads::{self, counting, dot, sort_points, trig};
use parbench::{policy, BenchConfig};
use std::env;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the report lines
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = BenchConfig::from_env()?;
    policy::init_thread_pool(config.worker_threads);

    // atoi-style args: malformed numbers silently fall back to the defaults
    let args: Vec<String> = env::args().collect();
    let size: usize = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.default_size);
    let step: u32 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(workloads::STEP_ALL);

    info!(
        "repeat_count: {} | size: {} | step: {}",
        config.repeat_count, size, step
    );

    println!("{}", size);

    if step == workloads::STEP_ALL || step == workloads::STEP_TRIG {
        trig::run(config.repeat_count, size);
    }
    if step == workloads::STEP_ALL || step == workloads::STEP_DOT {
        dot::run(config.repeat_count, size);
    }
    if step == workloads::STEP_ALL || step == workloads::STEP_SORT {
        sort_points::run(config.repeat_count, size);
    }
    if step == workloads::STEP_ALL || step == workloads::STEP_COUNTING {
        counting::run(config.repeat_count, size);
    }

    Ok(())
}
