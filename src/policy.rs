//! Execution-policy taxonomy
//! Selects how a workload's inner loop may run: plain sequential, sequential
//! in a vectorizable chunked shape, parallel, or parallel over chunked kernels

use rayon::ThreadPoolBuilder;
use tracing::info;

/// Execution policy applied to a benchmarked operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPolicy {
    /// Plain sequential iteration
    Seq,
    /// Sequential, fixed-width chunked loops with independent accumulators
    Unseq,
    /// rayon parallel iterators on the global pool
    Par,
    /// rayon parallel chunks, each chunk run through the Unseq kernel shape
    ParUnseq,
}

impl ExecutionPolicy {
    pub const ALL: [ExecutionPolicy; 4] = [Self::Seq, Self::Unseq, Self::Par, Self::ParUnseq];

    /// Comparison sorts have no vectorized form, only sequential and parallel.
    pub const COMPARISON: [ExecutionPolicy; 2] = [Self::Seq, Self::Par];

    pub fn label(self) -> &'static str {
        match self {
            Self::Seq => "seq",
            Self::Unseq => "unseq",
            Self::Par => "par",
            Self::ParUnseq => "par_unseq",
        }
    }
}

impl std::fmt::Display for ExecutionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Install the global rayon pool used by the parallel policies.
///
/// A pool can only be installed once per process; if one already exists
/// (e.g. rayon's default pool was touched first) the existing pool is kept.
pub fn init_thread_pool(worker_threads: usize) {
    match ThreadPoolBuilder::new()
        .num_threads(worker_threads)
        .build_global()
    {
        Ok(()) => info!("rayon pool initialized | workers: {}", worker_threads),
        Err(_) => info!("rayon pool already initialized, keeping existing pool"),
    }
}
