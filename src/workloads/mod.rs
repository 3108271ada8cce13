//! Benchmark workload groups
//! Each group generates its inputs, prints a header line, then drives one
//! numeric operation through every supported execution policy.

pub mod counting;
pub mod dot;
pub mod sort_points;
pub mod trig;

/// Step ids accepted by the CLI: 0 runs every group.
pub const STEP_ALL: u32 = 0;
pub const STEP_TRIG: u32 = 2;
pub const STEP_DOT: u32 = 3;
pub const STEP_SORT: u32 = 4;
pub const STEP_COUNTING: u32 = 5;

/// Lane count the unseq kernels unroll to (independent accumulators).
pub(crate) const LANES: usize = 8;

/// Chunk length handed to each rayon task under the par_unseq policy.
pub(crate) const PAR_CHUNK: usize = 4096;
