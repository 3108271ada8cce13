//! Random input generation
//! Every execution context owns its generator instance: sequential fills use
//! a caller-local generator, parallel fills seed one SmallRng per rayon
//! split. No generator state is shared between threads.

use rand::distributions::uniform::SampleUniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::ops::Range;

/// Fill `out` with uniform samples from `range` on the calling thread.
pub fn fill_uniform<T>(out: &mut [T], range: Range<T>)
where
    T: SampleUniform + PartialOrd + Copy,
{
    let mut rng = rand::thread_rng();
    for v in out.iter_mut() {
        *v = rng.gen_range(range.start..range.end);
    }
}

/// Parallel fill; each rayon split draws from its own freshly seeded SmallRng
/// so concurrent contexts never contend on (or skew) a shared generator.
pub fn par_fill_uniform<T>(out: &mut [T], range: Range<T>)
where
    T: SampleUniform + PartialOrd + Copy + Send + Sync,
{
    out.par_iter_mut().for_each_init(SmallRng::from_entropy, |rng, v| {
        *v = rng.gen_range(range.start..range.end);
    });
}
