//! Point sort by x component
//! Sorts a scratch copy of a 4-component point cloud on each run; the timed
//! operation therefore always starts from the unsorted input.

use crate::bench::run_and_measure;
use crate::policy::ExecutionPolicy;
use rand::Rng;
use rayon::prelude::*;

/// xyzw point, w fixed at 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

pub fn random_points(size: usize) -> Vec<Point4> {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| Point4 {
            x: rng.gen_range(-1.0..1.0),
            y: rng.gen_range(-1.0..1.0),
            z: rng.gen_range(-1.0..1.0),
            w: 1.0,
        })
        .collect()
}

/// Sort `points` into `scratch` by x under `policy`; returns the minimum x.
pub fn execute(policy: ExecutionPolicy, points: &[Point4], scratch: &mut [Point4]) -> f64 {
    scratch.copy_from_slice(points);
    match policy {
        ExecutionPolicy::Par => scratch.par_sort_unstable_by(|a, b| a.x.total_cmp(&b.x)),
        _ => scratch.sort_unstable_by(|a, b| a.x.total_cmp(&b.x)),
    }
    scratch.first().map(|p| f64::from(p.x)).unwrap_or(0.0)
}

/// Run the point-sort group (sequential and parallel only).
pub fn run(repeat_count: usize, size: usize) {
    println!("sort points by x:");

    let points = random_points(size);
    let mut scratch = points.clone();

    for policy in ExecutionPolicy::COMPARISON {
        run_and_measure(policy.label(), repeat_count, || {
            execute(policy, &points, &mut scratch)
        });
    }
}
