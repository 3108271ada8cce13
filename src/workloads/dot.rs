//! Dot-product transform-reduce
//! Σ aᵢ·bᵢ over two uniform [0, 1) vectors. Summation order differs between
//! policies, so cross-policy comparisons are approximate, not bitwise.

use super::{LANES, PAR_CHUNK};
use crate::bench::run_and_measure;
use crate::generators;
use crate::policy::ExecutionPolicy;
use rayon::prelude::*;

fn dot_seq(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn dot_unseq(a: &[f64], b: &[f64]) -> f64 {
    let mut acc = [0.0f64; LANES];
    let mut ac = a.chunks_exact(LANES);
    let mut bc = b.chunks_exact(LANES);
    for (xs, ys) in ac.by_ref().zip(bc.by_ref()) {
        for i in 0..LANES {
            acc[i] += xs[i] * ys[i];
        }
    }
    let tail: f64 = ac
        .remainder()
        .iter()
        .zip(bc.remainder())
        .map(|(x, y)| x * y)
        .sum();
    acc.iter().sum::<f64>() + tail
}

fn dot_par(a: &[f64], b: &[f64]) -> f64 {
    a.par_iter().zip(b.par_iter()).map(|(x, y)| x * y).sum()
}

fn dot_par_unseq(a: &[f64], b: &[f64]) -> f64 {
    a.par_chunks(PAR_CHUNK)
        .zip(b.par_chunks(PAR_CHUNK))
        .map(|(xs, ys)| dot_unseq(xs, ys))
        .sum()
}

/// Compute the dot product of `a` and `b` under `policy`.
pub fn execute(policy: ExecutionPolicy, a: &[f64], b: &[f64]) -> f64 {
    match policy {
        ExecutionPolicy::Seq => dot_seq(a, b),
        ExecutionPolicy::Unseq => dot_unseq(a, b),
        ExecutionPolicy::Par => dot_par(a, b),
        ExecutionPolicy::ParUnseq => dot_par_unseq(a, b),
    }
}

/// Run the dot-product group under every policy.
pub fn run(repeat_count: usize, size: usize) {
    println!("dot product:");

    let mut a = vec![0.0f64; size];
    let mut b = vec![0.0f64; size];
    generators::par_fill_uniform(&mut a, 0.0..1.0);
    generators::par_fill_uniform(&mut b, 0.0..1.0);

    for policy in ExecutionPolicy::ALL {
        run_and_measure(policy.label(), repeat_count, || execute(policy, &a, &b));
    }
}
