//! Element-wise sqrt(sin·cos) transform
//! Angles are drawn from [0, π/2) so the product under the root is never
//! negative.

use super::{LANES, PAR_CHUNK};
use crate::bench::run_and_measure;
use crate::generators;
use crate::policy::ExecutionPolicy;
use rayon::prelude::*;
use std::f64::consts::FRAC_PI_2;

#[inline(always)]
fn kernel(v: f64) -> f64 {
    (v.sin() * v.cos()).sqrt()
}

fn transform_seq(input: &[f64], out: &mut [f64]) {
    for (o, v) in out.iter_mut().zip(input) {
        *o = kernel(*v);
    }
}

fn transform_unseq(input: &[f64], out: &mut [f64]) {
    let mut in_chunks = input.chunks_exact(LANES);
    let mut out_chunks = out.chunks_exact_mut(LANES);
    for (oc, ic) in out_chunks.by_ref().zip(in_chunks.by_ref()) {
        for i in 0..LANES {
            oc[i] = kernel(ic[i]);
        }
    }
    for (o, v) in out_chunks
        .into_remainder()
        .iter_mut()
        .zip(in_chunks.remainder())
    {
        *o = kernel(*v);
    }
}

fn transform_par(input: &[f64], out: &mut [f64]) {
    out.par_iter_mut()
        .zip(input.par_iter())
        .for_each(|(o, v)| *o = kernel(*v));
}

fn transform_par_unseq(input: &[f64], out: &mut [f64]) {
    out.par_chunks_mut(PAR_CHUNK)
        .zip(input.par_chunks(PAR_CHUNK))
        .for_each(|(oc, ic)| transform_unseq(ic, oc));
}

/// Apply the transform under `policy` and return the first output element.
pub fn execute(policy: ExecutionPolicy, input: &[f64], out: &mut [f64]) -> f64 {
    match policy {
        ExecutionPolicy::Seq => transform_seq(input, out),
        ExecutionPolicy::Unseq => transform_unseq(input, out),
        ExecutionPolicy::Par => transform_par(input, out),
        ExecutionPolicy::ParUnseq => transform_par_unseq(input, out),
    }
    out.first().copied().unwrap_or(0.0)
}

/// Run the trigonometric group under every policy.
pub fn run(repeat_count: usize, size: usize) {
    let mut input = vec![0.0f64; size];
    generators::fill_uniform(&mut input, 0.0..FRAC_PI_2);
    let mut out = input.clone();

    println!("sqrt(sin*cos):");

    for policy in ExecutionPolicy::ALL {
        run_and_measure(policy.label(), repeat_count, || {
            execute(policy, &input, &mut out)
        });
    }
}
