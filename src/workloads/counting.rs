//! Index-driven store/compute workload
//! Per index i: draw a price, quantity and discount, then compute
//! profit[i] = price · (1 − discount) · quantity. Exercises strided stores
//! the way counting-iterator loops do, rather than streaming one buffer.

use super::{LANES, PAR_CHUNK};
use crate::bench::run_and_measure;
use crate::policy::ExecutionPolicy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// The four per-index buffers the workload writes.
pub struct Basket {
    pub prices: Vec<f64>,
    pub quantities: Vec<u32>,
    pub discounts: Vec<f64>,
    pub profit: Vec<f64>,
}

impl Basket {
    pub fn new(size: usize) -> Self {
        Self {
            prices: vec![0.0; size],
            quantities: vec![0; size],
            discounts: vec![0.0; size],
            profit: vec![0.0; size],
        }
    }

    fn len(&self) -> usize {
        self.profit.len()
    }
}

#[inline(always)]
fn profit_of(price: f64, quantity: u32, discount: f64) -> f64 {
    price * (1.0 - discount) * f64::from(quantity)
}

fn fill_seq(basket: &mut Basket) {
    let mut rng = rand::thread_rng();
    for i in 0..basket.len() {
        basket.prices[i] = rng.gen_range(0.5..100.0);
        basket.quantities[i] = rng.gen_range(1..101);
        basket.discounts[i] = rng.gen_range(0.0..0.5); // max 50%
    }
}

fn fill_par(basket: &mut Basket) {
    (
        basket.prices.par_iter_mut(),
        basket.quantities.par_iter_mut(),
        basket.discounts.par_iter_mut(),
    )
        .into_par_iter()
        .for_each_init(SmallRng::from_entropy, |rng, (p, q, d)| {
            *p = rng.gen_range(0.5..100.0);
            *q = rng.gen_range(1..101);
            *d = rng.gen_range(0.0..0.5);
        });
}

fn profit_seq(basket: &mut Basket) {
    for i in 0..basket.len() {
        basket.profit[i] = profit_of(basket.prices[i], basket.quantities[i], basket.discounts[i]);
    }
}

/// Chunked kernel writing `out`, whose first element sits at index `offset`
/// of the basket buffers.
fn profit_kernel(
    prices: &[f64],
    quantities: &[u32],
    discounts: &[f64],
    out: &mut [f64],
    offset: usize,
) {
    let mut chunks = out.chunks_exact_mut(LANES);
    let mut base = offset;
    for chunk in chunks.by_ref() {
        for (j, slot) in chunk.iter_mut().enumerate() {
            let i = base + j;
            *slot = profit_of(prices[i], quantities[i], discounts[i]);
        }
        base += LANES;
    }
    for (j, slot) in chunks.into_remainder().iter_mut().enumerate() {
        let i = base + j;
        *slot = profit_of(prices[i], quantities[i], discounts[i]);
    }
}

fn profit_par(basket: &mut Basket) {
    let prices = &basket.prices;
    let quantities = &basket.quantities;
    let discounts = &basket.discounts;
    basket
        .profit
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = profit_of(prices[i], quantities[i], discounts[i]));
}

fn profit_par_unseq(basket: &mut Basket) {
    let prices = &basket.prices;
    let quantities = &basket.quantities;
    let discounts = &basket.discounts;
    basket
        .profit
        .par_chunks_mut(PAR_CHUNK)
        .enumerate()
        .for_each(|(ci, chunk)| {
            profit_kernel(prices, quantities, discounts, chunk, ci * PAR_CHUNK)
        });
}

/// Fill the basket and compute profits under `policy`; returns profit[0].
pub fn execute(policy: ExecutionPolicy, basket: &mut Basket) -> f64 {
    match policy {
        ExecutionPolicy::Seq | ExecutionPolicy::Unseq => fill_seq(basket),
        ExecutionPolicy::Par | ExecutionPolicy::ParUnseq => fill_par(basket),
    }
    match policy {
        ExecutionPolicy::Seq => profit_seq(basket),
        ExecutionPolicy::Unseq => {
            let (prices, quantities, discounts) =
                (&basket.prices, &basket.quantities, &basket.discounts);
            profit_kernel(prices, quantities, discounts, &mut basket.profit, 0);
        }
        ExecutionPolicy::Par => profit_par(basket),
        ExecutionPolicy::ParUnseq => profit_par_unseq(basket),
    }
    basket.profit.first().copied().unwrap_or(0.0)
}

/// Run the counting-iterator group under every policy.
pub fn run(repeat_count: usize, size: usize) {
    println!("counting iterators (profit):");

    let mut basket = Basket::new(size);

    for policy in ExecutionPolicy::ALL {
        run_and_measure(policy.label(), repeat_count, || {
            execute(policy, &mut basket)
        });
    }
}
