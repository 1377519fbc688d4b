// tests/common/mod.rs
// Shared data generators and the brute-force reference.
#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ferrous_topk::KnnOutput;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn random_points(seed: u64, n: usize, dim: usize, lo: f32, hi: f32) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * dim).map(|_| rng.gen_range(lo..hi)).collect()
}

#[derive(PartialEq)]
struct Candidate(f32, i64);

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0).then(self.1.cmp(&other.1))
    }
}

/// Exact k nearest ids per query, nearest first, via a bounded max-heap.
pub fn brute_force_knn(queries: &[f32], references: &[f32], dim: usize, k: usize) -> Vec<Vec<(f32, i64)>> {
    queries
        .chunks_exact(dim)
        .map(|q| {
            let mut heap = BinaryHeap::with_capacity(k + 1);
            for (j, y) in references.chunks_exact(dim).enumerate() {
                let d: f32 = q.iter().zip(y).map(|(a, b)| (a - b) * (a - b)).sum();
                heap.push(Candidate(d, j as i64));
                if heap.len() > k {
                    heap.pop();
                }
            }
            heap.into_sorted_vec().into_iter().map(|c| (c.0, c.1)).collect()
        })
        .collect()
}

/// Fraction of reported ids that belong to the true top-k of their query.
pub fn recall(out: &KnnOutput, truth: &[Vec<(f32, i64)>]) -> f64 {
    let mut hits = 0usize;
    let mut total = 0usize;
    for (q, expected) in truth.iter().enumerate() {
        let (_, ids) = out.row(q);
        for id in ids {
            total += 1;
            if expected.iter().any(|&(_, e)| e == *id) {
                hits += 1;
            }
        }
    }
    hits as f64 / total as f64
}
