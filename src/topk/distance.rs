//! Tiled squared-L2 distances via the expansion identity
//! `|x - y|^2 = |x|^2 + |y|^2 - 2 <x, y>`.
//!
//! References are transposed once into dimension-major rows padded to a
//! multiple of `REFERENCE_TILE`, so coordinate `d` of reference `j` sits at
//! `coords[d * n_padded + j]`. Padding points have zero coordinates and a
//! `max_value` norm, which makes them lose every comparison against a real
//! point. Query tiles are transposed the same way, one lane per query.

use crate::compute::simd_abstraction::{DistScalar, VectorEngine};
use crate::config::{self, Verbosity};

/// Largest dimension with a kernel.
pub const MAX_DIM: usize = 32;

/// Reference points consumed per distance call (two 8-wide bursts).
pub const REFERENCE_TILE: usize = 16;

/// Squared norm of every `dim`-sized row of `points`.
pub fn squared_norms(points: &[f32], dim: usize) -> Vec<f32> {
    points.chunks_exact(dim).map(|row| row.iter().map(|&v| v * v).sum()).collect()
}

/// Reference set prepared for the distance kernel.
pub struct ReferenceBlock<D> {
    dim: usize,
    n: usize,
    n_padded: usize,
    coords: Vec<D>,
    norms: Vec<D>,
}

impl<D: DistScalar> ReferenceBlock<D> {
    /// Transposes `references` (row-major, `dim` per point) and pads them.
    /// `norms` are the squared norms of the rows.
    pub fn new(references: &[f32], dim: usize, norms: &[f32]) -> Self {
        let n = references.len() / dim;
        debug_assert_eq!(norms.len(), n);
        let n_padded = n.div_ceil(REFERENCE_TILE) * REFERENCE_TILE;

        let mut coords = vec![D::ZERO; dim * n_padded];
        for (j, row) in references.chunks_exact(dim).enumerate() {
            for (d, &v) in row.iter().enumerate() {
                coords[d * n_padded + j] = D::from_f32(v);
            }
        }

        let mut padded_norms = vec![D::MAX; n_padded];
        for (dst, &v) in padded_norms.iter_mut().zip(norms) {
            *dst = D::from_f32(v);
        }

        if config::verbose(Verbosity::Debug) {
            log::debug!("prepared {n} reference points (padded to {n_padded}), dim {dim}");
        }
        ReferenceBlock { dim, n, n_padded, coords, norms: padded_norms }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Real (unpadded) point count.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n
    }

    /// Point count rounded up to whole tiles.
    #[inline]
    pub fn padded_len(&self) -> usize {
        self.n_padded
    }

    /// Coordinate `d` of every (padded) point.
    #[inline]
    pub fn row(&self, d: usize) -> &[D] {
        &self.coords[d * self.n_padded..(d + 1) * self.n_padded]
    }

    #[inline]
    pub fn norms(&self) -> &[D] {
        &self.norms
    }
}

/// Writes `rows` queries (row-major) into `out` as `dim` rows of `lanes`
/// values; lanes past `rows` are zero.
pub fn transpose_queries<D: DistScalar>(queries: &[f32], dim: usize, lanes: usize, out: &mut [D]) {
    debug_assert!(out.len() >= dim * lanes);
    out[..dim * lanes].fill(D::ZERO);
    for (q, row) in queries.chunks_exact(dim).enumerate() {
        for (d, &v) in row.iter().enumerate() {
            out[d * lanes + q] = D::from_f32(v);
        }
    }
}

/// Loads a transposed query tile into registers, one per dimension.
#[inline(always)]
pub unsafe fn load_query_tile<E: VectorEngine>(transposed: &[E::Dist], dim: usize, x: &mut [E::DistVec; MAX_DIM]) {
    debug_assert!(transposed.len() >= dim * E::WIDTH);
    for (d, slot) in x.iter_mut().enumerate().take(dim) {
        *slot = unsafe { E::load(transposed.as_ptr().add(d * E::WIDTH)) };
    }
}

/// `out[r] = |y_{j+r}|^2 - 2 <x, y_{j+r}>` for the 16 references starting at
/// `j`, each lane holding one query. One multiply then `dim - 1` FMAs per
/// reference.
#[inline(always)]
pub unsafe fn tile_distances<E: VectorEngine>(
    x: &[E::DistVec],
    refs: &ReferenceBlock<E::Dist>,
    j: usize,
    out: &mut [E::DistVec; REFERENCE_TILE],
) {
    let dim = x.len();
    unsafe {
        let first = &refs.row(0)[j..j + REFERENCE_TILE];
        for (acc, &y) in out.iter_mut().zip(first) {
            *acc = E::mul(x[0], E::set1(y));
        }
        for (d, &xd) in x.iter().enumerate().take(dim).skip(1) {
            let row = &refs.row(d)[j..j + REFERENCE_TILE];
            for (acc, &y) in out.iter_mut().zip(row) {
                *acc = E::fmadd(xd, E::set1(y), *acc);
            }
        }
        let two = E::set1(<E::Dist as DistScalar>::from_f32(2.0));
        let norms = &refs.norms()[j..j + REFERENCE_TILE];
        for (acc, &n) in out.iter_mut().zip(norms) {
            *acc = E::fnmadd(*acc, two, E::set1(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::simd_abstraction::Portable32;

    #[test]
    fn test_reference_block_layout_and_padding() {
        let refs = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let norms = squared_norms(&refs, 2);
        assert_eq!(norms, vec![5.0, 25.0, 61.0]);

        let block = ReferenceBlock::<f32>::new(&refs, 2, &norms);
        assert_eq!(block.n_points(), 3);
        assert_eq!(block.padded_len(), REFERENCE_TILE);
        assert_eq!(&block.row(0)[..4], &[1.0, 3.0, 5.0, 0.0]);
        assert_eq!(&block.row(1)[..4], &[2.0, 4.0, 6.0, 0.0]);
        assert_eq!(block.norms()[2], 61.0);
        assert_eq!(block.norms()[3], f32::MAX);
    }

    #[test]
    fn test_tile_distances_match_expansion() {
        type E = Portable32;
        let dim = 3;
        let refs: Vec<f32> = (0..20 * dim).map(|i| (i % 7) as f32 - 3.0).collect();
        let queries: Vec<f32> = (0..5 * dim).map(|i| (i % 5) as f32 * 0.5).collect();
        let block = ReferenceBlock::<f32>::new(&refs, dim, &squared_norms(&refs, dim));

        let mut transposed = vec![0.0f32; dim * E::WIDTH];
        transpose_queries(&queries, dim, E::WIDTH, &mut transposed);
        let mut x = [[0.0f32; 16]; MAX_DIM];
        let mut out = [[0.0f32; 16]; REFERENCE_TILE];
        unsafe {
            load_query_tile::<E>(&transposed, dim, &mut x);
            tile_distances::<E>(&x[..dim], &block, 16, &mut out);
        }

        let qnorms = squared_norms(&queries, dim);
        for r in 0..4 {
            let y = &refs[(16 + r) * dim..(17 + r) * dim];
            for q in 0..5 {
                let xq = &queries[q * dim..(q + 1) * dim];
                let exact: f32 = xq.iter().zip(y).map(|(a, b)| (a - b) * (a - b)).sum();
                assert!((out[r][q] + qnorms[q] - exact).abs() < 1e-4);
            }
        }
        // padded references stay at the sentinel
        assert_eq!(out[4][0], f32::MAX);
    }
}
