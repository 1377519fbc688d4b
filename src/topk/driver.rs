//! Query tiling.
//!
//! Output rows are cut into chunks of `lanes` queries; rayon processes the
//! chunks in parallel, each worker reusing one `TileScratch`. A short final
//! chunk is padded with zero queries inside the scratch and only its real
//! rows are written, so no special leftover path is needed.

use rayon::prelude::*;

use crate::compute::simd_abstraction::{DistScalar, IdxScalar};
use crate::config::{self, Verbosity};
use crate::error::Result;
use crate::topk::distance::transpose_queries;
use crate::topk::extract::LevelScratch;
use crate::topk::point_major::QueryTile;

/// Per-worker buffers, sized once for `dim`, `lanes` and `k`.
pub struct TileScratch<D, I> {
    coords: Vec<D>,
    norms: Vec<f32>,
    levels: LevelScratch<D, I>,
}

impl<D: DistScalar, I: IdxScalar> TileScratch<D, I> {
    pub fn new(dim: usize, lanes: usize, k: usize) -> Self {
        TileScratch {
            coords: vec![D::ZERO; dim * lanes],
            norms: vec![0.0; lanes],
            levels: LevelScratch::new(k, lanes),
        }
    }
}

/// Runs `tile_fn` over every query tile.
///
/// `dis` and `ids` are `nq * k` row-major outputs; `tile_fn` receives the
/// slices belonging to its tile.
#[allow(clippy::too_many_arguments)]
pub fn for_each_query_tile<D, I, F>(
    queries: &[f32],
    query_norms: &[f32],
    dim: usize,
    k: usize,
    lanes: usize,
    dis: &mut [f32],
    ids: &mut [i64],
    tile_fn: F,
) -> Result<()>
where
    D: DistScalar,
    I: IdxScalar,
    F: Fn(&QueryTile<'_, D>, &mut LevelScratch<D, I>, &mut [f32], &mut [i64]) -> Result<()> + Sync,
{
    let chunk = lanes * k;
    let n_queries = dis.len() / k;
    if config::verbose(Verbosity::Debug) {
        log::debug!(
            "tiling {n_queries} queries into {} tiles of {lanes} lanes (dim {dim}, k {k})",
            n_queries.div_ceil(lanes)
        );
    }

    dis.par_chunks_mut(chunk)
        .zip(ids.par_chunks_mut(chunk))
        .enumerate()
        .try_for_each_init(
            || TileScratch::<D, I>::new(dim, lanes, k),
            |scratch, (t, (tile_dis, tile_ids))| {
                let first = t * lanes;
                let rows = tile_dis.len() / k;
                transpose_queries(&queries[first * dim..(first + rows) * dim], dim, lanes, &mut scratch.coords);
                scratch.norms.fill(0.0);
                scratch.norms[..rows].copy_from_slice(&query_norms[first..first + rows]);

                let tile = QueryTile { coords: &scratch.coords, norms: &scratch.norms, rows };
                tile_fn(&tile, &mut scratch.levels, tile_dis, tile_ids)
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_tiles_cover_every_row_once() {
        let dim = 2;
        let k = 3;
        let lanes = 4;
        let nq = 11;
        let queries: Vec<f32> = (0..nq * dim).map(|i| i as f32).collect();
        let norms: Vec<f32> = (0..nq).map(|q| q as f32).collect();
        let mut dis = vec![-1.0f32; nq * k];
        let mut ids = vec![-1i64; nq * k];
        let seen = Mutex::new(Vec::new());

        for_each_query_tile::<f32, u32, _>(&queries, &norms, dim, k, lanes, &mut dis, &mut ids, |tile, _, d, i| {
            seen.lock().unwrap().push(tile.rows);
            for q in 0..tile.rows {
                // coordinate 0 of query q sits in lane q of row 0
                let query = (tile.coords[q] / dim as f32) as i64;
                assert_eq!(tile.norms[q], query as f32);
                d[q * k..(q + 1) * k].fill(tile.coords[q]);
                i[q * k..(q + 1) * k].fill(query);
            }
            assert!(tile.norms[tile.rows..].iter().all(|&n| n == 0.0));
            Ok(())
        })
        .unwrap();

        let mut rows = seen.into_inner().unwrap();
        rows.sort();
        assert_eq!(rows, vec![3, 4, 4]);
        for q in 0..nq {
            assert!(ids[q * k..(q + 1) * k].iter().all(|&id| id == q as i64));
        }
    }
}
