//! Point-major kernel: one query per lane, streaming over reference tiles.
//!
//! Each reference tile yields 16 distance vectors. The exact and packed
//! flavours merge them as two bursts of 8; the approximate flavour first runs
//! a worthy network over all 16 and merges only its `n` survivors.

use crate::compute::simd_abstraction::{IdxScalar, PackedEngine, VectorEngine};
use crate::error::{Result, Unsupported};
use crate::topk::distance::{self, MAX_DIM, REFERENCE_TILE, ReferenceBlock};
use crate::topk::extract::{self, LevelScratch};
use crate::topk::levels::{Packed, Tagged, TopkLevels};
use crate::topk::networks::{self, BURST, MAX_LEVELS};
use crate::topk::packing::{self, PACK_LIMIT};

/// Reference points merged exactly before the approximate kernel switches to
/// worthy reduction.
pub const APPROX_EXACT_PREFIX: usize = REFERENCE_TILE;

/// One tile of queries, transposed to one lane per query.
pub struct QueryTile<'a, D> {
    /// `dim` rows of `lanes` values.
    pub coords: &'a [D],
    /// Squared query norms, zero past `rows`.
    pub norms: &'a [f32],
    /// Real queries in the tile.
    pub rows: usize,
}

/// How the f32 kernels combine a reference tile with the levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Exact,
    Packed,
    /// Worthy reduction to `worthy` candidates (6 or 8) per tile.
    PackedApprox { worthy: usize },
}

fn levels_for<S: networks::Slot>(k: usize, sentinel: S) -> Result<TopkLevels<S>> {
    TopkLevels::new(k, sentinel).ok_or(Unsupported::KOutOfRange { k, max: MAX_LEVELS })
}

/// Exact kernel over any engine, f32 or f16. Writes `tile.rows` rows of `k`.
#[inline(always)]
pub unsafe fn exact_tile<E: VectorEngine>(
    tile: &QueryTile<'_, E::Dist>,
    refs: &ReferenceBlock<E::Dist>,
    k: usize,
    scratch: &mut LevelScratch<E::Dist, E::Idx>,
    dis: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    unsafe {
        let sentinel = Tagged::<E>::sentinel();
        let mut levels = levels_for(k, sentinel)?;
        let dim = refs.dim();
        let mut x = [E::zero(); MAX_DIM];
        distance::load_query_tile::<E>(tile.coords, dim, &mut x);

        let mut dp = [E::zero(); REFERENCE_TILE];
        let mut burst = [sentinel; BURST];
        for j in (0..refs.padded_len()).step_by(REFERENCE_TILE) {
            distance::tile_distances::<E>(&x[..dim], refs, j, &mut dp);
            for half in 0..REFERENCE_TILE / BURST {
                for (r, slot) in burst.iter_mut().enumerate() {
                    let point = j + half * BURST + r;
                    *slot = Tagged { dist: dp[half * BURST + r], ids: E::idx_set1(<E::Idx as IdxScalar>::from_usize(point)) };
                }
                levels.merge(&burst);
            }
        }

        extract::transpose_exact::<E>(levels.levels(), &tile.norms[..tile.rows], refs.n_points(), scratch, dis, ids);
    }
    Ok(())
}

/// Packed kernel, exact or approximate.
///
/// The full distance `|x|^2 + |y|^2 - 2<x, y>` is clamped to
/// `[0, PACK_LIMIT]` before packing so the encoding stays ordered and never
/// collides with the empty-level pattern.
#[inline(always)]
pub unsafe fn packed_tile<E: PackedEngine>(
    tile: &QueryTile<'_, f32>,
    refs: &ReferenceBlock<f32>,
    k: usize,
    worthy: Option<usize>,
    scratch: &mut LevelScratch<f32, u32>,
    dis: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    let worthy = match worthy {
        Some(n) => Some((
            networks::worthy_network(n).ok_or(Unsupported::LevelsOutOfRange { reason: "worthy size must be 6 or 8" })?,
            n,
        )),
        None => None,
    };
    // Padding ids must fit too, since padded points travel through the levels.
    let id_mask = packing::id_mask_for(refs.padded_len());
    debug_assert!(packing::mask_holds(id_mask, refs.padded_len()), "padded ids overflow mask {id_mask:#x}");

    unsafe {
        let sentinel = Packed::<E>::sentinel();
        let mut levels = levels_for(k, sentinel)?;
        let dim = refs.dim();
        let mut x = [E::zero(); MAX_DIM];
        distance::load_query_tile::<E>(tile.coords, dim, &mut x);
        let x_norms = E::load(tile.norms.as_ptr());
        let zero = E::zero();
        let limit = E::set1(PACK_LIMIT);

        let mut dp = [E::zero(); REFERENCE_TILE];
        let mut candidates = [sentinel; REFERENCE_TILE];
        for j in (0..refs.padded_len()).step_by(REFERENCE_TILE) {
            distance::tile_distances::<E>(&x[..dim], refs, j, &mut dp);
            for (r, (slot, &d)) in candidates.iter_mut().zip(&dp).enumerate() {
                let full = E::min(E::max(E::add(d, x_norms), zero), limit);
                *slot = Packed(E::pack(full, E::idx_set1((j + r) as u32), id_mask));
            }
            match worthy {
                Some((network, n)) if j >= APPROX_EXACT_PREFIX => levels.merge_worthy(&mut candidates, network, n),
                _ => {
                    levels.merge(&candidates[..BURST]);
                    levels.merge(&candidates[BURST..]);
                }
            }
        }

        extract::transpose_packed::<E>(levels.levels(), id_mask, refs.n_points(), scratch, dis, ids);
    }
    Ok(())
}

/// Runs one f32 query tile with the requested kernel flavour.
#[inline(always)]
pub unsafe fn run_f32_tile<E: PackedEngine>(
    kind: TileKind,
    tile: &QueryTile<'_, f32>,
    refs: &ReferenceBlock<f32>,
    k: usize,
    scratch: &mut LevelScratch<f32, u32>,
    dis: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    unsafe {
        match kind {
            TileKind::Exact => exact_tile::<E>(tile, refs, k, scratch, dis, ids),
            TileKind::Packed => packed_tile::<E>(tile, refs, k, None, scratch, dis, ids),
            TileKind::PackedApprox { worthy } => packed_tile::<E>(tile, refs, k, Some(worthy), scratch, dis, ids),
        }
    }
}
