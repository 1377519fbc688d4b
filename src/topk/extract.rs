//! Turning level registers into result arrays.
//!
//! Point-major levels are level-major (level `l`, lane = query), so they are
//! spilled and transposed into one row of k results per query. Array levels
//! hold several candidates of the same query across lanes and are drained
//! with repeated horizontal minima, which must cope with ties.
//!
//! Slots that do not correspond to a real point (padding, empty levels) are
//! written as `MISSING_DISTANCE` / `MISSING_ID`.

use crate::compute::simd_abstraction::{DistScalar, IdxScalar, PackedEngine, VectorEngine};
use crate::topk::levels::{Packed, Tagged, TopkLevels};
use crate::topk::packing;

pub const MISSING_DISTANCE: f32 = f32::INFINITY;
pub const MISSING_ID: i64 = -1;

/// Spill area for `k` level registers of `lanes` lanes each.
pub struct LevelScratch<D, I> {
    dist: Vec<D>,
    ids: Vec<I>,
}

impl<D: DistScalar, I: IdxScalar> LevelScratch<D, I> {
    pub fn new(k: usize, lanes: usize) -> Self {
        LevelScratch { dist: vec![D::ZERO; k * lanes], ids: vec![I::ZERO; k * lanes] }
    }
}

/// Writes `dis.len() / k` query rows from exact levels.
///
/// The kernel keeps `|y|^2 - 2<x, y>`; here `|x|^2` is added and the result
/// clamped at zero.
#[inline]
pub unsafe fn transpose_exact<E: VectorEngine>(
    levels: &[Tagged<E>],
    query_norms: &[f32],
    n_references: usize,
    scratch: &mut LevelScratch<E::Dist, E::Idx>,
    dis: &mut [f32],
    ids: &mut [i64],
) {
    let k = levels.len();
    let w = E::WIDTH;
    debug_assert!(scratch.dist.len() >= k * w);
    for (l, level) in levels.iter().enumerate() {
        unsafe {
            E::store(scratch.dist.as_mut_ptr().add(l * w), level.dist);
            E::idx_store(scratch.ids.as_mut_ptr().add(l * w), level.ids);
        }
    }

    let sentinel = <E::Dist as DistScalar>::MAX;
    for (q, (row_dis, row_ids)) in dis.chunks_exact_mut(k).zip(ids.chunks_exact_mut(k)).enumerate() {
        let norm = query_norms[q];
        for l in 0..k {
            let raw = scratch.dist[l * w + q];
            let id = scratch.ids[l * w + q].to_usize();
            if raw >= sentinel || id >= n_references {
                row_dis[l] = MISSING_DISTANCE;
                row_ids[l] = MISSING_ID;
            } else {
                row_dis[l] = (raw.to_f32() + norm).max(0.0);
                row_ids[l] = id as i64;
            }
        }
    }
}

/// Writes `dis.len() / k` query rows from packed levels. Distances already
/// include the query norm; only unpacking remains, done a register at a
/// time before the transpose.
#[inline]
pub unsafe fn transpose_packed<E: PackedEngine>(
    levels: &[Packed<E>],
    id_mask: u32,
    n_references: usize,
    scratch: &mut LevelScratch<f32, u32>,
    dis: &mut [f32],
    ids: &mut [i64],
) {
    let k = levels.len();
    let w = E::WIDTH;
    debug_assert!(scratch.dist.len() >= k * w);
    for (l, level) in levels.iter().enumerate() {
        unsafe {
            let (distance, id) = E::unpack(level.0, id_mask);
            E::store(scratch.dist.as_mut_ptr().add(l * w), distance);
            E::idx_store(scratch.ids.as_mut_ptr().add(l * w), id);
        }
    }

    for (q, (row_dis, row_ids)) in dis.chunks_exact_mut(k).zip(ids.chunks_exact_mut(k)).enumerate() {
        for l in 0..k {
            let distance = scratch.dist[l * w + q];
            let id = scratch.ids[l * w + q];
            if packing::is_empty_unpacked(distance) || id as usize >= n_references {
                row_dis[l] = MISSING_DISTANCE;
                row_ids[l] = MISSING_ID;
            } else {
                row_dis[l] = distance;
                row_ids[l] = id as i64;
            }
        }
    }
}

/// Drains the `dis.len()` smallest values out of array levels.
///
/// Every round takes the minimum of level 0 across lanes; all lanes equal to
/// it are emitted together (in lane order, up to the remaining budget) and
/// popped. Ties are therefore ordered by lane, not by input position.
#[inline]
pub unsafe fn reduce_exact<E: VectorEngine<Dist = f32, Idx = u32>>(
    levels: &mut TopkLevels<Tagged<E>>,
    n_values: usize,
    dis: &mut [f32],
    ids: &mut [i32],
) {
    let k = dis.len();
    let mut found = vec![u32::MAX; k];
    let mut written = 0;
    unsafe {
        let all = E::mask_first(E::WIDTH);
        let sentinel = Tagged::<E>::sentinel();
        while written < k {
            let head = levels.levels()[0];
            let v = E::reduce_min(all, head.dist);
            let ties = E::compare_eq(head.dist, E::set1(v));
            let got = E::compress_store(ties, head.ids, found.as_mut_ptr().add(written), k - written);
            if got == 0 {
                // only reachable with NaN lanes
                break;
            }
            dis[written..written + got].fill(v);
            written += got;
            levels.shift_down(ties, sentinel);
        }
    }

    for slot in 0..k {
        let id = found[slot] as usize;
        if slot >= written || id >= n_values {
            dis[slot] = MISSING_DISTANCE;
            ids[slot] = MISSING_ID as i32;
        } else {
            ids[slot] = id as i32;
        }
    }
}

/// Packed counterpart of `reduce_exact`. Packed values are unique, so each
/// round yields exactly one element.
#[inline]
pub unsafe fn reduce_packed<E: PackedEngine>(
    levels: &mut TopkLevels<Packed<E>>,
    id_mask: u32,
    dis: &mut [f32],
    ids: &mut [i32],
) {
    let k = dis.len();
    let mut written = 0;
    unsafe {
        let all = E::mask_first(E::WIDTH);
        let sentinel = Packed::<E>::sentinel();
        while written < k {
            let head = levels.levels()[0].0;
            let v = E::reduce_min(all, head);
            if packing::is_packed_sentinel(v) {
                break;
            }
            let (distance, id) = packing::unpack(v, id_mask);
            dis[written] = distance;
            ids[written] = id as i32;
            written += 1;
            levels.shift_down(E::compare_eq(head, E::set1(v)), sentinel);
        }
    }
    dis[written..].fill(MISSING_DISTANCE);
    ids[written..].fill(MISSING_ID as i32);
}
