//! Array kernel (`get_min_k`): the k smallest of one value array.
//!
//! Lanes hold different positions of the same array, so each lane keeps a
//! sorted top-`n_levels` of the positions it saw. The global top-k is then
//! drained across lanes with horizontal minima. Using `n_levels < k` is
//! approximate: a lane holding more than `n_levels` of the true top-k loses
//! the excess.

use crate::compute::simd_abstraction::{PackedEngine, VectorEngine};
use crate::error::{Result, Unsupported};
use crate::topk::extract;
use crate::topk::levels::{Packed, Tagged, TopkLevels};
use crate::topk::networks::{BURST, MAX_LEVELS};
use crate::topk::packing::{self, PACK_LIMIT};

/// Per-lane depth used when the caller does not choose one.
pub fn default_levels(k: usize) -> usize {
    1 + (k + 1) / 3
}

/// Validated per-lane depth for `k` results on `lanes` lanes.
///
/// `None` or `Some(0)` pick `default_levels`; the packed kernel clamps its
/// depth to `[1, min(k, MAX_LEVELS)]` first.
pub fn resolve_levels(k: usize, requested: Option<usize>, lanes: usize, packed: bool) -> Result<usize> {
    let mut n = match requested {
        None | Some(0) => default_levels(k),
        Some(n) => n,
    };
    if packed {
        n = n.clamp(1, k.clamp(1, MAX_LEVELS));
    }
    if n > MAX_LEVELS {
        return Err(Unsupported::LevelsOutOfRange { reason: "more levels than the deepest merge network" });
    }
    if k > lanes * n {
        return Err(Unsupported::LevelsOutOfRange { reason: "k exceeds lanes times levels" });
    }
    Ok(n)
}

/// Exact-value kernel with tie-aware extraction.
#[inline(always)]
pub unsafe fn min_k_exact<E: VectorEngine<Dist = f32, Idx = u32>>(
    values: &[f32],
    n_levels: usize,
    dis: &mut [f32],
    ids: &mut [i32],
) -> Result<()> {
    let n = values.len();
    unsafe {
        let sentinel = Tagged::<E>::sentinel();
        let mut levels =
            TopkLevels::new(n_levels, sentinel).ok_or(Unsupported::LevelsOutOfRange { reason: "no merge network" })?;
        let stair = E::staircase();
        let mut burst = [sentinel; BURST];

        for offset in (0..n).step_by(BURST * E::WIDTH) {
            for (r, slot) in burst.iter_mut().enumerate() {
                let start = offset + r * E::WIDTH;
                let lane_ids = E::idx_add(stair, E::idx_set1(start as u32));
                *slot = if start + E::WIDTH <= n {
                    Tagged { dist: E::load(values.as_ptr().add(start)), ids: lane_ids }
                } else if start < n {
                    let valid = E::mask_first(n - start);
                    Tagged {
                        dist: E::load_masked(valid, values.as_ptr().add(start), sentinel.dist),
                        ids: E::idx_select(valid, sentinel.ids, lane_ids),
                    }
                } else {
                    sentinel
                };
            }
            levels.merge(&burst);
        }

        extract::reduce_exact(&mut levels, n, dis, ids);
    }
    Ok(())
}

/// Packed kernel. Inputs must be non-negative and finite; values above
/// `PACK_LIMIT` are clamped.
#[inline(always)]
pub unsafe fn min_k_packed<E: PackedEngine>(
    values: &[f32],
    n_levels: usize,
    dis: &mut [f32],
    ids: &mut [i32],
) -> Result<()> {
    let n = values.len();
    let id_mask = packing::id_mask_for(n);
    debug_assert!(packing::mask_holds(id_mask, n), "{n} ids overflow mask {id_mask:#x}");
    unsafe {
        let sentinel = Packed::<E>::sentinel();
        let mut levels =
            TopkLevels::new(n_levels, sentinel).ok_or(Unsupported::LevelsOutOfRange { reason: "no merge network" })?;
        let stair = E::staircase();
        let limit = E::set1(PACK_LIMIT);
        let mut burst = [sentinel; BURST];

        for offset in (0..n).step_by(BURST * E::WIDTH) {
            for (r, slot) in burst.iter_mut().enumerate() {
                let start = offset + r * E::WIDTH;
                if start >= n {
                    *slot = sentinel;
                    continue;
                }
                let lane_ids = E::idx_add(stair, E::idx_set1(start as u32));
                let valid = E::mask_first((n - start).min(E::WIDTH));
                let raw = E::load_masked(valid, values.as_ptr().add(start), E::zero());
                let packed = E::pack(E::min(raw, limit), lane_ids, id_mask);
                *slot = Packed(E::select(valid, sentinel.0, packed));
            }
            levels.merge(&burst);
        }

        extract::reduce_packed(&mut levels, id_mask, dis, ids);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::simd_abstraction::Portable32;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    type E = Portable32;

    fn sorted_min_k(values: &[f32], k: usize) -> Vec<f32> {
        let mut v = values.to_vec();
        v.sort_by(f32::total_cmp);
        v.truncate(k);
        v
    }

    #[test]
    fn test_resolve_levels() {
        assert_eq!(default_levels(1), 1);
        assert_eq!(default_levels(10), 4);
        assert_eq!(resolve_levels(10, None, 16, false), Ok(4));
        assert_eq!(resolve_levels(10, Some(0), 16, false), Ok(4));
        assert_eq!(resolve_levels(10, Some(24), 16, false), Ok(24));
        assert!(resolve_levels(10, Some(25), 16, false).is_err());
        assert!(resolve_levels(20, Some(1), 8, false).is_err());
        // packed clamps to k before the range checks
        assert_eq!(resolve_levels(3, Some(30), 16, true), Ok(3));
    }

    #[test]
    fn test_exact_with_full_depth_is_exact() {
        let mut rng = StdRng::seed_from_u64(21);
        for n in [1usize, 15, 16, 17, 127, 128, 129, 1000] {
            let values: Vec<f32> = (0..n).map(|_| rng.gen_range(-50.0..50.0)).collect();
            let k = 10.min(n);
            let (mut dis, mut ids) = (vec![0.0; k], vec![0i32; k]);
            unsafe { min_k_exact::<E>(&values, k, &mut dis, &mut ids).unwrap() };
            assert_eq!(dis, sorted_min_k(&values, k), "n = {n}");
            for (d, &id) in dis.iter().zip(&ids) {
                assert_eq!(values[id as usize], *d);
            }
        }
    }

    #[test]
    fn test_exact_reports_missing_when_k_exceeds_n() {
        let values = [3.0f32, 1.0, 2.0];
        let (mut dis, mut ids) = (vec![0.0; 5], vec![0i32; 5]);
        unsafe { min_k_exact::<E>(&values, 1, &mut dis, &mut ids).unwrap() };
        assert_eq!(&dis[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(&ids[..3], &[1, 2, 0]);
        assert_eq!(&ids[3..], &[-1, -1]);
        assert!(dis[3..].iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_exact_ties_share_values() {
        let values = vec![7.0f32; 40];
        let (mut dis, mut ids) = (vec![0.0; 6], vec![0i32; 6]);
        unsafe { min_k_exact::<E>(&values, 2, &mut dis, &mut ids).unwrap() };
        assert_eq!(dis, vec![7.0; 6]);
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
        assert!(ids.iter().all(|&id| (0..40).contains(&id)));
    }

    #[test]
    fn test_packed_matches_sorted_ids() {
        let mut rng = StdRng::seed_from_u64(22);
        let values: Vec<f32> = (0..500).map(|_| rng.gen_range(0.0..1000.0)).collect();
        let k = 8;
        let (mut dis, mut ids) = (vec![0.0; k], vec![0i32; k]);
        unsafe { min_k_packed::<E>(&values, k, &mut dis, &mut ids).unwrap() };

        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        let expected: Vec<i32> = order[..k].iter().map(|&i| i as i32).collect();
        assert_eq!(ids, expected);
        for (d, &id) in dis.iter().zip(&ids) {
            assert!((values[id as usize] - d).abs() <= values[id as usize] * 1e-4);
        }
    }

    #[test]
    fn test_packed_tail_lanes_never_surface() {
        let values = [4.0f32, 0.0, 9.0];
        let (mut dis, mut ids) = (vec![0.0; 4], vec![0i32; 4]);
        unsafe { min_k_packed::<E>(&values, 4, &mut dis, &mut ids).unwrap() };
        assert_eq!(ids, vec![1, 0, 2, -1]);
        assert_eq!(dis[0], 0.0);
        assert!(dis[3].is_infinite());
    }
}
