//! Running top-k state.
//!
//! `TopkLevels` keeps `k` level registers followed by room for one candidate
//! burst, so merge(k, n) runs in place over a single slot array. Per lane,
//! level 0 ≤ level 1 ≤ … ≤ level k-1 holds at every point between merges.

use crate::compute::simd_abstraction::{PackedEngine, VectorEngine};
use crate::topk::networks::{self, BURST, Comparators, MAX_LEVELS, Slot, WORTHY_INPUTS};

/// A distance vector with its id vector; both move under the same mask.
pub struct Tagged<E: VectorEngine> {
    pub dist: E::DistVec,
    pub ids: E::IdxVec,
}

impl<E: VectorEngine> Clone for Tagged<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: VectorEngine> Copy for Tagged<E> {}

impl<E: VectorEngine> Tagged<E> {
    /// Empty level: `max_value` distances with sentinel ids.
    #[inline(always)]
    pub unsafe fn sentinel() -> Self {
        unsafe {
            Tagged {
                dist: E::max_value(),
                ids: E::idx_set1(<E::Idx as crate::compute::simd_abstraction::IdxScalar>::MAX),
            }
        }
    }
}

impl<E: VectorEngine> Slot for Tagged<E> {
    type Mask = E::Mask;

    #[inline(always)]
    unsafe fn compare_exchange(a: Self, b: Self) -> (Self, Self) {
        unsafe {
            let le = E::compare_le(a.dist, b.dist);
            let lo = Tagged {
                dist: E::select(le, b.dist, a.dist),
                ids: E::idx_select(le, b.ids, a.ids),
            };
            let hi = Tagged {
                dist: E::select(le, a.dist, b.dist),
                ids: E::idx_select(le, a.ids, b.ids),
            };
            (lo, hi)
        }
    }

    #[inline(always)]
    unsafe fn blend(mask: E::Mask, if_unset: Self, if_set: Self) -> Self {
        unsafe {
            Tagged {
                dist: E::select(mask, if_unset.dist, if_set.dist),
                ids: E::idx_select(mask, if_unset.ids, if_set.ids),
            }
        }
    }
}

/// A vector of packed (distance | id) values; ordering is plain min/max.
pub struct Packed<E: PackedEngine>(pub E::DistVec);

impl<E: PackedEngine> Clone for Packed<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: PackedEngine> Copy for Packed<E> {}

impl<E: PackedEngine> Packed<E> {
    /// Empty level: the raw `f32::MAX` bit pattern, never produced by `pack`
    /// for clamped distances.
    #[inline(always)]
    pub unsafe fn sentinel() -> Self {
        Packed(unsafe { E::max_value() })
    }
}

impl<E: PackedEngine> Slot for Packed<E> {
    type Mask = E::Mask;

    #[inline(always)]
    unsafe fn compare_exchange(a: Self, b: Self) -> (Self, Self) {
        unsafe { (Packed(E::min(a.0, b.0)), Packed(E::max(a.0, b.0))) }
    }

    #[inline(always)]
    unsafe fn blend(mask: E::Mask, if_unset: Self, if_set: Self) -> Self {
        Packed(unsafe { E::select(mask, if_unset.0, if_set.0) })
    }
}

const SLOTS: usize = MAX_LEVELS + BURST;

/// `k` sorted level registers plus a candidate area of up to `BURST` slots.
pub struct TopkLevels<S: Slot> {
    slots: [S; SLOTS],
    k: usize,
    merge6: Comparators,
    merge8: Comparators,
}

impl<S: Slot> TopkLevels<S> {
    /// Levels for `k` in `1..=MAX_LEVELS`, all set to `sentinel`.
    pub fn new(k: usize, sentinel: S) -> Option<Self> {
        Some(TopkLevels {
            slots: [sentinel; SLOTS],
            k,
            merge6: networks::merge_network(k, 6)?,
            merge8: networks::merge_network(k, 8)?,
        })
    }

    #[inline]
    pub fn levels(&self) -> &[S] {
        &self.slots[..self.k]
    }

    /// Merges 6 or 8 unordered candidates into the levels.
    #[inline(always)]
    pub unsafe fn merge(&mut self, candidates: &[S]) {
        let k = self.k;
        let network = match candidates.len() {
            6 => self.merge6,
            8 => self.merge8,
            n => unreachable!("no merge network for {n} candidates"),
        };
        self.slots[k..k + candidates.len()].copy_from_slice(candidates);
        unsafe { networks::apply(network, &mut self.slots[..k + candidates.len()]) };
    }

    /// Reduces 16 candidates to the `n` smallest with `worthy`, then merges
    /// those. `burst` is clobbered.
    #[inline(always)]
    pub unsafe fn merge_worthy(&mut self, burst: &mut [S; WORTHY_INPUTS], worthy: Comparators, n: usize) {
        unsafe {
            networks::apply(worthy, burst);
            self.merge(&burst[..n]);
        }
    }

    /// Pops level 0 in the masked lanes: every level moves down one step and
    /// the top level becomes `sentinel`. Other lanes are untouched.
    #[inline(always)]
    pub unsafe fn shift_down(&mut self, mask: S::Mask, sentinel: S) {
        let k = self.k;
        for level in 0..k - 1 {
            self.slots[level] = unsafe { S::blend(mask, self.slots[level], self.slots[level + 1]) };
        }
        self.slots[k - 1] = unsafe { S::blend(mask, self.slots[k - 1], sentinel) };
    }
}
