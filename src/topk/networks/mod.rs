//! Partial sorting networks.
//!
//! merge(k, n) is a fixed list of compare-exchange steps over `k + n` slots.
//! With slots `0..k` sorted ascending and `n` arbitrary candidates behind
//! them, running the list leaves the `k` smallest of all `k + n` values
//! sorted in `0..k`; the trailing `n` slots are garbage afterwards.
//!
//! The steps never branch on data, so the same network runs unchanged on
//! scalar slots, on (distance, id) vector pairs and on packed vectors. Only
//! `n` in {6, 8} is tabulated; wider bursts are fed as several 8-wide merges.
//!
//! The worthy networks are shallower: they move the `n` smallest of 16
//! candidates into slots `0..n` without ordering them, which is enough to feed
//! a merge(k, n) afterwards.

pub mod tables;

pub use tables::Comparators;

/// Deepest tabulated merge, and therefore the largest supported k.
pub const MAX_LEVELS: usize = 24;

/// Widest tabulated candidate burst.
pub const BURST: usize = 8;

/// Candidate count consumed by a worthy network.
pub const WORTHY_INPUTS: usize = 16;

/// Worthy-candidate counts with a table.
pub const WORTHY_SIZES: [usize; 2] = [6, 8];

/// Comparators for merge(k, n), if tabulated.
#[inline]
pub fn merge_network(k: usize, n: usize) -> Option<Comparators> {
    if !(1..=MAX_LEVELS).contains(&k) {
        return None;
    }
    match n {
        6 => Some(tables::MERGE_N6[k - 1]),
        8 => Some(tables::MERGE_N8[k - 1]),
        _ => None,
    }
}

/// Comparators selecting the `n` smallest of 16 candidates, if tabulated.
#[inline]
pub fn worthy_network(n: usize) -> Option<Comparators> {
    match n {
        6 => Some(tables::WORTHY_16_6),
        8 => Some(tables::WORTHY_16_8),
        _ => None,
    }
}

/// A value a network can order.
///
/// Implemented by (distance, id) vector pairs and packed vectors in
/// `topk::levels`; tests use plain scalars.
pub trait Slot: Copy {
    type Mask: Copy;

    /// Returns `(min, max)` of the pair, lane by lane.
    unsafe fn compare_exchange(a: Self, b: Self) -> (Self, Self);

    /// Per lane: `if_set` where the mask bit is set, else `if_unset`.
    unsafe fn blend(mask: Self::Mask, if_unset: Self, if_set: Self) -> Self;
}

/// Runs `network` over `slots`.
///
/// # Safety
/// `S::compare_exchange` may require CPU features; see `VectorEngine`.
#[inline(always)]
pub unsafe fn apply<S: Slot>(network: Comparators, slots: &mut [S]) {
    for &(lo, hi) in network {
        let (lo, hi) = (lo as usize, hi as usize);
        let (a, b) = unsafe { S::compare_exchange(slots[lo], slots[hi]) };
        slots[lo] = a;
        slots[hi] = b;
    }
}
