//! Lane-array engine
//!
//! A `VectorEngine` over plain arrays, parameterised by distance scalar,
//! index scalar and lane count. It compiles on every target and gives the
//! hardware engines a reference to be checked against. The instantiations
//! used by the kernels are:
//! - `Portable32`: 16 lanes of f32 with u32 ids (same lane count as AVX-512)
//! - `PortableHalf`: 32 lanes of f16 with u16 ids (512 bits of 16-bit lanes)
//!
//! Masks are bit sets, so `W` is limited to 64 lanes.

use std::marker::PhantomData;

use half::f16;

use super::scalar::{DistScalar, IdxScalar};
use super::{PackedEngine, VectorEngine};

#[derive(Clone, Copy, Debug, Default)]
pub struct PortableEngine<D, I, const W: usize>(PhantomData<(D, I)>);

pub type Portable32 = PortableEngine<f32, u32, 16>;
pub type PortableHalf = PortableEngine<f16, u16, 32>;

impl<D, I, const W: usize> PortableEngine<D, I, W> {
    #[inline(always)]
    fn lane_set(mask: u64, lane: usize) -> bool {
        mask & (1u64 << lane) != 0
    }
}

#[allow(unsafe_op_in_unsafe_fn)]
impl<D: DistScalar, I: IdxScalar, const W: usize> VectorEngine for PortableEngine<D, I, W> {
    const WIDTH: usize = W;

    type Dist = D;
    type Idx = I;
    type DistVec = [D; W];
    type IdxVec = [I; W];
    type Mask = u64;

    // ===== Creation and Initialization =====

    #[inline(always)]
    unsafe fn zero() -> Self::DistVec {
        [D::ZERO; W]
    }

    #[inline(always)]
    unsafe fn max_value() -> Self::DistVec {
        [D::MAX; W]
    }

    #[inline(always)]
    unsafe fn set1(v: D) -> Self::DistVec {
        [v; W]
    }

    // ===== Memory Operations =====

    #[inline(always)]
    unsafe fn load(src: *const D) -> Self::DistVec {
        std::ptr::read_unaligned(src as *const [D; W])
    }

    #[inline(always)]
    unsafe fn load_masked(mask: u64, src: *const D, fill: Self::DistVec) -> Self::DistVec {
        let mut out = fill;
        for (lane, slot) in out.iter_mut().enumerate() {
            if Self::lane_set(mask, lane) {
                *slot = *src.add(lane);
            }
        }
        out
    }

    #[inline(always)]
    unsafe fn store(dst: *mut D, v: Self::DistVec) {
        std::ptr::write_unaligned(dst as *mut [D; W], v)
    }

    // ===== Arithmetic =====

    #[inline(always)]
    unsafe fn add(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        std::array::from_fn(|i| a[i].add(b[i]))
    }

    #[inline(always)]
    unsafe fn mul(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        std::array::from_fn(|i| a[i].mul(b[i]))
    }

    #[inline(always)]
    unsafe fn min(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        std::array::from_fn(|i| DistScalar::min(a[i], b[i]))
    }

    #[inline(always)]
    unsafe fn max(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        std::array::from_fn(|i| DistScalar::max(a[i], b[i]))
    }

    #[inline(always)]
    unsafe fn fmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        std::array::from_fn(|i| a[i].mul_add(b[i], acc[i]))
    }

    #[inline(always)]
    unsafe fn fnmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        std::array::from_fn(|i| a[i].neg_mul_add(b[i], acc[i]))
    }

    // ===== Comparison and Mask Operations =====

    #[inline(always)]
    unsafe fn compare_eq(a: Self::DistVec, b: Self::DistVec) -> u64 {
        let mut mask = 0u64;
        for i in 0..W {
            if a[i] == b[i] {
                mask |= 1 << i;
            }
        }
        mask
    }

    #[inline(always)]
    unsafe fn compare_le(a: Self::DistVec, b: Self::DistVec) -> u64 {
        let mut mask = 0u64;
        for i in 0..W {
            if a[i] <= b[i] {
                mask |= 1 << i;
            }
        }
        mask
    }

    #[inline(always)]
    unsafe fn select(mask: u64, if_unset: Self::DistVec, if_set: Self::DistVec) -> Self::DistVec {
        std::array::from_fn(|i| if Self::lane_set(mask, i) { if_set[i] } else { if_unset[i] })
    }

    #[inline(always)]
    unsafe fn mask_first(n: usize) -> u64 {
        if n >= 64 { u64::MAX } else { (1u64 << n.min(W)) - 1 }
    }

    #[inline(always)]
    unsafe fn mask_bits(mask: u64) -> u64 {
        mask & Self::mask_first(W)
    }

    #[inline(always)]
    unsafe fn reduce_min(mask: u64, v: Self::DistVec) -> D {
        let mut best = D::MAX;
        for (lane, &x) in v.iter().enumerate() {
            if Self::lane_set(mask, lane) {
                best = DistScalar::min(best, x);
            }
        }
        best
    }

    // ===== Index Lanes =====

    #[inline(always)]
    unsafe fn idx_set1(v: I) -> Self::IdxVec {
        [v; W]
    }

    #[inline(always)]
    unsafe fn staircase() -> Self::IdxVec {
        std::array::from_fn(I::from_usize)
    }

    #[inline(always)]
    unsafe fn idx_add(a: Self::IdxVec, b: Self::IdxVec) -> Self::IdxVec {
        std::array::from_fn(|i| a[i].wrapping_add(b[i]))
    }

    #[inline(always)]
    unsafe fn idx_select(mask: u64, if_unset: Self::IdxVec, if_set: Self::IdxVec) -> Self::IdxVec {
        std::array::from_fn(|i| if Self::lane_set(mask, i) { if_set[i] } else { if_unset[i] })
    }

    #[inline(always)]
    unsafe fn idx_store(dst: *mut I, v: Self::IdxVec) {
        std::ptr::write_unaligned(dst as *mut [I; W], v)
    }

    #[inline(always)]
    unsafe fn compress_store(mask: u64, ids: Self::IdxVec, dst: *mut I, budget: usize) -> usize {
        let mut written = 0;
        for (lane, &id) in ids.iter().enumerate() {
            if written == budget {
                break;
            }
            if Self::lane_set(mask, lane) {
                *dst.add(written) = id;
                written += 1;
            }
        }
        written
    }
}

#[allow(unsafe_op_in_unsafe_fn)]
impl<const W: usize> PackedEngine for PortableEngine<f32, u32, W> {
    #[inline(always)]
    unsafe fn pack(dist: Self::DistVec, ids: Self::IdxVec, id_mask: u32) -> Self::DistVec {
        std::array::from_fn(|i| f32::from_bits((dist[i].to_bits() & !id_mask) | ids[i]))
    }

    #[inline(always)]
    unsafe fn unpack(packed: Self::DistVec, id_mask: u32) -> (Self::DistVec, Self::IdxVec) {
        let dist = std::array::from_fn(|i| f32::from_bits(packed[i].to_bits() & !id_mask));
        let ids = std::array::from_fn(|i| packed[i].to_bits() & id_mask);
        (dist, ids)
    }
}
