//! 128-bit engine (NEON on aarch64)
//!
//! 4 lanes of f32 distances paired with 4 lanes of u32 ids. NEON comparisons
//! produce all-ones `uint32x4_t` lanes, which double as the mask type; `vbslq`
//! performs the selects for both halves of a pair.
//!
//! NEON has no masked load or compress instruction. Both are emulated by
//! spilling to a 4-element array; they only run on tails and during
//! extraction.

#[cfg(target_arch = "aarch64")]
use super::types::simd_arch;
#[cfg(target_arch = "aarch64")]
use super::{PackedEngine, VectorEngine};

#[cfg(target_arch = "aarch64")]
/// NEON backend implementing `VectorEngine` for 128-bit vectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimdEngine128;

#[cfg(target_arch = "aarch64")]
const LANE_BITS: [u32; 4] = [1, 2, 4, 8];

#[cfg(target_arch = "aarch64")]
const LANE_INDEX: [u32; 4] = [0, 1, 2, 3];

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
impl VectorEngine for SimdEngine128 {
    const WIDTH: usize = 4;

    type Dist = f32;
    type Idx = u32;
    type DistVec = simd_arch::float32x4_t;
    type IdxVec = simd_arch::uint32x4_t;
    type Mask = simd_arch::uint32x4_t;

    // ===== Creation and Initialization =====

    #[inline(always)]
    unsafe fn zero() -> Self::DistVec {
        simd_arch::vdupq_n_f32(0.0)
    }

    #[inline(always)]
    unsafe fn max_value() -> Self::DistVec {
        simd_arch::vdupq_n_f32(f32::MAX)
    }

    #[inline(always)]
    unsafe fn set1(v: f32) -> Self::DistVec {
        simd_arch::vdupq_n_f32(v)
    }

    // ===== Memory Operations =====

    #[inline(always)]
    unsafe fn load(src: *const f32) -> Self::DistVec {
        simd_arch::vld1q_f32(src)
    }

    #[inline(always)]
    unsafe fn load_masked(mask: Self::Mask, src: *const f32, fill: Self::DistVec) -> Self::DistVec {
        let mut lanes = [0.0f32; 4];
        simd_arch::vst1q_f32(lanes.as_mut_ptr(), fill);
        let bits = Self::mask_bits(mask);
        for (lane, slot) in lanes.iter_mut().enumerate() {
            if bits & (1 << lane) != 0 {
                *slot = *src.add(lane);
            }
        }
        simd_arch::vld1q_f32(lanes.as_ptr())
    }

    #[inline(always)]
    unsafe fn store(dst: *mut f32, v: Self::DistVec) {
        simd_arch::vst1q_f32(dst, v)
    }

    // ===== Arithmetic =====

    #[inline(always)]
    unsafe fn add(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::vaddq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn mul(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::vmulq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn min(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::vminq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn max(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::vmaxq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn fmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        simd_arch::vfmaq_f32(acc, a, b)
    }

    #[inline(always)]
    unsafe fn fnmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        simd_arch::vfmsq_f32(acc, a, b)
    }

    // ===== Comparison and Mask Operations =====

    #[inline(always)]
    unsafe fn compare_eq(a: Self::DistVec, b: Self::DistVec) -> Self::Mask {
        simd_arch::vceqq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn compare_le(a: Self::DistVec, b: Self::DistVec) -> Self::Mask {
        simd_arch::vcleq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn select(mask: Self::Mask, if_unset: Self::DistVec, if_set: Self::DistVec) -> Self::DistVec {
        simd_arch::vbslq_f32(mask, if_set, if_unset)
    }

    #[inline(always)]
    unsafe fn mask_first(n: usize) -> Self::Mask {
        let n = simd_arch::vdupq_n_u32(n.min(Self::WIDTH) as u32);
        simd_arch::vcltq_u32(Self::staircase(), n)
    }

    #[inline(always)]
    unsafe fn mask_bits(mask: Self::Mask) -> u64 {
        let weights = simd_arch::vld1q_u32(LANE_BITS.as_ptr());
        simd_arch::vaddvq_u32(simd_arch::vandq_u32(mask, weights)) as u64
    }

    #[inline(always)]
    unsafe fn reduce_min(mask: Self::Mask, v: Self::DistVec) -> f32 {
        simd_arch::vminvq_f32(simd_arch::vbslq_f32(mask, v, Self::max_value()))
    }

    // ===== Index Lanes =====

    #[inline(always)]
    unsafe fn idx_set1(v: u32) -> Self::IdxVec {
        simd_arch::vdupq_n_u32(v)
    }

    #[inline(always)]
    unsafe fn staircase() -> Self::IdxVec {
        simd_arch::vld1q_u32(LANE_INDEX.as_ptr())
    }

    #[inline(always)]
    unsafe fn idx_add(a: Self::IdxVec, b: Self::IdxVec) -> Self::IdxVec {
        simd_arch::vaddq_u32(a, b)
    }

    #[inline(always)]
    unsafe fn idx_select(mask: Self::Mask, if_unset: Self::IdxVec, if_set: Self::IdxVec) -> Self::IdxVec {
        simd_arch::vbslq_u32(mask, if_set, if_unset)
    }

    #[inline(always)]
    unsafe fn idx_store(dst: *mut u32, v: Self::IdxVec) {
        simd_arch::vst1q_u32(dst, v)
    }

    #[inline(always)]
    unsafe fn compress_store(mask: Self::Mask, ids: Self::IdxVec, dst: *mut u32, budget: usize) -> usize {
        let mut lanes = [0u32; 4];
        simd_arch::vst1q_u32(lanes.as_mut_ptr(), ids);
        let mut bits = Self::mask_bits(mask);
        let mut written = 0;
        while bits != 0 && written < budget {
            let lane = bits.trailing_zeros() as usize;
            *dst.add(written) = lanes[lane];
            written += 1;
            bits &= bits - 1;
        }
        written
    }
}

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
impl PackedEngine for SimdEngine128 {
    #[inline(always)]
    unsafe fn pack(dist: Self::DistVec, ids: Self::IdxVec, id_mask: u32) -> Self::DistVec {
        let bits = simd_arch::vreinterpretq_u32_f32(dist);
        let kept = simd_arch::vbicq_u32(bits, simd_arch::vdupq_n_u32(id_mask));
        simd_arch::vreinterpretq_f32_u32(simd_arch::vorrq_u32(kept, ids))
    }

    #[inline(always)]
    unsafe fn unpack(packed: Self::DistVec, id_mask: u32) -> (Self::DistVec, Self::IdxVec) {
        let bits = simd_arch::vreinterpretq_u32_f32(packed);
        let low = simd_arch::vdupq_n_u32(id_mask);
        let dist = simd_arch::vbicq_u32(bits, low);
        let ids = simd_arch::vandq_u32(bits, low);
        (simd_arch::vreinterpretq_f32_u32(dist), ids)
    }
}
