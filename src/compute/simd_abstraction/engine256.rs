//! 256-bit engine (AVX2 + FMA)
//!
//! This module provides the AVX2 implementation of `VectorEngine` on x86_64:
//! 8 lanes of f32 distances paired with 8 lanes of u32 ids, both in 256-bit
//! registers. Masks are kept as `__m256` with all-ones lanes, the form
//! produced by `_mm256_cmp_ps` and consumed by `_mm256_blendv_ps`.
//!
//! Highlights
//! - Id lanes are blended through float casts so one mask drives both halves
//!   of a (distance, id) pair.
//! - `compress_store` has no AVX2 instruction; it spills the ids and walks
//!   the movemask bits.
//! - Methods are `#[inline(always)]` without `#[target_feature]`; the
//!   `topk::dispatch` wrappers enable `avx2,fma` around the inlined kernels.

#[cfg(target_arch = "x86_64")]
use super::types::simd_arch;
#[cfg(target_arch = "x86_64")]
use super::{PackedEngine, VectorEngine};

#[cfg(target_arch = "x86_64")]
/// AVX2 backend implementing `VectorEngine` for 256-bit vectors.
///
/// Requires AVX2 and FMA (Intel Haswell 2013+, AMD Zen).
#[derive(Clone, Copy, Debug, Default)]
pub struct SimdEngine256;

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
impl VectorEngine for SimdEngine256 {
    const WIDTH: usize = 8;

    type Dist = f32;
    type Idx = u32;
    type DistVec = simd_arch::__m256;
    type IdxVec = simd_arch::__m256i;
    type Mask = simd_arch::__m256;

    // ===== Creation and Initialization =====

    #[inline(always)]
    unsafe fn zero() -> Self::DistVec {
        simd_arch::_mm256_setzero_ps()
    }

    #[inline(always)]
    unsafe fn max_value() -> Self::DistVec {
        simd_arch::_mm256_set1_ps(f32::MAX)
    }

    #[inline(always)]
    unsafe fn set1(v: f32) -> Self::DistVec {
        simd_arch::_mm256_set1_ps(v)
    }

    // ===== Memory Operations =====

    #[inline(always)]
    unsafe fn load(src: *const f32) -> Self::DistVec {
        simd_arch::_mm256_loadu_ps(src)
    }

    #[inline(always)]
    unsafe fn load_masked(mask: Self::Mask, src: *const f32, fill: Self::DistVec) -> Self::DistVec {
        // maskload does not touch memory behind cleared lanes
        let loaded = simd_arch::_mm256_maskload_ps(src, simd_arch::_mm256_castps_si256(mask));
        simd_arch::_mm256_blendv_ps(fill, loaded, mask)
    }

    #[inline(always)]
    unsafe fn store(dst: *mut f32, v: Self::DistVec) {
        simd_arch::_mm256_storeu_ps(dst, v)
    }

    // ===== Arithmetic =====

    #[inline(always)]
    unsafe fn add(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm256_add_ps(a, b)
    }

    #[inline(always)]
    unsafe fn mul(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm256_mul_ps(a, b)
    }

    #[inline(always)]
    unsafe fn min(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm256_min_ps(a, b)
    }

    #[inline(always)]
    unsafe fn max(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm256_max_ps(a, b)
    }

    #[inline(always)]
    unsafe fn fmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm256_fmadd_ps(a, b, acc)
    }

    #[inline(always)]
    unsafe fn fnmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm256_fnmadd_ps(a, b, acc)
    }

    // ===== Comparison and Mask Operations =====

    #[inline(always)]
    unsafe fn compare_eq(a: Self::DistVec, b: Self::DistVec) -> Self::Mask {
        simd_arch::_mm256_cmp_ps::<{ simd_arch::_CMP_EQ_OQ }>(a, b)
    }

    #[inline(always)]
    unsafe fn compare_le(a: Self::DistVec, b: Self::DistVec) -> Self::Mask {
        simd_arch::_mm256_cmp_ps::<{ simd_arch::_CMP_LE_OQ }>(a, b)
    }

    #[inline(always)]
    unsafe fn select(mask: Self::Mask, if_unset: Self::DistVec, if_set: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm256_blendv_ps(if_unset, if_set, mask)
    }

    #[inline(always)]
    unsafe fn mask_first(n: usize) -> Self::Mask {
        let n = simd_arch::_mm256_set1_epi32(n.min(Self::WIDTH) as i32);
        let lanes = simd_arch::_mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7);
        simd_arch::_mm256_castsi256_ps(simd_arch::_mm256_cmpgt_epi32(n, lanes))
    }

    #[inline(always)]
    unsafe fn mask_bits(mask: Self::Mask) -> u64 {
        simd_arch::_mm256_movemask_ps(mask) as u32 as u64
    }

    #[inline(always)]
    unsafe fn reduce_min(mask: Self::Mask, v: Self::DistVec) -> f32 {
        let v = simd_arch::_mm256_blendv_ps(Self::max_value(), v, mask);
        let lo = simd_arch::_mm256_castps256_ps128(v);
        let hi = simd_arch::_mm256_extractf128_ps::<1>(v);
        let m = simd_arch::_mm_min_ps(lo, hi);
        let m = simd_arch::_mm_min_ps(m, simd_arch::_mm_movehl_ps(m, m));
        let m = simd_arch::_mm_min_ss(m, simd_arch::_mm_shuffle_ps::<0b01>(m, m));
        simd_arch::_mm_cvtss_f32(m)
    }

    // ===== Index Lanes =====

    #[inline(always)]
    unsafe fn idx_set1(v: u32) -> Self::IdxVec {
        simd_arch::_mm256_set1_epi32(v as i32)
    }

    #[inline(always)]
    unsafe fn staircase() -> Self::IdxVec {
        simd_arch::_mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7)
    }

    #[inline(always)]
    unsafe fn idx_add(a: Self::IdxVec, b: Self::IdxVec) -> Self::IdxVec {
        simd_arch::_mm256_add_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn idx_select(mask: Self::Mask, if_unset: Self::IdxVec, if_set: Self::IdxVec) -> Self::IdxVec {
        simd_arch::_mm256_castps_si256(simd_arch::_mm256_blendv_ps(
            simd_arch::_mm256_castsi256_ps(if_unset),
            simd_arch::_mm256_castsi256_ps(if_set),
            mask,
        ))
    }

    #[inline(always)]
    unsafe fn idx_store(dst: *mut u32, v: Self::IdxVec) {
        simd_arch::_mm256_storeu_si256(dst as *mut simd_arch::__m256i, v)
    }

    #[inline(always)]
    unsafe fn compress_store(mask: Self::Mask, ids: Self::IdxVec, dst: *mut u32, budget: usize) -> usize {
        let mut lanes = [0u32; 8];
        Self::idx_store(lanes.as_mut_ptr(), ids);
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

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
impl PackedEngine for SimdEngine256 {
    #[inline(always)]
    unsafe fn pack(dist: Self::DistVec, ids: Self::IdxVec, id_mask: u32) -> Self::DistVec {
        let keep = simd_arch::_mm256_set1_epi32(!id_mask as i32);
        let bits = simd_arch::_mm256_and_si256(simd_arch::_mm256_castps_si256(dist), keep);
        simd_arch::_mm256_castsi256_ps(simd_arch::_mm256_or_si256(bits, ids))
    }

    #[inline(always)]
    unsafe fn unpack(packed: Self::DistVec, id_mask: u32) -> (Self::DistVec, Self::IdxVec) {
        let bits = simd_arch::_mm256_castps_si256(packed);
        let low = simd_arch::_mm256_set1_epi32(id_mask as i32);
        let dist = simd_arch::_mm256_andnot_si256(low, bits);
        let ids = simd_arch::_mm256_and_si256(bits, low);
        (simd_arch::_mm256_castsi256_ps(dist), ids)
    }
}
