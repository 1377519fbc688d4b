//! 512-bit engine (AVX-512F on x86_64)
//!
//! The widest `VectorEngine`: 16 lanes of f32 distances paired with 16 lanes
//! of u32 ids. Masks are native `__mmask16` registers, so selects, masked
//! loads and compress map one to one onto AVX-512 instructions.
//!
//! Notes
//! - Requires the `avx512` Cargo feature and CPU support for AVX-512F.
//! - The dispatch wrappers enable `avx512f`; methods here are
//!   `#[inline(always)]` so they fold into those wrappers.

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
use super::types::simd_arch;
#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
use super::{PackedEngine, VectorEngine};

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
/// AVX-512F backend implementing `VectorEngine` for 512-bit vectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimdEngine512;

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
#[allow(unsafe_op_in_unsafe_fn)]
impl VectorEngine for SimdEngine512 {
    const WIDTH: usize = 16;

    type Dist = f32;
    type Idx = u32;
    type DistVec = simd_arch::__m512;
    type IdxVec = simd_arch::__m512i;
    type Mask = simd_arch::__mmask16;

    // ===== Creation and Initialization =====

    #[inline(always)]
    unsafe fn zero() -> Self::DistVec {
        simd_arch::_mm512_setzero_ps()
    }

    #[inline(always)]
    unsafe fn max_value() -> Self::DistVec {
        simd_arch::_mm512_set1_ps(f32::MAX)
    }

    #[inline(always)]
    unsafe fn set1(v: f32) -> Self::DistVec {
        simd_arch::_mm512_set1_ps(v)
    }

    // ===== Memory Operations =====

    #[inline(always)]
    unsafe fn load(src: *const f32) -> Self::DistVec {
        simd_arch::_mm512_loadu_ps(src)
    }

    #[inline(always)]
    unsafe fn load_masked(mask: Self::Mask, src: *const f32, fill: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_mask_loadu_ps(fill, mask, src)
    }

    #[inline(always)]
    unsafe fn store(dst: *mut f32, v: Self::DistVec) {
        simd_arch::_mm512_storeu_ps(dst, v)
    }

    // ===== Arithmetic =====

    #[inline(always)]
    unsafe fn add(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_add_ps(a, b)
    }

    #[inline(always)]
    unsafe fn mul(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_mul_ps(a, b)
    }

    #[inline(always)]
    unsafe fn min(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_min_ps(a, b)
    }

    #[inline(always)]
    unsafe fn max(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_max_ps(a, b)
    }

    #[inline(always)]
    unsafe fn fmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_fmadd_ps(a, b, acc)
    }

    #[inline(always)]
    unsafe fn fnmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_fnmadd_ps(a, b, acc)
    }

    // ===== Comparison and Mask Operations =====

    #[inline(always)]
    unsafe fn compare_eq(a: Self::DistVec, b: Self::DistVec) -> Self::Mask {
        simd_arch::_mm512_cmp_ps_mask::<{ simd_arch::_CMP_EQ_OQ }>(a, b)
    }

    #[inline(always)]
    unsafe fn compare_le(a: Self::DistVec, b: Self::DistVec) -> Self::Mask {
        simd_arch::_mm512_cmp_ps_mask::<{ simd_arch::_CMP_LE_OQ }>(a, b)
    }

    #[inline(always)]
    unsafe fn select(mask: Self::Mask, if_unset: Self::DistVec, if_set: Self::DistVec) -> Self::DistVec {
        simd_arch::_mm512_mask_blend_ps(mask, if_unset, if_set)
    }

    #[inline(always)]
    unsafe fn mask_first(n: usize) -> Self::Mask {
        if n >= Self::WIDTH { 0xFFFF } else { ((1u32 << n) - 1) as u16 }
    }

    #[inline(always)]
    unsafe fn mask_bits(mask: Self::Mask) -> u64 {
        mask as u64
    }

    #[inline(always)]
    unsafe fn reduce_min(mask: Self::Mask, v: Self::DistVec) -> f32 {
        simd_arch::_mm512_reduce_min_ps(simd_arch::_mm512_mask_blend_ps(mask, Self::max_value(), v))
    }

    // ===== Index Lanes =====

    #[inline(always)]
    unsafe fn idx_set1(v: u32) -> Self::IdxVec {
        simd_arch::_mm512_set1_epi32(v as i32)
    }

    #[inline(always)]
    unsafe fn staircase() -> Self::IdxVec {
        simd_arch::_mm512_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15)
    }

    #[inline(always)]
    unsafe fn idx_add(a: Self::IdxVec, b: Self::IdxVec) -> Self::IdxVec {
        simd_arch::_mm512_add_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn idx_select(mask: Self::Mask, if_unset: Self::IdxVec, if_set: Self::IdxVec) -> Self::IdxVec {
        simd_arch::_mm512_mask_blend_epi32(mask, if_unset, if_set)
    }

    #[inline(always)]
    unsafe fn idx_store(dst: *mut u32, v: Self::IdxVec) {
        simd_arch::_mm512_storeu_epi32(dst as *mut i32, v)
    }

    #[inline(always)]
    unsafe fn compress_store(mask: Self::Mask, ids: Self::IdxVec, dst: *mut u32, budget: usize) -> usize {
        let packed = simd_arch::_mm512_maskz_compress_epi32(mask, ids);
        let mut lanes = [0u32; 16];
        Self::idx_store(lanes.as_mut_ptr(), packed);
        let written = (mask.count_ones() as usize).min(budget);
        std::ptr::copy_nonoverlapping(lanes.as_ptr(), dst, written);
        written
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
#[allow(unsafe_op_in_unsafe_fn)]
impl PackedEngine for SimdEngine512 {
    #[inline(always)]
    unsafe fn pack(dist: Self::DistVec, ids: Self::IdxVec, id_mask: u32) -> Self::DistVec {
        let keep = simd_arch::_mm512_set1_epi32(!id_mask as i32);
        let bits = simd_arch::_mm512_and_si512(simd_arch::_mm512_castps_si512(dist), keep);
        simd_arch::_mm512_castsi512_ps(simd_arch::_mm512_or_si512(bits, ids))
    }

    #[inline(always)]
    unsafe fn unpack(packed: Self::DistVec, id_mask: u32) -> (Self::DistVec, Self::IdxVec) {
        let bits = simd_arch::_mm512_castps_si512(packed);
        let low = simd_arch::_mm512_set1_epi32(id_mask as i32);
        let dist = simd_arch::_mm512_andnot_si512(low, bits);
        let ids = simd_arch::_mm512_and_si512(bits, low);
        (simd_arch::_mm512_castsi512_ps(dist), ids)
    }
}
