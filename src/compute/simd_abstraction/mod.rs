//! Vector engine abstraction layer
//!
//! This module exposes a single surface for the lane-parallel operations used
//! by the top-k kernels. It hides ISA differences between x86_64 (AVX2,
//! AVX-512) and aarch64 (NEON) behind the `VectorEngine` trait, with a
//! lane-array engine that runs everywhere.
//!
//! ## Engines and widths
//!
//! A `VectorEngine` pairs a distances engine with an indices engine of the
//! same lane count and element bit width, so a single comparison mask can
//! move a (distance, id) pair in one step:
//! - `Portable32`: 16 lanes of f32 / u32 (always available)
//! - `PortableHalf`: 32 lanes of f16 / u16 (always available)
//! - `SimdEngine128`: 4 lanes of f32 / u32 (NEON on aarch64)
//! - `SimdEngine256`: 8 lanes of f32 / u32 (AVX2 + FMA on x86_64)
//! - `SimdEngine512`: 16 lanes of f32 / u32 (AVX-512F on x86_64, `avx512`
//!   feature)
//!
//! ## Runtime dispatch pattern
//!
//! Feature detection runs once (`simd::detect_optimal_vector_engine()`) and
//! the result is kept in `VectorEngineType`. The kernel entry points in
//! `topk::dispatch` switch on that enum and call a wrapper compiled with the
//! engine's target features; the engine methods themselves are
//! `#[inline(always)]` so that they fold into those wrappers.
//!
//! ## Safety model
//!
//! All trait functions are `unsafe` because they may:
//! - require specific CPU features (AVX2, AVX-512F), and
//! - dereference raw pointers for loads and stores.
//!
//! Callers must make sure the engine matches the CPU (the dispatch layer
//! does this) and that pointers are valid for `WIDTH` elements, or for the
//! lanes selected by the mask in the masked variants.

pub mod engine128;
pub mod engine256;
pub mod engine512;
pub mod portable;
pub mod scalar;
pub mod simd;
pub mod types;

#[cfg(test)]
mod tests;

pub use portable::{Portable32, PortableEngine, PortableHalf};
pub use scalar::{DistScalar, IdxScalar};
pub use simd::{VectorEngineType, detect_optimal_vector_engine, vector_engine_description};

#[cfg(target_arch = "aarch64")]
pub use engine128::SimdEngine128;
#[cfg(target_arch = "x86_64")]
pub use engine256::SimdEngine256;
#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
pub use engine512::SimdEngine512;

/// A distances engine and an indices engine of identical lane layout.
///
/// Lanes of `DistVec` and `IdxVec` line up one to one and share `Mask`, which
/// is what lets a compare-exchange carry ids along with distances.
pub trait VectorEngine: Sized + Copy + Send + Sync + 'static {
    /// Number of lanes in both vectors.
    const WIDTH: usize;

    /// Scalar distance type (f32 or f16).
    type Dist: DistScalar;
    /// Scalar index type, same bit width as `Dist`.
    type Idx: IdxScalar;

    type DistVec: Copy;
    type IdxVec: Copy;
    type Mask: Copy;

    // ===== Creation and Initialization =====

    /// All lanes zero.
    unsafe fn zero() -> Self::DistVec;

    /// All lanes set to the largest finite value of `Dist`.
    unsafe fn max_value() -> Self::DistVec;

    /// Broadcast a scalar to every lane.
    unsafe fn set1(v: Self::Dist) -> Self::DistVec;

    // ===== Memory Operations =====

    /// Load `WIDTH` values from an unaligned pointer.
    unsafe fn load(src: *const Self::Dist) -> Self::DistVec;

    /// Load the lanes selected by `mask`; other lanes take `fill` and are not
    /// read from memory.
    unsafe fn load_masked(mask: Self::Mask, src: *const Self::Dist, fill: Self::DistVec) -> Self::DistVec;

    /// Store `WIDTH` values to an unaligned pointer.
    unsafe fn store(dst: *mut Self::Dist, v: Self::DistVec);

    // ===== Arithmetic =====

    unsafe fn add(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec;
    unsafe fn mul(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec;
    unsafe fn min(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec;
    unsafe fn max(a: Self::DistVec, b: Self::DistVec) -> Self::DistVec;

    /// `a * b + acc`
    unsafe fn fmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec;

    /// `acc - a * b`
    unsafe fn fnmadd(a: Self::DistVec, b: Self::DistVec, acc: Self::DistVec) -> Self::DistVec;

    // ===== Comparison and Mask Operations =====

    unsafe fn compare_eq(a: Self::DistVec, b: Self::DistVec) -> Self::Mask;

    /// Lanes where `a <= b`. Unordered lanes compare false.
    unsafe fn compare_le(a: Self::DistVec, b: Self::DistVec) -> Self::Mask;

    /// Per lane: `if_set` where the mask bit is set, else `if_unset`.
    unsafe fn select(mask: Self::Mask, if_unset: Self::DistVec, if_set: Self::DistVec) -> Self::DistVec;

    /// Mask of the first `n` lanes (all lanes when `n >= WIDTH`).
    unsafe fn mask_first(n: usize) -> Self::Mask;

    /// Mask as a bit set, lane `i` at bit `i`.
    unsafe fn mask_bits(mask: Self::Mask) -> u64;

    /// Minimum over the lanes selected by `mask`; `Dist::MAX` for an empty
    /// mask.
    unsafe fn reduce_min(mask: Self::Mask, v: Self::DistVec) -> Self::Dist;

    // ===== Index Lanes =====

    unsafe fn idx_set1(v: Self::Idx) -> Self::IdxVec;

    /// Lane index vector `[0, 1, .., WIDTH - 1]`.
    unsafe fn staircase() -> Self::IdxVec;

    /// Lane-wise wrapping add.
    unsafe fn idx_add(a: Self::IdxVec, b: Self::IdxVec) -> Self::IdxVec;

    unsafe fn idx_select(mask: Self::Mask, if_unset: Self::IdxVec, if_set: Self::IdxVec) -> Self::IdxVec;

    unsafe fn idx_store(dst: *mut Self::Idx, v: Self::IdxVec);

    /// Write the ids of the masked lanes contiguously to `dst` in lane order,
    /// at most `budget` of them. Returns the number written.
    unsafe fn compress_store(mask: Self::Mask, ids: Self::IdxVec, dst: *mut Self::Idx, budget: usize) -> usize;
}

/// Engines whose distance lanes are f32 and can carry an id in their low
/// mantissa bits.
///
/// `pack` and `unpack` operate on the raw bit pattern; both are only
/// order-preserving for non-negative distances.
pub trait PackedEngine: VectorEngine<Dist = f32, Idx = u32> {
    /// `(bits(dist) & !id_mask) | ids`
    unsafe fn pack(dist: Self::DistVec, ids: Self::IdxVec, id_mask: u32) -> Self::DistVec;

    /// Splits a packed vector into `(bits & !id_mask, bits & id_mask)`.
    unsafe fn unpack(packed: Self::DistVec, id_mask: u32) -> (Self::DistVec, Self::IdxVec);
}
