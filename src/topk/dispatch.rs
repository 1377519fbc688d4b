//! Engine × kernel dispatch.
//!
//! Hardware engines are entered through small `#[target_feature]` wrappers so
//! the generic kernels are compiled with the instruction set enabled. Each
//! entry point checks engine availability itself, which keeps the wrappers
//! sound to call from safe code.

use half::f16;

use crate::compute::simd_abstraction::{PackedEngine, Portable32, PortableHalf, VectorEngine, VectorEngineType};
#[cfg(target_arch = "aarch64")]
use crate::compute::simd_abstraction::SimdEngine128;
#[cfg(target_arch = "x86_64")]
use crate::compute::simd_abstraction::SimdEngine256;
#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
use crate::compute::simd_abstraction::SimdEngine512;
use crate::error::{Result, Unsupported};
use crate::topk::distance::ReferenceBlock;
use crate::topk::extract::LevelScratch;
use crate::topk::point_major::{self, QueryTile, TileKind};
use crate::topk::{GetMinKKernel, KernelVariant, array, driver};

/// Inputs of one `knn_l2sqr` call after validation.
pub struct KnnJob<'a> {
    pub queries: &'a [f32],
    pub references: &'a [f32],
    pub dim: usize,
    pub k: usize,
    pub query_norms: &'a [f32],
    pub reference_norms: &'a [f32],
    /// Survivors per tile for the approximate kernel.
    pub worthy: usize,
}

fn ensure_available(engine: VectorEngineType) -> Result<()> {
    if engine.is_available() { Ok(()) } else { Err(Unsupported::EngineUnavailable(engine)) }
}

/// Runs the point-major kernel `variant` on `engine`, writing `nq * k`
/// results into `dis` / `ids`.
pub fn knn(
    engine: VectorEngineType,
    variant: KernelVariant,
    job: &KnnJob<'_>,
    dis: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    ensure_available(engine)?;
    let kind = match variant {
        KernelVariant::Fp16 => return knn_half(job, dis, ids),
        KernelVariant::Fp32 => TileKind::Exact,
        KernelVariant::Fp32Packed => TileKind::Packed,
        KernelVariant::Fp32PackedApprox => TileKind::PackedApprox { worthy: job.worthy },
    };

    let refs = ReferenceBlock::<f32>::new(job.references, job.dim, job.reference_norms);
    let lanes = engine.f32_lanes();
    driver::for_each_query_tile::<f32, u32, _>(
        job.queries,
        job.query_norms,
        job.dim,
        job.k,
        lanes,
        dis,
        ids,
        |tile, scratch, tile_dis, tile_ids| {
            // SAFETY: engine availability was checked above.
            unsafe { f32_tile(engine, kind, tile, &refs, job.k, scratch, tile_dis, tile_ids) }
        },
    )
}

/// The half-precision kernel always runs on the lane-array engine.
fn knn_half(job: &KnnJob<'_>, dis: &mut [f32], ids: &mut [i64]) -> Result<()> {
    let refs = ReferenceBlock::<f16>::new(job.references, job.dim, job.reference_norms);
    driver::for_each_query_tile::<f16, u16, _>(
        job.queries,
        job.query_norms,
        job.dim,
        job.k,
        PortableHalf::WIDTH,
        dis,
        ids,
        |tile, scratch, tile_dis, tile_ids| unsafe {
            point_major::exact_tile::<PortableHalf>(tile, &refs, job.k, scratch, tile_dis, tile_ids)
        },
    )
}

#[allow(clippy::too_many_arguments)]
#[inline]
unsafe fn f32_tile(
    engine: VectorEngineType,
    kind: TileKind,
    tile: &QueryTile<'_, f32>,
    refs: &ReferenceBlock<f32>,
    k: usize,
    scratch: &mut LevelScratch<f32, u32>,
    dis: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    unsafe {
        match engine {
            VectorEngineType::Portable => point_major::run_f32_tile::<Portable32>(kind, tile, refs, k, scratch, dis, ids),
            #[cfg(target_arch = "aarch64")]
            VectorEngineType::Engine128 => {
                point_major::run_f32_tile::<SimdEngine128>(kind, tile, refs, k, scratch, dis, ids)
            }
            #[cfg(target_arch = "x86_64")]
            VectorEngineType::Engine256 => f32_tile_avx2(kind, tile, refs, k, scratch, dis, ids),
            #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
            VectorEngineType::Engine512 => f32_tile_avx512(kind, tile, refs, k, scratch, dis, ids),
        }
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn f32_tile_avx2(
    kind: TileKind,
    tile: &QueryTile<'_, f32>,
    refs: &ReferenceBlock<f32>,
    k: usize,
    scratch: &mut LevelScratch<f32, u32>,
    dis: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    point_major::run_f32_tile::<SimdEngine256>(kind, tile, refs, k, scratch, dis, ids)
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn f32_tile_avx512(
    kind: TileKind,
    tile: &QueryTile<'_, f32>,
    refs: &ReferenceBlock<f32>,
    k: usize,
    scratch: &mut LevelScratch<f32, u32>,
    dis: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    point_major::run_f32_tile::<SimdEngine512>(kind, tile, refs, k, scratch, dis, ids)
}

/// Runs the array kernel on `engine`. `n_levels` must already be resolved
/// for the engine's lane count.
pub fn min_k(
    engine: VectorEngineType,
    kernel: GetMinKKernel,
    values: &[f32],
    n_levels: usize,
    dis: &mut [f32],
    ids: &mut [i32],
) -> Result<()> {
    ensure_available(engine)?;
    // SAFETY: engine availability was checked above.
    unsafe {
        match engine {
            VectorEngineType::Portable => min_k_on::<Portable32>(kernel, values, n_levels, dis, ids),
            #[cfg(target_arch = "aarch64")]
            VectorEngineType::Engine128 => min_k_on::<SimdEngine128>(kernel, values, n_levels, dis, ids),
            #[cfg(target_arch = "x86_64")]
            VectorEngineType::Engine256 => min_k_avx2(kernel, values, n_levels, dis, ids),
            #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
            VectorEngineType::Engine512 => min_k_avx512(kernel, values, n_levels, dis, ids),
        }
    }
}

#[inline(always)]
unsafe fn min_k_on<E: PackedEngine>(
    kernel: GetMinKKernel,
    values: &[f32],
    n_levels: usize,
    dis: &mut [f32],
    ids: &mut [i32],
) -> Result<()> {
    unsafe {
        match kernel {
            GetMinKKernel::Fp32 => array::min_k_exact::<E>(values, n_levels, dis, ids),
            GetMinKKernel::Fp32Packed => array::min_k_packed::<E>(values, n_levels, dis, ids),
        }
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn min_k_avx2(kernel: GetMinKKernel, values: &[f32], n_levels: usize, dis: &mut [f32], ids: &mut [i32]) -> Result<()> {
    min_k_on::<SimdEngine256>(kernel, values, n_levels, dis, ids)
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn min_k_avx512(kernel: GetMinKKernel, values: &[f32], n_levels: usize, dis: &mut [f32], ids: &mut [i32]) -> Result<()> {
    min_k_on::<SimdEngine512>(kernel, values, n_levels, dis, ids)
}
