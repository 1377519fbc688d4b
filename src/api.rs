//! Public entry points.
//!
//! Both entry points validate the whole request before any computation:
//! on `Err` the output buffers hold no meaningful data and the caller is
//! expected to fall back to a general implementation.

use half::f16;

use crate::compute::simd_abstraction::VectorEngineType;
use crate::config::{self, KernelSelection, Verbosity};
use crate::error::{Result, Unsupported};
use crate::topk::array;
use crate::topk::dispatch::{self, KnnJob};
use crate::topk::distance::squared_norms;
use crate::topk::extract::{MISSING_DISTANCE, MISSING_ID};
use crate::topk::networks::WORTHY_SIZES;
use crate::topk::{GetMinKKernel, KernelVariant, MAX_DIM, MAX_K, MAX_REFERENCES};

/// Survivors per tile for the approximate kernel when not specified.
pub const DEFAULT_WORTHY: usize = 8;

/// Squared norms must stay below this for the half-precision kernel, so
/// `|y|^2 - 2<x, y>` cannot overflow.
pub const HALF_NORM_LIMIT: f32 = f16::MAX.to_f32_const() / 4.0;

/// Per-call options for `knn_l2sqr`. Unset fields use the process
/// configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnnParams<'a> {
    pub kernel: Option<KernelVariant>,
    pub engine: Option<VectorEngineType>,
    /// Worthy survivors per tile (6 or 8) for `Fp32PackedApprox`; ignored by
    /// the other kernels.
    pub n_levels: Option<usize>,
    /// Precomputed squared query norms.
    pub query_norms: Option<&'a [f32]>,
    /// Precomputed squared reference norms.
    pub reference_norms: Option<&'a [f32]>,
}

/// Per-call options for `get_min_k`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMinKParams {
    pub kernel: Option<GetMinKKernel>,
    pub engine: Option<VectorEngineType>,
    /// Per-lane depth; `None` or `0` picks `1 + (k + 1) / 3`.
    pub n_levels: Option<usize>,
}

/// `k` nearest references per query, row-major. Missing neighbours have
/// distance `f32::INFINITY` and id `-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnnOutput {
    pub distances: Vec<f32>,
    pub ids: Vec<i64>,
    pub k: usize,
}

impl KnnOutput {
    pub fn n_queries(&self) -> usize {
        if self.k == 0 { 0 } else { self.distances.len() / self.k }
    }

    /// Distances and ids of query `q`, nearest first.
    pub fn row(&self, q: usize) -> (&[f32], &[i64]) {
        let range = q * self.k..(q + 1) * self.k;
        (&self.distances[range.clone()], &self.ids[range])
    }
}

/// The `k` smallest values of an array with their positions.
#[derive(Debug, Clone, PartialEq)]
pub struct MinK {
    pub distances: Vec<f32>,
    pub ids: Vec<i32>,
}

fn shape(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected == got { Ok(()) } else { Err(Unsupported::ShapeMismatch { what, expected, got }) }
}

fn output_capacity(what: &'static str, needed: usize, got: usize) -> Result<()> {
    if got >= needed { Ok(()) } else { Err(Unsupported::ShapeMismatch { what, expected: needed, got }) }
}

fn resolve_engine(requested: Option<VectorEngineType>) -> Result<VectorEngineType> {
    let engine = requested.unwrap_or(config::config().engine);
    if engine.is_available() { Ok(engine) } else { Err(Unsupported::EngineUnavailable(engine)) }
}

fn resolve_norms<'a>(
    given: Option<&'a [f32]>,
    points: &[f32],
    dim: usize,
    what: &'static str,
    storage: &'a mut Vec<f32>,
) -> Result<&'a [f32]> {
    let n = points.len() / dim;
    match given {
        Some(norms) => {
            shape(what, n, norms.len())?;
            Ok(norms)
        }
        None => {
            *storage = squared_norms(points, dim);
            Ok(storage.as_slice())
        }
    }
}

fn check_half_norms(norms: &[f32]) -> Result<()> {
    match norms.iter().find(|n| !(n.abs() < HALF_NORM_LIMIT)) {
        Some(&norm) => Err(Unsupported::NormOutOfRange { norm }),
        None => Ok(()),
    }
}

/// k-nearest-neighbour search under squared L2 distance.
///
/// `queries` and `references` are row-major with `dim` values per point.
/// Returns `k` results per query, nearest first.
pub fn knn_l2sqr(queries: &[f32], references: &[f32], dim: usize, k: usize, params: &KnnParams<'_>) -> Result<KnnOutput> {
    let n_queries = if dim == 0 { 0 } else { queries.len() / dim };
    // the owned outputs hold k slots per query
    if n_queries > 0 && k > MAX_K {
        return Err(Unsupported::KOutOfRange { k, max: MAX_K });
    }
    let mut distances = vec![MISSING_DISTANCE; n_queries * k];
    let mut ids = vec![MISSING_ID; n_queries * k];
    knn_l2sqr_into(queries, references, dim, k, params, &mut distances, &mut ids)?;
    Ok(KnnOutput { distances, ids, k })
}

/// `knn_l2sqr` writing into caller buffers of at least `n_queries * k`.
pub fn knn_l2sqr_into(
    queries: &[f32],
    references: &[f32],
    dim: usize,
    k: usize,
    params: &KnnParams<'_>,
    distances: &mut [f32],
    ids: &mut [i64],
) -> Result<()> {
    if dim == 0 {
        return Err(Unsupported::DimensionOutOfRange { dim, max: MAX_DIM });
    }
    let n_queries = queries.len() / dim;
    let n_references = references.len() / dim;
    shape("queries length is not a multiple of dim", n_queries * dim, queries.len())?;
    shape("references length is not a multiple of dim", n_references * dim, references.len())?;
    let n_out = n_queries.checked_mul(k).ok_or(Unsupported::KOutOfRange { k, max: MAX_K })?;
    output_capacity("distances buffer", n_out, distances.len())?;
    output_capacity("ids buffer", n_out, ids.len())?;
    let distances = &mut distances[..n_out];
    let ids = &mut ids[..n_out];

    if n_queries == 0 || k == 0 {
        return Ok(());
    }
    if n_references == 0 {
        distances.fill(MISSING_DISTANCE);
        ids.fill(MISSING_ID);
        return Ok(());
    }
    if k > MAX_K {
        return Err(Unsupported::KOutOfRange { k, max: MAX_K });
    }
    if n_references > MAX_REFERENCES {
        return Err(Unsupported::TooManyReferences { n: n_references, max: MAX_REFERENCES });
    }
    if dim > MAX_DIM {
        return Err(Unsupported::DimensionOutOfRange { dim, max: MAX_DIM });
    }

    let variant = match (params.kernel, config::config().selection) {
        (Some(variant), _) => variant,
        (None, KernelSelection::Enabled { knn, .. }) => knn,
        (None, KernelSelection::Disabled) => return Err(Unsupported::KernelDisabled),
    };
    let engine = resolve_engine(params.engine)?;
    let worthy = match (variant, params.n_levels) {
        (KernelVariant::Fp32PackedApprox, Some(n)) if !WORTHY_SIZES.contains(&n) => {
            return Err(Unsupported::LevelsOutOfRange { reason: "approximate kernel keeps 6 or 8 candidates per tile" });
        }
        (_, Some(n)) if WORTHY_SIZES.contains(&n) => n,
        _ => DEFAULT_WORTHY,
    };

    let mut query_storage = Vec::new();
    let mut reference_storage = Vec::new();
    let query_norms = resolve_norms(params.query_norms, queries, dim, "query norms", &mut query_storage)?;
    let reference_norms =
        resolve_norms(params.reference_norms, references, dim, "reference norms", &mut reference_storage)?;
    if variant == KernelVariant::Fp16 {
        check_half_norms(query_norms)?;
        check_half_norms(reference_norms)?;
        if engine != VectorEngineType::Portable && config::verbose(Verbosity::Debug) {
            log::debug!("fp16 kernel runs on the portable engine, ignoring {engine:?}");
        }
    }

    if config::verbose(Verbosity::Info) {
        log::info!("knn_l2sqr: {n_queries} queries x {n_references} references, dim {dim}, k {k}, {variant} on {engine:?}");
    }

    let job = KnnJob { queries, references, dim, k, query_norms, reference_norms, worthy };
    dispatch::knn(engine, variant, &job, distances, ids)
}

/// The `k` smallest entries of `values`, smallest first. Equal values are
/// all reported (up to `k`), in an unspecified order.
///
/// Empty levels hold `f32::MAX`, so inputs equal to `f32::MAX` or `+inf`
/// cannot be told apart from them and may come back as missing slots
/// (`INFINITY`, `-1`).
pub fn get_min_k(values: &[f32], k: usize, params: &GetMinKParams) -> Result<MinK> {
    if k > MAX_K {
        return Err(Unsupported::KOutOfRange { k, max: MAX_K });
    }
    let mut distances = vec![MISSING_DISTANCE; k];
    let mut ids = vec![MISSING_ID as i32; k];
    get_min_k_into(values, k, params, &mut distances, &mut ids)?;
    Ok(MinK { distances, ids })
}

/// `get_min_k` writing into caller buffers of at least `k`.
pub fn get_min_k_into(
    values: &[f32],
    k: usize,
    params: &GetMinKParams,
    distances: &mut [f32],
    ids: &mut [i32],
) -> Result<()> {
    output_capacity("distances buffer", k, distances.len())?;
    output_capacity("ids buffer", k, ids.len())?;
    let distances = &mut distances[..k];
    let ids = &mut ids[..k];
    let n = values.len();

    if k == 0 {
        return Ok(());
    }
    if n == 0 {
        distances.fill(MISSING_DISTANCE);
        ids.fill(MISSING_ID as i32);
        return Ok(());
    }
    if k > MAX_K {
        return Err(Unsupported::KOutOfRange { k, max: MAX_K });
    }
    if n > MAX_REFERENCES {
        return Err(Unsupported::TooManyReferences { n, max: MAX_REFERENCES });
    }

    let kernel = match (params.kernel, config::config().selection) {
        (Some(kernel), _) => kernel,
        (None, KernelSelection::Enabled { get_min_k, .. }) => get_min_k,
        (None, KernelSelection::Disabled) => return Err(Unsupported::KernelDisabled),
    };
    let engine = resolve_engine(params.engine)?;
    let packed = kernel == GetMinKKernel::Fp32Packed;
    let n_levels = array::resolve_levels(k, params.n_levels, engine.f32_lanes(), packed)?;
    if packed && values.iter().any(|v| !(v.is_finite() && *v >= 0.0)) {
        return Err(Unsupported::NegativeValues);
    }

    if config::verbose(Verbosity::Info) {
        log::info!("get_min_k: {n} values, k {k}, {n_levels} levels, {kernel} on {engine:?}");
    }

    dispatch::min_k(engine, kernel, values, n_levels, distances, ids)
}
