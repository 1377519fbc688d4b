//! Batched small top-k kernels.
//!
//! Control flow for `knn_l2sqr`: the driver cuts the query batch into tiles of
//! one query per lane; each tile walks the reference tiles, computes a
//! 16-point distance burst, and merges it into the running levels with a
//! partial sorting network. After the last reference tile the levels are
//! transposed into per-query rows.
//!
//! `get_min_k` reuses the merge with lanes holding different candidates of a
//! single query, then reduces across lanes.

pub mod array;
pub mod dispatch;
pub mod distance;
pub mod driver;
pub mod extract;
pub mod levels;
pub mod networks;
pub mod packing;
pub mod point_major;

use std::fmt;

/// Largest supported k.
pub const MAX_K: usize = networks::MAX_LEVELS;

/// Largest supported reference (or candidate) count; ids must fit 16 bits.
pub const MAX_REFERENCES: usize = 1 << 16;

/// Largest supported dimension.
pub const MAX_DIM: usize = distance::MAX_DIM;

/// Point-major kernel flavours. Codes match the `FERROUS_TOPK_KERNEL` numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelVariant {
    /// f32 distances with u32 ids; exact.
    Fp32,
    /// f16 distances with u16 ids; exact up to half precision.
    Fp16,
    /// Ids packed into the low mantissa bits of f32 distances.
    Fp32Packed,
    /// Packed, with later reference tiles reduced to a few worthy candidates
    /// before merging. Approximate.
    Fp32PackedApprox,
}

impl KernelVariant {
    pub const ALL: [KernelVariant; 4] = [
        KernelVariant::Fp32,
        KernelVariant::Fp16,
        KernelVariant::Fp32Packed,
        KernelVariant::Fp32PackedApprox,
    ];

    pub fn code(self) -> u8 {
        match self {
            KernelVariant::Fp32 => 1,
            KernelVariant::Fp16 => 2,
            KernelVariant::Fp32Packed => 3,
            KernelVariant::Fp32PackedApprox => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        KernelVariant::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            KernelVariant::Fp32 => "fp32",
            KernelVariant::Fp16 => "fp16",
            KernelVariant::Fp32Packed => "fp32hack",
            KernelVariant::Fp32PackedApprox => "fp32hack_approx",
        }
    }

    pub fn is_approximate(self) -> bool {
        matches!(self, KernelVariant::Fp32PackedApprox)
    }

    /// `get_min_k` kernel paired with this variant when it is the
    /// configured default.
    pub fn paired_get_min_k(self) -> GetMinKKernel {
        match self {
            KernelVariant::Fp32PackedApprox => GetMinKKernel::Fp32Packed,
            _ => GetMinKKernel::Fp32,
        }
    }
}

impl fmt::Display for KernelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Array (`get_min_k`) kernel flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GetMinKKernel {
    /// f32 values with u32 ids, tie-aware extraction.
    Fp32,
    /// Ids packed into the values; inputs must be non-negative.
    Fp32Packed,
}

impl GetMinKKernel {
    pub fn name(self) -> &'static str {
        match self {
            GetMinKKernel::Fp32 => "fp32",
            GetMinKKernel::Fp32Packed => "fp32hack",
        }
    }
}

impl fmt::Display for GetMinKKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
