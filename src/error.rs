//! Capability failures.
//!
//! A kernel either fills its outputs completely or reports why the request
//! lies outside its envelope; nothing is written in the failure case that
//! callers may rely on. Every check runs before computation starts.

use crate::compute::simd_abstraction::VectorEngineType;

/// Why a request cannot be served by the accelerated kernels.
///
/// All variants except `ShapeMismatch` mean "use a general fallback";
/// `ShapeMismatch` points at inconsistent caller buffers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Unsupported {
    /// Only dimensions 1..=32 have kernels.
    #[error("dimension {dim} is outside the supported range 1..={max}")]
    DimensionOutOfRange { dim: usize, max: usize },
    /// k above the deepest sorting network.
    #[error("k = {k} exceeds the supported maximum of {max}")]
    KOutOfRange { k: usize, max: usize },
    /// Reference ids must fit the 16-bit candidate counter.
    #[error("{n} reference points exceed the supported maximum of {max}")]
    TooManyReferences { n: usize, max: usize },
    /// Invalid level count, or k larger than lanes x levels can hold.
    #[error("level configuration not supported: {reason}")]
    LevelsOutOfRange { reason: &'static str },
    /// Kernels switched off through `FERROUS_TOPK_KERNEL`.
    #[error("accelerated kernels are disabled by configuration")]
    KernelDisabled,
    /// The requested engine cannot run on this CPU.
    #[error("vector engine {0:?} is not supported by this CPU")]
    EngineUnavailable(VectorEngineType),
    /// The packed encoding only orders non-negative finite values.
    #[error("packed kernel requires non-negative finite values")]
    NegativeValues,
    /// A squared norm would overflow the half-precision lanes.
    #[error("squared norm {norm} is outside the half-precision range")]
    NormOutOfRange { norm: f32 },
    /// Buffer lengths disagree with the declared shape.
    #[error("shape mismatch: {what} (expected {expected}, got {got})")]
    ShapeMismatch { what: &'static str, expected: usize, got: usize },
}

impl Unsupported {
    /// True for envelope limits that a fallback path can serve.
    pub fn is_capability_failure(&self) -> bool {
        !matches!(self, Unsupported::ShapeMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, Unsupported>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_limit() {
        let err = Unsupported::KOutOfRange { k: 25, max: 24 };
        assert_eq!(err.to_string(), "k = 25 exceeds the supported maximum of 24");
        assert!(err.is_capability_failure());

        let err = Unsupported::ShapeMismatch { what: "ids buffer", expected: 10, got: 9 };
        assert!(!err.is_capability_failure());
        assert!(err.to_string().contains("ids buffer"));
    }
}
