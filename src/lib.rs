//! Batched small top-k nearest-neighbour search under squared L2 distance.
//!
//! `knn_l2sqr` finds the `k <= 24` nearest of up to 65536 reference points for
//! every query in a batch, `get_min_k` the `k` smallest entries of an array.
//! Both keep the running top-k in vector registers, merged with partial
//! sorting networks, and report `Unsupported` for requests outside their
//! envelope so callers can fall back to a general path.

pub mod api;
pub mod compute; // Vector engines and CPU detection
pub mod config; // Environment-driven defaults
pub mod error;
pub mod topk; // Kernels, networks and drivers

pub use api::{GetMinKParams, KnnOutput, KnnParams, MinK, get_min_k, get_min_k_into, knn_l2sqr, knn_l2sqr_into};
pub use compute::simd_abstraction::{VectorEngineType, detect_optimal_vector_engine};
pub use error::{Result, Unsupported};
pub use topk::{GetMinKKernel, KernelVariant};
