//! Compute layer shared by the top-k kernels.
//!
//! `simd_abstraction` holds the `VectorEngine` trait, its per-ISA
//! implementations and runtime engine detection.

pub mod simd_abstraction;
