//! Architecture bindings
//!
//! Re-exports `std::arch::x86_64` or `std::arch::aarch64` as `simd_arch` so
//! the engines can refer to intrinsics uniformly.

#[cfg(target_arch = "x86_64")]
pub use std::arch::x86_64 as simd_arch;

#[cfg(target_arch = "aarch64")]
pub use std::arch::aarch64 as simd_arch;
