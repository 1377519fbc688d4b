//! Module for runtime vector engine detection.
//!
//! This module detects the widest engine the CPU supports and provides
//! metadata such as lane widths and human-readable descriptions.

/// Available vector engine types based on CPU capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorEngineType {
    /// Lane-array engine - always available
    Portable,
    /// 128-bit NEON - aarch64 only
    #[cfg(target_arch = "aarch64")]
    Engine128,
    /// 256-bit AVX2 + FMA - x86_64 only
    #[cfg(target_arch = "x86_64")]
    Engine256,
    /// 512-bit AVX-512F - x86_64 only (requires avx512 feature flag)
    #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
    Engine512,
}

impl VectorEngineType {
    /// Every engine compiled into this build, narrowest first.
    pub fn compiled() -> Vec<VectorEngineType> {
        let mut engines = vec![VectorEngineType::Portable];
        #[cfg(target_arch = "aarch64")]
        engines.push(VectorEngineType::Engine128);
        #[cfg(target_arch = "x86_64")]
        engines.push(VectorEngineType::Engine256);
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        engines.push(VectorEngineType::Engine512);
        engines
    }

    /// Whether the running CPU can execute this engine.
    pub fn is_available(self) -> bool {
        match self {
            VectorEngineType::Portable => true,
            #[cfg(target_arch = "aarch64")]
            VectorEngineType::Engine128 => std::arch::is_aarch64_feature_detected!("neon"),
            #[cfg(target_arch = "x86_64")]
            VectorEngineType::Engine256 => is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma"),
            #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
            VectorEngineType::Engine512 => is_x86_feature_detected!("avx512f"),
        }
    }

    /// Number of f32 lanes, i.e. queries processed together per tile.
    pub fn f32_lanes(self) -> usize {
        match self {
            VectorEngineType::Portable => 16,
            #[cfg(target_arch = "aarch64")]
            VectorEngineType::Engine128 => 4,
            #[cfg(target_arch = "x86_64")]
            VectorEngineType::Engine256 => 8,
            #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
            VectorEngineType::Engine512 => 16,
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}

/// Detects the optimal vector engine based on CPU features
///
/// Environment variable overrides for testing/debugging:
/// - `FERROUS_TOPK_FORCE_PORTABLE=1`: Force the lane-array engine
/// - `FERROUS_TOPK_FORCE_AVX2=1`: Force AVX2 (skip AVX-512), x86_64 only
pub fn detect_optimal_vector_engine() -> VectorEngineType {
    if env_flag("FERROUS_TOPK_FORCE_PORTABLE") {
        log::info!("FERROUS_TOPK_FORCE_PORTABLE=1: Using portable engine");
        return VectorEngineType::Portable;
    }

    #[cfg(target_arch = "x86_64")]
    {
        #[cfg(feature = "avx512")]
        {
            let force_avx2 = env_flag("FERROUS_TOPK_FORCE_AVX2");
            if !force_avx2 && VectorEngineType::Engine512.is_available() {
                return VectorEngineType::Engine512;
            }
            if force_avx2 {
                log::info!("FERROUS_TOPK_FORCE_AVX2=1: Using AVX2 (256-bit) engine");
            }
        }

        if VectorEngineType::Engine256.is_available() {
            return VectorEngineType::Engine256;
        }

        VectorEngineType::Portable
    }

    #[cfg(target_arch = "aarch64")]
    {
        if VectorEngineType::Engine128.is_available() {
            return VectorEngineType::Engine128;
        }
        VectorEngineType::Portable
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        VectorEngineType::Portable
    }
}

/// Returns a human-readable description of the vector engine
pub fn vector_engine_description(engine: VectorEngineType) -> &'static str {
    match engine {
        VectorEngineType::Portable => "Portable (lane arrays, 16 x f32 / 32 x f16)",
        #[cfg(target_arch = "aarch64")]
        VectorEngineType::Engine128 => "NEON (128-bit, 4 x f32)",
        #[cfg(target_arch = "x86_64")]
        VectorEngineType::Engine256 => "AVX2+FMA (256-bit, 8 x f32)",
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        VectorEngineType::Engine512 => "AVX-512F (512-bit, 16 x f32)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_engine_is_available() {
        let engine = detect_optimal_vector_engine();
        assert!(engine.is_available());
        assert!(!vector_engine_description(engine).is_empty());
        println!("Detected engine: {}", vector_engine_description(engine));
    }

    #[test]
    fn test_portable_always_compiled() {
        let engines = VectorEngineType::compiled();
        assert_eq!(engines[0], VectorEngineType::Portable);
        assert!(VectorEngineType::Portable.is_available());
        assert_eq!(VectorEngineType::Portable.f32_lanes(), 16);
    }
}
