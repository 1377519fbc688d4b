//! Process-wide configuration.
//!
//! Resolved once from the environment on first use:
//! - `FERROUS_TOPK_KERNEL`: default kernel, or `none` to disable the kernels
//! - `FERROUS_TOPK_VERBOSE`: how much the entry points log
//! - `FERROUS_TOPK_FORCE_PORTABLE` / `FERROUS_TOPK_FORCE_AVX2`: engine
//!   overrides, see `detect_optimal_vector_engine`
//!
//! Explicit per-call parameters always win over these defaults.

use std::sync::OnceLock;

use crate::compute::simd_abstraction::{VectorEngineType, detect_optimal_vector_engine, vector_engine_description};
use crate::topk::{GetMinKKernel, KernelVariant};

pub const KERNEL_ENV: &str = "FERROUS_TOPK_KERNEL";
pub const VERBOSE_ENV: &str = "FERROUS_TOPK_VERBOSE";

/// Logging level of the entry points. Messages still go through `log`, so
/// the installed logger filters them as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    /// Selection once, plus one line per call.
    Info,
    /// Tiling and preparation details.
    Debug,
}

/// Kernels chosen when a call does not name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelSelection {
    Disabled,
    Enabled { knn: KernelVariant, get_min_k: GetMinKKernel },
}

impl KernelSelection {
    pub fn from_variant(variant: KernelVariant) -> Self {
        KernelSelection::Enabled { knn: variant, get_min_k: variant.paired_get_min_k() }
    }
}

impl Default for KernelSelection {
    fn default() -> Self {
        KernelSelection::from_variant(KernelVariant::Fp32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopkConfig {
    pub selection: KernelSelection,
    pub engine: VectorEngineType,
    pub verbosity: Verbosity,
}

/// Parses a `FERROUS_TOPK_KERNEL` value: a kernel name or its numeric code.
/// Unknown and unsupported values fall back to the default with a warning.
pub fn parse_kernel(value: &str) -> KernelSelection {
    let variant = match value.trim().to_ascii_lowercase().as_str() {
        "none" | "disabled" | "off" => return KernelSelection::Disabled,
        "fp32" => KernelVariant::Fp32,
        "fp16" => KernelVariant::Fp16,
        "fp32hack" | "hack" => KernelVariant::Fp32Packed,
        "fp32hack_approx" | "hack_approx" => KernelVariant::Fp32PackedApprox,
        "fp32hack_amx" | "hack_amx" | "amx" | "4" => {
            log::warn!("{KERNEL_ENV}={value}: tile-unit kernel is not built, using the default");
            return KernelSelection::default();
        }
        other => match other.parse::<u8>().ok().and_then(KernelVariant::from_code) {
            Some(variant) => variant,
            None => {
                log::warn!("{KERNEL_ENV}={value} not recognised, using the default");
                return KernelSelection::default();
            }
        },
    };
    KernelSelection::from_variant(variant)
}

/// Parses a `FERROUS_TOPK_VERBOSE` value.
pub fn parse_verbosity(value: &str) -> Verbosity {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "no" | "false" | "off" => Verbosity::Quiet,
        "1" | "yes" | "true" | "info" => Verbosity::Info,
        "2" | "debug" => Verbosity::Debug,
        _ => {
            log::warn!("{VERBOSE_ENV}={value} not recognised, staying quiet");
            Verbosity::Quiet
        }
    }
}

impl TopkConfig {
    /// Builds a configuration from raw variable values.
    pub fn from_values(kernel: Option<&str>, verbose: Option<&str>, engine: VectorEngineType) -> Self {
        TopkConfig {
            selection: kernel.map(parse_kernel).unwrap_or_default(),
            engine,
            verbosity: verbose.map(parse_verbosity).unwrap_or_default(),
        }
    }

    pub fn from_env() -> Self {
        let kernel = std::env::var(KERNEL_ENV).ok();
        let verbose = std::env::var(VERBOSE_ENV).ok();
        TopkConfig::from_values(kernel.as_deref(), verbose.as_deref(), detect_optimal_vector_engine())
    }

    fn log_selection(&self) {
        if self.verbosity < Verbosity::Info {
            return;
        }
        match self.selection {
            KernelSelection::Disabled => log::info!("top-k kernels disabled by {KERNEL_ENV}"),
            KernelSelection::Enabled { knn, get_min_k } => log::info!(
                "top-k kernels: knn={knn} get_min_k={get_min_k} engine={}",
                vector_engine_description(self.engine)
            ),
        }
    }
}

static CONFIG: OnceLock<TopkConfig> = OnceLock::new();

/// The process configuration, resolved on first call.
pub fn config() -> &'static TopkConfig {
    CONFIG.get_or_init(|| {
        let config = TopkConfig::from_env();
        config.log_selection();
        config
    })
}

/// Whether messages at `level` should be emitted.
#[inline]
pub fn verbose(level: Verbosity) -> bool {
    config().verbosity >= level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kernel_names_and_codes() {
        let enabled = |knn, get_min_k| KernelSelection::Enabled { knn, get_min_k };
        assert_eq!(parse_kernel("none"), KernelSelection::Disabled);
        assert_eq!(parse_kernel("OFF"), KernelSelection::Disabled);
        assert_eq!(parse_kernel("fp32"), enabled(KernelVariant::Fp32, GetMinKKernel::Fp32));
        assert_eq!(parse_kernel("2"), enabled(KernelVariant::Fp16, GetMinKKernel::Fp32));
        assert_eq!(parse_kernel("Hack"), enabled(KernelVariant::Fp32Packed, GetMinKKernel::Fp32));
        assert_eq!(
            parse_kernel("hack_approx"),
            enabled(KernelVariant::Fp32PackedApprox, GetMinKKernel::Fp32Packed)
        );
        assert_eq!(parse_kernel("5"), parse_kernel("fp32hack_approx"));
        assert_eq!(parse_kernel(" 3 "), parse_kernel("fp32hack"));
        assert_eq!(parse_kernel("1"), KernelSelection::default());
    }

    #[test]
    fn test_unsupported_kernel_values_fall_back() {
        assert_eq!(parse_kernel("amx"), KernelSelection::default());
        assert_eq!(parse_kernel("4"), KernelSelection::default());
        assert_eq!(parse_kernel("turbo"), KernelSelection::default());
        assert_eq!(parse_kernel("0"), KernelSelection::default());
        assert_eq!(parse_kernel("300"), KernelSelection::default());
        assert_eq!(
            KernelSelection::default(),
            KernelSelection::Enabled { knn: KernelVariant::Fp32, get_min_k: GetMinKKernel::Fp32 }
        );
    }

    #[test]
    fn test_parse_verbosity() {
        assert_eq!(parse_verbosity("1"), Verbosity::Info);
        assert_eq!(parse_verbosity("TRUE"), Verbosity::Info);
        assert_eq!(parse_verbosity("debug"), Verbosity::Debug);
        assert_eq!(parse_verbosity("2"), Verbosity::Debug);
        assert_eq!(parse_verbosity("0"), Verbosity::Quiet);
        assert_eq!(parse_verbosity("loud"), Verbosity::Quiet);
        assert!(Verbosity::Debug > Verbosity::Info);
    }

    #[test]
    fn test_from_values_defaults() {
        let config = TopkConfig::from_values(None, None, VectorEngineType::Portable);
        assert_eq!(config.selection, KernelSelection::default());
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert_eq!(config.engine, VectorEngineType::Portable);

        let config = TopkConfig::from_values(Some("none"), Some("info"), VectorEngineType::Portable);
        assert_eq!(config.selection, KernelSelection::Disabled);
        assert_eq!(config.verbosity, Verbosity::Info);
    }
}
