//! RISC-V vector floating-point execution core.
//!
//! This crate implements the `.vv` floating-point add and fused multiply-add
//! instructions of the RISC-V V extension with the following:
//! 1. **Arithmetic:** A bit-exact soft-float engine for f16, bf16, f32, and f64.
//! 2. **Core:** `vtype` decoding, the vector register file, and FP/vector CSRs.
//! 3. **Execution:** Per-element bodies, the lane loop driver, and the precision dispatcher.
//! 4. **Configuration:** VLEN/ELEN geometry and agnostic-element policy.

/// Common types and constants (errors, CSR field layouts).
pub mod common;
/// Vector unit configuration (defaults, JSON loading, validation).
pub mod config;
/// Vector unit core (architectural state, FPU, VPU).
pub mod core;

/// Root configuration type; use `VectorConfig::default()` or `VectorConfig::from_json`.
pub use crate::config::VectorConfig;
/// Main vector unit type; holds the register file and CSRs.
pub use crate::core::Vpu;
