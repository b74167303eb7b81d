//! # VPU Tests

/// bf16 two-step rounding versus fused rounding.
pub mod bf16_rounding;



/// Per-operation results in every format.
pub mod scenarios;
