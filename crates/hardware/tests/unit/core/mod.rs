//! # Core Tests
//!
//! Tests for the architectural state (`arch`) and the execution units (`units`).

/// Unit tests for CSRs, the vector register file, and `vtype`.
pub mod arch;

/// Unit tests for the FPU and the VPU.
pub mod units;
