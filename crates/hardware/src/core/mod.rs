//! Core vector unit implementation.
//!
//! This module contains the architectural state (CSRs, vector register file,
//! `vtype`) and the execution units that operate on it.

/// Architecture-specific components (CSRs, vector register file, `vtype`).
pub mod arch;

/// Execution units (FPU, VPU).
pub mod units;

pub use self::units::vpu::Vpu;
