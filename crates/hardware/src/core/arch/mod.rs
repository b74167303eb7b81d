//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state the vector unit operates on.
//! It includes the following modules:
//! 1. **CSRs:** Floating-point status and vector configuration registers.
//! 2. **Vector Registers:** The `v0`-`v31` register file with element and mask access.
//! 3. **Vector Type:** `vtype` decoding, VLMAX, and element policies.

/// Control and Status Register (CSR) definitions and access logic.
pub mod csr;

/// Vector register file implementation.
pub mod vreg;

/// `vtype` decoding and vector configuration types.
pub mod vtype;

pub use self::csr::Csrs;
pub use self::vreg::VectorRegisterFile;
pub use self::vtype::{ElementPolicy, Lmul, Sew, VType};
