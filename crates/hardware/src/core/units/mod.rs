//! Execution units and functional components.
//!
//! This module contains the floating-point arithmetic unit and the vector
//! unit that applies it lane by lane.

/// Floating-Point Unit for IEEE 754 operations.
pub mod fpu;

/// Vector Floating-Point Unit for `.vv` add and fused multiply-add instructions.
pub mod vpu;
