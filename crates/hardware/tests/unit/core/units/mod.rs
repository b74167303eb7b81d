//! # Execution Unit Tests

/// Soft-float engine tests.
///
/// This module aggregates tests for:
/// - Exception flag accumulation.
/// - Element format encodings.
/// - Bit-exact agreement with host IEEE arithmetic.
/// - NaN canonicalization and invalid-operation detection.
/// - Rounding mode behavior and overflow saturation.
pub mod fpu;

/// Vector unit tests.
///
/// This module aggregates tests for the loop driver, the per-format bodies,
/// the precision dispatcher, and the `Vpu` facade.
pub mod vpu;
