//! Floating-Point Unit (FPU).
//!
//! This module implements the scalar floating-point arithmetic that the vector
//! unit applies lane by lane. It provides bit-exact IEEE 754 addition,
//! subtraction, multiplication, and fused multiply-add for half, single,
//! double, and bfloat16 elements.
//!
//! Operations are organized into submodules:
//! - [`formats`]: Element newtypes and the per-format arithmetic traits.
//! - [`softfloat`]: The format-generic rounding engine.
//! - [`nan_handling`]: NaN classification and canonical NaN propagation.
//! - [`rounding_modes`]: Rounding mode encoding.
//! - [`exception_flags`]: Accrued exception flag set.
//!
//! No operation reads or writes host floating-point state. The rounding mode
//! and the flag accumulator travel explicitly in an [`FpEnv`].

/// Floating-point exception flag types.
pub mod exception_flags;

/// Element representations (f16, bf16, f32, f64) and their arithmetic.
pub mod formats;

/// NaN classification and canonical NaN propagation.
pub mod nan_handling;

/// Rounding mode definitions and support.
pub mod rounding_modes;

/// Format-generic software floating-point engine.
pub mod softfloat;

pub use self::exception_flags::FpFlags;
pub use self::formats::{Bf16, ElementWidth, F16, F32, F64, FloatElement, FloatFormat, FusedArith};
pub use self::rounding_modes::RoundingMode;

/// Floating-point environment of one instruction.
///
/// Carries the rounding mode every operation consults and the sticky flags
/// every operation ORs into. Passed by `&mut` into each arithmetic call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FpEnv {
    /// Rounding mode applied to every result.
    pub rm: RoundingMode,
    /// Flags raised so far.
    pub flags: FpFlags,
}

impl FpEnv {
    /// Creates an environment with no flags raised.
    pub fn new(rm: RoundingMode) -> Self {
        Self {
            rm,
            flags: FpFlags::NONE,
        }
    }

    /// ORs `flags` into the accumulator.
    #[inline]
    pub fn raise(&mut self, flags: FpFlags) {
        self.flags |= flags;
    }
}
