//! NaN classification and canonical NaN propagation for the FPU.
//!
//! RISC-V never propagates NaN payloads: any NaN produced by an arithmetic
//! operation is replaced with the canonical quiet NaN of the result format
//! (unprivileged ISA §11.3). Signaling NaN operands raise the Invalid flag.
//!
//! Canonical NaNs are positive, quiet, and carry a zero payload:
//!
//! | Format | Canonical NaN           |
//! |--------|-------------------------|
//! | f16    | `0x7e00`                |
//! | bf16   | `0x7fc0`                |
//! | f32    | `0x7fc0_0000`           |
//! | f64    | `0x7ff8_0000_0000_0000` |

use super::formats::FloatFormat;

/// Canonical quiet NaN for IEEE 754 half-precision.
pub const CANONICAL_NAN_F16: u16 = 0x7e00;

/// Canonical quiet NaN for bfloat16.
pub const CANONICAL_NAN_BF16: u16 = 0x7fc0;

/// Canonical quiet NaN for IEEE 754 single-precision (positive, quiet, zero payload).
pub const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;

/// Canonical quiet NaN for IEEE 754 double-precision (positive, quiet, zero payload).
pub const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Returns the canonical quiet NaN of `fmt` as raw bits.
#[inline]
pub fn canonical_nan(fmt: FloatFormat) -> u64 {
    (fmt.exp_field_max() << fmt.frac_bits) | fmt.quiet_bit()
}

/// Returns true if `bits` encodes any NaN (quiet or signaling) in `fmt`.
#[inline]
pub fn is_nan(fmt: FloatFormat, bits: u64) -> bool {
    fmt.exp_field(bits) == fmt.exp_field_max() && fmt.frac_field(bits) != 0
}

/// Returns true if `bits` encodes a signaling NaN in `fmt`.
///
/// A signaling NaN has the exponent field all 1s, the quiet bit (MSB of the
/// fraction) clear, and a non-zero payload.
#[inline]
pub fn is_signaling_nan(fmt: FloatFormat, bits: u64) -> bool {
    is_nan(fmt, bits) && bits & fmt.quiet_bit() == 0
}

/// Replaces any NaN with the canonical quiet NaN of `fmt`.
///
/// Non-NaN values pass through unchanged, including signed zeros and
/// subnormals.
#[inline]
pub fn canonicalize(fmt: FloatFormat, bits: u64) -> u64 {
    if is_nan(fmt, bits) {
        canonical_nan(fmt)
    } else {
        bits
    }
}
